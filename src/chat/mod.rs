use serde_json::Value;
use thiserror::Error;

use crate::models::chat::{ Conversation, Message, Role };

/// Reasons a submitted conversation is rejected. The `Display` strings are
/// the exact messages returned to the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("Conversation must be an array!")]
    NotAnArray,
    #[error("Conversation must have at least one message!")]
    Empty,
    #[error("Invalid message structure!")]
    InvalidMessage,
    #[error("Conversation must not exceed {0} messages!")]
    TooLong(usize),
}

/// Validates a raw JSON conversation and turns it into typed messages.
///
/// Validation is all-or-nothing: one malformed message rejects the whole
/// conversation. A message is well formed when it is an object carrying
/// exactly the keys `text` and `role`, `role` is `"user"` or `"model"`, and
/// `text` is a non-empty string. Order is preserved.
pub fn validate_conversation(
    value: &Value,
    max_messages: usize
) -> Result<Conversation, ValidateError> {
    let entries = value.as_array().ok_or(ValidateError::NotAnArray)?;

    if entries.is_empty() {
        return Err(ValidateError::Empty);
    }

    let mut messages = Vec::with_capacity(entries.len());
    for entry in entries {
        messages.push(validate_message(entry)?);
    }

    if messages.len() > max_messages {
        return Err(ValidateError::TooLong(max_messages));
    }

    Ok(Conversation { messages })
}

fn validate_message(entry: &Value) -> Result<Message, ValidateError> {
    let fields = entry.as_object().ok_or(ValidateError::InvalidMessage)?;

    // Exactly {text, role}, nothing else tolerated.
    if fields.len() != 2 || !fields.contains_key("text") || !fields.contains_key("role") {
        return Err(ValidateError::InvalidMessage);
    }

    let role = match fields.get("role").and_then(Value::as_str) {
        Some("user") => Role::User,
        Some("model") => Role::Model,
        _ => return Err(ValidateError::InvalidMessage),
    };

    let text = match fields.get("text").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => return Err(ValidateError::InvalidMessage),
    };

    Ok(Message { role, text })
}
