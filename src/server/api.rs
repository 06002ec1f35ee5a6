use std::sync::Arc;

use axum::{
    routing::post,
    Router,
    extract::State,
    response::IntoResponse,
    http::StatusCode,
    Json,
};
use log::{ info, error };
use serde_json::Value;
use tower_http::cors::{ Any, CorsLayer };
use tower_http::services::ServeDir;

use crate::chat::validate_conversation;
use crate::cli::Args;
use crate::llm::{ GenerateClient, GenerationConfig };
use crate::models::chat::{ ApiResponse, Message };

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GenerateClient>,
    pub config: GenerationConfig,
    pub max_conversation_messages: usize,
}

impl AppState {
    pub fn new(client: Arc<dyn GenerateClient>, args: &Args) -> Self {
        Self {
            client,
            config: GenerationConfig::from_args(args),
            max_conversation_messages: args.max_conversation_messages,
        }
    }
}

/// Endpoint availability is composed here rather than kept as parallel
/// server variants: /generate-text is always routed, /api/chat and the
/// static chat client only when chat is enabled.
pub fn build_router(state: AppState, args: &Args) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().route("/generate-text", post(generate_text_handler));

    if args.enable_chat {
        app = app
            .route("/api/chat", post(chat_handler))
            .fallback_service(ServeDir::new(&args.static_dir));
    }

    app.layer(cors).with_state(state)
}

async fn generate_text_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    info!("/generate-text request: {}", body.get("prompt").unwrap_or(&Value::Null));

    let prompt = match body.get("prompt").and_then(Value::as_str).filter(|p| !p.is_empty()) {
        Some(prompt) => prompt,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure("Prompt is required and must be a string!")),
            );
        }
    };

    let messages = vec![Message::user(prompt)];
    relay(&state, &messages).await
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let conversation = body.get("conversation").unwrap_or(&Value::Null);
    info!("/api/chat conversation: {}", conversation);

    let conversation = match
        validate_conversation(conversation, state.max_conversation_messages)
    {
        Ok(conversation) => conversation,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ApiResponse::failure(e.to_string())));
        }
    };

    relay(&state, &conversation.messages).await
}

/// Provider failures surface to the client as a generic message on both
/// paths; the underlying error goes to the server log only.
async fn relay(state: &AppState, messages: &[Message]) -> (StatusCode, Json<ApiResponse>) {
    match state.client.generate(messages, &state.config).await {
        Ok(text) => (StatusCode::OK, Json(ApiResponse::generated(text))),
        Err(e) => {
            error!("Generation call failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::failure("Something went wrong!")),
            )
        }
    }
}
