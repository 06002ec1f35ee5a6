pub mod gemini;

use async_trait::async_trait;
use std::error::Error as StdError;
use std::sync::Arc;

use self::gemini::GeminiClient;
use crate::cli::Args;
use crate::models::chat::Message;

/// Fixed generation settings, built once at startup and passed into the
/// handler layer rather than held as global state.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub system_instruction: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            system_instruction: args.system_instruction.clone(),
            temperature: args.temperature,
            max_output_tokens: args.max_output_tokens,
        }
    }
}

/// The single capability the relay needs from a provider: given ordered
/// turns and a generation configuration, produce text or fail. Test doubles
/// implement this without any network access.
#[async_trait]
pub trait GenerateClient: Send + Sync {
    async fn generate(
        &self,
        messages: &[Message],
        config: &GenerationConfig
    ) -> Result<String, Box<dyn StdError + Send + Sync>>;
}

pub fn new_client(args: &Args) -> Result<Arc<dyn GenerateClient>, Box<dyn StdError + Send + Sync>> {
    if args.gemini_api_key.is_empty() {
        return Err("GEMINI_API_KEY must not be empty".into());
    }
    let client = GeminiClient::new(
        args.gemini_api_key.clone(),
        args.gemini_model.clone(),
        args.gemini_base_url.clone()
    );
    Ok(Arc::new(client))
}
