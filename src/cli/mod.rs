use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Provider Args ---
    /// API key for the Gemini generative-language API. Startup fails without it.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    /// Model identifier used for every generation call.
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    /// Base URL of the generative-language API. Override to point the relay
    /// at a stand-in endpoint.
    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_base_url: String,

    // --- Generation Args ---
    /// System instruction prepended to every generation call.
    #[arg(
        long,
        env = "SYSTEM_INSTRUCTION",
        default_value = "You are a helpful pirate assistant"
    )]
    pub system_instruction: String,

    /// Sampling temperature for generation.
    #[arg(long, env = "GEN_TEMPERATURE", default_value = "0.9")]
    pub temperature: f32,

    /// Cap on generated output tokens.
    #[arg(long, env = "GEN_MAX_OUTPUT_TOKENS", default_value = "1024")]
    pub max_output_tokens: u32,

    /// Upper bound on messages accepted in one conversation. The browser
    /// client resends its full history every turn, so this is the context
    /// growth limit.
    #[arg(long, env = "MAX_CONVERSATION_MESSAGES", default_value = "64")]
    pub max_conversation_messages: usize,

    // --- Server Args ---
    /// Host address for the server to listen on.
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub server_host: String,

    /// Port for the server to listen on.
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Expose the /api/chat endpoint and the static chat client. When false
    /// the server exposes /generate-text only.
    #[arg(long, env = "ENABLE_CHAT", default_value_t = true, action = clap::ArgAction::Set)]
    pub enable_chat: bool,

    /// Directory containing the browser chat client assets.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: String,
}
