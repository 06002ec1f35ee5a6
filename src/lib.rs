pub mod chat;
pub mod cli;
pub mod llm;
pub mod models;
pub mod server;

use cli::Args;
use log::info;
use server::{ api::AppState, Server };
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}:{}", args.server_host, args.port);
    info!("Gemini Model: {}", args.gemini_model);
    info!("Gemini Base URL: {}", args.gemini_base_url);
    info!("System Instruction: {}", args.system_instruction);
    info!("Temperature: {}", args.temperature);
    info!("Max Output Tokens: {}", args.max_output_tokens);
    info!("Max Conversation Messages: {}", args.max_conversation_messages);
    info!("Chat Endpoint Enabled: {}", args.enable_chat);
    if args.enable_chat {
        info!("Static Client Dir: {}", args.static_dir);
    }
    info!("-------------------------");

    let client = llm::new_client(&args)?;
    let state = AppState::new(client, &args);
    let server = Server::new(state, args)?;
    server.run().await?;

    Ok(())
}
