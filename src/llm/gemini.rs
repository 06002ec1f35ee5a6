use async_trait::async_trait;
use log::info;
use serde::{ Deserialize, Serialize };
use std::error::Error as StdError;

use super::{ GenerateClient, GenerationConfig };
use crate::models::chat::Message;

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction")]
    system_instruction: GeminiInstruction,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Deserialize)]
struct GeminiCandidatePart {
    #[serde(default)]
    text: String,
}

/// Each message maps 1:1, preserving order, to one provider turn with a
/// single text part.
fn request_payload(messages: &[Message], config: &GenerationConfig) -> GenerateContentRequest {
    let contents = messages
        .iter()
        .map(|message| GeminiContent {
            role: message.role.as_str().to_string(),
            parts: vec![GeminiPart { text: message.text.clone() }],
        })
        .collect();

    GenerateContentRequest {
        contents,
        system_instruction: GeminiInstruction {
            parts: vec![GeminiPart { text: config.system_instruction.clone() }],
        },
        generation_config: GeminiGenerationConfig {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        },
    }
}

fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate.content.parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }
}

#[async_trait]
impl GenerateClient for GeminiClient {
    async fn generate(
        &self,
        messages: &[Message],
        config: &GenerationConfig
    ) -> Result<String, Box<dyn StdError + Send + Sync>> {
        info!("GeminiClient::generate() → model={} turns={}", self.model, messages.len());

        let payload = request_payload(messages, config);
        let response = self.http
            .post(self.endpoint())
            .json(&payload)
            .send().await?
            .error_for_status()?
            .json::<GenerateContentResponse>().await?;

        extract_text(response).ok_or_else(|| "Gemini response contained no generated text".into())
    }
}
