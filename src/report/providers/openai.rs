use reqwest::Client;

use super::TextGenerator;
use super::chat::{ChatMessage, ChatRequest, complete};
use crate::constants::models::{OPENAI_MODEL, OPENAI_TEMPERATURE};
use crate::error::AppError;
use crate::report::ScoutPrompt;

/// OpenAI chat completions
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
}

impl OpenAiClient {
    pub fn new(http: Client, base_url: &str, api_key: String) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            api_key,
            model: OPENAI_MODEL.to_string(),
            temperature: OPENAI_TEMPERATURE,
        }
    }
}

impl TextGenerator for OpenAiClient {
    fn provider_name(&self) -> &'static str {
        "OpenAI"
    }

    async fn generate(&self, prompt: &ScoutPrompt<'_>) -> Result<String, AppError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.text,
            }],
            temperature: Some(self.temperature),
        };
        complete(
            &self.http,
            self.provider_name(),
            &self.base_url,
            &self.api_key,
            &request,
        )
        .await
    }
}
