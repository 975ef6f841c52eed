use reqwest::Client;

use super::TextGenerator;
use super::chat::{ChatMessage, ChatRequest, complete};
use crate::constants::models::OPENROUTER_MODEL;
use crate::error::AppError;
use crate::report::ScoutPrompt;

/// OpenRouter, OpenAI-compatible, provider-default temperature
pub struct OpenRouterClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(http: Client, base_url: &str, api_key: String) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            api_key,
            model: OPENROUTER_MODEL.to_string(),
        }
    }
}

impl TextGenerator for OpenRouterClient {
    fn provider_name(&self) -> &'static str {
        "OpenRouter"
    }

    async fn generate(&self, prompt: &ScoutPrompt<'_>) -> Result<String, AppError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.text,
            }],
            temperature: None,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::Game;
    use crate::report::ReportContext;
    use crate::testing_utils::TestDataBuilder;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_openrouter_chat_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .and(header("authorization", "Bearer or-key"))
            .and(body_partial_json(json!({ "model": "google/gemma-3-27b-it:free" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "Stack A-Site." } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = analyze(&[TestDataBuilder::valorant_match("Sentinels", 0, 13, 4)]);
        let context = ReportContext::new(Game::Valorant, &summary).unwrap();
        let client = OpenRouterClient::new(
            create_test_http_client(),
            &format!("{}/api/v1/", server.uri()),
            "or-key".to_string(),
        );

        let text = client
            .generate(&ScoutPrompt {
                text: "scout Sentinels",
                context: &context,
            })
            .await
            .unwrap();
        assert_eq!(text, "Stack A-Site.");
    }

    #[tokio::test]
    async fn test_openrouter_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let summary = analyze(&[]);
        let context = ReportContext::new(Game::Valorant, &summary).unwrap();
        let client =
            OpenRouterClient::new(create_test_http_client(), &server.uri(), "or-key".to_string());
        let result = client
            .generate(&ScoutPrompt {
                text: "scout",
                context: &context,
            })
            .await;

        match result {
            Err(AppError::GenerationFailed { provider, message }) => {
                assert_eq!(provider, "OpenRouter");
                assert!(message.contains("malformed JSON"));
            }
            other => panic!("Expected GenerationFailed, got {other:?}"),
        }
    }
}
