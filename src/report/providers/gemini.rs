use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use super::TextGenerator;
use crate::constants::models::GEMINI_MODEL;
use crate::data_fetcher::api::fetch_utils::{parse_error, request_error, status_error};
use crate::error::AppError;
use crate::report::ScoutPrompt;

/// Google Generative Language `generateContent`
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(http: Client, base_url: &str, api_key: String) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            api_key,
            model: GEMINI_MODEL.to_string(),
        }
    }

    #[instrument(skip(self, text))]
    async fn generate_content(&self, text: &str) -> Result<String, AppError> {
        let provider = self.provider_name();
        // The key travels as a query parameter; keep it out of error messages
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let fail = |e: AppError| AppError::generation_failed(provider, e.to_string());

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({ "contents": [{ "parts": [{ "text": text }] }] }))
            .send()
            .await
            .map_err(|e| fail(request_error(e.without_url(), &url)))?;

        let status = response.status();
        debug!("{provider} responded with {status}");
        if !status.is_success() {
            return Err(fail(status_error(status, &url)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fail(AppError::ApiFetch(e.without_url())))?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| fail(parse_error(&body, &e, &url)))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::generation_failed(
                provider,
                "response contained no candidate text",
            ));
        }
        Ok(text)
    }
}

impl TextGenerator for GeminiClient {
    fn provider_name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, prompt: &ScoutPrompt<'_>) -> Result<String, AppError> {
        self.generate_content(prompt.text).await
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
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn context() -> ReportContext {
        let summary = analyze(&TestDataBuilder::lol_series("G2", &[true]));
        ReportContext::new(Game::LeagueOfLegends, &summary).unwrap()
    }

    #[tokio::test]
    async fn test_gemini_generate_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(query_param("key", "g-key"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{ "text": "scout G2" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "Camp " }, { "text": "bot lane." }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(
            create_test_http_client(),
            &format!("{}/v1beta", server.uri()),
            "g-key".to_string(),
        );
        let context = context();
        let text = client
            .generate(&ScoutPrompt {
                text: "scout G2",
                context: &context,
            })
            .await
            .unwrap();
        assert_eq!(text, "Camp bot lane.");
    }

    #[tokio::test]
    async fn test_gemini_errors_hide_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = GeminiClient::new(
            create_test_http_client(),
            &server.uri(),
            "super-secret".to_string(),
        );
        let context = context();
        let error = client
            .generate(&ScoutPrompt {
                text: "scout",
                context: &context,
            })
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::GenerationFailed { .. }));
        assert!(error.to_string().contains("403"));
        assert!(!error.to_string().contains("super-secret"));
    }

    #[tokio::test]
    async fn test_gemini_without_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(create_test_http_client(), &server.uri(), "k".to_string());
        let context = context();
        let result = client
            .generate(&ScoutPrompt {
                text: "scout",
                context: &context,
            })
            .await;
        assert!(matches!(result, Err(AppError::GenerationFailed { .. })));
    }
}
