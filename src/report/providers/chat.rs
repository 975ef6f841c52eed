//! OpenAI-compatible `chat/completions` call shared by OpenAI and OpenRouter

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::data_fetcher::api::fetch_utils::{parse_error, request_error, status_error};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Posts one user message and returns the first choice's content.
///
/// Errors are reported as [`AppError::GenerationFailed`] for `provider`.
#[instrument(skip(http, api_key, request))]
pub async fn complete(
    http: &Client,
    provider: &'static str,
    base_url: &str,
    api_key: &str,
    request: &ChatRequest<'_>,
) -> Result<String, AppError> {
    let url = format!("{}/chat/completions", base_url.trim_end_matches('/'));
    let fail = |e: AppError| AppError::generation_failed(provider, e.to_string());

    let response = http
        .post(&url)
        .bearer_auth(api_key)
        .json(request)
        .send()
        .await
        .map_err(|e| fail(request_error(e, &url)))?;

    let status = response.status();
    debug!("{provider} responded with {status}");
    if !status.is_success() {
        return Err(fail(status_error(status, &url)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| fail(AppError::ApiFetch(e)))?;
    let parsed: ChatResponse =
        serde_json::from_str(&body).map_err(|e| fail(parse_error(&body, &e, &url)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::generation_failed(provider, "response contained no choices"))
}
