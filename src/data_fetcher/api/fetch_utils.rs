//! GraphQL POST helper with status-code aware error handling

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, error, info, instrument, warn};

use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Maps a non-success HTTP status to the matching [`AppError`] variant.
pub(crate) fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Maps a transport-level reqwest error to the matching [`AppError`] variant.
pub(crate) fn request_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Classifies a body that failed to deserialize.
pub(crate) fn parse_error(body: &str, e: &serde_json::Error, url: &str) -> AppError {
    let trimmed = body.trim_start();
    if trimmed.is_empty() {
        AppError::api_no_data("Response body is empty", url)
    } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        AppError::api_malformed_json("Response is not valid JSON", url)
    } else {
        AppError::api_unexpected_structure(e.to_string(), url)
    }
}

/// Posts a GraphQL query and returns the `data` member.
///
/// The request carries the GRID `x-api-key` header. A response with a
/// non-empty `errors` array is a [`AppError::GraphQl`] even when the HTTP
/// status is 200, and a missing `data` member is [`AppError::ApiNoData`].
/// No retries: a single attempt per call.
#[instrument(skip(client, api_key, query))]
pub(crate) async fn post_graphql<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
    query: &str,
    variables: Value,
) -> Result<T, AppError> {
    info!("Posting GraphQL query to {url}");

    let response = client
        .post(url)
        .header("x-api-key", api_key)
        .json(&json!({ "query": query, "variables": variables }))
        .send()
        .await
        .map_err(|e| {
            error!("Request failed for URL {}: {}", url, e);
            request_error(e, url)
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        return Err(status_error(status, url));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    let envelope: GraphQlEnvelope<T> = serde_json::from_str(&response_text).map_err(|e| {
        error!("Failed to parse GraphQL response: {} (URL: {})", e, url);
        parse_error(&response_text, &e, url)
    })?;

    if !envelope.errors.is_empty() {
        let message = envelope
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!("GraphQL errors from {url}: {message}");
        return Err(AppError::graphql(message, url));
    }

    envelope
        .data
        .ok_or_else(|| AppError::api_no_data("GraphQL response has no data member", url))
}
