use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Statistics feed errors
    #[error("GraphQL query failed: {message} (URL: {url})")]
    GraphQl { message: String, url: String },

    #[error("Team not found: '{team}' among {candidates} {game} teams")]
    TeamNotFound {
        team: String,
        game: String,
        candidates: usize,
    },

    #[error("Missing credential: {key}")]
    MissingCredential { key: String },

    // Report generation is terminal for the request
    #[error("Report generation failed ({provider}): {message}")]
    GenerationFailed { provider: String, message: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid request error (violated pipeline preconditions)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a GraphQL error from the `errors` array of a response
    pub fn graphql(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::GraphQl {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a team not found error
    pub fn team_not_found(team: impl Into<String>, game: impl Into<String>, candidates: usize) -> Self {
        Self::TeamNotFound {
            team: team.into(),
            game: game.into(),
            candidates,
        }
    }

    /// Create a missing credential error
    pub fn missing_credential(key: impl Into<String>) -> Self {
        Self::MissingCredential { key: key.into() }
    }

    /// Create a report generation failure for the named provider
    pub fn generation_failed(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GenerationFailed {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Whether a statistics-source error may be replaced by mock data.
    ///
    /// Everything that can go wrong while talking to the statistics feed
    /// qualifies; local configuration, I/O and generation errors do not.
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::ApiParse(_)
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiRateLimit { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
                | AppError::GraphQl { .. }
                | AppError::TeamNotFound { .. }
                | AppError::MissingCredential { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_invalid_request_helper() {
        let error = AppError::invalid_request("match count must be positive");
        assert!(matches!(error, AppError::InvalidRequest(_)));
        assert_eq!(
            error.to_string(),
            "Invalid request: match count must be positive"
        );
    }

    #[test]
    fn test_api_server_error_helper() {
        let error =
            AppError::api_server_error(500, "Internal server error", "https://api.example.com");
        assert!(matches!(error, AppError::ApiServerError { .. }));
        assert_eq!(
            error.to_string(),
            "API server error (500): Internal server error (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_graphql_helper() {
        let error = AppError::graphql("Unauthorized", "https://grid.example.com/graphql");
        assert_eq!(
            error.to_string(),
            "GraphQL query failed: Unauthorized (URL: https://grid.example.com/graphql)"
        );
    }

    #[test]
    fn test_team_not_found_helper() {
        let error = AppError::team_not_found("Cloud9", "VALORANT", 100);
        assert_eq!(
            error.to_string(),
            "Team not found: 'Cloud9' among 100 VALORANT teams"
        );
    }

    #[test]
    fn test_generation_failed_helper() {
        let error = AppError::generation_failed("OpenAI", "HTTP 401: invalid key");
        assert!(matches!(error, AppError::GenerationFailed { .. }));
        assert_eq!(
            error.to_string(),
            "Report generation failed (OpenAI): HTTP 401: invalid key"
        );
    }

    #[test]
    fn test_missing_credential_helper() {
        let error = AppError::missing_credential("GRID_API_KEY");
        assert_eq!(error.to_string(), "Missing credential: GRID_API_KEY");
    }

    #[test]
    fn test_fallback_eligibility() {
        // Statistics-source failures may be replaced by mock data
        assert!(AppError::network_timeout("url").is_fallback_eligible());
        assert!(AppError::network_connection("url", "refused").is_fallback_eligible());
        assert!(AppError::api_client_error(401, "Unauthorized", "url").is_fallback_eligible());
        assert!(AppError::api_server_error(500, "boom", "url").is_fallback_eligible());
        assert!(AppError::api_malformed_json("bad", "url").is_fallback_eligible());
        assert!(AppError::graphql("errors", "url").is_fallback_eligible());
        assert!(AppError::missing_credential("GRID_API_KEY").is_fallback_eligible());
        assert!(AppError::team_not_found("x", "LoL", 0).is_fallback_eligible());

        // Local problems and generation failures are not
        assert!(!AppError::config_error("bad").is_fallback_eligible());
        assert!(!AppError::invalid_request("count").is_fallback_eligible());
        assert!(!AppError::generation_failed("OpenAI", "quota").is_fallback_eligible());
        assert!(!AppError::log_setup_error("log").is_fallback_eligible());
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::ApiFetch(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ApiParse(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<toml::Table>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::api_not_found("https://example.com"),
            AppError::api_client_error(400, "client error", "https://example.com"),
            AppError::api_rate_limit("rate limit", "https://example.com"),
            AppError::api_service_unavailable(503, "unavailable", "https://example.com"),
            AppError::network_timeout("https://example.com"),
            AppError::api_unexpected_structure("bad structure", "https://example.com"),
            AppError::api_no_data("no data", "https://example.com"),
            AppError::missing_credential("OPENAI_API_KEY"),
            AppError::generation_failed("Gemini", "timeout"),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
