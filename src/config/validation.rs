use crate::error::AppError;
use std::path::Path;

/// Checks that an endpoint is an absolute http(s) URL.
pub fn validate_url(name: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must start with http:// or https:// (got '{url}')"
        )));
    }
    Ok(())
}

/// Validates numeric settings.
///
/// - HTTP timeout must be positive
/// - Default match count must be positive
/// - Mock base win rate must lie in [0, 1]
pub fn validate_numbers(
    http_timeout_seconds: u64,
    default_match_count: usize,
    mock_base_win_rate: f64,
) -> Result<(), AppError> {
    if http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }
    if default_match_count == 0 {
        return Err(AppError::config_error("Default match count must be positive"));
    }
    if !(0.0..=1.0).contains(&mock_base_win_rate) {
        return Err(AppError::config_error(format!(
            "Mock base win rate must be between 0 and 1 (got {mock_base_win_rate})"
        )));
    }
    Ok(())
}

/// Validates the optional log file path.
///
/// A provided path cannot be empty, and its parent directory must exist or
/// be creatable.
pub fn validate_log_file_path(log_file_path: &Option<String>) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
