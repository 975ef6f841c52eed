use crate::constants::{self, endpoints, env_vars, mock};
use crate::data_fetcher::models::Game;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{validate_log_file_path, validate_numbers, validate_url};

/// Application settings stored in `config.toml`.
///
/// Every field has a default, so a partial or missing file is fine. API keys
/// are not stored here; see [`crate::credentials`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// GRID Statistics Feed GraphQL endpoint
    pub stats_feed_url: String,
    /// GRID Central Data GraphQL endpoint, used to resolve team names
    pub central_data_url: String,
    pub openai_base_url: String,
    pub gemini_base_url: String,
    pub openrouter_base_url: String,
    /// HTTP timeout in seconds for all outbound requests
    pub http_timeout_seconds: u64,
    /// Game used when `--game` is not given
    pub default_game: Game,
    /// Match count used when `--matches` is not given
    pub default_match_count: usize,
    /// Probability that a generated mock match is a win
    pub mock_base_win_rate: f64,
    /// Path to the log file. If not specified, logs go to the default log directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stats_feed_url: endpoints::GRID_STATS_FEED_URL.to_string(),
            central_data_url: endpoints::GRID_CENTRAL_DATA_URL.to_string(),
            openai_base_url: endpoints::OPENAI_BASE_URL.to_string(),
            gemini_base_url: endpoints::GEMINI_BASE_URL.to_string(),
            openrouter_base_url: endpoints::OPENROUTER_BASE_URL.to_string(),
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            default_game: Game::LeagueOfLegends,
            default_match_count: constants::DEFAULT_MATCH_COUNT,
            mock_base_win_rate: mock::DEFAULT_BASE_WIN_RATE,
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    ///
    /// A missing file yields the defaults. Environment variables override
    /// file values:
    /// - `VANGUARD_STATS_URL` - statistics feed endpoint
    /// - `VANGUARD_CENTRAL_DATA_URL` - central data endpoint
    /// - `VANGUARD_HTTP_TIMEOUT` - HTTP timeout in seconds
    /// - `VANGUARD_LOG_FILE` - log file path
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// [`load`](Self::load) against an explicit path
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            debug!("No config file at {path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::STATS_URL) {
            self.stats_feed_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::CENTRAL_DATA_URL) {
            self.central_data_url = url;
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates endpoints, numeric settings and the log file path
    pub fn validate(&self) -> Result<(), AppError> {
        validate_url("Statistics feed URL", &self.stats_feed_url)?;
        validate_url("Central data URL", &self.central_data_url)?;
        validate_url("OpenAI base URL", &self.openai_base_url)?;
        validate_url("Gemini base URL", &self.gemini_base_url)?;
        validate_url("OpenRouter base URL", &self.openrouter_base_url)?;
        validate_numbers(
            self.http_timeout_seconds,
            self.default_match_count,
            self.mock_base_win_rate,
        )?;
        validate_log_file_path(&self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    pub fn get_secrets_path() -> String {
        paths::get_secrets_path()
    }

    /// Prints current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Statistics Feed:");
        println!("{}", config.stats_feed_url);
        println!("Central Data:");
        println!("{}", config.central_data_url);
        println!("────────────────────────────────────");
        println!("LLM Endpoints:");
        println!("OpenAI      {}", config.openai_base_url);
        println!("Gemini      {}", config.gemini_base_url);
        println!("OpenRouter  {}", config.openrouter_base_url);
        println!("────────────────────────────────────");
        println!("Defaults:");
        println!(
            "{} / {} matches / mock win rate {:.0}%",
            config.default_game,
            config.default_match_count,
            config.mock_base_win_rate * 100.0
        );
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Secret Store:");
        println!("{}", paths::get_secrets_path());
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating its parent directory.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        info!("Saved configuration to {path}");
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
