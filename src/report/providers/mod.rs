//! Language model providers behind one text-generation capability

pub mod chat;
pub mod gemini;
pub mod openai;
pub mod openrouter;

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use reqwest::Client;

use super::ScoutPrompt;
use super::offline::OfflineScout;
use crate::config::Config;
use crate::constants::credential_keys;
use crate::error::AppError;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use openrouter::OpenRouterClient;

/// Given a prompt, return text.
pub trait TextGenerator {
    /// Label used in logs, errors and the dashboard
    fn provider_name(&self) -> &'static str;

    fn generate(
        &self,
        prompt: &ScoutPrompt<'_>,
    ) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Which provider writes the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Template report computed locally, no network
    Mock,
    OpenAi,
    Gemini,
    OpenRouter,
}

impl LlmProvider {
    pub const ALL: [LlmProvider; 4] = [
        LlmProvider::Mock,
        LlmProvider::OpenAi,
        LlmProvider::Gemini,
        LlmProvider::OpenRouter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LlmProvider::Mock => "Offline scout",
            LlmProvider::OpenAi => "OpenAI",
            LlmProvider::Gemini => "Gemini",
            LlmProvider::OpenRouter => "OpenRouter",
        }
    }

    /// Credential the provider needs, if any
    pub fn credential_key(self) -> Option<&'static str> {
        match self {
            LlmProvider::Mock => None,
            LlmProvider::OpenAi => Some(credential_keys::OPENAI),
            LlmProvider::Gemini => Some(credential_keys::GEMINI),
            LlmProvider::OpenRouter => Some(credential_keys::OPENROUTER),
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" | "offline" | "none" => Ok(LlmProvider::Mock),
            "openai" => Ok(LlmProvider::OpenAi),
            "gemini" | "google" => Ok(LlmProvider::Gemini),
            "openrouter" => Ok(LlmProvider::OpenRouter),
            other => Err(format!(
                "unknown provider '{other}' (expected mock, openai, gemini or openrouter)"
            )),
        }
    }
}

/// The configured provider
pub enum ProviderClient {
    Offline(OfflineScout),
    OpenAi(OpenAiClient),
    Gemini(GeminiClient),
    OpenRouter(OpenRouterClient),
}

impl ProviderClient {
    /// Builds the client for `provider`. A network provider without an API
    /// key is a [`AppError::GenerationFailed`].
    pub fn new(
        provider: LlmProvider,
        config: &Config,
        http: Client,
        api_key: Option<String>,
    ) -> Result<Self, AppError> {
        if provider == LlmProvider::Mock {
            return Ok(ProviderClient::Offline(OfflineScout));
        }

        let key = api_key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            AppError::generation_failed(
                provider.name(),
                format!(
                    "missing credential {}",
                    provider.credential_key().unwrap_or_default()
                ),
            )
        })?;

        Ok(match provider {
            LlmProvider::OpenAi => {
                ProviderClient::OpenAi(OpenAiClient::new(http, &config.openai_base_url, key))
            }
            LlmProvider::Gemini => {
                ProviderClient::Gemini(GeminiClient::new(http, &config.gemini_base_url, key))
            }
            LlmProvider::OpenRouter => ProviderClient::OpenRouter(OpenRouterClient::new(
                http,
                &config.openrouter_base_url,
                key,
            )),
            LlmProvider::Mock => ProviderClient::Offline(OfflineScout),
        })
    }
}

impl TextGenerator for ProviderClient {
    fn provider_name(&self) -> &'static str {
        match self {
            ProviderClient::Offline(c) => c.provider_name(),
            ProviderClient::OpenAi(c) => c.provider_name(),
            ProviderClient::Gemini(c) => c.provider_name(),
            ProviderClient::OpenRouter(c) => c.provider_name(),
        }
    }

    async fn generate(&self, prompt: &ScoutPrompt<'_>) -> Result<String, AppError> {
        match self {
            ProviderClient::Offline(c) => c.generate(prompt).await,
            ProviderClient::OpenAi(c) => c.generate(prompt).await,
            ProviderClient::Gemini(c) => c.generate(prompt).await,
            ProviderClient::OpenRouter(c) => c.generate(prompt).await,
        }
    }
}
