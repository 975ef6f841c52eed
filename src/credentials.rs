//! API key lookup: secret store, then environment, then manual entry.
//!
//! The chain is built once per run. The first source holding a non-empty
//! value for a key wins.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::AppError;

/// A place API keys can come from.
pub trait CredentialSource {
    fn name(&self) -> &'static str;

    fn lookup(&self, key: &str) -> Option<String>;
}

/// Keys from a flat `secrets.toml` (`GRID_API_KEY = "..."`) in the config directory.
#[derive(Debug, Default)]
pub struct SecretStore {
    values: HashMap<String, String>,
}

impl SecretStore {
    /// Loads the store. A missing, unreadable or malformed file is an empty
    /// store, so lookups continue with the next source.
    pub async fn load(path: &Path) -> Self {
        match Self::read(path).await {
            Ok(Some(values)) => {
                info!(
                    "Loaded {} secret(s) from {}",
                    values.len(),
                    path.display()
                );
                Self { values }
            }
            Ok(None) => {
                debug!("No secret store at {}", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring secret store {}: {e}", path.display());
                Self::default()
            }
        }
    }

    async fn read(path: &Path) -> Result<Option<HashMap<String, String>>, AppError> {
        if !tokio::fs::try_exists(path).await? {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(path).await?;
        Ok(Some(toml::from_str(&content)?))
    }
}

impl CredentialSource for SecretStore {
    fn name(&self) -> &'static str {
        "secret store"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Keys from the process environment
#[derive(Debug, Default)]
pub struct EnvironmentSource;

impl CredentialSource for EnvironmentSource {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Keys typed by the user, on the command line or at a prompt
#[derive(Debug, Default)]
pub struct ManualSource {
    values: HashMap<String, String>,
}

impl ManualSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value for `key`; `None` leaves the key unset.
    pub fn with(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.values.insert(key.to_string(), value);
        }
        self
    }

    pub fn insert(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

impl CredentialSource for ManualSource {
    fn name(&self) -> &'static str {
        "manual entry"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// A resolved key and the source it came from.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub value: String,
    pub source: &'static str,
}

// Never print the key itself
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("value", &"***")
            .field("source", &self.source)
            .finish()
    }
}

#[derive(Default)]
pub struct CredentialChain {
    sources: Vec<Box<dyn CredentialSource + Send + Sync>>,
}

impl CredentialChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl CredentialSource + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Secret store at `secrets_path`, then environment, then `manual`.
    pub async fn standard(secrets_path: &Path, manual: ManualSource) -> Self {
        Self::new()
            .with_source(SecretStore::load(secrets_path).await)
            .with_source(EnvironmentSource)
            .with_source(manual)
    }

    pub fn resolve(&self, key: &str) -> Option<Credential> {
        let found = self.sources.iter().find_map(|source| {
            source
                .lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| Credential {
                    value,
                    source: source.name(),
                })
        });

        match &found {
            Some(credential) => debug!("{key} resolved from {}", credential.source),
            None => debug!("{key} not found in any credential source"),
        }
        found
    }
}
