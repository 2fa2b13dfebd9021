//! Runtime configuration.
//!
//! Endpoint and credential are injected into adapters through
//! [`QuoteApiConfig`]; nothing in the crate reads process-wide constants at
//! request time.

use std::time::Duration;

use crate::{ConfigError, Symbol, ValidationError, DEFAULT_SYMBOLS};

pub const API_KEY_ENV: &str = "TICKERBOARD_ALPHAVANTAGE_API_KEY";
pub const ENDPOINT_ENV: &str = "TICKERBOARD_ALPHAVANTAGE_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_CREDENTIAL: &str = "demo";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Remote quote endpoint settings.
#[derive(Clone, PartialEq, Eq)]
pub struct QuoteApiConfig {
    pub endpoint: String,
    pub credential: String,
    pub timeout_ms: u64,
}

impl QuoteApiConfig {
    pub fn new(
        endpoint: impl Into<String>,
        credential: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint { value: endpoint });
        }

        Ok(Self {
            endpoint,
            credential: credential.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        })
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    /// Read settings from the process environment, defaulting to the public demo key.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`QuoteApiConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = env_or(&lookup, ENDPOINT_ENV, DEFAULT_ENDPOINT)?;
        let credential = env_or(&lookup, API_KEY_ENV, DEFAULT_CREDENTIAL)?;
        Self::new(endpoint, credential)
    }
}

impl Default for QuoteApiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            credential: String::from(DEFAULT_CREDENTIAL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

// The credential is never printed.
impl std::fmt::Debug for QuoteApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteApiConfig")
            .field("endpoint", &self.endpoint)
            .field("credential", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Symbol set and cadence for the refresh driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub symbols: Vec<Symbol>,
    pub refresh_interval: Duration,
}

impl DashboardConfig {
    pub fn new(symbols: Vec<Symbol>, refresh_interval: Duration) -> Result<Self, ConfigError> {
        if refresh_interval.is_zero() {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        Ok(Self {
            symbols,
            refresh_interval,
        })
    }

    /// The built-in demo symbols refreshed every 30 seconds.
    pub fn demo() -> Result<Self, ValidationError> {
        Ok(Self {
            symbols: Symbol::parse_distinct(DEFAULT_SYMBOLS.iter().copied())?,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        })
    }
}

fn env_or<F>(lookup: &F, name: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default.to_owned()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyEnvVar {
            name: name.to_owned(),
        }),
        Some(value) => Ok(value.trim().to_owned()),
    }
}
