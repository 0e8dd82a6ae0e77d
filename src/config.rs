use std::time::Duration;

use anyhow::{Context, Error, Result};
use derive_getters::Getters;

pub const DEFAULT_BASE_URL: &str = "https://api.sectors.app/v1";

#[derive(Clone, Getters)]
pub struct Config {
    base_url: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl Config {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout: None,
        }
    }

    /// Reads `SECTORS_API_KEY`, plus the optional `SECTORS_BASE_URL` and
    /// `SECTORS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("SECTORS_API_KEY").context("Missing SECTORS_API_KEY in environment")?;
        let base_url = std::env::var("SECTORS_BASE_URL").ok();

        let mut config = Self::new(base_url_or_default(base_url.as_deref()), &api_key);

        if let Ok(secs) = std::env::var("SECTORS_TIMEOUT_SECS") {
            config.timeout = Some(parse_timeout(&secs)?);
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// The key never shows up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Blank values fall back to the public API.
pub fn base_url_or_default(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BASE_URL,
    }
}

pub fn parse_timeout(field: &str) -> Result<Duration> {
    let secs = field
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse SECTORS_TIMEOUT_SECS '{}'", field))?;

    if secs == 0 {
        return Err(Error::msg("SECTORS_TIMEOUT_SECS must be greater than zero"));
    }

    Ok(Duration::from_secs(secs))
}
