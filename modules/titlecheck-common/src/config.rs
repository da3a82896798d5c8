use std::env;
use std::time::Duration;

use crate::error::TitleCheckError;
use crate::generator::normalize_terms;

/// Default simulated round trip for the mock generator.
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Mock generator
    pub generator_delay: Duration,
    pub blacklist: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_host: "0.0.0.0".to_string(),
            web_port: 3000,
            generator_delay: Duration::from_millis(DEFAULT_DELAY_MS),
            blacklist: vec!["badword".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, TitleCheckError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TitleCheckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let web_port = match lookup("WEB_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| TitleCheckError::Config(format!("WEB_PORT must be a number, got {raw:?}")))?,
            None => defaults.web_port,
        };

        let generator_delay = match lookup("TITLECHECK_DELAY_MS") {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|_| {
                    TitleCheckError::Config(format!(
                        "TITLECHECK_DELAY_MS must be a number of milliseconds, got {raw:?}"
                    ))
                })?;
                Duration::from_millis(ms)
            }
            None => defaults.generator_delay,
        };

        let blacklist = match lookup("TITLECHECK_BLACKLIST") {
            Some(raw) => normalize_terms(raw.split(',')),
            None => defaults.blacklist,
        };

        Ok(Self {
            web_host: lookup("WEB_HOST").unwrap_or(defaults.web_host),
            web_port,
            generator_delay,
            blacklist,
        })
    }
}
