//! Configuration loading from the process environment.

use thiserror::Error;
use url::Url;

use crate::config::schema::Settings;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is absent or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is present but unusable.
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl Settings {
    /// Load settings from the process environment, honoring a `.env` file
    /// in the working directory when one exists.
    ///
    /// Called once at startup; the caller decides whether a failure is
    /// fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// `URL` and the API key are required. The key is read from `OMDBKey`
    /// first, then `OMDBKEY`. Optional overrides: `BIND_ADDRESS`,
    /// `LOG_FILE`, `LOG_LEVEL`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        let base_url = required(&lookup, "URL")?;
        Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
            key: "URL",
            reason: e.to_string(),
        })?;
        settings.upstream.base_url = base_url;

        settings.upstream.api_key = lookup("OMDBKey")
            .filter(|value| !value.is_empty())
            .or_else(|| lookup("OMDBKEY").filter(|value| !value.is_empty()))
            .ok_or(ConfigError::Missing("OMDBKey"))?;

        if let Some(bind_address) = lookup("BIND_ADDRESS").filter(|value| !value.is_empty()) {
            settings.listener.bind_address = bind_address;
        }
        if let Some(log_file) = lookup("LOG_FILE").filter(|value| !value.is_empty()) {
            settings.observability.log_file = log_file;
        }
        if let Some(log_level) = lookup("LOG_LEVEL").filter(|value| !value.is_empty()) {
            settings.observability.log_level = log_level;
        }

        Ok(settings)
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(key))
}
