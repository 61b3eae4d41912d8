//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. Defaults mirror the original deployment: plain HTTP on port
//! 8080, 5s/10s read/write timeouts, `info.log` appended in the working
//! directory.

/// Root configuration for the gateway.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream movie-database endpoint and credentials.
    pub upstream: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream movie-database configuration.
///
/// Both fields are required; [`Settings::from_env`] rejects a missing or
/// empty value at startup.
///
/// [`Settings::from_env`]: crate::config::Settings::from_env
#[derive(Debug, Clone, Default)]
pub struct UpstreamConfig {
    /// Base endpoint of the movie-database API (e.g.,
    /// "https://www.omdbapi.com/").
    pub base_url: String,

    /// API key sent with every upstream query.
    pub api_key: String,
}

impl UpstreamConfig {
    /// Build the search query URL.
    ///
    /// Values are concatenated verbatim, not URL-encoded.
    pub fn search_url(&self, searchword: &str, pagination: &str) -> String {
        format!(
            "{}?apikey={}&s={}&page={}",
            self.base_url, self.api_key, searchword, pagination
        )
    }

    /// Build the lookup-by-id query URL.
    ///
    /// Values are concatenated verbatim, not URL-encoded.
    pub fn lookup_url(&self, id: &str) -> String {
        format!("{}?apikey={}&i={}", self.base_url, self.api_key, id)
    }
}

/// Timeout configuration.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Inbound read timeout in seconds.
    pub read_secs: u64,

    /// Inbound write timeout in seconds; used as the request deadline.
    pub write_secs: u64,

    /// Graceful-shutdown drain deadline in seconds.
    pub drain_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            read_secs: 5,
            write_secs: 10,
            drain_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes
    /// precedence when set.
    pub log_level: String,

    /// Operational log file, opened in append mode at startup.
    pub log_file: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: "info.log".to_string(),
        }
    }
}
