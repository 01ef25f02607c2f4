//! Client configuration, populated from environment variables.

use std::time::Duration;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for talking to the announcements service.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `ANNOUNCE_API_URL` | `http://127.0.0.1:8000/api` | Base URL of the REST API |
/// | `ANNOUNCE_API_TOKEN` | (absent) | Bearer token attached to every request |
/// | `ANNOUNCE_TIMEOUT_SECS` | `30` | Per-request timeout |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Populate config from environment variables, applying defaults where absent.
    /// An unparsable timeout falls back to the default.
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("ANNOUNCE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url: std::env::var("ANNOUNCE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
            token: std::env::var("ANNOUNCE_API_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = ClientConfig::new("http://api.test")
            .with_token("abc")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://api.test");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    /// One test owns every `ANNOUNCE_*` variable so nothing races on the environment.
    #[test]
    fn from_env_reads_variables_and_falls_back() {
        const VARS: [&str; 3] = ["ANNOUNCE_API_URL", "ANNOUNCE_API_TOKEN", "ANNOUNCE_TIMEOUT_SECS"];
        for var in VARS {
            std::env::remove_var(var);
        }

        assert_eq!(ClientConfig::from_env(), ClientConfig::default());

        std::env::set_var("ANNOUNCE_API_URL", "https://campus.example/api/");
        std::env::set_var("ANNOUNCE_API_TOKEN", "secret");
        std::env::set_var("ANNOUNCE_TIMEOUT_SECS", "5");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "https://campus.example/api/");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));

        std::env::set_var("ANNOUNCE_API_TOKEN", "");
        std::env::set_var("ANNOUNCE_TIMEOUT_SECS", "soon");
        let config = ClientConfig::from_env();
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn default_has_no_token() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
