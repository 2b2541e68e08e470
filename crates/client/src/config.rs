//! Client configuration from the environment.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the engine lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Read `STOCKWATCH_API_URL` and `STOCKWATCH_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("STOCKWATCH_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = lookup("STOCKWATCH_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_engine() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = ClientConfig::from_lookup(|key| match key {
            "STOCKWATCH_API_URL" => Some("http://inventory:8080".to_string()),
            "STOCKWATCH_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://inventory:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn zero_or_garbage_timeout_uses_default() {
        for raw in ["0", "soon"] {
            let config = ClientConfig::from_lookup(|key| {
                (key == "STOCKWATCH_TIMEOUT_SECS").then(|| raw.to_string())
            });
            assert_eq!(config.request_timeout, Duration::from_secs(30));
        }
    }
}
