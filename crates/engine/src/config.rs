//! Engine configuration from the environment.

use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite:inventory.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "*";

/// Where the engine listens and where it keeps its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// `*` or a comma separated list of origins. Defaults to `*`.
    pub cors_allowed_origins: String,
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let server_port = non_empty("SERVER_PORT")
            .or_else(|| non_empty("PORT"))
            .and_then(|port| match port.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(port = %port, "Ignoring invalid server port");
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        Self {
            database_url: non_empty("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            server_host: non_empty("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGINS.to_string()),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server_host, self.server_port).parse()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = EngineConfig::default();

        assert_eq!(config.database_url, "sqlite:inventory.db?mode=rwc");
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cors_allowed_origins, "*");
    }

    #[test]
    fn server_port_takes_precedence_over_port() {
        let config = config_from(&[("SERVER_PORT", "8080"), ("PORT", "9090")]);
        assert_eq!(config.server_port, 8080);

        let config = config_from(&[("PORT", "9090")]);
        assert_eq!(config.server_port, 9090);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = config_from(&[("SERVER_PORT", "not-a-port")]);
        assert_eq!(config.server_port, 5000);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("DATABASE_URL", "  "), ("CORS_ALLOWED_ORIGINS", "")]);

        assert_eq!(config.database_url, "sqlite:inventory.db?mode=rwc");
        assert_eq!(config.cors_allowed_origins, "*");
    }

    #[test]
    fn cors_origins_can_be_narrowed() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "http://localhost:5173")]);
        assert_eq!(config.cors_allowed_origins, "http://localhost:5173");
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = config_from(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "5050")]);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:5050");
    }
}
