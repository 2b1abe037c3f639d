//! AI-Core configuration loaded from environment variables.

/// Token accepted when `AI_DEV_JWT` is not set.
pub const DEFAULT_DEV_TOKEN: &str = "dev-token";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8000`)
/// - `AI_DEV_JWT` — bearer token required on authenticated routes (default: `"dev-token"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub dev_token: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            dev_token: get("AI_DEV_JWT").unwrap_or(defaults.dev_token),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            dev_token: DEFAULT_DEV_TOKEN.to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.dev_token, "dev-token");
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_unset_lookup_matches_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.dev_token, DEFAULT_DEV_TOKEN);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_dev_token_and_port_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("AI_DEV_JWT", "s3cret"),
            ("PORT", "9100"),
            ("HOST", "127.0.0.1"),
        ]));
        assert_eq!(config.dev_token, "s3cret");
        assert_eq!(config.addr(), "127.0.0.1:9100");
    }

    #[test]
    fn test_empty_dev_token_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("AI_DEV_JWT", ""), ("PORT", "http")]));
        assert_eq!(config.dev_token, DEFAULT_DEV_TOKEN);
        assert_eq!(config.port, 8000);
    }
}
