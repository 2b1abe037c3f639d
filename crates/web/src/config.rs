//! Web server configuration loaded from environment variables.

/// Base URL used when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Variable the Next.js frontend used for the same setting.
pub const LEGACY_API_URL_VAR: &str = "NEXT_PUBLIC_API_URL";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `API_URL` — base URL of the API whose health is shown (default: `"http://localhost:3001"`).
///   `NEXT_PUBLIC_API_URL` is honoured when `API_URL` is unset, so existing deployments keep working.
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_url: String,
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
            api_url: get("API_URL")
                .or_else(|| get(LEGACY_API_URL_VAR))
                .unwrap_or(defaults.api_url),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the health endpoint queried on every page render.
    pub fn health_url(&self) -> String {
        format!("{}/healthz", self.api_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_url: DEFAULT_API_URL.to_string(),
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
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_url, "http://localhost:3001");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_health_url_defaults_to_localhost() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.health_url(), "http://localhost:3001/healthz");
    }

    #[test]
    fn test_empty_api_url_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("API_URL", "")]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("API_URL", "http://api.internal:9000"),
        ]));
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.health_url(), "http://api.internal:9000/healthz");
    }

    #[test]
    fn test_legacy_api_url_used_when_api_url_unset() {
        let config = Config::from_lookup(lookup_from(&[(
            "NEXT_PUBLIC_API_URL",
            "http://legacy.internal:3001",
        )]));
        assert_eq!(config.health_url(), "http://legacy.internal:3001/healthz");
    }

    #[test]
    fn test_api_url_wins_over_legacy_name() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_URL", "http://api.internal:9000"),
            ("NEXT_PUBLIC_API_URL", "http://legacy.internal:3001"),
        ]));
        assert_eq!(config.api_url, "http://api.internal:9000");
    }

    #[test]
    fn test_invalid_port_uses_default() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, 3000);
    }
}
