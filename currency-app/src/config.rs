//! Configuration loading from environment.

use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://currency.db?mode=rwc";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Set when spans should be exported over OTLP.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_blank("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match non_blank("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        let database_url =
            non_blank("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            host,
            port,
            database_url,
            otlp_endpoint: non_blank("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.database_url, "sqlite://currency.db?mode=rwc");
        assert_eq!(config.otlp_endpoint, None);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/currency"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.database_url, "postgres://localhost/currency");
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
    }

    #[test]
    fn test_invalid_port_fails() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("PORT", " "), ("OTEL_EXPORTER_OTLP_ENDPOINT", "")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.otlp_endpoint, None);
    }
}
