//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Both the catalog and the directory server load
//! their listening address through this module.

use std::env;

/// Port used when `PORT` is absent or unparsable
pub const DEFAULT_PORT: u16 = 3000;

/// Host used when `HOST` is absent
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                host: DEFAULT_HOST.to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: parse_port(env::var("PORT").ok().as_deref()),
                host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw.map(str::trim).filter(|p| !p.is_empty()) {
        None => DEFAULT_PORT,
        Some(p) => p.parse().unwrap_or_else(|_| {
            tracing::warn!(port = %p, "Ignoring unparsable PORT, using {}", DEFAULT_PORT);
            DEFAULT_PORT
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(None), 3000);
        assert_eq!(parse_port(Some("")), 3000);
        assert_eq!(parse_port(Some("8081")), 8081);
        assert_eq!(parse_port(Some(" 4000 ")), 4000);
        // Not a port: fall back rather than refuse to start
        assert_eq!(parse_port(Some("abc")), 3000);
        assert_eq!(parse_port(Some("70000")), 3000);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::remove_var("PORT");
        env::remove_var("HOST");

        let config = Config::from_env();
        assert_eq!(config, Config::default());
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("PORT", "5050");
        env::set_var("HOST", "127.0.0.1");

        let config = Config::from_env();

        env::remove_var("PORT");
        env::remove_var("HOST");

        assert_eq!(config.server.port, 5050);
        assert_eq!(config.server_addr(), "127.0.0.1:5050");
    }
}
