//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: RESTAURANTS_)
//! 2. Current working directory: ./config.toml
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// CORS mode (permissive, restrictive, disabled)
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            cors_mode: default_cors_mode(),
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_body_limit_mb() -> usize {
    10 // 10 MB
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Reads ./config.toml when present; environment variables
    /// (RESTAURANTS_ prefix) override all file-based configs.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file
    ///
    /// Useful for testing or non-standard deployments.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Config::default()))
            // Load from config file (if exists)
            .merge(Toml::file(path.as_ref()))
            // Override with environment variables
            .merge(Env::prefixed("RESTAURANTS_").split("_"))
            .extract()?;

        Ok(config)
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "restaurants-service".to_string(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
            },
            middleware: MiddlewareConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.name, "restaurants-service");
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.middleware.body_limit_mb, 10);
        assert_eq!(config.middleware.cors_mode, "permissive");
    }

    #[test]
    fn test_timeout_duration() {
        let config = Config::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            r#"
            [service]
            name = "restaurants-test"
            port = 9000

            [middleware]
            cors_mode = "restrictive"
            "#
        )
        .expect("write config");

        let config = Config::load_from(file.path()).expect("load config");
        assert_eq!(config.service.name, "restaurants-test");
        assert_eq!(config.service.port, 9000);
        assert_eq!(config.middleware.cors_mode, "restrictive");
        // Unset values fall back to defaults
        assert_eq!(config.service.timeout_secs, 30);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = Config::load_from("does-not-exist.toml").expect("load config");
        assert_eq!(config.service.port, 8080);
    }
}
