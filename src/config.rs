//! Configuration loading and constants.
//!
//! Defines the service identity, bind defaults, the CORS allow-list for the
//! browser frontend, and logging defaults. `AppConfig` is the root configuration
//! struct. Every field has a default, so running without a config file gives
//! the stock demo setup: all interfaces, port 8000, local frontend origins.

use const_format::formatcp;
use http::HeaderValue;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Service Identity
// =============================================================================

/// Service name reported by the root endpoint
pub const SERVICE_NAME: &str = "HealthMate AI API";

/// Status string reported by the root endpoint while serving
pub const SERVICE_STATUS: &str = "running";

/// Status string reported by the health probe
pub const HEALTH_STATUS: &str = "healthy";

// =============================================================================
// HTTP Defaults
// =============================================================================

/// Default bind address (all interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Cache-Control for every response. Answers and probes are never cacheable.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Cross-Origin Access
// =============================================================================

/// Port the development frontend is served from
pub const FRONTEND_PORT: u16 = 3000;

pub const ORIGIN_LOCALHOST_HTTP: &str = formatcp!("http://localhost:{}", FRONTEND_PORT);
pub const ORIGIN_LOOPBACK_HTTP: &str = formatcp!("http://127.0.0.1:{}", FRONTEND_PORT);
pub const ORIGIN_LOCALHOST_HTTPS: &str = formatcp!("https://localhost:{}", FRONTEND_PORT);

/// Origins allowed to make credentialed cross-origin requests by default
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    ORIGIN_LOCALHOST_HTTP,
    ORIGIN_LOOPBACK_HTTP,
    ORIGIN_LOCALHOST_HTTPS,
];

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "healthmate=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Cross-origin access control
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    /// "host:port" form suitable for socket address parsing
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin access control configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Exact origins (scheme://host:port) allowed to send credentialed requests
    #[serde(default = "CorsConfig::default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Self::default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    fn default_allowed_origins() -> Vec<String> {
        DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
    }

    /// Allowed origins as header values. Call after validation.
    pub fn origin_header_values(&self) -> Vec<HeaderValue> {
        self.allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be non-zero".to_string(),
            ));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }

        for origin in &self.cors.allowed_origins {
            // Wildcard cannot be combined with credentialed requests
            if origin.trim() == "*" {
                return Err(ConfigError::Validation(
                    "cors.allowed_origins must list explicit origins, not \"*\"".to_string(),
                ));
            }
            if HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::Validation(format!(
                    "Invalid origin in cors.allowed_origins: {:?}",
                    origin
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_matches_fixed_constants() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.http.bind_address(), "0.0.0.0:8000");
        assert_eq!(
            config.cors.allowed_origins,
            vec![
                "http://localhost:3000",
                "http://127.0.0.1:3000",
                "https://localhost:3000",
            ]
        );
        assert!(!config.logging.is_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = AppConfig::load_or_default(None::<&str>).unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.cors.allowed_origins.len(), 3);
    }

    #[test]
    fn test_load_overrides() {
        let file = write_config(
            r#"
            [http]
            host = "127.0.0.1"
            port = 9000

            [cors]
            allowed_origins = ["https://app.example.com"]

            [logging]
            format = "json"
            "#,
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.cors.allowed_origins, vec!["https://app.example.com"]);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_partial_section_keeps_field_defaults() {
        let file = write_config("[http]\nport = 8080\n");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load("/nonexistent/healthmate.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("[http\nport = ");
        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let file = write_config("[http]\nport = 0\n");
        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_wildcard_origin() {
        let mut config = AppConfig::default();
        config.cors.allowed_origins = vec!["*".to_string()];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unprintable_origin() {
        let mut config = AppConfig::default();
        config.cors.allowed_origins = vec!["http://bad\norigin".to_string()];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_origin_header_values() {
        let config = CorsConfig::default();
        let values = config.origin_header_values();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], "http://localhost:3000");
    }
}
