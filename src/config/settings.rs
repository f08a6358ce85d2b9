//! Configuration settings structures for dualstore
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables. Two database sections exist, one
//! per store; they are configured and pooled independently.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "dualstore".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Connection configuration for one database.
///
/// The same shape serves both the primary store (diesel DSL, externally
/// migrated schema) and the secondary store (raw parameterized SQL, schema
/// managed out-of-band).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to use ANSI colors on console output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Primary store configuration
    #[serde(default)]
    pub primary_database: DatabaseConfig,

    /// Secondary store configuration
    #[serde(default)]
    pub secondary_database: DatabaseConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validates the loaded settings.
    ///
    /// Both database URLs must be present; everything else has workable
    /// defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.primary_database.url.is_empty() {
            return Err(ConfigError::validation(
                "primary_database.url",
                "Primary database URL cannot be empty",
            ));
        }
        if self.secondary_database.url.is_empty() {
            return Err(ConfigError::validation(
                "secondary_database.url",
                "Secondary database URL cannot be empty",
            ));
        }
        if self.primary_database.min_connections > self.primary_database.max_connections {
            return Err(ConfigError::validation(
                "primary_database",
                "min_connections cannot exceed max_connections",
            ));
        }
        if self.secondary_database.min_connections > self.secondary_database.max_connections {
            return Err(ConfigError::validation(
                "secondary_database",
                "min_connections cannot exceed max_connections",
            ));
        }
        match self.logger.format.as_str() {
            "full" | "compact" | "json" => Ok(()),
            other => Err(ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: full, compact, json",
                    other
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            primary_database: DatabaseConfig {
                url: "postgres://localhost/primary".to_string(),
                ..Default::default()
            },
            secondary_database: DatabaseConfig {
                url: "postgres://localhost/secondary".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_application_config_defaults() {
        let config = ApplicationConfig::default();
        assert_eq!(config.name, "dualstore");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.keep_alive_timeout, 75);
    }

    #[test]
    fn test_server_config_address() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.connection_timeout, 30);
    }

    #[test]
    fn test_settings_validate_success() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_settings_validate_missing_primary_url() {
        let mut settings = valid_settings();
        settings.primary_database.url = String::new();
        let result = settings.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "primary_database.url");
        }
    }

    #[test]
    fn test_settings_validate_missing_secondary_url() {
        let mut settings = valid_settings();
        settings.secondary_database.url = String::new();
        let result = settings.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "secondary_database.url");
        }
    }

    #[test]
    fn test_settings_validate_invalid_log_format() {
        let mut settings = valid_settings();
        settings.logger.format = "xml".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validate_min_over_max_connections() {
        let mut settings = valid_settings();
        settings.secondary_database.min_connections = 50;
        settings.secondary_database.max_connections = 5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = valid_settings();
        let toml_str = toml::to_string(&settings).expect("Failed to serialize");
        let deserialized: Settings = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let toml_str = r#"
            [application]
            name = "my-app"

            [server]
            port = 8080
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(settings.application.name, "my-app");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1"); // default
        assert_eq!(settings.logger.level, "info"); // default
    }

    #[test]
    fn test_settings_deserialize_full() {
        let toml_str = r#"
            [application]
            name = "test-app"
            version = "1.0.0"

            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout = 60
            keep_alive_timeout = 120

            [primary_database]
            url = "postgres://localhost/primary"
            max_connections = 20
            min_connections = 5
            connection_timeout = 60

            [secondary_database]
            url = "postgres://localhost/secondary"
            max_connections = 4

            [logger]
            level = "debug"
            format = "json"
            colored = false
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");

        assert_eq!(settings.application.name, "test-app");
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.primary_database.url, "postgres://localhost/primary");
        assert_eq!(settings.primary_database.max_connections, 20);
        assert_eq!(
            settings.secondary_database.url,
            "postgres://localhost/secondary"
        );
        assert_eq!(settings.secondary_database.max_connections, 4);
        assert_eq!(settings.secondary_database.min_connections, 1); // default
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.logger.format, "json");
        assert!(!settings.logger.colored);
        assert!(settings.validate().is_ok());
    }
}
