//! Logging System
//!
//! Structured logging via the `tracing` crate. Command output owns stdout,
//! so logs default to stderr; file output is available for debugging
//! sessions. `STRATO_LOG` overrides the configured level with a full
//! env-filter directive.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format, stderr only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// Priority order: `STRATO_LOG` environment variable, then the provided
/// configuration, then defaults.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ConfigError> {
    let default = LoggingConfig::default();
    let config = config.unwrap_or(&default);

    let filter = build_env_filter(config)?;
    let layer = build_fmt_layer(config)?;

    Registry::default()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(directive) = std::env::var("STRATO_LOG") {
        return EnvFilter::try_new(directive).map_err(|e| ConfigError::Logging(e.to_string()));
    }
    EnvFilter::try_new(&config.level).map_err(|e| ConfigError::Logging(e.to_string()))
}

fn build_fmt_layer(
    config: &LoggingConfig,
) -> Result<Box<dyn Layer<tracing_subscriber::layer::Layered<EnvFilter, Registry>> + Send + Sync>, ConfigError>
{
    let layer = match config.output.as_str() {
        "file" => {
            let path = config.file.clone().unwrap_or_else(default_log_file);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::Logging(format!("{}: {}", parent.display(), e)))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| ConfigError::Logging(format!("{}: {}", path.display(), e)))?;
            let writer = Arc::new(file);
            if config.format == "json" {
                fmt::layer().json().with_writer(writer).boxed()
            } else {
                fmt::layer().with_ansi(false).with_writer(writer).boxed()
            }
        }
        _ => {
            if config.format == "json" {
                fmt::layer().json().with_writer(std::io::stderr).boxed()
            } else {
                fmt::layer()
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr)
                    .boxed()
            }
        }
    };
    Ok(layer)
}

fn default_log_file() -> PathBuf {
    directories::ProjectDirs::from("", "", "strato")
        .map(|dirs| dirs.data_dir().join("strato.log"))
        .unwrap_or_else(|| PathBuf::from("strato.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "text");
        assert_eq!(config.output, "stderr");
        assert!(config.file.is_none());
        assert!(config.color);
    }

    #[test]
    fn test_env_filter_accepts_level_names() {
        for level in ["trace", "debug", "info", "warn", "error", "off"] {
            let config = LoggingConfig {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(build_env_filter(&config).is_ok());
        }
    }
}
