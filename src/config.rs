//! Configuration System
//!
//! Persisted client state: the platform API endpoint, stored credentials,
//! the targeted organization/space, and logging settings. Loading is
//! layered (defaults, then the global config file, then environment
//! overrides); the `target` and `auth` commands write the file back as TOML.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::session::TargetRef;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StratoConfig {
    /// Platform API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Stored credentials
    #[serde(default)]
    pub auth: AuthConfig,

    /// Targeted organization and space
    #[serde(default)]
    pub target: TargetConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Platform API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the platform controller API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// The configured endpoint, required before any API call.
    pub fn endpoint(&self) -> Result<&str, ConfigError> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::NoApiEndpoint)
    }
}

/// Stored credentials. The token is a bearer token passed verbatim to the
/// platform API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Targeted organization and space. A space target is only valid inside
/// the targeted org.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<TargetRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<TargetRef>,
}

/// Loads and persists the configuration file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path to the global config file: `$XDG_CONFIG_HOME/strato/config.toml`
    /// (or the platform equivalent).
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let dirs = directories::ProjectDirs::from("", "", "strato")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load the global config with environment overrides
    /// (`STRATO_API__URL`, `STRATO_AUTH__TOKEN`, ...).
    pub fn load() -> Result<StratoConfig, ConfigError> {
        let path = Self::global_config_path()?;
        let mut builder = Self::builder();
        if path.exists() {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        } else {
            debug!(config_path = %path.display(), "no global config file, using defaults");
        }
        Self::finish(builder)
    }

    /// Load from an explicit file, bypassing the global path. Environment
    /// overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<StratoConfig, ConfigError> {
        let builder = Self::builder().add_source(File::from(path).required(true));
        Self::finish(builder)
    }

    /// Write the configuration back as TOML, creating parent directories as
    /// needed. Returns the path written.
    pub fn save(config: &StratoConfig, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::global_config_path()?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Write(format!("{}: {}", parent.display(), e)))?;
        }
        let rendered = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::Write(e.to_string()))?;
        std::fs::write(&path, rendered)
            .map_err(|e| ConfigError::Write(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }

    fn builder() -> ConfigBuilder<DefaultState> {
        Config::builder()
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<StratoConfig, ConfigError> {
        builder
            .add_source(Environment::with_prefix("STRATO").separator("__"))
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))
    }
}
