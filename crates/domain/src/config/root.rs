use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::{LoggingConfig, VALID_LOG_LEVELS};
use super::probe::ProbeConfig;
use super::server::ServerConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub probe: ProbeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line (or environment) that win over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `config_path` if given (defaults otherwise) and applies overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be greater than 0".to_string(),
            ));
        }

        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.bind_address cannot be empty".to_string(),
            ));
        }

        let probe = &self.probe;
        if probe.connect_timeout_ms == 0 || probe.request_timeout_ms == 0 || probe.dns_timeout_ms == 0
        {
            return Err(ConfigError::Validation(
                "probe timeouts must be greater than 0".to_string(),
            ));
        }

        if probe.connect_timeout_ms > probe.request_timeout_ms {
            return Err(ConfigError::Validation(format!(
                "probe.connect_timeout_ms ({}) cannot exceed probe.request_timeout_ms ({})",
                probe.connect_timeout_ms, probe.request_timeout_ms
            )));
        }

        let level = self.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got '{}'",
                VALID_LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}
