//! Error types for cairn-core

use thiserror::Error;

use crate::registration::RegistrationError;

/// Result type alias using cairn-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Cairn
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration key has no value in the store
    #[error("Missing required config: {key}")]
    ConfigurationMissing { key: String },

    /// Stack configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Region outside the allow-list
    #[error(
        "Unknown region: {region}. Valid regions: {valid}",
        valid = crate::region::VALID_REGIONS.join(", ")
    )]
    InvalidRegion { region: String },

    /// The resource registrar rejected a declaration
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

impl Error {
    /// Create a configuration missing error
    pub fn configuration_missing(key: impl Into<String>) -> Self {
        Self::ConfigurationMissing { key: key.into() }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid region error
    pub fn invalid_region(region: impl Into<String>) -> Self {
        Self::InvalidRegion {
            region: region.into(),
        }
    }

    /// Key named by a `ConfigurationMissing` error
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Self::ConfigurationMissing { key } => Some(key.as_str()),
            _ => None,
        }
    }
}
