use thiserror::Error;

use crate::config_def::ConfigType;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration {0} is defined twice")]
    DuplicateDefinition(String),

    #[error("Default value for {name} does not match declared type {expected}")]
    DefaultTypeMismatch { name: String, expected: ConfigType },

    #[error("Configuration {0} is overridden more than once")]
    DuplicateOverride(String),

    #[error("Unknown configuration: {0}")]
    UnknownConfig(String),

    #[error("Invalid value {value:?} for configuration {name}: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Mechanism provider {provider} failed: {reason}")]
    MechanismProvider {
        provider: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
