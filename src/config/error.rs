//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ValidationFailed
    }
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Storage key '{0}' may only contain letters, digits, '_' and '-'")]
    InvalidStorageKey(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
