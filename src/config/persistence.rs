//! Local submission history configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::result::sanitize_component;
use crate::ports::DEFAULT_STORAGE_KEY;

/// Optional append-only history of completed records
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    /// Append each completed record to the local history
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl PersistenceConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_key.is_empty() || sanitize_component(&self.storage_key) != self.storage_key {
            return Err(ValidationError::InvalidStorageKey(self.storage_key.clone()));
        }
        if self.enabled && self.directory.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("persistence.directory"));
        }
        Ok(())
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            storage_key: default_storage_key(),
            directory: default_directory(),
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from("./data")
}
