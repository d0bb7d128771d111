//! Instrument identification

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::result::InstrumentInfo;

/// Name and build tag stamped into every result record
#[derive(Debug, Clone, Deserialize)]
pub struct InstrumentConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_build_tag")]
    pub build_tag: String,
}

impl InstrumentConfig {
    pub fn info(&self) -> InstrumentInfo {
        InstrumentInfo::new(self.name.clone(), self.build_tag.clone())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("instrument.name"));
        }
        if self.build_tag.trim().is_empty() {
            return Err(ValidationError::MissingRequired("instrument.build_tag"));
        }
        Ok(())
    }
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            build_tag: default_build_tag(),
        }
    }
}

fn default_name() -> String {
    "NASA-TLX (full)".to_string()
}

fn default_build_tag() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_defaults() {
        let config = InstrumentConfig::default();
        assert_eq!(config.name, "NASA-TLX (full)");
        assert!(config.build_tag.starts_with('v'));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let config = InstrumentConfig {
            name: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("instrument.name"))
        );
    }

    #[test]
    fn test_info_carries_both_fields() {
        let info = InstrumentConfig::default().info();
        assert_eq!(info.name, "NASA-TLX (full)");
    }
}
