//! Extraction settings: the declaration marker and the description key.

use casegen_core::{DEFAULT_DESCRIPTION_KEY, DEFAULT_MARKER, ExtractOptions};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_description_key() -> String {
    DEFAULT_DESCRIPTION_KEY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Substring a doc comment must contain for its declaration to be extracted.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Field of a test-case literal holding its description.
    #[serde(default = "default_description_key")]
    pub description_key: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            description_key: default_description_key(),
        }
    }
}

impl ExtractConfig {
    /// Options for the extractors.
    #[must_use]
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            marker: self.marker.clone(),
            description_key: self.description_key.clone(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("extract.marker", &self.marker),
            ("extract.description_key", &self.description_key),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
