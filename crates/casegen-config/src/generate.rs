//! Test-file generation settings.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerateConfig {
    /// Replace an existing test file.
    #[serde(default = "default_true")]
    pub overwrite: bool,

    /// Fill test tables from the companion test-case file when one exists.
    #[serde(default = "default_true")]
    pub with_cases: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            overwrite: true,
            with_cases: true,
        }
    }
}
