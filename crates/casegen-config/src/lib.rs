//! # casegen-config
//!
//! Layered configuration loading for casegen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CASEGEN_*` prefix, `__` as separator)
//! 2. Project-level `.casegen/config.toml`
//! 3. User-level `~/.config/casegen/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `CASEGEN_EXTRACT__MARKER` -> `extract.marker`,
//! `CASEGEN_GENERATE__OVERWRITE` -> `generate.overwrite`, etc.
//!
//! ```no_run
//! use casegen_config::CaseGenConfig;
//!
//! let config = CaseGenConfig::load_with_dotenv().expect("config");
//! println!("marker: {}", config.extract.marker);
//! ```

mod error;
mod extract;
mod generate;

pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use generate::GenerateConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read by [`CaseGenConfig::figment`].
pub const ENV_PREFIX: &str = "CASEGEN_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CaseGenConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

impl CaseGenConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` for malformed sources and
    /// `ConfigError::InvalidValue` for values that fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".casegen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the extractors cannot work with.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extract.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("casegen").join("config.toml"))
    }
}
