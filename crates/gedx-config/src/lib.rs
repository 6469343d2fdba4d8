//! # gedx-config
//!
//! Layered configuration loading for gedx using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GEDX_*` prefix, `__` as separator)
//! 2. Project-level `.gedx/config.toml`
//! 3. User-level `~/.config/gedx/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GEDX_XML__INDENT` -> `xml.indent`,
//! `GEDX_VALIDATION__STRICT_COORDINATES` -> `validation.strict_coordinates`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gedx_config::GedxConfig;
//!
//! let config = GedxConfig::load_with_dotenv().expect("config");
//! let options = config.xml.options();
//! let rules = config.validation.rules();
//! # let _ = (options, rules);
//! ```

mod error;
mod validation;
mod xml;

pub use error::ConfigError;
pub use validation::ValidationConfig;
pub use xml::{MAX_INDENT, XmlConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GEDX_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".gedx/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GedxConfig {
    #[serde(default)]
    pub xml: XmlConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl GedxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or a value has
    /// the wrong type, and `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory or one of its parents, if present.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::warn!(%error, "ignoring unreadable .env"),
        }
        Self::load()
    }

    /// Extract and check a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.xml.check()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            tracing::debug!(path = %global_path.display(), "merging user config");
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gedx").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GedxConfig::default();
        assert_eq!(config.xml.indent, 2);
        assert!(config.xml.emit_object_type);
        assert!(!config.validation.strict_coordinates);
        assert!(config.validation.require_place_name);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|jail| {
            isolate_user_config(jail);
            let config = GedxConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, GedxConfig::default());
            Ok(())
        });
    }

    #[test]
    fn user_config_resolves_inside_isolated_home() {
        figment::Jail::expect_with(|jail| {
            isolate_user_config(jail);
            let path =
                GedxConfig::global_config_path().ok_or_else(|| "no config dir".to_string())?;
            assert!(path.starts_with(jail.directory()));
            Ok(())
        });
    }

    fn isolate_user_config(jail: &mut figment::Jail) {
        let home = jail.directory().display().to_string();
        jail.set_env("HOME", &home);
        jail.set_env("XDG_CONFIG_HOME", format!("{home}/.config"));
    }
}
