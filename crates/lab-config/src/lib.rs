//! # lab-config
//!
//! Layered configuration loading for labtrack using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LABTRACK_*` prefix, `__` as separator)
//! 2. The conventional `OPENAI_API_KEY` / `OPENAI_MODEL` variables
//! 3. Project-level `.labtrack/config.toml`
//! 4. User-level `~/.config/labtrack/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LABTRACK_OPENAI__API_KEY` -> `openai.api_key`,
//! `LABTRACK_GENERAL__REPORT_PATTERN` -> `general.report_pattern`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lab_config::LabConfig;
//!
//! let config = LabConfig::load_with_dotenv().expect("config");
//!
//! if config.openai.is_configured() {
//!     println!("Remote summaries via {}", config.openai.model);
//! }
//! ```

mod error;
mod general;
mod openai;
mod summarizer;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use openai::OpenAiConfig;
pub use summarizer::{DEFAULT_KEYWORDS, SummarizerConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unprefixed environment variables honoured for the `[openai]` section.
const OPENAI_RAW_ENV: [&str; 2] = ["OPENAI_API_KEY", "OPENAI_MODEL"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LabConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LabConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a loaded value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".labtrack/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Conventional OpenAI variables
        figment = figment.merge(Env::raw().only(&OPENAI_RAW_ENV).map(|key| {
            key.as_str()
                .to_ascii_lowercase()
                .replacen("openai_", "openai.", 1)
                .into()
        }));

        // Layer 4: Prefixed environment variables (highest priority)
        figment = figment.merge(Env::prefixed("LABTRACK_").split("__"));

        figment
    }

    /// Check every section for values that cannot work.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.openai.validate()?;
        if self.general.report_pattern.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.report_pattern".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("labtrack").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
