//! Configuration management for alasti
//!
//! Settings are loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ALASTI_` prefix, `__` for nesting)
//! 2. `./alasti.toml`
//! 3. `~/.config/alasti/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [banner]
//! enabled = true
//! title = "AlastiSolutions CLI Tool!"
//! pause_ms = 3000
//!
//! [project]
//! default_name = "my-project"
//!
//! [dispatch]
//! invalid_selection_delay_ms = 3000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;
use crate::project::DEFAULT_PROJECT_NAME;

/// Banner and welcome text settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerSettings {
    /// Show the banner and welcome text
    pub enabled: bool,

    /// Title drawn in the banner
    pub title: String,

    /// Pause after the banner, in milliseconds
    pub pause_ms: u64,
}

impl Default for BannerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "AlastiSolutions CLI Tool!".to_string(),
            pause_ms: 3000,
        }
    }
}

impl BannerSettings {
    /// Pause after the banner
    #[must_use]
    pub const fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// Project defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Name used when the name prompt is left blank
    pub default_name: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

/// Dispatch behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    /// Pause before rejecting an unknown project type, in milliseconds
    pub invalid_selection_delay_ms: u64,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            invalid_selection_delay_ms: 3000,
        }
    }
}

impl DispatchSettings {
    /// Pause before rejecting an unknown project type
    #[must_use]
    pub const fn invalid_selection_delay(&self) -> Duration {
        Duration::from_millis(self.invalid_selection_delay_ms)
    }
}

/// Complete alasti configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Banner settings
    pub banner: BannerSettings,

    /// Project defaults
    pub project: ProjectSettings,

    /// Dispatch behavior
    pub dispatch: DispatchSettings,
}

impl Settings {
    /// Load settings from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ScaffoldError> {
        let mut figment = Self::defaults()?;

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("alasti.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let settings = figment.merge(Self::env()).extract()?;
        Ok(settings)
    }

    /// Load settings from a specific file
    ///
    /// Environment variables still override values from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or a
    /// value has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ScaffoldError> {
        if !path.is_file() {
            return Err(figment::Error::from(format!(
                "configuration file not found: {}",
                path.display()
            ))
            .into());
        }

        let settings = Self::defaults()?
            .merge(Toml::file(path))
            .merge(Self::env())
            .extract()?;
        Ok(settings)
    }

    /// User configuration path, `~/.config/alasti/config.toml` on Linux
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("alasti.toml"),
            |config_dir| config_dir.join("alasti").join("config.toml"),
        )
    }

    fn defaults() -> Result<Figment, ScaffoldError> {
        let defaults = toml::to_string(&Self::default()).map_err(|err| {
            ScaffoldError::from(figment::Error::from(format!(
                "failed to serialize default settings: {err}"
            )))
        })?;
        Ok(Figment::new().merge(Toml::string(&defaults)))
    }

    fn env() -> Env {
        Env::prefixed("ALASTI_").split("__").lowercase(true)
    }
}
