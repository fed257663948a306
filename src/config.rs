//! Demo configuration.
//!
//! Settings are read once at startup into a [`DemoConfig`] and passed by
//! reference to whatever needs them. Missing fields fall back to defaults, so
//! a config file only has to name what it changes:
//!
//! ```json
//! { "animation_duration_ms": 900, "retrigger": "replace" }
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::timers::RetriggerPolicy;

const CONFIG_DIR_NAME: &str = "rangekit";
const CONFIG_FILE_NAME: &str = "config.json";

/// Ids of the demo elements on the marker surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub animated_box: String,
    pub card: String,
    pub loader: String,
    pub modal: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            animated_box: "box".to_string(),
            card: "card".to_string(),
            loader: "loader".to_string(),
            modal: "modal".to_string(),
        }
    }
}

impl ElementIds {
    /// All ids, for registering them on a surface.
    pub fn all(&self) -> [&str; 4] {
        [
            self.animated_box.as_str(),
            self.card.as_str(),
            self.loader.as_str(),
            self.modal.as_str(),
        ]
    }
}

/// Marker class names used by the demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub animate: String,
    pub flipped: String,
    pub loading: String,
    pub open: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            animate: "animate".to_string(),
            flipped: "flipped".to_string(),
            loading: "active".to_string(),
            open: "open".to_string(),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// How long the animation marker stays on before its timed removal
    pub animation_duration_ms: u64,
    /// Target interval prefilled in the scale form
    pub default_out_min: f64,
    pub default_out_max: f64,
    /// What re-triggering the animation does to a pending removal
    pub retrigger: RetriggerPolicy,
    pub elements: ElementIds,
    pub classes: ClassNames,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: 600,
            default_out_min: 0.0,
            default_out_max: 100.0,
            retrigger: RetriggerPolicy::Stack,
            elements: ElementIds::default(),
            classes: ClassNames::default(),
        }
    }
}

impl DemoConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: DemoConfig = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `path` if given, otherwise from the platform config
    /// directory if a file exists there, otherwise returns defaults.
    ///
    /// An explicitly given path must load; a missing default file is not an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let config = Self::load(path)?;
            tracing::info!(path = %path.display(), "loaded config");
            return Ok(config);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                let config = Self::load(&path)?;
                tracing::info!(path = %path.display(), "loaded config");
                Ok(config)
            }
            _ => {
                tracing::info!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns `<config dir>/rangekit/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Checks values that would make the demo misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.animation_duration_ms == 0 {
            bail!("animation_duration_ms must be greater than zero");
        }
        if !self.default_out_min.is_finite() || !self.default_out_max.is_finite() {
            bail!(
                "default output range must be finite, got {}..{}",
                self.default_out_min,
                self.default_out_max
            );
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}
