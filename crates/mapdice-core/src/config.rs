//! Picker configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[serde(default)]` uses Default::default() for missing fields, so a
//! config file only needs the keys it wants to change:
//!
//! ```toml
//! [picker]
//! reveal_click = "reroll"
//! seed = 1234
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::picker::{AnimationSchedule, RevealClick};
use crate::pool::MapPool;
use crate::CoreResult;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window settings
    pub window: WindowConfig,

    /// Where images are loaded from
    pub assets: AssetsConfig,

    /// The maps on the grid
    pub maps: MapsConfig,

    /// Animation settings
    pub picker: PickerConfig,
}

impl Config {
    /// Loads config from the default location.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("mapdice").join("config.toml"))
    }

    /// Builds the map pool described by `maps.rows`.
    pub fn pool(&self) -> CoreResult<MapPool> {
        MapPool::from_rows(self.maps.rows.iter().map(|row| row.iter().cloned()))
    }
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Fill the available screen area on startup
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Valorant Map Picker".to_string(),
            maximized: true,
        }
    }
}

/// Asset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding `<Name>.png`, `<Name>-black.png` and `Dice.png`
    pub dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("images"),
        }
    }
}

/// Map roster, one list per grid row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapsConfig {
    pub rows: Vec<Vec<String>>,
}

impl Default for MapsConfig {
    fn default() -> Self {
        let row = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        Self {
            rows: vec![
                row(&["Abyss", "Ascent", "Bind", "Breeze", "Corrode", "Fracture"]),
                row(&["Haven", "Icebox", "Lotus", "Pearl", "Split", "Sunset"]),
            ],
        }
    }
}

/// Animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// First timer interval (ms)
    pub min_interval_ms: u32,

    /// Interval increase per tick (ms)
    pub step_ms: u32,

    /// Interval at which the result is revealed (ms)
    pub max_interval_ms: u32,

    /// What a press does while a result is shown
    pub reveal_click: RevealClick,

    /// Fixed RNG seed for reproducible picks
    pub seed: Option<u64>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        let schedule = AnimationSchedule::default();
        Self {
            min_interval_ms: schedule.min_ms(),
            step_ms: schedule.step_ms(),
            max_interval_ms: schedule.max_ms(),
            reveal_click: RevealClick::default(),
            seed: None,
        }
    }
}

impl PickerConfig {
    /// Validated animation schedule.
    pub fn schedule(&self) -> CoreResult<AnimationSchedule> {
        AnimationSchedule::new(self.min_interval_ms, self.step_ms, self.max_interval_ms)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
