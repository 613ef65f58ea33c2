//! Chart settings loaded from TOML.
//!
//! Every field has a default, so an empty document yields the reference
//! configuration.

use crate::aspects::{ApplyingMode, AspectTable};
use crate::layout::{LayoutSettings, WheelGeometry};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

lazy_static::lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid regex");
}

/// Errors raised while building or loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("aspect table columns differ in length: {names} names, {angles} angles, {orbs} orbs")]
    TableLengthMismatch {
        names: usize,
        angles: usize,
        orbs: usize,
    },
    #[error("aspect table is empty")]
    EmptyAspectTable,
    #[error("invalid orb {orb} for aspect {aspect}")]
    InvalidOrb { aspect: String, orb: f64 },
    #[error("invalid angle {angle} for aspect {aspect}, expected 0-180")]
    InvalidAngle { aspect: String, angle: f64 },
    #[error("invalid colour {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error("failed to parse settings: {0}")]
    Parse(String),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Check a `#RRGGBB` colour string.
pub fn validate_color(color: &str) -> Result<(), ConfigError> {
    if HEX_COLOR.is_match(color) {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor(color.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Rule used to mark aspects applying or separating
    pub applying: ApplyingMode,
    /// House system label passed to the ephemeris provider
    pub house_system: String,
    pub layout: LayoutSettings,
    pub wheel: WheelGeometry,
    pub aspects: AspectTable,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            applying: ApplyingMode::Positional,
            house_system: "placidus".to_string(),
            layout: LayoutSettings::default(),
            wheel: WheelGeometry::default(),
            aspects: AspectTable::reference(),
        }
    }
}

impl ChartSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: ChartSettings =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&text)?;
        log::info!("loaded chart settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.house_system.trim().is_empty() {
            return Err(ConfigError::Parse("house_system must not be empty".to_string()));
        }
        self.layout.validate()?;
        self.wheel.validate()
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
