//! Game settings and preferences
//!
//! Stored as JSON. Missing fields take their defaults; an unreadable file
//! falls back to defaults with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clamp_level;
use crate::consts::*;
use crate::sim::Field;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    /// Field width in pixels (at least 800)
    pub field_width: f32,
    /// Field height in pixels (at least 450)
    pub field_height: f32,

    // === Simulation ===
    /// Largest frame delta fed to the simulation (seconds)
    pub max_frame_dt: f32,
    /// RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Level a new game starts on
    pub starting_level: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,

            max_frame_dt: MAX_FRAME_DT,
            seed: None,
            starting_level: FIRST_LEVEL,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Invalid settings in {}: {err}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::info!("No settings at {} ({err}); using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Play field described by these settings
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Starting level clamped into range
    pub fn starting_level(&self) -> u32 {
        clamp_level(self.starting_level)
    }

    /// Frame delta cap, never above the engine maximum
    pub fn frame_dt_cap(&self) -> f32 {
        if self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0 {
            self.max_frame_dt.min(MAX_FRAME_DT)
        } else {
            MAX_FRAME_DT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "muted": true }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.muted);
        assert_eq!(settings.field_width, DEFAULT_FIELD_WIDTH);
        assert_eq!(settings.starting_level, FIRST_LEVEL);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_clamps_out_of_range_values() {
        let settings = Settings {
            field_width: 100.0,
            field_height: 100.0,
            starting_level: 42,
            max_frame_dt: 3.0,
            ..Settings::default()
        };
        assert_eq!(settings.field(), Field::new(MIN_FIELD_WIDTH, MIN_FIELD_HEIGHT));
        assert_eq!(settings.starting_level(), MAX_LEVEL);
        assert_eq!(settings.frame_dt_cap(), MAX_FRAME_DT);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("detective-gulls-no-such-settings.json");
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("detective-gulls-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(99),
            sfx_volume: 0.5,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }
}
