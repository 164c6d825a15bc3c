//! Runtime configuration
//!
//! Field dimensions and the timestep policy come from configuration, not
//! constants: the display owns the resolution, and the stepping mode is an
//! explicit choice instead of a hidden property of the loop.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// How measured frame time reaches the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimestepMode {
    /// Accumulate wall time and run fixed 1/60 s substeps. Deterministic:
    /// the same seed and inputs replay the same session.
    #[default]
    Fixed,
    /// Pass the measured delta straight through. Gameplay follows the
    /// frame rate, the way old frame-coupled arcade loops did.
    Variable,
}

impl TimestepMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestepMode::Fixed => "fixed",
            TimestepMode::Variable => "variable",
        }
    }
}

/// Shell configuration, loaded from a JSON file when one exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Field width, px
    pub width: f32,
    /// Field height, px
    pub height: f32,
    pub timestep: TimestepMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            timestep: TimestepMode::Fixed,
        }
    }
}

impl Settings {
    /// Load from JSON; any problem falls back to defaults with a warning
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("settings loaded from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file {} unreadable: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Write the current settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_fixed_step_full_hd() {
        let settings = Settings::default();
        assert_eq!(settings.width, 1920.0);
        assert_eq!(settings.height, 1080.0);
        assert_eq!(settings.timestep, TimestepMode::Fixed);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            width: 1280.0,
            height: 720.0,
            timestep: TimestepMode::Variable,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: Settings = serde_json::from_str(r#"{"width": 800.0}"#).unwrap();
        assert_eq!(back.width, 800.0);
        assert_eq!(back.height, 1080.0);
        assert_eq!(back.timestep, TimestepMode::Fixed);
    }

    #[test]
    fn test_timestep_serializes_snake_case() {
        let json = serde_json::to_string(&TimestepMode::Variable).unwrap();
        assert_eq!(json, r#""variable""#);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/spacer-settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load_round_trips_through_the_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("spacer-settings-{}.json", std::process::id()));
        let settings = Settings {
            width: 1600.0,
            height: 900.0,
            timestep: TimestepMode::Variable,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = fs::remove_file(&path);
    }
}
