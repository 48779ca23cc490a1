//! Runner settings
//!
//! Loaded from an optional JSON file; any key left out keeps its default.
//! Nothing here changes difficulty, only the playfield and the run itself.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, PLAYER_RADIUS};
use crate::sim::GameState;

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Settings for a headless run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in pixels
    pub arena_width: f32,
    /// Playfield height in pixels
    pub arena_height: f32,
    /// Run seed; picked from the clock when absent
    pub seed: Option<u64>,
    /// Frames to simulate
    pub frames: u64,
    /// Frames between debug summaries (0 disables them)
    pub summary_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            seed: None,
            // Five minutes at 60 Hz
            frames: 5 * 60 * 60,
            summary_every: 60,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that the arena can hold the player
    pub fn validate(&self) -> Result<(), SettingsError> {
        let min_side = PLAYER_RADIUS * 2.0;
        for (field, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{} is not a finite number", value),
                });
            }
            if value < min_side {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{} is smaller than the player ({} px)", value, min_side),
                });
            }
        }
        Ok(())
    }

    /// Seed for this run, falling back to the clock
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }

    /// Fresh game on these settings, sitting on the start screen
    pub fn new_game(&self, seed: u64) -> GameState {
        GameState::with_arena(seed, self.arena_width, self.arena_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_json(r#"{"arena_width": 1024, "seed": 9}"#).unwrap();
        assert_eq!(settings.arena_width, 1024.0);
        assert_eq!(settings.arena_height, ARENA_HEIGHT);
        assert_eq!(settings.resolved_seed(), 9);
    }

    #[test]
    fn test_rejects_tiny_arena() {
        let err = Settings::from_json(r#"{"arena_height": 10}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "arena_height", .. }));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Settings::from_json("{ arena_width: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here/settings.json"));
    }

    #[test]
    fn test_new_game_uses_arena() {
        let settings = Settings {
            arena_width: 1000.0,
            arena_height: 500.0,
            ..Default::default()
        };
        let state = settings.new_game(1);
        assert_eq!(state.arena, Vec2::new(1000.0, 500.0));
        assert_eq!(state.player.pos, Vec2::new(500.0, 250.0));
    }
}
