//! Game tunables.
//!
//! Every field defaults to the classic values in `constants`, so an absent or
//! partial `config.json` still yields a playable game.

use super::constants::*;
use super::error::FlappyError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Downward acceleration applied to the bird every frame.
    pub gravity: f64,
    /// Velocity the bird is set to on a flap (negative = upward).
    pub jump_velocity: f64,
    /// Units every obstacle moves left per frame.
    pub scroll_speed: f64,
    /// Vertical size of the opening in each obstacle.
    pub gap_height: f64,
    /// Wall-clock time between obstacle spawns.
    pub spawn_interval_ms: u64,
    /// Target frame cadence of the host loop.
    pub frame_interval_ms: u64,
    /// Score that triggers the coin burst.
    pub milestone_score: u32,
    /// Coins in the burst.
    pub particle_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            scroll_speed: SCROLL_SPEED,
            gap_height: GAP_HEIGHT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            milestone_score: MILESTONE_SCORE,
            particle_count: PARTICLE_COUNT,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON text. Call `validate` before use.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, FlappyError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json).map_err(|source| FlappyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the game unplayable or break the
    /// spawn range `[0, PLAYFIELD_HEIGHT - gap_height)`.
    pub fn validate(&self) -> Result<(), FlappyError> {
        if !(self.gravity > 0.0) {
            return Err(FlappyError::Config(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if !(self.jump_velocity < 0.0) {
            return Err(FlappyError::Config(format!(
                "jump_velocity must be negative (upward), got {}",
                self.jump_velocity
            )));
        }
        if !(self.scroll_speed > 0.0) {
            return Err(FlappyError::Config(format!(
                "scroll_speed must be positive, got {}",
                self.scroll_speed
            )));
        }
        if !(self.gap_height > 0.0 && self.gap_height < PLAYFIELD_HEIGHT) {
            return Err(FlappyError::Config(format!(
                "gap_height must be within (0, {}), got {}",
                PLAYFIELD_HEIGHT, self.gap_height
            )));
        }
        if self.spawn_interval_ms == 0 || self.frame_interval_ms == 0 {
            return Err(FlappyError::Config(
                "spawn_interval_ms and frame_interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_values() {
        let config = GameConfig::default();
        assert!((config.gravity - 0.5).abs() < f64::EPSILON);
        assert!((config.jump_velocity - (-8.0)).abs() < f64::EPSILON);
        assert!((config.gap_height - 150.0).abs() < f64::EPSILON);
        assert_eq!(config.spawn_interval_ms, 2000);
        assert_eq!(config.milestone_score, 10);
        assert_eq!(config.particle_count, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "gravity": 0.6 }"#).unwrap();
        assert!((config.gravity - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_validate_rejects_upward_gravity() {
        let config = GameConfig {
            gravity: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FlappyError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_gap_taller_than_playfield() {
        let config = GameConfig {
            gap_height: PLAYFIELD_HEIGHT,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_downward_jump() {
        let config = GameConfig {
            jump_velocity: 4.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_reports_parse_error_with_path() {
        let dir = std::env::temp_dir().join("flappy_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = GameConfig::load(&path).unwrap_err();
        assert!(matches!(err, FlappyError::ConfigParse { .. }));

        std::fs::remove_file(path).ok();
    }
}
