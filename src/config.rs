//! Runtime settings: asset location, level count and movement tuning.

use macroquad::prelude::*;
use std::path::PathBuf;
use tracing::warn;

const ASSETS_DIR_ENV_VAR: &str = "INVERSION_ASSETS_DIR";
const LEVEL_COUNT_ENV_VAR: &str = "INVERSION_LEVEL_COUNT";

/// Window and world width in pixels.
pub const SCREEN_WIDTH: f32 = 1920.0;
/// Window and world height in pixels.
pub const SCREEN_HEIGHT: f32 = 1080.0;

/// Tuning for the player's movement. Velocities are in px/s, accelerations
/// in px/s².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Horizontal speed while running.
    pub move_speed: f32,
    /// Downward acceleration under normal gravity.
    pub gravity: f32,
    /// Vertical velocity set on take-off under normal gravity (negative is up).
    pub jump_velocity: f32,
    /// Horizontal speed multiplier applied when jumping out of a run.
    pub jump_boost: f32,
    /// Extra downward pull while rising.
    pub jump_up_acceleration: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            move_speed: 200.0,
            gravity: 300.0,
            jump_velocity: -450.0,
            jump_boost: 1.125,
            jump_up_acceleration: 400.0,
        }
    }
}

/// Where the player spawns and how large its hitbox is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnConfig {
    /// Top-left of the hitbox at spawn.
    pub position: Vec2,
    /// Hitbox width and height.
    pub size: Vec2,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            position: vec2(200.0, 820.0),
            size: vec2(40.0, 140.0),
        }
    }
}

/// Everything the binary needs before opening the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Window title.
    pub title: String,
    /// Root of the sprites, fonts, sounds and level files.
    pub assets_dir: PathBuf,
    /// Number of `level_N.tmj` files to load.
    pub level_count: usize,
    /// Player movement tuning.
    pub physics: PhysicsConfig,
    /// Player spawn point and size.
    pub spawn: SpawnConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Inversion".to_string(),
            assets_dir: PathBuf::from("./Assets"),
            level_count: 16,
            physics: PhysicsConfig::default(),
            spawn: SpawnConfig::default(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `INVERSION_ASSETS_DIR` and `INVERSION_LEVEL_COUNT`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(ASSETS_DIR_ENV_VAR).ok(),
            std::env::var(LEVEL_COUNT_ENV_VAR).ok(),
        )
    }

    fn from_vars(assets_dir: Option<String>, level_count: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = assets_dir.filter(|d| !d.trim().is_empty()) {
            config.assets_dir = PathBuf::from(dir.trim());
        }
        if let Some(raw) = level_count {
            match raw.trim().parse::<usize>() {
                Ok(count) if count > 0 => config.level_count = count,
                _ => warn!(
                    value = %raw,
                    default = config.level_count,
                    "invalid {}; using default",
                    LEVEL_COUNT_ENV_VAR
                ),
            }
        }
        config
    }

    /// Directory holding the level files.
    pub fn level_dir(&self) -> PathBuf {
        self.assets_dir.join("JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_game() {
        let config = Config::default();
        assert_eq!(config.level_count, 16);
        assert_eq!(config.level_dir(), PathBuf::from("./Assets/JSON"));
        assert_eq!(config.physics.jump_velocity, -450.0);
        assert_eq!(config.spawn.position, vec2(200.0, 820.0));
    }

    #[test]
    fn env_values_override_defaults() {
        let config = Config::from_vars(Some("/opt/inversion".into()), Some(" 4 ".into()));
        assert_eq!(config.assets_dir, PathBuf::from("/opt/inversion"));
        assert_eq!(config.level_count, 4);
    }

    #[test]
    fn bad_level_count_falls_back() {
        for raw in ["zero", "0", "-3"] {
            let config = Config::from_vars(None, Some(raw.into()));
            assert_eq!(config.level_count, 16, "raw = {raw}");
        }
    }

    #[test]
    fn blank_assets_dir_is_ignored() {
        let config = Config::from_vars(Some("  ".into()), None);
        assert_eq!(config.assets_dir, PathBuf::from("./Assets"));
    }
}
