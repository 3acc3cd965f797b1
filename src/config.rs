//! Demo configuration
//!
//! An optional RON file next to the binary overrides movement,
//! generation, and map settings. No file means defaults; a file that
//! fails to parse or validate is a startup error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::world::GenConfig;

pub const CONFIG_PATH: &str = "dunwalk.ron";

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    Invalid(&'static str),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(what) => write!(f, "Invalid config: {}", what),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Walk speed in world units per second
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    /// Fade progress per second, each direction
    pub fade_speed: f32,
    /// Fixed generation seed; omit for a fresh dungeon every run
    pub seed: Option<u64>,
    /// Path to a `#`/`.` map file replacing the embedded arena
    pub map_file: Option<String>,
    pub dungeon: GenConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            mouse_sensitivity: 0.003,
            fade_speed: 2.0,
            seed: None,
            map_file: None,
            dungeon: GenConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load from `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            println!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: DemoConfig = ron::from_str(&contents)?;
        config.validate()?;
        println!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.dungeon.room_cols == 0 || self.dungeon.room_rows == 0 {
            return Err(ConfigError::Invalid("dungeon room-grid must be at least 1x1"));
        }
        if self.dungeon.room_size == 0 {
            return Err(ConfigError::Invalid("dungeon room_size must be at least 1"));
        }
        if self.move_speed <= 0.0 {
            return Err(ConfigError::Invalid("move_speed must be positive"));
        }
        if self.fade_speed <= 0.0 {
            return Err(ConfigError::Invalid("fade_speed must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = DemoConfig::load_or_default("does-not-exist.ron").unwrap();
        assert_eq!(config.move_speed, 6.0);
        assert_eq!(config.dungeon.room_size, 8);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: DemoConfig =
            ron::from_str("(move_speed: 9.5, seed: Some(42))").unwrap();
        assert_eq!(config.move_speed, 9.5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.mouse_sensitivity, 0.003);
        assert_eq!(config.dungeon.room_cols, 3);
    }

    #[test]
    fn test_validate_rejects_zero_room_grid() {
        let config: DemoConfig =
            ron::from_str("(dungeon: (room_cols: 0))").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(_))
        ));
    }
}
