//! Generation configuration
//!
//! Every field is optional in a config file; missing fields take the
//! defaults from [`crate::consts`].

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::dungeon::{MapBounds, SizeRange};
use crate::error::ConfigError;

/// User-configurable generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    // Room placement
    pub room_count: u32,
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub map_width: i32,
    pub map_height: i32,
    pub room_spacing: i32,

    // Connectivity
    pub corridor_width: i32,
    pub loop_percentage: u32,

    // Classification
    pub elite_percentage: u32,
    pub secret_room_chance: u32,

    /// Explicit seed; `None` means "seed from the clock" at the entry point
    pub seed: Option<u64>,

    // Consumers
    pub difficulty_scaling: f64,
    pub tile_size: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            room_count: DEFAULT_ROOM_COUNT,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            room_spacing: DEFAULT_ROOM_SPACING,

            corridor_width: DEFAULT_CORRIDOR_WIDTH,
            loop_percentage: DEFAULT_LOOP_PERCENTAGE,

            elite_percentage: DEFAULT_ELITE_PERCENTAGE,
            secret_room_chance: DEFAULT_SECRET_ROOM_CHANCE,

            seed: None,

            difficulty_scaling: DEFAULT_DIFFICULTY_SCALING,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl DungeonConfig {
    /// Default configuration with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load a JSON config file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse a JSON config and validate it
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the values can drive a generation run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_count == 0 {
            return Err(ConfigError::NoRooms);
        }
        if self.min_room_size < MIN_ROOM_SIZE || self.min_room_size > self.max_room_size {
            return Err(ConfigError::InvalidRoomSize {
                min: self.min_room_size,
                max: self.max_room_size,
                floor: MIN_ROOM_SIZE,
            });
        }
        if self.map_width < 1 || self.map_height < 1 {
            return Err(ConfigError::EmptyMap {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.room_spacing < 0 {
            return Err(ConfigError::NegativeSpacing(self.room_spacing));
        }
        if self.corridor_width < 1 {
            return Err(ConfigError::InvalidCorridorWidth(self.corridor_width));
        }
        for (name, value) in [
            ("loop_percentage", self.loop_percentage),
            ("elite_percentage", self.elite_percentage),
            ("secret_room_chance", self.secret_room_chance),
        ] {
            if value > 100 {
                return Err(ConfigError::InvalidPercentage { name, value });
            }
        }
        if !self.difficulty_scaling.is_finite() || self.difficulty_scaling < 0.0 {
            return Err(ConfigError::InvalidDifficultyScaling(self.difficulty_scaling));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::InvalidTileSize);
        }
        Ok(())
    }

    /// The configured seed, or one taken from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// Map area rooms must fit in
    pub fn bounds(&self) -> MapBounds {
        MapBounds::new(self.map_width, self.map_height)
    }

    /// Allowed room side lengths
    pub fn size_range(&self) -> SizeRange {
        SizeRange::new(self.min_room_size, self.max_room_size)
    }

    /// Maximum placement attempts for the configured room count
    pub fn placement_attempts(&self) -> u32 {
        self.room_count.saturating_mul(PLACEMENT_ATTEMPTS_PER_ROOM)
    }
}

/// Milliseconds since the epoch; 0 if the clock is before it.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
