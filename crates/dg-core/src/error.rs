//! Error types for configuration and generation

use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Room count must be at least 1")]
    NoRooms,

    #[error("Invalid room size range {min}..={max} (minimum side is {floor})")]
    InvalidRoomSize { min: i32, max: i32, floor: i32 },

    #[error("Map size {width}x{height} must be positive")]
    EmptyMap { width: i32, height: i32 },

    #[error("Room spacing must not be negative, got {0}")]
    NegativeSpacing(i32),

    #[error("Corridor width must be at least 1, got {0}")]
    InvalidCorridorWidth(i32),

    #[error("Percentage '{name}' must be at most 100, got {value}")]
    InvalidPercentage { name: &'static str, value: u32 },

    #[error("Difficulty scaling must be finite and non-negative, got {0}")]
    InvalidDifficultyScaling(f64),

    #[error("Tile size must be at least 1")]
    InvalidTileSize,
}

/// Fatal generation failures
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No rooms could be placed ({attempts} attempts for {target} rooms)")]
    NoRoomsPlaced { target: u32, attempts: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
