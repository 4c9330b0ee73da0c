//! dg-core: procedural dungeon generation
//!
//! Builds a connected, classified layout of rooms and corridors from a seed
//! and answers tile and position queries about it. Everything is computed
//! eagerly in one call with no I/O apart from optional config loading.

pub mod config;
pub mod dungeon;
pub mod error;

mod consts;

pub use config::DungeonConfig;
pub use consts::*;
pub use dg_rng::DungeonRng;
pub use dungeon::{Dungeon, DungeonGenerator, Room, RoomId, RoomKind, generate_dungeon};
pub use error::{ConfigError, GenerationError};
