//! Generation defaults and fixed sizes

/// Default number of rooms to try to place
pub const DEFAULT_ROOM_COUNT: u32 = 12;

/// Default smallest room side, in tiles
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 6;

/// Default largest room side, in tiles
pub const DEFAULT_MAX_ROOM_SIZE: i32 = 14;

/// Default map width, in tiles
pub const DEFAULT_MAP_WIDTH: i32 = 80;

/// Default map height, in tiles
pub const DEFAULT_MAP_HEIGHT: i32 = 60;

/// Default empty margin kept around every room
pub const DEFAULT_ROOM_SPACING: i32 = 2;

/// Default corridor band width, in tiles
pub const DEFAULT_CORRIDOR_WIDTH: i32 = 3;

/// Default share of non-tree edges turned back into corridors
pub const DEFAULT_LOOP_PERCENTAGE: u32 = 15;

/// Default share of rooms promoted to elite
pub const DEFAULT_ELITE_PERCENTAGE: u32 = 10;

/// Default chance (out of 100) of one secret room
pub const DEFAULT_SECRET_ROOM_CHANCE: u32 = 5;

/// Default enemy level growth per depth step
pub const DEFAULT_DIFFICULTY_SCALING: f64 = 1.0;

/// Default pixels per tile for position queries
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Placement attempts allowed per requested room
pub const PLACEMENT_ATTEMPTS_PER_ROOM: u32 = 10;

/// Side of a secret room, in tiles
pub const SECRET_ROOM_SIZE: i32 = 6;

/// Margin used when sampling several positions at once
pub const POSITION_MARGIN: i32 = 1;

/// Loot rarity cap
pub const MAX_LOOT_RARITY: u32 = 5;

/// Smallest room side that still has an open interior
pub const MIN_ROOM_SIZE: i32 = 3;
