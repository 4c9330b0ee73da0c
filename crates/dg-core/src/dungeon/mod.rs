//! Dungeon system
//!
//! Room placement, connectivity, corridors, classification, depth and the
//! tile queries downstream consumers use.

mod classify;
mod corridor;
mod depth;
mod generation;
mod graph;
mod layout;
mod placement;
mod query;
mod rect;
mod room;

pub use classify::{Classification, classify_rooms};
pub use corridor::{Corridor, connect_rooms, synthesize_corridors};
pub use depth::{compute_room_depth, enemy_level, loot_rarity};
pub use generation::{DungeonGenerator, generate_dungeon};
pub use graph::{ConnectivityGraph, Edge, GraphStats, build_graph, candidate_edges};
pub use layout::Dungeon;
pub use placement::generate_rooms;
pub use query::Point;
pub use rect::{GridPoint, GridRect, MapBounds, SizeRange};
pub use room::{Room, RoomId, RoomKind};
