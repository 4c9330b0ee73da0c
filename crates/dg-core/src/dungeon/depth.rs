//! Room depth and the scaling derived from it

use tracing::warn;

use crate::consts::MAX_LOOT_RARITY;

use super::graph::ConnectivityGraph;
use super::room::{Room, RoomId};

/// Write each room's hop distance from `spawn` into its `depth`.
///
/// Rooms that cannot be reached keep depth 0. Returns how many rooms were
/// reached, spawn included.
pub fn compute_room_depth(rooms: &mut [Room], graph: &ConnectivityGraph, spawn: RoomId) -> usize {
    let dist = graph.bfs_distances(spawn);
    let mut unreachable = 0;

    for room in rooms.iter_mut() {
        match dist.get(&room.id) {
            Some(&d) => room.depth = d,
            None => {
                room.depth = 0;
                unreachable += 1;
            }
        }
    }

    if unreachable > 0 {
        warn!(unreachable, spawn, "rooms unreachable from spawn keep depth 0");
    }

    rooms.len() - unreachable
}

/// Enemy level for a room at `depth`: `1 + floor(depth * scaling)`
pub fn enemy_level(depth: u32, difficulty_scaling: f64) -> u32 {
    1 + (f64::from(depth) * difficulty_scaling).floor() as u32
}

/// Loot rarity tier for a room at `depth`, capped at 5
pub fn loot_rarity(depth: u32) -> u32 {
    (1 + depth / 2).min(MAX_LOOT_RARITY)
}
