//! Room classification
//!
//! Assigns spawn, boss, treasure, shop, elite and secret roles. The order of
//! the steps and of the random draws is fixed, so a seed always yields the
//! same roles.

use dg_rng::DungeonRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DungeonConfig;
use crate::consts::SECRET_ROOM_SIZE;

use super::corridor::{Corridor, connect_rooms};
use super::graph::ConnectivityGraph;
use super::room::{Room, RoomId, RoomKind};

/// Treasure rooms sit strictly between these fractions of the boss depth
const TREASURE_DEPTH_MIN: f64 = 0.3;
const TREASURE_DEPTH_MAX: f64 = 0.7;

/// Distinguished rooms picked by [`classify_rooms`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub spawn: RoomId,
    pub boss: RoomId,
    pub treasure: RoomId,
    /// Equal to `spawn` when no other room was free
    pub shop: RoomId,
    pub elite: Vec<RoomId>,
    pub secret: Vec<RoomId>,
}

/// Classify `rooms` in place.
///
/// May append one secret room (plus its graph edge and corridor legs). The
/// boss is the deepest of the placed rooms; a secret room hung off the boss
/// room ends up one step deeper than it. Returns `None` for an empty room
/// list.
pub fn classify_rooms(
    rng: &mut DungeonRng,
    rooms: &mut Vec<Room>,
    graph: &mut ConnectivityGraph,
    corridors: &mut Vec<Corridor>,
    config: &DungeonConfig,
) -> Option<Classification> {
    let spawn = rooms.first()?.id;
    let total_rooms = rooms.len();
    let dist = graph.bfs_distances(spawn);

    // Farthest reachable room; first one wins ties
    let mut boss = spawn;
    let mut boss_depth = 0;
    for room in rooms.iter() {
        if let Some(&d) = dist.get(&room.id)
            && d > boss_depth
        {
            boss = room.id;
            boss_depth = d;
        }
    }

    let lo = f64::from(boss_depth) * TREASURE_DEPTH_MIN;
    let hi = f64::from(boss_depth) * TREASURE_DEPTH_MAX;
    let mid_depth: Vec<RoomId> = rooms
        .iter()
        .filter(|r| {
            dist.get(&r.id)
                .is_some_and(|&d| f64::from(d) > lo && f64::from(d) < hi)
        })
        .map(|r| r.id)
        .collect();
    let treasure = match rng.choose(&mid_depth) {
        Some(&id) => id,
        None => fallback_treasure(rooms, boss),
    };

    let free: Vec<RoomId> = rooms
        .iter()
        .map(|r| r.id)
        .filter(|&id| id != spawn && id != boss && id != treasure)
        .collect();
    let shop = match rng.choose(&free) {
        Some(&id) => id,
        None => {
            debug!(spawn, "no free room for the shop; sharing the spawn room");
            spawn
        }
    };

    // Lowest priority first: spawn wins when ids coincide
    for (id, kind) in [
        (shop, RoomKind::Shop),
        (treasure, RoomKind::Treasure),
        (boss, RoomKind::Boss),
        (spawn, RoomKind::Spawn),
    ] {
        rooms[id as usize].kind = kind;
    }

    let unclassified: Vec<RoomId> = rooms
        .iter()
        .filter(|r| r.kind == RoomKind::Combat)
        .map(|r| r.id)
        .collect();
    let elite_count = total_rooms * config.elite_percentage as usize / 100;
    let elite: Vec<RoomId> = rng
        .shuffle(&unclassified)
        .into_iter()
        .take(elite_count)
        .collect();
    for &id in &elite {
        rooms[id as usize].kind = RoomKind::Elite;
    }

    let secret = place_secret_room(rng, rooms, graph, corridors, config)
        .into_iter()
        .collect();

    Some(Classification {
        spawn,
        boss,
        treasure,
        shop,
        elite,
        secret,
    })
}

/// Second placed room, moving past the boss so the three key rooms differ
/// whenever there are at least three rooms; the only room otherwise.
fn fallback_treasure(rooms: &[Room], boss: RoomId) -> RoomId {
    rooms
        .iter()
        .skip(1)
        .find(|r| r.id != boss)
        .or_else(|| rooms.get(1))
        .or_else(|| rooms.first())
        .map(|r| r.id)
        .unwrap_or_default()
}

/// Roll for a secret room on a corridor's midpoint.
///
/// Corridors are tried in shuffled order and the first midpoint where the
/// room stays on the map without crowding another room hosts it. The room
/// is linked to one of that corridor's two rooms by a graph edge and
/// matching corridor legs. Nothing is placed when no corridor has space.
fn place_secret_room(
    rng: &mut DungeonRng,
    rooms: &mut Vec<Room>,
    graph: &mut ConnectivityGraph,
    corridors: &mut Vec<Corridor>,
    config: &DungeonConfig,
) -> Option<RoomId> {
    if corridors.is_empty() || !rng.percent(config.secret_room_chance) {
        return None;
    }

    let id = rooms.len() as RoomId;
    let half = SECRET_ROOM_SIZE / 2;
    let bounds = config.bounds();
    let fits = |candidate: &Room| {
        bounds.contains_rect(&candidate.rect())
            && !rooms.iter().any(|r| r.overlaps(candidate, config.room_spacing))
    };

    let hosts = rng.shuffle(corridors.as_slice());
    let placement = hosts.into_iter().find_map(|host| {
        let mid = host.midpoint();
        let candidate =
            Room::new(id, mid.x - half, mid.y - half, SECRET_ROOM_SIZE, SECRET_ROOM_SIZE);
        fits(&candidate).then_some((host, candidate))
    });
    let Some((host, mut secret)) = placement else {
        debug!(corridors = corridors.len(), "no corridor has space for a secret room; skipped");
        return None;
    };

    let attach = if rng.coin_flip() { host.from } else { host.to };
    secret.kind = RoomKind::Secret;
    let legs = connect_rooms(rng, &secret, &rooms[attach as usize]);

    rooms.push(secret);
    graph.add_node(id);
    graph.add_edge(id, attach);
    corridors.extend(legs);

    debug!(id, attach, "secret room grafted");
    Some(id)
}
