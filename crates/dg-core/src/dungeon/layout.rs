//! The generated dungeon
//!
//! Read-only once built: consumers get rooms, corridors and the graph by
//! shared reference only.

use serde::{Deserialize, Serialize};

use crate::config::DungeonConfig;

use super::classify::Classification;
use super::corridor::{Corridor, room_by_id};
use super::depth;
use super::graph::{ConnectivityGraph, GraphStats};
use super::rect::MapBounds;
use super::room::{Room, RoomId, RoomKind};

/// A fully generated, classified dungeon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    seed: u64,
    config: DungeonConfig,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    graph: ConnectivityGraph,
    classification: Classification,
    stats: GraphStats,
}

impl Dungeon {
    pub(crate) fn new(
        seed: u64,
        config: DungeonConfig,
        rooms: Vec<Room>,
        corridors: Vec<Corridor>,
        graph: ConnectivityGraph,
        classification: Classification,
        stats: GraphStats,
    ) -> Self {
        Self {
            seed,
            config,
            rooms,
            corridors,
            graph,
            classification,
            stats,
        }
    }

    /// Seed the dungeon was generated from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Configuration used, with the resolved seed filled in
    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Map size in tiles
    pub fn bounds(&self) -> MapBounds {
        self.config.bounds()
    }

    /// All rooms in id order, secret rooms last
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room with the given id
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        room_by_id(&self.rooms, id)
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn graph(&self) -> &ConnectivityGraph {
        &self.graph
    }

    /// Edge counts from the spanning tree and loop passes
    pub fn graph_stats(&self) -> GraphStats {
        self.stats
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn spawn_room(&self) -> RoomId {
        self.classification.spawn
    }

    pub fn boss_room(&self) -> RoomId {
        self.classification.boss
    }

    pub fn treasure_room(&self) -> RoomId {
        self.classification.treasure
    }

    /// May equal the spawn room in tiny dungeons
    pub fn shop_room(&self) -> RoomId {
        self.classification.shop
    }

    pub fn elite_rooms(&self) -> &[RoomId] {
        &self.classification.elite
    }

    pub fn secret_rooms(&self) -> &[RoomId] {
        &self.classification.secret
    }

    /// Rooms of the given kind, in id order
    pub fn rooms_of_kind(&self, kind: RoomKind) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(move |r| r.kind == kind)
    }

    /// Enemy level for the room, scaled by the configured difficulty
    pub fn enemy_level(&self, id: RoomId) -> Option<u32> {
        self.room(id)
            .map(|r| depth::enemy_level(r.depth, self.config.difficulty_scaling))
    }

    /// Loot rarity tier (1..=5) for the room
    pub fn loot_rarity(&self, id: RoomId) -> Option<u32> {
        self.room(id).map(|r| depth::loot_rarity(r.depth))
    }

    /// Text map: `#` room walls, `.` open floor, the room kind glyph at each
    /// room center, blanks for solid rock
    pub fn to_ascii(&self) -> String {
        let bounds = self.bounds();
        let mut out = String::with_capacity(ascii_capacity(bounds));

        for y in 0..bounds.height {
            for x in 0..bounds.width {
                let glyph = match self.room_at_tile(x, y) {
                    Some(room) if room.center_tile().x == x && room.center_tile().y == y => {
                        room.kind.glyph()
                    }
                    Some(room) if room.rect().is_border(x, y) => '#',
                    _ if self.is_wall(x, y) => ' ',
                    _ => '.',
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }

    /// One line per room: id, kind, rectangle, depth and neighbors
    pub fn summary(&self) -> String {
        let mut out = format!(
            "seed {} | {} rooms | {} corridors | {} edges ({} tree, {} loop)\n",
            self.seed,
            self.rooms.len(),
            self.corridors.len(),
            self.graph.edge_count(),
            self.stats.mst_edges,
            self.stats.loop_edges,
        );
        for room in &self.rooms {
            out.push_str(&format!(
                "{:>3} {:<8} at ({:>2},{:>2}) {:>2}x{:<2} depth {:>2} -> {:?}\n",
                room.id,
                room.kind.to_string(),
                room.x,
                room.y,
                room.width,
                room.height,
                room.depth,
                self.graph.neighbors(room.id),
            ));
        }
        out
    }
}

/// Bytes in the ASCII dump: one per tile plus a newline per row
fn ascii_capacity(bounds: MapBounds) -> usize {
    let width = usize::try_from(bounds.width).unwrap_or(0);
    let height = usize::try_from(bounds.height).unwrap_or(0);
    (width + 1).saturating_mul(height)
}
