//! Corridor synthesis
//!
//! Every graph edge becomes an "L" of one or two axis-aligned centerline
//! segments between the floored room centers. A coin flip picks which leg
//! comes first. Corridors are not rasterized here; the query surface treats
//! each segment as a band of half the corridor width.

use dg_rng::DungeonRng;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::graph::ConnectivityGraph;
use super::rect::GridPoint;
use super::room::{Room, RoomId};

/// One axis-aligned corridor segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub start: GridPoint,
    pub end: GridPoint,
    /// Room the connection starts from
    pub from: RoomId,
    /// Room the connection leads to
    pub to: RoomId,
}

impl Corridor {
    /// Check if the segment runs along the x axis
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Center of the segment, floored to a tile
    pub fn midpoint(&self) -> GridPoint {
        GridPoint::new(
            (self.start.x + self.end.x).div_euclid(2),
            (self.start.y + self.end.y).div_euclid(2),
        )
    }

    /// Check if the tile is within `half_width` of the centerline.
    ///
    /// The band also extends `half_width` past both ends so that the two legs
    /// of an "L" meet without a notch at the corner.
    pub fn band_contains(&self, x: i32, y: i32, half_width: f64) -> bool {
        let (x, y) = (f64::from(x), f64::from(y));
        let lo_x = f64::from(self.start.x.min(self.end.x)) - half_width;
        let hi_x = f64::from(self.start.x.max(self.end.x)) + half_width;
        let lo_y = f64::from(self.start.y.min(self.end.y)) - half_width;
        let hi_y = f64::from(self.start.y.max(self.end.y)) + half_width;
        x >= lo_x && x <= hi_x && y >= lo_y && y <= hi_y
    }

    /// Check if the segment links the two rooms, in either direction
    pub fn links(&self, a: RoomId, b: RoomId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Corridors for every undirected edge of `graph`, each edge visited once
/// in ascending room id order
pub fn synthesize_corridors(
    rng: &mut DungeonRng,
    rooms: &[Room],
    graph: &ConnectivityGraph,
) -> Vec<Corridor> {
    let mut corridors = Vec::new();
    let mut done: HashSet<(RoomId, RoomId)> = HashSet::new();

    for a in graph.nodes() {
        for &b in graph.neighbors(a) {
            if !done.insert((a.min(b), a.max(b))) {
                continue;
            }
            let (Some(room_a), Some(room_b)) = (room_by_id(rooms, a), room_by_id(rooms, b)) else {
                continue;
            };
            corridors.extend(connect_rooms(rng, room_a, room_b));
        }
    }

    corridors
}

/// One or two segments joining the centers of two rooms
pub fn connect_rooms(rng: &mut DungeonRng, a: &Room, b: &Room) -> Vec<Corridor> {
    let start = a.center_tile();
    let end = b.center_tile();

    let corner = if rng.coin_flip() {
        // Horizontal leg first
        GridPoint::new(end.x, start.y)
    } else {
        GridPoint::new(start.x, end.y)
    };

    [(start, corner), (corner, end)]
        .into_iter()
        .filter(|(s, e)| s != e)
        .map(|(s, e)| Corridor {
            start: s,
            end: e,
            from: a.id,
            to: b.id,
        })
        .collect()
}

/// Room with the given id; ids equal placement indices
pub(crate) fn room_by_id(rooms: &[Room], id: RoomId) -> Option<&Room> {
    rooms.get(id as usize).filter(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_at(id: RoomId, x: i32, y: i32) -> Room {
        Room::new(id, x, y, 4, 4)
    }

    #[test]
    fn test_l_shape_is_axis_aligned_and_continuous() {
        let a = room_at(0, 0, 0);
        let b = room_at(1, 20, 30);
        for seed in 0..20 {
            let mut rng = DungeonRng::new(seed);
            let segs = connect_rooms(&mut rng, &a, &b);
            assert_eq!(segs.len(), 2);
            for s in &segs {
                assert!(s.start.x == s.end.x || s.start.y == s.end.y);
                assert_eq!((s.from, s.to), (0, 1));
            }
            assert_eq!(segs[0].start, a.center_tile());
            assert_eq!(segs[0].end, segs[1].start);
            assert_eq!(segs[1].end, b.center_tile());
        }
    }

    #[test]
    fn test_both_leg_orders_occur() {
        let a = room_at(0, 0, 0);
        let b = room_at(1, 20, 30);
        let mut horizontal_first = 0;
        for seed in 0..64 {
            let mut rng = DungeonRng::new(seed);
            if connect_rooms(&mut rng, &a, &b)[0].is_horizontal() {
                horizontal_first += 1;
            }
        }
        assert!(horizontal_first > 0 && horizontal_first < 64);
    }

    #[test]
    fn test_aligned_rooms_need_one_leg() {
        let a = room_at(0, 0, 10);
        let b = room_at(1, 30, 10);
        let mut rng = DungeonRng::new(3);
        let segs = connect_rooms(&mut rng, &a, &b);
        assert_eq!(segs.len(), 1);
        assert!(segs[0].is_horizontal());
        assert_eq!(segs[0].start, GridPoint::new(2, 12));
        assert_eq!(segs[0].end, GridPoint::new(32, 12));
    }

    #[test]
    fn test_each_edge_synthesized_once() {
        let rooms = vec![room_at(0, 0, 0), room_at(1, 20, 0), room_at(2, 0, 20)];
        let mut graph = ConnectivityGraph::with_rooms(&rooms);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 2);

        let mut rng = DungeonRng::new(11);
        let corridors = synthesize_corridors(&mut rng, &rooms, &graph);
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let legs = corridors.iter().filter(|c| c.links(a, b)).count();
            assert!((1..=2).contains(&legs));
        }
        // 0-1 and 0-2 are aligned, 1-2 is diagonal
        assert_eq!(corridors.len(), 4);
    }

    #[test]
    fn test_band_contains() {
        let c = Corridor {
            start: GridPoint::new(10, 5),
            end: GridPoint::new(20, 5),
            from: 0,
            to: 1,
        };
        assert!(c.band_contains(10, 5, 1.5));
        assert!(c.band_contains(15, 6, 1.5));
        assert!(c.band_contains(15, 4, 1.5));
        assert!(!c.band_contains(15, 7, 1.5));
        assert!(c.band_contains(21, 5, 1.5));
        assert!(!c.band_contains(22, 5, 1.5));
        assert!(!c.band_contains(15, 6, 0.5));
    }

    #[test]
    fn test_midpoint() {
        let c = Corridor {
            start: GridPoint::new(4, 9),
            end: GridPoint::new(4, 2),
            from: 0,
            to: 1,
        };
        assert!(!c.is_horizontal());
        assert_eq!(c.midpoint(), GridPoint::new(4, 5));
    }
}
