//! Tile occupancy and position sampling
//!
//! `is_wall` is a pure function of the dungeon. The samplers draw from a
//! caller-supplied generator so that placement of entities stays
//! reproducible too.

use dg_rng::DungeonRng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::consts::{PLACEMENT_ATTEMPTS_PER_ROOM, POSITION_MARGIN};

use super::layout::Dungeon;
use super::rect::GridPoint;
use super::room::Room;

/// A position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let (dx, dy) = (other.x - self.x, other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl Dungeon {
    /// Check if the tile blocks movement.
    ///
    /// Off-map tiles and room border rings are walls. Room interiors are open,
    /// and so is anything within half the corridor width of a corridor
    /// centerline.
    pub fn is_wall(&self, tile_x: i32, tile_y: i32) -> bool {
        if !self.bounds().contains(tile_x, tile_y) {
            return true;
        }
        if let Some(room) = self.room_at_tile(tile_x, tile_y) {
            return !room.rect().is_interior(tile_x, tile_y);
        }

        let half_width = f64::from(self.config().corridor_width) / 2.0;
        !self
            .corridors()
            .iter()
            .any(|c| c.band_contains(tile_x, tile_y, half_width))
    }

    /// Room whose rectangle (border included) holds the tile
    pub fn room_at_tile(&self, tile_x: i32, tile_y: i32) -> Option<&Room> {
        self.rooms().iter().find(|r| r.contains(tile_x, tile_y))
    }

    /// Room under a pixel position
    pub fn room_at_point(&self, point: Point) -> Option<&Room> {
        let tile = self.pixel_to_tile(point);
        self.room_at_tile(tile.x, tile.y)
    }

    /// Center of a tile, in pixels
    pub fn tile_to_pixel(&self, tile: GridPoint) -> Point {
        let size = f64::from(self.config().tile_size);
        Point::new(
            f64::from(tile.x) * size + size / 2.0,
            f64::from(tile.y) * size + size / 2.0,
        )
    }

    /// Tile holding a pixel position
    pub fn pixel_to_tile(&self, point: Point) -> GridPoint {
        let size = f64::from(self.config().tile_size);
        GridPoint::new((point.x / size).floor() as i32, (point.y / size).floor() as i32)
    }

    /// Uniform tile center at least `margin` tiles from every room edge.
    ///
    /// The margin is clamped to a third of the room's smaller side.
    pub fn random_position_in_room(&self, rng: &mut DungeonRng, room: &Room, margin: i32) -> Point {
        let margin = margin.clamp(0, room.width.min(room.height) / 3);
        let x = rng.next_int(room.x + margin, room.x + room.width - 1 - margin);
        let y = rng.next_int(room.y + margin, room.y + room.height - 1 - margin);
        self.tile_to_pixel(GridPoint::new(x, y))
    }

    /// Up to `count` positions, pairwise at least `min_separation` pixels
    /// apart. Stops after `count * 10` draws and returns what it found.
    pub fn multiple_positions_in_room(
        &self,
        rng: &mut DungeonRng,
        room: &Room,
        count: usize,
        min_separation: f64,
    ) -> Vec<Point> {
        let mut found: Vec<Point> = Vec::with_capacity(count);
        let attempts = count.saturating_mul(PLACEMENT_ATTEMPTS_PER_ROOM as usize);

        for _ in 0..attempts {
            if found.len() >= count {
                break;
            }
            let candidate = self.random_position_in_room(rng, room, POSITION_MARGIN);
            if found.iter().all(|p| p.distance_to(candidate) >= min_separation) {
                found.push(candidate);
            }
        }

        if found.len() < count {
            trace!(room = room.id, found = found.len(), count, "position sampling under-filled");
        }
        found
    }

    /// A position in `room` at least `min_distance` pixels from `from`, or
    /// the farthest of `max_attempts` samples if none qualifies.
    pub fn position_far_from(
        &self,
        rng: &mut DungeonRng,
        room: &Room,
        from: Point,
        min_distance: f64,
        max_attempts: u32,
    ) -> Point {
        let mut best = self.random_position_in_room(rng, room, POSITION_MARGIN);
        let mut best_distance = best.distance_to(from);

        for _ in 1..max_attempts {
            if best_distance >= min_distance {
                break;
            }
            let candidate = self.random_position_in_room(rng, room, POSITION_MARGIN);
            let d = candidate.distance_to(from);
            if d > best_distance {
                best = candidate;
                best_distance = d;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }
}
