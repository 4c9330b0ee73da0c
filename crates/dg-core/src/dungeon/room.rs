//! Room records and their semantic roles

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::rect::{GridPoint, GridRect};

/// Room identifier; equal to the room's index in placement order
pub type RoomId = u32;

/// Semantic role of a room
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RoomKind {
    /// Player start
    Spawn,
    /// Farthest room from spawn
    Boss,
    /// Mid-depth reward room
    Treasure,
    Shop,
    /// Harder encounter
    Elite,
    /// Ordinary encounter room
    #[default]
    Combat,
    /// Hidden room grafted onto a corridor
    Secret,
}

impl RoomKind {
    /// Map glyph used by the ASCII dump
    pub const fn glyph(self) -> char {
        match self {
            RoomKind::Spawn => 'S',
            RoomKind::Boss => 'B',
            RoomKind::Treasure => 'T',
            RoomKind::Shop => '$',
            RoomKind::Elite => 'E',
            RoomKind::Combat => '.',
            RoomKind::Secret => '?',
        }
    }
}

/// A placed rectangular room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Left column
    pub x: i32,
    /// Top row
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub kind: RoomKind,
    /// Graph hops from the spawn room
    pub depth: u32,
}

impl Room {
    /// Create a new unclassified room
    pub fn new(id: RoomId, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            kind: RoomKind::Combat,
            depth: 0,
        }
    }

    /// Occupied tiles
    pub fn rect(&self) -> GridRect {
        GridRect::new(self.x, self.y, self.width, self.height)
    }

    /// Geometric center
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// Center floored to a tile
    pub fn center_tile(&self) -> GridPoint {
        let (cx, cy) = self.center();
        GridPoint::new(cx.floor() as i32, cy.floor() as i32)
    }

    /// Euclidean distance between the two centers.
    ///
    /// Centers sit on half tiles, so the sum of squares is exact and the
    /// correctly rounded `sqrt` gives equal distances equal bits on every
    /// platform.
    pub fn distance_to(&self, other: &Room) -> f64 {
        let (ax, ay) = self.center();
        let (bx, by) = other.center();
        let (dx, dy) = (bx - ax, by - ay);
        (dx * dx + dy * dy).sqrt()
    }

    /// Check if `other` intersects this room grown by `spacing` on every side
    pub fn overlaps(&self, other: &Room, spacing: i32) -> bool {
        self.rect().expanded(spacing).intersects(&other.rect())
    }

    /// Check if the tile lies inside the room
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect().contains(x, y)
    }
}
