//! Grid geometry: tile points, rectangles and map bounds

use serde::{Deserialize, Serialize};

/// A tile coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle of tiles; `(x, y)` is the top-left tile and the
/// right/bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl GridRect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if the tile lies inside the rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle shares at least one tile with another
    pub fn intersects(&self, other: &GridRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Grow by `margin` tiles on every side
    pub fn expanded(&self, margin: i32) -> GridRect {
        GridRect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2 * margin,
            self.height + 2 * margin,
        )
    }

    /// Check if the tile is on the outermost ring
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        self.contains(x, y)
            && (x == self.x || x == self.right() - 1 || y == self.y || y == self.bottom() - 1)
    }

    /// Check if the tile is inside but not on the outermost ring
    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        x > self.x && x < self.right() - 1 && y > self.y && y < self.bottom() - 1
    }
}

/// Map size in tiles; valid tiles are `0..width` x `0..height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBounds {
    pub width: i32,
    pub height: i32,
}

impl MapBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if the tile is on the map
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Check if the whole rectangle is on the map
    pub fn contains_rect(&self, rect: &GridRect) -> bool {
        rect.x >= 0 && rect.y >= 0 && rect.right() <= self.width && rect.bottom() <= self.height
    }
}

/// Inclusive range of allowed room sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: i32,
    pub max: i32,
}

impl SizeRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = GridRect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
        assert!(!r.contains(5, 8));
    }

    #[test]
    fn test_intersects() {
        let a = GridRect::new(0, 0, 5, 5);
        let b = GridRect::new(4, 4, 5, 5);
        let c = GridRect::new(5, 0, 5, 5);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        // Touching edges do not share a tile
        assert!(!a.intersects(&c));
        assert!(a.expanded(1).intersects(&c));
    }

    #[test]
    fn test_border_and_interior() {
        let r = GridRect::new(10, 10, 4, 3);
        assert!(r.is_border(10, 10));
        assert!(r.is_border(13, 11));
        assert!(r.is_border(11, 12));
        assert!(!r.is_border(11, 11));
        assert!(r.is_interior(11, 11));
        assert!(r.is_interior(12, 11));
        assert!(!r.is_interior(11, 12));
        assert!(!r.is_border(9, 10));
    }

    #[test]
    fn test_bounds() {
        let bounds = MapBounds::new(20, 10);
        assert!(bounds.contains(0, 0));
        assert!(bounds.contains(19, 9));
        assert!(!bounds.contains(20, 9));
        assert!(!bounds.contains(-1, 0));
        assert!(bounds.contains_rect(&GridRect::new(15, 5, 5, 5)));
        assert!(!bounds.contains_rect(&GridRect::new(16, 5, 5, 5)));
    }
}
