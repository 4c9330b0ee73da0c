//! Room placement by rejection sampling

use dg_rng::DungeonRng;
use tracing::debug;

use crate::consts::PLACEMENT_ATTEMPTS_PER_ROOM;

use super::rect::{MapBounds, SizeRange};
use super::room::{Room, RoomId};

/// Place up to `target_count` non-overlapping rooms inside `bounds`.
///
/// Each attempt draws a size from `size_range` and an origin that keeps the
/// room on the map; the candidate is rejected when any accepted room, grown
/// by `spacing`, intersects it. Gives up after `target_count * 10` attempts
/// and returns whatever was placed, which may be fewer rooms than asked for
/// (or none at all).
pub fn generate_rooms(
    rng: &mut DungeonRng,
    target_count: u32,
    bounds: MapBounds,
    size_range: SizeRange,
    spacing: i32,
) -> Vec<Room> {
    let target = target_count as usize;
    let attempts = target_count.saturating_mul(PLACEMENT_ATTEMPTS_PER_ROOM);
    let mut rooms: Vec<Room> = Vec::with_capacity(capacity_hint(target, bounds, size_range));

    for _ in 0..attempts {
        if rooms.len() >= target {
            break;
        }

        let width = rng.next_int(size_range.min, size_range.max);
        let height = rng.next_int(size_range.min, size_range.max);
        let x = rng.next_int(0, bounds.width - width);
        let y = rng.next_int(0, bounds.height - height);

        let candidate = Room::new(rooms.len() as RoomId, x, y, width, height);
        if !bounds.contains_rect(&candidate.rect()) {
            continue;
        }

        // Check if room overlaps with existing rooms
        if rooms.iter().any(|r| r.overlaps(&candidate, spacing)) {
            continue;
        }

        rooms.push(candidate);
    }

    if rooms.len() < target {
        debug!(placed = rooms.len(), target, attempts, "placed fewer rooms than requested");
    }

    rooms
}

/// Rooms of the smallest size that could tile the map, bounded by `target`
fn capacity_hint(target: usize, bounds: MapBounds, size_range: SizeRange) -> usize {
    let tiles = i64::from(bounds.width.max(0)) * i64::from(bounds.height.max(0));
    let side = i64::from(size_range.min.max(1));
    let fit = usize::try_from(tiles / (side * side)).unwrap_or(usize::MAX);
    target.min(fit)
}
