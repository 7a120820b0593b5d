#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use glam::DVec2;

use crate::model::{FurnitureId, FurnitureItem};

/// Whether a world-space `(x, z)` point falls inside an item's footprint.
///
/// Footprints are axis-aligned and centered on the item; rotation is
/// deliberately not considered. Edges count as inside.
#[must_use]
pub fn footprint_contains(item: &FurnitureItem, point: DVec2) -> bool {
    let half = item.half_extents();
    (point.x - item.position.x).abs() <= half.x && (point.y - item.position.z).abs() <= half.y
}

/// Return the topmost item whose footprint contains `point`, or `None`.
///
/// Iterates from the last-added item backward so that, when footprints
/// overlap, the most recently added item wins the tie-break.
#[must_use]
pub fn hit_test(point: DVec2, furniture: &[FurnitureItem]) -> Option<FurnitureId> {
    furniture
        .iter()
        .rev()
        .find(|item| footprint_contains(item, point))
        .map(|item| item.id)
}
