//! Room/furniture model: item types, the sparse-update type, and the owning
//! `Model` state.
//!
//! This module defines the canonical layout state shared by both views
//! (`Room`, `FurnitureItem`, `Model`), a sparse-update type for incremental
//! edits (`PartialFurniture`), and the persisted snapshot shape
//! (`DesignData`). Data flows into this layer from the persistence gateway
//! (JSON deserialization) and from the drag controller and property-edit
//! operations (mutations). Both view adapters read from `Model`; neither owns
//! any of its state.
//!
//! DESIGN
//! ======
//! Every horizontal position write funnels through [`Model::attempt_move`],
//! which clamps the candidate against the current room bounds. Callers never
//! see a rejected move; out-of-bounds candidates stop exactly at the wall.
//! `updateFurniture`-style edits on unknown ids are silent no-ops so late
//! events referencing deleted items cannot fault the session.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::consts;

/// Unique identifier for a furniture item within one design.
pub type FurnitureId = u32;

/// The kind of a furniture item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureKind {
    /// Chair with a fixed square footprint.
    Chair,
    /// Table with an editable `size`; width/depth define the footprint.
    Table,
}

impl FurnitureKind {
    /// Default color for newly created items of this kind.
    #[must_use]
    pub fn default_color(self) -> &'static str {
        match self {
            Self::Chair => consts::CHAIR_COLOR,
            Self::Table => consts::TABLE_COLOR,
        }
    }

    /// Resting height of the item's position; the `y` coordinate is pinned
    /// here and is never user-editable.
    #[must_use]
    pub fn resting_height(self) -> f64 {
        match self {
            Self::Chair | Self::Table => 0.0,
        }
    }
}

/// A furniture item as stored in the model and in a persisted design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    /// Unique identifier within the design; assigned monotonically.
    pub id: FurnitureId,
    /// Item kind; decides footprint rules and defaults.
    #[serde(rename = "type")]
    pub kind: FurnitureKind,
    /// World-space position in meters. `y` is the resting height.
    pub position: DVec3,
    /// Rotation around the vertical axis in radians, normalized to `[0, 2π)`.
    pub rotation: f64,
    /// Fill color as an RGB hex string.
    pub color: String,
    /// `(width, thickness, depth)` in meters for tables; absent for chairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<DVec3>,
}

impl FurnitureItem {
    /// Half extents of the axis-aligned footprint as `(half_x, half_z)`.
    ///
    /// Rotation is deliberately ignored: footprints are axis-aligned for
    /// both hit-testing and bounds clamping.
    #[must_use]
    pub fn half_extents(&self) -> DVec2 {
        match self.kind {
            FurnitureKind::Chair => DVec2::splat(consts::CHAIR_FOOTPRINT / 2.0),
            FurnitureKind::Table => {
                let size = self.size.unwrap_or(consts::TABLE_SIZE);
                DVec2::new(size.x / 2.0, size.z / 2.0)
            }
        }
    }
}

/// Sparse update for a furniture item. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialFurniture {
    /// New position, if being updated. `y` is ignored; the item keeps its
    /// resting height and `x`/`z` are bounds-clamped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<DVec3>,
    /// New rotation in radians, if being updated; normalized to `[0, 2π)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// New color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// New size, if being updated. Table spans clamp to the editable range
    /// and the position re-clamps because the footprint changed; chairs
    /// ignore size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<DVec3>,
}

/// Room dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Extent along the world x axis.
    pub width: f64,
    /// Extent along the vertical axis; never constrains furniture.
    pub height: f64,
    /// Extent along the world z axis.
    pub depth: f64,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width: consts::ROOM_SIZE.x,
            height: consts::ROOM_SIZE.y,
            depth: consts::ROOM_SIZE.z,
        }
    }
}

impl Room {
    /// Clamp a candidate `(x, z)` so a footprint with the given half extents
    /// stays inside the walls. A footprint wider than the room pins to the
    /// room center rather than oscillating between walls.
    #[must_use]
    pub fn clamp_position(&self, half_extents: DVec2, candidate: DVec2) -> DVec2 {
        DVec2::new(
            clamp_axis(self.width / 2.0, half_extents.x, candidate.x),
            clamp_axis(self.depth / 2.0, half_extents.y, candidate.y),
        )
    }
}

fn clamp_axis(half_span: f64, half_extent: f64, value: f64) -> f64 {
    let limit = (half_span - half_extent).max(0.0);
    value.clamp(-limit, limit)
}

/// Persisted snapshot of one design's layout, as written to disk.
///
/// Field names and order are part of the stored format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignData {
    /// Room dimensions as `[width, height, depth]` in meters.
    pub room_size: [f64; 3],
    /// Wall color as an RGB hex string.
    pub wall_color: String,
    /// Floor color as an RGB hex string.
    pub floor_color: String,
    /// Furniture items in insertion order.
    pub furniture: Vec<FurnitureItem>,
    /// Ambient light intensity.
    pub light_intensity: f64,
}

impl Default for DesignData {
    fn default() -> Self {
        Self {
            room_size: consts::ROOM_SIZE.to_array(),
            wall_color: consts::WALL_COLOR.to_owned(),
            floor_color: consts::FLOOR_COLOR.to_owned(),
            furniture: Vec::new(),
            light_intensity: consts::LIGHT_INTENSITY,
        }
    }
}

/// Canonical layout state for one editing session.
///
/// Owns the room, the furniture list (insertion order is significant: later
/// items win overlap tie-breaks), the single selection, and the appearance
/// state that rides along in the persisted snapshot.
#[derive(Debug, Clone)]
pub struct Model {
    room: Room,
    furniture: Vec<FurnitureItem>,
    selection: Option<FurnitureId>,
    wall_color: String,
    floor_color: String,
    light_intensity: f64,
    next_id: FurnitureId,
}

impl Default for Model {
    fn default() -> Self {
        Self::from_design(&DesignData::default())
    }
}

impl Model {
    /// Create an empty model with default room and appearance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize a model from a persisted snapshot. Selection starts clear;
    /// the id high-water mark is `max(existing ids) + 1` so ids are never
    /// reused within the session.
    #[must_use]
    pub fn from_design(data: &DesignData) -> Self {
        let next_id = data
            .furniture
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            room: Room {
                width: data.room_size[0],
                height: data.room_size[1],
                depth: data.room_size[2],
            },
            furniture: data.furniture.clone(),
            selection: None,
            wall_color: data.wall_color.clone(),
            floor_color: data.floor_color.clone(),
            light_intensity: data.light_intensity,
            next_id,
        }
    }

    /// Serialize the current state back into the persisted snapshot shape.
    /// Furniture order and all numeric fields pass through unchanged.
    #[must_use]
    pub fn to_design(&self) -> DesignData {
        DesignData {
            room_size: [self.room.width, self.room.height, self.room.depth],
            wall_color: self.wall_color.clone(),
            floor_color: self.floor_color.clone(),
            furniture: self.furniture.clone(),
            light_intensity: self.light_intensity,
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Current room dimensions.
    #[must_use]
    pub fn room(&self) -> Room {
        self.room
    }

    /// Furniture items in insertion order.
    #[must_use]
    pub fn furniture(&self) -> &[FurnitureItem] {
        &self.furniture
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: FurnitureId) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|item| item.id == id)
    }

    /// The currently selected item id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<FurnitureId> {
        self.selection
    }

    /// Wall color as an RGB hex string.
    #[must_use]
    pub fn wall_color(&self) -> &str {
        &self.wall_color
    }

    /// Floor color as an RGB hex string.
    #[must_use]
    pub fn floor_color(&self) -> &str {
        &self.floor_color
    }

    /// Ambient light intensity.
    #[must_use]
    pub fn light_intensity(&self) -> f64 {
        self.light_intensity
    }

    // ── Mutators ────────────────────────────────────────────────

    /// Replace the room dimensions and immediately re-clamp every item's
    /// position to the new bounds, so the bounds invariant never lapses,
    /// even transiently.
    pub fn set_room_size(&mut self, width: f64, height: f64, depth: f64) {
        self.room = Room { width, height, depth };
        let room = self.room;
        for item in &mut self.furniture {
            let clamped = room.clamp_position(
                item.half_extents(),
                DVec2::new(item.position.x, item.position.z),
            );
            item.position.x = clamped.x;
            item.position.z = clamped.y;
        }
    }

    /// Add a new item of the given kind at the room center with default
    /// rotation and color. Returns the assigned id.
    pub fn add_furniture(&mut self, kind: FurnitureKind) -> FurnitureId {
        let id = self.next_id;
        self.next_id += 1;
        let size = match kind {
            FurnitureKind::Chair => None,
            FurnitureKind::Table => Some(consts::TABLE_SIZE),
        };
        let mut item = FurnitureItem {
            id,
            kind,
            position: DVec3::new(0.0, kind.resting_height(), 0.0),
            rotation: 0.0,
            color: kind.default_color().to_owned(),
            size,
        };
        let clamped = self
            .room
            .clamp_position(item.half_extents(), DVec2::ZERO);
        item.position.x = clamped.x;
        item.position.z = clamped.y;
        self.furniture.push(item);
        id
    }

    /// Apply a sparse update to an item. Unknown ids are a silent no-op;
    /// returns whether the item existed. Position updates are bounds-clamped
    /// and rotation is normalized. Table spans clamp to the editable range
    /// with the thickness pinned, then the position re-clamps because the
    /// footprint changed; chairs keep their fixed footprint. Non-finite
    /// numeric fields are ignored; the stored state stays finite and
    /// in-range.
    pub fn update_furniture(&mut self, id: FurnitureId, partial: &PartialFurniture) -> bool {
        let room = self.room;
        let Some(item) = self.furniture.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if let Some(size) = partial.size.filter(|size| size.is_finite()) {
            if item.kind == FurnitureKind::Table {
                item.size = Some(DVec3::new(
                    size.x.clamp(consts::TABLE_SPAN_MIN, consts::TABLE_SPAN_MAX),
                    consts::TABLE_SIZE.y,
                    size.z.clamp(consts::TABLE_SPAN_MIN, consts::TABLE_SPAN_MAX),
                ));
            }
        }
        if let Some(rotation) = partial.rotation.filter(|rotation| rotation.is_finite()) {
            item.rotation = normalize_rotation(rotation);
        }
        if let Some(ref color) = partial.color {
            item.color.clone_from(color);
        }
        let candidate = partial
            .position
            .filter(|position| position.is_finite())
            .map_or(DVec2::new(item.position.x, item.position.z), |position| {
                DVec2::new(position.x, position.z)
            });
        let clamped = room.clamp_position(item.half_extents(), candidate);
        item.position.x = clamped.x;
        item.position.z = clamped.y;
        true
    }

    /// Clamp a raw world-space candidate against the room bounds and write
    /// it as the item's new `(x, z)`. This is the single entry point every
    /// position-producing caller funnels through, regardless of cadence.
    ///
    /// Unknown ids and non-finite candidates are silent no-ops; returns
    /// whether a write happened. The item's `y` is untouched.
    pub fn attempt_move(&mut self, id: FurnitureId, candidate: DVec2) -> bool {
        if !candidate.is_finite() {
            return false;
        }
        let room = self.room;
        let Some(item) = self.furniture.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        let clamped = room.clamp_position(item.half_extents(), candidate);
        item.position.x = clamped.x;
        item.position.z = clamped.y;
        true
    }

    /// Remove an item by id. Unknown ids are a silent no-op; returns whether
    /// the item existed. Deleting the selected item clears the selection.
    /// The id is never reassigned within this session.
    pub fn delete_furniture(&mut self, id: FurnitureId) -> bool {
        let before = self.furniture.len();
        self.furniture.retain(|item| item.id != id);
        if self.furniture.len() == before {
            return false;
        }
        if self.selection == Some(id) {
            self.selection = None;
        }
        true
    }

    /// Set or clear the selection. A `Some(id)` that names no live item is
    /// ignored so the selection always references the furniture list.
    pub fn set_selection(&mut self, selection: Option<FurnitureId>) {
        match selection {
            Some(id) if self.item(id).is_none() => {}
            _ => self.selection = selection,
        }
    }

    /// Set the wall color.
    pub fn set_wall_color(&mut self, color: String) {
        self.wall_color = color;
    }

    /// Set the floor color.
    pub fn set_floor_color(&mut self, color: String) {
        self.floor_color = color;
    }

    /// Set the ambient light intensity.
    pub fn set_light_intensity(&mut self, intensity: f64) {
        self.light_intensity = intensity;
    }
}

/// Normalize an angle in radians to `[0, 2π)`.
#[must_use]
pub fn normalize_rotation(radians: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let wrapped = radians.rem_euclid(tau);
    if wrapped >= tau { 0.0 } else { wrapped }
}
