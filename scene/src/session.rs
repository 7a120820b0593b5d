//! Session facade: one shared model, two view adapters, one drag session.
//!
//! `Session` wires the canonical [`Model`], the [`DragController`], and the
//! two surface adapters together behind a single API so hosts cannot drive
//! them out of sync. Pointer events route through the adapter owning the
//! surface that produced them; property edits clamp to their allowed ranges
//! here before reaching the model; selection changes from any path are
//! reconciled with the drag state machine.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use glam::{DVec2, DVec3};

use crate::consts;
use crate::drag::{DragController, DragState};
use crate::model::{DesignData, FurnitureId, FurnitureKind, Model, PartialFurniture};
use crate::plan::{PlanRect, PlanView};
use crate::space::SpaceView;

/// Rotation edits arrive in degrees and clamp to one full turn.
const ROTATION_DEG_MAX: f64 = 360.0;

/// An editing session over one design: model, drag state, and both views.
#[derive(Debug, Clone, Default)]
pub struct Session {
    model: Model,
    drag: DragController,
    plan: PlanView,
    space: SpaceView,
}

impl Session {
    /// Start a session on an empty default design.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session on a persisted snapshot. Selection starts clear and
    /// both views begin with default cameras.
    #[must_use]
    pub fn from_design(data: &DesignData) -> Self {
        Self {
            model: Model::from_design(data),
            ..Self::default()
        }
    }

    /// Replace the model with another snapshot mid-session, e.g. when the
    /// host switches records. Selection and any drag session are dropped;
    /// cameras and viewport carry over because the surfaces did not change.
    pub fn load_design(&mut self, data: &DesignData) {
        self.model = Model::from_design(data);
        self.drag = DragController::new();
    }

    /// Snapshot the current state in the persisted shape.
    #[must_use]
    pub fn to_design(&self) -> DesignData {
        self.model.to_design()
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The shared layout model.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The currently selected item id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<FurnitureId> {
        self.model.selection()
    }

    /// The current interaction state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// The floor-plan adapter, for camera inspection.
    #[must_use]
    pub fn plan(&self) -> &PlanView {
        &self.plan
    }

    /// Mutable access to the floor-plan adapter, for camera adjustments.
    pub fn plan_mut(&mut self) -> &mut PlanView {
        &mut self.plan
    }

    /// The perspective adapter, for camera inspection.
    #[must_use]
    pub fn space(&self) -> &SpaceView {
        &self.space
    }

    /// Mutable access to the perspective adapter, for camera adjustments.
    pub fn space_mut(&mut self) -> &mut SpaceView {
        &mut self.space
    }

    // ── Plan surface ────────────────────────────────────────────

    /// Pointer press on the plan canvas, in pixels.
    pub fn plan_pointer_down(&mut self, screen: DVec2) {
        self.plan.pointer_down(&mut self.model, &mut self.drag, screen);
    }

    /// Pointer move on the plan canvas, in pixels.
    pub fn plan_pointer_move(&mut self, screen: DVec2) {
        self.plan.pointer_move(&mut self.model, &mut self.drag, screen);
    }

    /// Pointer release on the plan canvas.
    pub fn plan_pointer_up(&mut self) {
        self.plan.pointer_up(&mut self.drag);
    }

    /// Pointer left the plan canvas.
    pub fn plan_pointer_leave(&mut self) {
        self.plan.pointer_leave(&mut self.drag);
    }

    /// Pixel dimensions the plan canvas needs for the current room.
    #[must_use]
    pub fn plan_canvas_size(&self) -> DVec2 {
        self.plan.canvas_size(&self.model)
    }

    /// Draw geometry for the plan canvas, in paint order.
    #[must_use]
    pub fn plan_rects(&self) -> Vec<PlanRect<'_>> {
        self.plan.furniture_rects(&self.model)
    }

    // ── Perspective surface ─────────────────────────────────────

    /// Update the perspective surface dimensions in pixels.
    pub fn set_space_viewport(&mut self, size: DVec2) {
        self.space.set_viewport(size);
    }

    /// Pointer press on the perspective surface, in pixels.
    pub fn space_pointer_down(&mut self, screen: DVec2) {
        self.space.pointer_down(&mut self.model, &mut self.drag, screen);
    }

    /// Pointer move on the perspective surface, in pixels.
    pub fn space_pointer_move(&mut self, screen: DVec2) {
        self.space.pointer_move(screen);
    }

    /// Pointer release on the perspective surface.
    pub fn space_pointer_up(&mut self) {
        self.space.pointer_up(&mut self.drag);
    }

    /// Pointer left the perspective surface.
    pub fn space_pointer_leave(&mut self) {
        self.space.pointer_leave(&mut self.drag);
    }

    /// Per-frame callback for the perspective surface's render loop.
    pub fn space_tick(&mut self) {
        self.space.tick(&mut self.model, &mut self.drag);
    }

    /// Project a world point to perspective surface pixels.
    #[must_use]
    pub fn space_world_to_screen(&self, world: DVec3) -> Option<DVec2> {
        self.space.world_to_screen(world)
    }

    // ── Edits ───────────────────────────────────────────────────

    /// Set or clear the selection from outside the pointer path (property
    /// panel, list row). Unknown ids leave the selection untouched. The drag
    /// state machine is reconciled either way.
    pub fn select(&mut self, selection: Option<FurnitureId>) {
        self.model.set_selection(selection);
        self.drag.sync_selection(self.model.selection());
    }

    /// Add a new item of the given kind at the room center and select it.
    /// Returns the assigned id.
    pub fn add_furniture(&mut self, kind: FurnitureKind) -> FurnitureId {
        let id = self.model.add_furniture(kind);
        self.select(Some(id));
        id
    }

    /// Apply a sparse update to an item. Returns whether the item existed.
    pub fn update_furniture(&mut self, id: FurnitureId, partial: &PartialFurniture) -> bool {
        self.model.update_furniture(id, partial)
    }

    /// Move an item to a world-space `(x, z)` target through the same
    /// clamped entry point drag sessions use. Returns whether a write
    /// happened.
    pub fn move_furniture(&mut self, id: FurnitureId, target: DVec2) -> bool {
        self.model.attempt_move(id, target)
    }

    /// Remove an item. Returns whether it existed. Removing the selected
    /// item clears the selection and ends any drag session on it.
    pub fn delete_furniture(&mut self, id: FurnitureId) -> bool {
        let deleted = self.model.delete_furniture(id);
        self.drag.sync_selection(self.model.selection());
        deleted
    }

    /// Resize the room. Spans and height clamp to their allowed ranges and
    /// every item re-clamps to the new bounds. Non-finite dimensions are
    /// rejected.
    pub fn set_room_size(&mut self, width: f64, height: f64, depth: f64) {
        if !(width.is_finite() && height.is_finite() && depth.is_finite()) {
            return;
        }
        self.model.set_room_size(
            width.clamp(consts::ROOM_SPAN_MIN, consts::ROOM_SPAN_MAX),
            height.clamp(consts::ROOM_HEIGHT_MIN, consts::ROOM_HEIGHT_MAX),
            depth.clamp(consts::ROOM_SPAN_MIN, consts::ROOM_SPAN_MAX),
        );
    }

    /// Set the wall color.
    pub fn set_wall_color(&mut self, color: String) {
        self.model.set_wall_color(color);
    }

    /// Set the floor color.
    pub fn set_floor_color(&mut self, color: String) {
        self.model.set_floor_color(color);
    }

    /// Set the ambient light intensity, clamped to its allowed range.
    /// Non-finite values are rejected.
    pub fn set_light_intensity(&mut self, intensity: f64) {
        if !intensity.is_finite() {
            return;
        }
        self.model
            .set_light_intensity(intensity.clamp(consts::LIGHT_MIN, consts::LIGHT_MAX));
    }

    /// Rotate an item. Degrees clamp to `[0, 360]` and store as normalized
    /// radians. Returns whether the edit applied.
    pub fn set_rotation_degrees(&mut self, id: FurnitureId, degrees: f64) -> bool {
        if !degrees.is_finite() {
            return false;
        }
        let rotation = degrees.clamp(0.0, ROTATION_DEG_MAX).to_radians();
        self.model.update_furniture(
            id,
            &PartialFurniture {
                rotation: Some(rotation),
                ..PartialFurniture::default()
            },
        )
    }

    /// Resize a table's footprint. Width and depth clamp to the allowed
    /// span; the cosmetic thickness is pinned. The position re-clamps
    /// because the footprint changed. Returns whether the edit applied;
    /// non-tables and non-finite spans are rejected.
    pub fn set_table_span(&mut self, id: FurnitureId, width: f64, depth: f64) -> bool {
        if !(width.is_finite() && depth.is_finite()) {
            return false;
        }
        let is_table = self
            .model
            .item(id)
            .is_some_and(|item| item.kind == FurnitureKind::Table);
        if !is_table {
            return false;
        }
        self.model.update_furniture(
            id,
            &PartialFurniture {
                size: Some(DVec3::new(width, consts::TABLE_SIZE.y, depth)),
                ..PartialFurniture::default()
            },
        )
    }
}
