//! Floor-plan view adapter: discrete pointer events in pixel space.
//!
//! The 2D surface reports raw pointer pixel coordinates and redraws on
//! change; there is no frame loop. Each handler converts pixels to world
//! meters through [`PlanCamera`] and forwards to the shared drag controller,
//! so this view and the perspective view can never disagree about selection
//! or bounds.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use glam::DVec2;

use crate::camera::PlanCamera;
use crate::drag::DragController;
use crate::model::{FurnitureId, Model};

/// Draw geometry for one furniture item on the plan canvas, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct PlanRect<'a> {
    /// Item id, for callers that map geometry back to items.
    pub id: FurnitureId,
    /// Footprint center in canvas pixels.
    pub center: DVec2,
    /// Full footprint size in canvas pixels.
    pub size: DVec2,
    /// Rotation around the footprint center, in radians.
    pub rotation: f64,
    /// Fill color as an RGB hex string.
    pub color: &'a str,
    /// Whether this item is the current selection.
    pub selected: bool,
}

/// Event-driven adapter between the 2D surface and the core engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanView {
    /// Pixel↔meter mapping for the plan canvas.
    pub camera: PlanCamera,
}

impl PlanView {
    /// Create an adapter with the default pixels-per-meter scale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer press at canvas pixel coordinates.
    pub fn pointer_down(&self, model: &mut Model, drag: &mut DragController, screen: DVec2) {
        let world = self.camera.screen_to_world(model.room(), screen);
        drag.press(model, world);
    }

    /// Handle a discrete pointer move at canvas pixel coordinates. Only
    /// feeds the drag session; plain hovering mutates nothing.
    pub fn pointer_move(&self, model: &mut Model, drag: &mut DragController, screen: DVec2) {
        let world = self.camera.screen_to_world(model.room(), screen);
        drag.drag_to(model, world);
    }

    /// Handle pointer release.
    pub fn pointer_up(&self, drag: &mut DragController) {
        drag.release();
    }

    /// Handle the pointer leaving the canvas; ends any drag session.
    pub fn pointer_leave(&self, drag: &mut DragController) {
        drag.cancel();
    }

    /// Pixel dimensions the plan canvas needs for the current room.
    #[must_use]
    pub fn canvas_size(&self, model: &Model) -> DVec2 {
        self.camera.canvas_size(model.room())
    }

    /// Draw geometry for every item, in insertion order (paint back to
    /// front so overlap matches the hit-test tie-break).
    #[must_use]
    pub fn furniture_rects<'a>(&self, model: &'a Model) -> Vec<PlanRect<'a>> {
        let room = model.room();
        let selection = model.selection();
        model
            .furniture()
            .iter()
            .map(|item| {
                let half = item.half_extents();
                let world = DVec2::new(item.position.x, item.position.z);
                PlanRect {
                    id: item.id,
                    center: self.camera.world_to_screen(room, world),
                    size: DVec2::new(
                        self.camera.world_dist_to_screen(half.x * 2.0),
                        self.camera.world_dist_to_screen(half.y * 2.0),
                    ),
                    rotation: item.rotation,
                    color: &item.color,
                    selected: selection == Some(item.id),
                }
            })
            .collect()
    }
}
