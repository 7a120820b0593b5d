//! Perspective view adapter: pointer-ray sampling on a continuous frame
//! loop.
//!
//! The 3D surface renders every frame and reports raw pointer pixels; while
//! a drag session is active the adapter resamples the pointer ray once per
//! [`SpaceView::tick`] so the dragged item tracks the pointer even without
//! new input events. A ray that misses the floor plane (horizon-parallel or
//! behind the camera) skips that tick; the item holds its last clamped
//! position and the session stays active.

#[cfg(test)]
#[path = "space_test.rs"]
mod space_test;

use glam::{DVec2, DVec3};

use crate::camera::{Ray, SpaceCamera};
use crate::drag::{DragController, DragState};
use crate::model::Model;

/// Height of the plane presses are resolved against; items rest on the floor.
const PRESS_PLANE_Y: f64 = 0.0;

/// Frame-driven adapter between the 3D surface and the core engine.
#[derive(Debug, Clone, Copy)]
pub struct SpaceView {
    /// Perspective camera the surface renders with.
    pub camera: SpaceCamera,
    viewport: DVec2,
    pointer: Option<DVec2>,
}

impl Default for SpaceView {
    fn default() -> Self {
        Self {
            camera: SpaceCamera::default(),
            viewport: DVec2::ZERO,
            pointer: None,
        }
    }
}

impl SpaceView {
    /// Create an adapter with the default camera and an unset viewport. The
    /// host must call [`Self::set_viewport`] before pointer input can map to
    /// rays.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the surface dimensions in pixels.
    pub fn set_viewport(&mut self, size: DVec2) {
        self.viewport = size;
    }

    /// Current surface dimensions in pixels.
    #[must_use]
    pub fn viewport(&self) -> DVec2 {
        self.viewport
    }

    /// Last reported pointer position in pixels, if the pointer is over the
    /// surface.
    #[must_use]
    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    /// Handle a pointer press at surface pixel coordinates. The press point
    /// is resolved against the floor plane; if the ray misses, the press is
    /// dropped entirely.
    pub fn pointer_down(&mut self, model: &mut Model, drag: &mut DragController, screen: DVec2) {
        self.pointer = Some(screen);
        let Some(ray) = self.pointer_ray(screen) else {
            return;
        };
        let Some(world) = ray.intersect_floor(PRESS_PLANE_Y) else {
            return;
        };
        drag.press(model, world);
    }

    /// Record the pointer position. The model is deliberately untouched
    /// here; [`Self::tick`] resamples the stored position every frame.
    pub fn pointer_move(&mut self, screen: DVec2) {
        self.pointer = Some(screen);
    }

    /// Handle pointer release.
    pub fn pointer_up(&self, drag: &mut DragController) {
        drag.release();
    }

    /// Handle the pointer leaving the surface; ends any drag session and
    /// forgets the pointer so stale positions cannot drive later ticks.
    pub fn pointer_leave(&mut self, drag: &mut DragController) {
        drag.cancel();
        self.pointer = None;
    }

    /// Per-frame callback. A deterministic no-op unless a drag session is
    /// active; otherwise resamples the pointer ray against the dragged
    /// item's resting plane and feeds the hit into the session. Any failure
    /// along the way skips the tick without ending the session.
    pub fn tick(&self, model: &mut Model, drag: &mut DragController) {
        let DragState::Dragging(id) = drag.state() else {
            return;
        };
        let Some(pointer) = self.pointer else {
            return;
        };
        let Some(plane_y) = model.item(id).map(|item| item.position.y) else {
            return;
        };
        let Some(ray) = self.pointer_ray(pointer) else {
            return;
        };
        let Some(world) = ray.intersect_floor(plane_y) else {
            return;
        };
        drag.drag_to(model, world);
    }

    /// Build the world-space ray under a pixel position, if the viewport is
    /// usable.
    #[must_use]
    pub fn pointer_ray(&self, screen: DVec2) -> Option<Ray> {
        let ndc = self.pixel_to_ndc(screen)?;
        self.camera.ndc_ray(ndc, self.aspect())
    }

    /// Project a world point to surface pixels. `None` for points behind
    /// the camera or before the viewport is set.
    #[must_use]
    pub fn world_to_screen(&self, world: DVec3) -> Option<DVec2> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }
        let ndc = self.camera.world_to_ndc(world, self.aspect())?;
        Some(DVec2::new(
            (ndc.x + 1.0) / 2.0 * self.viewport.x,
            (1.0 - ndc.y) / 2.0 * self.viewport.y,
        ))
    }

    fn pixel_to_ndc(&self, screen: DVec2) -> Option<DVec2> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }
        Some(DVec2::new(
            screen.x / self.viewport.x * 2.0 - 1.0,
            1.0 - screen.y / self.viewport.y * 2.0,
        ))
    }

    fn aspect(&self) -> f64 {
        if self.viewport.y <= 0.0 {
            1.0
        } else {
            self.viewport.x / self.viewport.y
        }
    }
}
