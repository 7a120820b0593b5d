//! Coordinate transforms: the floor-plan pixel mapping and the perspective
//! camera with its pointer-ray construction.
//!
//! Two independent, pure mapping pairs. The floor plan is a direct affine
//! transform between pixels and meters with no projection or depth. The
//! perspective side projects world points through a pinhole view-projection
//! matrix; the inverse direction needed for dragging is not a matrix inverse
//! but a ray through the pointer's normalized device coordinates intersected
//! with a horizontal plane.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use glam::{DMat4, DVec2, DVec3};

use crate::consts;
use crate::model::Room;

/// Floor-plan mapping between screen pixels and world meters.
///
/// The plan's pixel origin is the room's `(-width/2, -depth/2)` corner;
/// pixel `y` runs along world `z`.
#[derive(Debug, Clone, Copy)]
pub struct PlanCamera {
    /// Scale in pixels per meter.
    pub scale: f64,
}

impl Default for PlanCamera {
    fn default() -> Self {
        Self { scale: consts::PLAN_SCALE }
    }
}

impl PlanCamera {
    /// Convert a screen-space point (pixels) to world `(x, z)` meters.
    #[must_use]
    pub fn screen_to_world(&self, room: Room, screen: DVec2) -> DVec2 {
        DVec2::new(
            screen.x / self.scale - room.width / 2.0,
            screen.y / self.scale - room.depth / 2.0,
        )
    }

    /// Convert a world `(x, z)` point to screen coordinates (pixels).
    #[must_use]
    pub fn world_to_screen(&self, room: Room, world: DVec2) -> DVec2 {
        DVec2::new(
            (world.x + room.width / 2.0) * self.scale,
            (world.y + room.depth / 2.0) * self.scale,
        )
    }

    /// Convert a world-space distance (meters) to screen pixels.
    #[must_use]
    pub fn world_dist_to_screen(&self, world_dist: f64) -> f64 {
        world_dist * self.scale
    }

    /// Pixel dimensions of the full plan canvas for the given room.
    #[must_use]
    pub fn canvas_size(&self, room: Room) -> DVec2 {
        DVec2::new(room.width * self.scale, room.depth * self.scale)
    }
}

/// A world-space ray cast from the perspective camera through the pointer.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray start point (the camera eye).
    pub origin: DVec3,
    /// Normalized direction.
    pub direction: DVec3,
}

impl Ray {
    /// Intersect the ray with the horizontal plane `y = plane_y` and return
    /// the hit as world `(x, z)`.
    ///
    /// Returns `None` when the ray runs parallel to the plane or the
    /// intersection lies behind the camera; callers skip that sample instead
    /// of propagating an undefined position.
    #[must_use]
    pub fn intersect_floor(&self, plane_y: f64) -> Option<DVec2> {
        if self.direction.y.abs() < consts::RAY_EPSILON {
            return None;
        }
        let t = (plane_y - self.origin.y) / self.direction.y;
        if t <= 0.0 {
            return None;
        }
        let hit = self.origin + self.direction * t;
        Some(DVec2::new(hit.x, hit.z))
    }
}

/// Perspective (pinhole) camera for the 3D view.
#[derive(Debug, Clone, Copy)]
pub struct SpaceCamera {
    /// Eye position in world meters.
    pub eye: DVec3,
    /// Look-at target in world meters.
    pub target: DVec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f64,
}

impl Default for SpaceCamera {
    fn default() -> Self {
        Self {
            eye: consts::CAMERA_EYE,
            target: DVec3::ZERO,
            fov_y_deg: consts::CAMERA_FOV_Y_DEG,
        }
    }
}

impl SpaceCamera {
    /// The combined view-projection matrix for the given viewport aspect.
    #[must_use]
    pub fn view_projection(&self, aspect: f64) -> DMat4 {
        let projection = DMat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            aspect,
            consts::CAMERA_Z_NEAR,
            consts::CAMERA_Z_FAR,
        );
        let view = DMat4::look_at_rh(self.eye, self.target, DVec3::Y);
        projection * view
    }

    /// Build the world-space ray through a pointer position given in
    /// normalized device coordinates (`x`, `y` in `[-1, 1]`, `y` up).
    ///
    /// Unprojects the NDC point on the far plane through the inverse
    /// view-projection and aims from the eye through it. Returns `None` only
    /// for degenerate camera setups where the direction collapses.
    #[must_use]
    pub fn ndc_ray(&self, ndc: DVec2, aspect: f64) -> Option<Ray> {
        let inverse = self.view_projection(aspect).inverse();
        let far = inverse.project_point3(DVec3::new(ndc.x, ndc.y, 1.0));
        let direction = (far - self.eye).normalize();
        if !direction.is_finite() {
            return None;
        }
        Some(Ray { origin: self.eye, direction })
    }

    /// Project a world point into normalized device coordinates.
    ///
    /// Returns `None` for points at or behind the eye plane, where the
    /// perspective divide is meaningless.
    #[must_use]
    pub fn world_to_ndc(&self, world: DVec3, aspect: f64) -> Option<DVec3> {
        let clip = self.view_projection(aspect) * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}
