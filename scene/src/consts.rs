//! Shared numeric constants for the scene crate.

use glam::DVec3;

// ── Furniture defaults ──────────────────────────────────────────

/// Side length of a chair's square footprint, in meters.
pub const CHAIR_FOOTPRINT: f64 = 0.5;

/// Default chair color (saddle brown).
pub const CHAIR_COLOR: &str = "#8B4513";

/// Default table color (sienna).
pub const TABLE_COLOR: &str = "#A0522D";

/// Default table size as `(width, thickness, depth)` in meters.
/// Thickness is cosmetic only; width and depth define the footprint.
pub const TABLE_SIZE: DVec3 = DVec3::new(1.5, 0.05, 1.0);

// ── Room defaults ───────────────────────────────────────────────

/// Default room dimensions as `(width, height, depth)` in meters.
pub const ROOM_SIZE: DVec3 = DVec3::new(5.0, 3.0, 5.0);

/// Default wall color.
pub const WALL_COLOR: &str = "#f5f5f5";

/// Default floor color.
pub const FLOOR_COLOR: &str = "#e0e0e0";

/// Default ambient light intensity.
pub const LIGHT_INTENSITY: f64 = 1.0;

// ── Edit ranges ─────────────────────────────────────────────────

/// Minimum room width/depth accepted by dimension edits, in meters.
pub const ROOM_SPAN_MIN: f64 = 2.0;

/// Maximum room width/depth accepted by dimension edits, in meters.
pub const ROOM_SPAN_MAX: f64 = 10.0;

/// Minimum room height accepted by dimension edits, in meters.
pub const ROOM_HEIGHT_MIN: f64 = 2.0;

/// Maximum room height accepted by dimension edits, in meters.
pub const ROOM_HEIGHT_MAX: f64 = 5.0;

/// Minimum table width/depth accepted by size edits, in meters.
pub const TABLE_SPAN_MIN: f64 = 0.5;

/// Maximum table width/depth accepted by size edits, in meters.
pub const TABLE_SPAN_MAX: f64 = 3.0;

/// Minimum ambient light intensity.
pub const LIGHT_MIN: f64 = 0.1;

/// Maximum ambient light intensity.
pub const LIGHT_MAX: f64 = 2.0;

// ── Cameras ─────────────────────────────────────────────────────

/// Floor-plan scale in pixels per meter.
pub const PLAN_SCALE: f64 = 50.0;

/// Default perspective camera eye position, in meters.
pub const CAMERA_EYE: DVec3 = DVec3::new(0.0, 2.0, 5.0);

/// Default perspective camera vertical field of view, in degrees.
pub const CAMERA_FOV_Y_DEG: f64 = 50.0;

/// Perspective projection near plane, in meters.
pub const CAMERA_Z_NEAR: f64 = 0.1;

/// Perspective projection far plane, in meters.
pub const CAMERA_Z_FAR: f64 = 1000.0;

/// Direction components smaller than this are treated as parallel to the
/// floor plane when intersecting pointer rays.
pub const RAY_EPSILON: f64 = 1e-6;
