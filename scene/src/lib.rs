//! Spatial interaction engine for the room designer.
//!
//! This crate owns everything two synchronized views of one room need to
//! agree on: the canonical furniture model, hit-testing, the drag state
//! machine, coordinate conversions for both the top-down floor plan and the
//! perspective view, and bounds clamping against the room walls. Hosts wire
//! raw pointer events from their surfaces into a [`session::Session`] and
//! read back draw geometry and snapshots; the engine never touches a screen
//! itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Facade wiring the model, drag state, and both views |
//! | [`model`] | Canonical room/furniture state and persisted snapshot shape |
//! | [`camera`] | Plan and perspective cameras and coordinate conversions |
//! | [`hit`] | Footprint hit-testing over the furniture list |
//! | [`drag`] | Press/drag/release state machine shared by both views |
//! | [`plan`] | Floor-plan view adapter (event-driven, pixel space) |
//! | [`space`] | Perspective view adapter (frame loop, pointer rays) |
//! | [`consts`] | Shared numeric constants (defaults, edit ranges, cameras) |

pub mod camera;
pub mod consts;
pub mod drag;
pub mod hit;
pub mod model;
pub mod plan;
pub mod session;
pub mod space;
