//! Drag controller: the press/drag/release state machine shared by both
//! views.
//!
//! The controller owns the active drag session and routes every candidate
//! position through [`Model::attempt_move`], so the bounds invariant holds
//! no matter which view produced the input or at what cadence. At most one
//! session is active at a time; presses during a session are ignored.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use glam::DVec2;

use crate::hit::hit_test;
use crate::model::{FurnitureId, Model};

/// Interaction state for the shared drag session.
///
/// `Selected` and `Dragging` carry the id of the item they refer to, which
/// always matches the model's selection while the controller is driven
/// through its own methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Nothing selected; waiting for the next press.
    #[default]
    Idle,
    /// An item is selected but not being moved.
    Selected(FurnitureId),
    /// An item is actively following the pointer.
    Dragging(FurnitureId),
}

/// State machine driving selection and drag sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create a controller in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current interaction state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Handle a pointer press at a world-space `(x, z)` point.
    ///
    /// Hit on an item: selects it, or starts a drag session when the item was
    /// already selected. Miss: clears the selection. Presses while a session
    /// is active are ignored; the session stays exclusive.
    pub fn press(&mut self, model: &mut Model, world: DVec2) {
        let hit = hit_test(world, model.furniture());
        match (self.state, hit) {
            (DragState::Dragging(_), _) => {}
            (DragState::Selected(current), Some(id)) if id == current => {
                self.state = DragState::Dragging(id);
            }
            (_, Some(id)) => {
                model.set_selection(Some(id));
                self.state = DragState::Selected(id);
            }
            (_, None) => {
                model.set_selection(None);
                self.state = DragState::Idle;
            }
        }
    }

    /// Feed a world-space candidate position into the active drag session.
    ///
    /// No-op unless a session is active. The candidate is clamped by the
    /// model; a later call always overwrites an earlier one.
    pub fn drag_to(&mut self, model: &mut Model, world: DVec2) {
        if let DragState::Dragging(id) = self.state {
            model.attempt_move(id, world);
        }
    }

    /// End the active drag session, keeping the item selected. No-op when no
    /// session is active.
    pub fn release(&mut self) {
        if let DragState::Dragging(id) = self.state {
            self.state = DragState::Selected(id);
        }
    }

    /// Abort the active drag session (pointer-cancel or pointer-leave). The
    /// item keeps its last clamped position and stays selected; there is no
    /// resume.
    pub fn cancel(&mut self) {
        self.release();
    }

    /// Reconcile the controller with a selection changed outside the pointer
    /// path (property panel, deletion). Ends the session unless the same
    /// item remains selected mid-drag.
    pub fn sync_selection(&mut self, selection: Option<FurnitureId>) {
        self.state = match (self.state, selection) {
            (DragState::Dragging(current), Some(id)) if id == current => {
                DragState::Dragging(current)
            }
            (_, Some(id)) => DragState::Selected(id),
            (_, None) => DragState::Idle,
        };
    }
}
