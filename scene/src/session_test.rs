#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use std::f64::consts::{PI, TAU};

use super::*;
use crate::model::{FurnitureItem, Room};

const EPSILON: f64 = 1e-9;

const VIEWPORT: DVec2 = DVec2::new(800.0, 600.0);
const SPACE_CENTER: DVec2 = DVec2::new(400.0, 300.0);
const PLAN_CENTER: DVec2 = DVec2::new(125.0, 125.0);

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Distance between two angles on the circle.
fn angle_dist(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

fn rotation_of(session: &Session, id: FurnitureId) -> f64 {
    session.model().item(id).unwrap().rotation
}

fn position_of(session: &Session, id: FurnitureId) -> DVec3 {
    session.model().item(id).unwrap().position
}

/// One chair at the origin of the default room, deselected, perspective
/// viewport set.
fn chair_session() -> (Session, FurnitureId) {
    let mut session = Session::new();
    let id = session.add_furniture(FurnitureKind::Chair);
    session.select(None);
    session.set_space_viewport(VIEWPORT);
    (session, id)
}

// ============ Lifecycle ============

#[test]
fn new_session_is_empty_and_idle() {
    let session = Session::new();

    assert!(session.model().furniture().is_empty());
    assert_eq!(session.selection(), None);
    assert_eq!(session.drag_state(), DragState::Idle);
    assert_eq!(session.model().room().width, 5.0);
    assert_eq!(session.plan_canvas_size(), DVec2::new(250.0, 250.0));
}

#[test]
fn from_design_round_trips_unchanged() {
    let data = DesignData {
        room_size: [6.0, 3.0, 4.0],
        wall_color: "#ffffff".to_string(),
        floor_color: "#cccccc".to_string(),
        furniture: vec![FurnitureItem {
            id: 3,
            kind: FurnitureKind::Table,
            position: DVec3::new(1.0, 0.0, -1.0),
            rotation: PI / 2.0,
            color: "#A0522D".to_string(),
            size: Some(DVec3::new(2.0, 0.05, 1.0)),
        }],
        light_intensity: 0.8,
    };

    let session = Session::from_design(&data);

    assert_eq!(session.selection(), None);
    assert_eq!(session.drag_state(), DragState::Idle);
    assert_eq!(session.to_design(), data);
}

#[test]
fn load_design_resets_interaction_but_keeps_surfaces() {
    let (mut session, _) = chair_session();
    session.plan_pointer_down(PLAN_CENTER);
    session.plan_pointer_down(PLAN_CENTER);
    assert!(matches!(session.drag_state(), DragState::Dragging(_)));

    session.load_design(&DesignData::default());

    assert_eq!(session.drag_state(), DragState::Idle);
    assert!(session.model().furniture().is_empty());
    assert_eq!(session.space().viewport(), VIEWPORT);
}

// ============ Cross-view interaction ============

#[test]
fn plan_selection_arms_a_space_drag() {
    // Both surface centers land on the chair at the origin, so selecting on
    // the plan and pressing again in the perspective view starts a drag.
    let (mut session, id) = chair_session();

    session.plan_pointer_down(PLAN_CENTER);
    assert_eq!(session.drag_state(), DragState::Selected(id));

    session.space_pointer_down(SPACE_CENTER);
    assert_eq!(session.drag_state(), DragState::Dragging(id));
}

#[test]
fn drag_stays_exclusive_across_views() {
    let (mut session, id) = chair_session();
    session.plan_pointer_down(PLAN_CENTER);
    session.plan_pointer_down(PLAN_CENTER);

    // A press on the other surface mid-drag changes nothing.
    session.space_pointer_down(DVec2::new(700.0, 300.0));

    assert_eq!(session.drag_state(), DragState::Dragging(id));
    assert_eq!(session.selection(), Some(id));
}

#[test]
fn space_drag_shows_up_in_plan_geometry() {
    let (mut session, id) = chair_session();
    session.space_pointer_down(SPACE_CENTER);
    session.space_pointer_down(SPACE_CENTER);
    session.space_pointer_move(DVec2::new(500.0, 300.0));

    session.space_tick();

    assert!(position_of(&session, id).x > 0.0);
    let rects = session.plan_rects();
    assert_eq!(rects.len(), 1);
    assert!(rects[0].center.x > 125.0);
    assert!(rects[0].selected);
}

#[test]
fn empty_plan_press_clears_space_selection() {
    let (mut session, id) = chair_session();
    session.space_pointer_down(SPACE_CENTER);
    assert_eq!(session.selection(), Some(id));

    session.plan_pointer_down(DVec2::new(20.0, 20.0));

    assert_eq!(session.selection(), None);
    assert_eq!(session.drag_state(), DragState::Idle);
}

#[test]
fn pointer_lifecycle_forwards_per_surface() {
    let (mut session, id) = chair_session();

    session.plan_pointer_down(PLAN_CENTER);
    session.plan_pointer_down(PLAN_CENTER);
    session.plan_pointer_move(DVec2::new(175.0, 175.0));
    assert!(approx_eq(position_of(&session, id).x, 1.0));
    assert!(approx_eq(position_of(&session, id).z, 1.0));

    session.plan_pointer_up();
    assert_eq!(session.drag_state(), DragState::Selected(id));

    session.space_pointer_down(SPACE_CENTER);
    // Pointer runs off the surface mid-drag; the session ends cleanly.
    session.space_pointer_leave();
    assert_eq!(session.drag_state(), DragState::Selected(id));
    assert_eq!(session.space().pointer(), None);
}

// ============ External selection ============

#[test]
fn select_syncs_the_drag_state() {
    let (mut session, id) = chair_session();

    session.select(Some(id));
    assert_eq!(session.selection(), Some(id));
    assert_eq!(session.drag_state(), DragState::Selected(id));

    session.select(None);
    assert_eq!(session.selection(), None);
    assert_eq!(session.drag_state(), DragState::Idle);
}

#[test]
fn selecting_unknown_id_keeps_current_selection() {
    let (mut session, id) = chair_session();
    session.select(Some(id));

    session.select(Some(99));

    assert_eq!(session.selection(), Some(id));
    assert_eq!(session.drag_state(), DragState::Selected(id));
}

#[test]
fn deleting_selected_item_clears_selection_and_state() {
    let (mut session, id) = chair_session();
    session.select(Some(id));

    assert!(session.delete_furniture(id));

    assert_eq!(session.selection(), None);
    assert_eq!(session.drag_state(), DragState::Idle);
    assert!(session.model().furniture().is_empty());
}

#[test]
fn deleting_other_item_keeps_selection() {
    let (mut session, a) = chair_session();
    let b = session.add_furniture(FurnitureKind::Table);
    session.select(Some(a));

    assert!(session.delete_furniture(b));

    assert_eq!(session.selection(), Some(a));
    assert_eq!(session.drag_state(), DragState::Selected(a));
}

#[test]
fn deleting_dragged_item_ends_the_session() {
    let (mut session, id) = chair_session();
    session.plan_pointer_down(PLAN_CENTER);
    session.plan_pointer_down(PLAN_CENTER);

    assert!(session.delete_furniture(id));

    assert_eq!(session.drag_state(), DragState::Idle);
}

#[test]
fn deleting_unknown_id_is_a_noop() {
    let (mut session, id) = chair_session();
    session.select(Some(id));

    assert!(!session.delete_furniture(99));

    assert_eq!(session.selection(), Some(id));
}

// ============ Property edits ============

#[test]
fn room_size_clamps_to_allowed_ranges() {
    let (mut session, _) = chair_session();

    session.set_room_size(1.0, 1.0, 20.0);

    let room = session.model().room();
    assert_eq!(room.width, 2.0);
    assert_eq!(room.height, 2.0);
    assert_eq!(room.depth, 10.0);
}

#[test]
fn room_resize_reclamps_items() {
    let (mut session, id) = chair_session();
    assert!(session.move_furniture(id, DVec2::new(10.0, 10.0)));
    assert!(approx_eq(position_of(&session, id).x, 2.25));

    session.set_room_size(4.0, 3.0, 4.0);

    let position = position_of(&session, id);
    assert!(approx_eq(position.x, 1.75));
    assert!(approx_eq(position.z, 1.75));
    assert_eq!(position.y, 0.0);
}

#[test]
fn room_size_rejects_non_finite_dimensions() {
    let (mut session, _) = chair_session();

    session.set_room_size(f64::NAN, 3.0, 5.0);

    assert_eq!(session.model().room(), Room::default());
}

#[test]
fn light_intensity_clamps_and_rejects_non_finite() {
    let (mut session, _) = chair_session();

    session.set_light_intensity(5.0);
    assert_eq!(session.model().light_intensity(), 2.0);

    session.set_light_intensity(0.0);
    assert_eq!(session.model().light_intensity(), 0.1);

    session.set_light_intensity(f64::NAN);
    assert_eq!(session.model().light_intensity(), 0.1);
}

#[test]
fn appearance_edits_flow_into_the_snapshot() {
    let (mut session, _) = chair_session();

    session.set_wall_color("#112233".to_string());
    session.set_floor_color("#445566".to_string());

    let data = session.to_design();
    assert_eq!(data.wall_color, "#112233");
    assert_eq!(data.floor_color, "#445566");
}

#[test]
fn rotation_edits_convert_degrees_to_normalized_radians() {
    let (mut session, id) = chair_session();

    assert!(session.set_rotation_degrees(id, 180.0));
    assert!(approx_eq(rotation_of(&session, id), PI));

    // A full turn lands back at zero on the circle.
    assert!(session.set_rotation_degrees(id, 450.0));
    assert!(angle_dist(rotation_of(&session, id), 0.0) < EPSILON);

    assert!(session.set_rotation_degrees(id, -90.0));
    assert_eq!(rotation_of(&session, id), 0.0);

    assert!(!session.set_rotation_degrees(99, 45.0));

    assert!(session.set_rotation_degrees(id, 90.0));
    assert!(!session.set_rotation_degrees(id, f64::NAN));
    assert!(approx_eq(rotation_of(&session, id), PI / 2.0));
}

#[test]
fn table_span_clamps_and_pins_thickness() {
    let (mut session, _) = chair_session();
    let table = session.add_furniture(FurnitureKind::Table);

    assert!(session.set_table_span(table, 5.0, 0.1));

    let size = session.model().item(table).unwrap().size.unwrap();
    assert_eq!(size, DVec3::new(3.0, 0.05, 0.5));
}

#[test]
fn table_span_rejects_chairs_unknown_ids_and_non_finite() {
    let (mut session, chair) = chair_session();
    let table = session.add_furniture(FurnitureKind::Table);

    assert!(!session.set_table_span(chair, 2.0, 2.0));
    assert_eq!(session.model().item(chair).unwrap().size, None);

    assert!(!session.set_table_span(99, 2.0, 2.0));
    assert!(!session.set_table_span(table, f64::NAN, 2.0));
    assert_eq!(
        session.model().item(table).unwrap().size,
        Some(DVec3::new(1.5, 0.05, 1.0))
    );
}

#[test]
fn growing_a_table_pushes_it_off_the_wall() {
    let (mut session, _) = chair_session();
    let table = session.add_furniture(FurnitureKind::Table);
    assert!(session.move_furniture(table, DVec2::new(10.0, 0.0)));
    assert!(approx_eq(position_of(&session, table).x, 1.75));

    assert!(session.set_table_span(table, 3.0, 1.0));

    assert!(approx_eq(position_of(&session, table).x, 1.0));
}

#[test]
fn move_furniture_clamps_and_reports() {
    let (mut session, id) = chair_session();

    assert!(session.move_furniture(id, DVec2::new(10.0, -10.0)));
    let position = position_of(&session, id);
    assert!(approx_eq(position.x, 2.25));
    assert!(approx_eq(position.z, -2.25));

    assert!(!session.move_furniture(99, DVec2::new(0.0, 0.0)));
    assert!(!session.move_furniture(id, DVec2::new(f64::NAN, 0.0)));
    assert!(approx_eq(position_of(&session, id).x, 2.25));
}

#[test]
fn update_furniture_forwards_sparse_edits() {
    let (mut session, id) = chair_session();

    let applied = session.update_furniture(
        id,
        &PartialFurniture {
            color: Some("#123456".to_string()),
            ..PartialFurniture::default()
        },
    );

    assert!(applied);
    assert_eq!(session.model().item(id).unwrap().color, "#123456");
    assert!(!session.update_furniture(99, &PartialFurniture::default()));
}

#[test]
fn update_clamps_sizes_to_the_editable_span() {
    let mut session = Session::new();
    let table = session.add_furniture(FurnitureKind::Table);

    let applied = session.update_furniture(
        table,
        &PartialFurniture {
            size: Some(DVec3::new(9.0, 0.05, 9.0)),
            ..PartialFurniture::default()
        },
    );

    assert!(applied);
    assert_eq!(
        session.model().item(table).unwrap().size,
        Some(DVec3::new(3.0, 0.05, 3.0))
    );
}

// ============ Adding items ============

#[test]
fn added_items_become_the_selection() {
    let mut session = Session::new();

    let first = session.add_furniture(FurnitureKind::Table);
    assert_eq!(first, 1);
    assert_eq!(session.selection(), Some(first));
    assert_eq!(session.drag_state(), DragState::Selected(first));

    let second = session.add_furniture(FurnitureKind::Chair);
    assert_eq!(session.selection(), Some(second));
    assert_eq!(session.drag_state(), DragState::Selected(second));
}

#[test]
fn adding_mid_drag_moves_selection_to_the_new_item() {
    let (mut session, id) = chair_session();
    session.plan_pointer_down(PLAN_CENTER);
    session.plan_pointer_down(PLAN_CENTER);
    assert_eq!(session.drag_state(), DragState::Dragging(id));

    let table = session.add_furniture(FurnitureKind::Table);

    assert_eq!(session.selection(), Some(table));
    assert_eq!(session.drag_state(), DragState::Selected(table));
}
