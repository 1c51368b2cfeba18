//! Drag gesture tests driven through pointer signals.

use crate::helpers::{TestEditorBuilder, drag, position_of};
use moodboard::geometry::Point;
use moodboard::input::{DragEndReason, InputOutcome, PointerButton, PointerEvent};
use moodboard::settings::Settings;

#[test]
fn test_drag_follows_pointer_minus_offset() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("Hello", (50.0, 50.0))
        .build_with_ids();

    let outcome = editor.handle_pointer_down(PointerEvent::at(60.0, 60.0));
    assert_eq!(outcome, InputOutcome::DragStarted(ids[0]));
    assert_eq!(editor.input_state().session().unwrap().offset(), Point::new(10.0, 10.0));

    let outcome = editor.handle_pointer_move(PointerEvent::at(110.0, 160.0));
    assert_eq!(
        outcome,
        InputOutcome::Moved {
            item_id: ids[0],
            position: Point::new(100.0, 150.0)
        }
    );

    editor.handle_pointer_up(PointerEvent::at(110.0, 160.0));
    assert_eq!(position_of(&editor, ids[0]), Point::new(100.0, 150.0));
    assert!(!editor.is_dragging());
}

#[test]
fn test_drag_accounts_for_surface_origin() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface_at((100.0, 40.0), 800.0, 600.0)
        .with_text_item("Hello", (50.0, 50.0))
        .build_with_ids();

    drag(&mut editor, (160.0, 100.0), &[(210.0, 200.0)]);
    assert_eq!(position_of(&editor, ids[0]), Point::new(100.0, 150.0));
}

#[test]
fn test_press_without_move_leaves_item_in_place() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_note_item("Body", (120.0, 80.0))
        .build_with_ids();

    drag(&mut editor, (130.0, 90.0), &[]);
    assert_eq!(position_of(&editor, ids[0]), Point::new(120.0, 80.0));
    assert_eq!(editor.selected_item(), Some(ids[0]));
}

#[test]
fn test_drag_never_goes_negative() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("Hello", (50.0, 50.0))
        .build_with_ids();

    drag(&mut editor, (60.0, 60.0), &[(-200.0, -50.0)]);
    assert_eq!(position_of(&editor, ids[0]), Point::new(0.0, 0.0));
}

#[test]
fn test_drag_is_clamped_to_known_surface() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("Hello", (50.0, 50.0))
        .build_with_ids();

    drag(&mut editor, (60.0, 60.0), &[(2000.0, 2000.0)]);
    // Text items are 200x50
    assert_eq!(position_of(&editor, ids[0]), Point::new(600.0, 550.0));
}

#[test]
fn test_drag_without_surface_only_clamps_lower_bound() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_text_item("Hello", (50.0, 50.0))
        .build_with_ids();

    drag(&mut editor, (60.0, 60.0), &[(2010.0, 3010.0)]);
    assert_eq!(position_of(&editor, ids[0]), Point::new(2000.0, 3000.0));
}

#[test]
fn test_clamping_can_be_disabled() {
    let settings = Settings {
        clamp_to_surface: false,
        ..Settings::default()
    };
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_settings(settings)
        .with_surface(800.0, 600.0)
        .with_text_item("Hello", (50.0, 50.0))
        .build_with_ids();

    drag(&mut editor, (60.0, 60.0), &[(1010.0, 60.0)]);
    assert_eq!(position_of(&editor, ids[0]), Point::new(1000.0, 50.0));
}

#[test]
fn test_only_dragged_item_moves() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (0.0, 0.0))
        .with_text_item("B", (300.0, 300.0))
        .build_with_ids();

    drag(&mut editor, (10.0, 10.0), &[(20.0, 20.0), (40.0, 30.0)]);
    assert_eq!(position_of(&editor, ids[0]), Point::new(30.0, 20.0));
    assert_eq!(position_of(&editor, ids[1]), Point::new(300.0, 300.0));
}

#[test]
fn test_moves_while_idle_are_ignored() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .build_with_ids();

    assert_eq!(editor.handle_pointer_move(PointerEvent::at(500.0, 500.0)), InputOutcome::Ignored);
    assert_eq!(position_of(&editor, ids[0]), Point::new(50.0, 50.0));
}

#[test]
fn test_release_outside_surface_ends_drag() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .build_with_ids();

    editor.handle_pointer_down(PointerEvent::at(60.0, 60.0));
    editor.handle_pointer_move(PointerEvent::at(5000.0, 60.0));
    let outcome = editor.handle_pointer_up(PointerEvent::at(5000.0, 60.0));
    assert_eq!(outcome, InputOutcome::DragEnded(ids[0]));

    // Later moves no longer reach the item
    let before = position_of(&editor, ids[0]);
    editor.handle_pointer_move(PointerEvent::at(100.0, 100.0));
    assert_eq!(position_of(&editor, ids[0]), before);
}

#[test]
fn test_focus_loss_ends_drag() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .build_with_ids();

    editor.handle_pointer_down(PointerEvent::at(60.0, 60.0));
    editor.handle_pointer_move(PointerEvent::at(70.0, 70.0));
    assert_eq!(editor.handle_focus_lost(), InputOutcome::DragEnded(ids[0]));
    assert!(!editor.is_dragging());

    editor.handle_pointer_move(PointerEvent::at(400.0, 400.0));
    assert_eq!(position_of(&editor, ids[0]), Point::new(60.0, 60.0));
}

#[test]
fn test_capture_loss_ends_drag() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .build_with_ids();

    editor.handle_pointer_down(PointerEvent::at(60.0, 60.0));
    assert_eq!(editor.handle_pointer_capture_lost(), InputOutcome::DragEnded(ids[0]));
    assert_eq!(editor.handle_pointer_capture_lost(), InputOutcome::Ignored);
}

#[test]
fn test_drag_end_reasons_release_the_session() {
    let mut state = moodboard::input::InputState::default();
    for reason in [
        DragEndReason::PointerUp,
        DragEndReason::FocusLost,
        DragEndReason::CaptureLost,
        DragEndReason::Cancelled,
        DragEndReason::ItemDeleted,
    ] {
        state.start_dragging(7, Point::default(), Point::default());
        let end = state.end_drag(reason).unwrap();
        assert_eq!(end.reason, reason);
        assert!(state.is_idle());
    }
}

#[test]
fn test_non_primary_button_is_ignored() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .build_with_ids();

    let event = PointerEvent::at(60.0, 60.0).with_button(PointerButton::Secondary);
    assert_eq!(editor.handle_pointer_down(event), InputOutcome::Ignored);
    assert!(!editor.is_dragging());
    assert_eq!(editor.selected_item(), None);
}

#[test]
fn test_press_on_control_region_does_nothing() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .with_text_item("B", (400.0, 400.0))
        .build_with_ids();
    editor.select(Some(ids[1]));

    let outcome = editor.handle_pointer_down(PointerEvent::at(60.0, 60.0).on_control());
    assert_eq!(outcome, InputOutcome::Ignored);
    assert!(!editor.is_dragging());
    assert_eq!(editor.selected_item(), Some(ids[1]));
}

#[test]
fn test_background_press_clears_selection() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .build_with_ids();
    editor.select(Some(ids[0]));

    assert_eq!(
        editor.handle_pointer_down(PointerEvent::at(700.0, 500.0)),
        InputOutcome::SelectionCleared
    );
    assert_eq!(editor.selected_item(), None);
    assert_eq!(editor.handle_pointer_down(PointerEvent::at(700.0, 500.0)), InputOutcome::Ignored);
}

#[test]
fn test_escape_cancels_drag_and_restores_origin() {
    use moodboard::input::{Key, KeyEvent, Modifiers};

    let (mut editor, ids) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .build_with_ids();

    editor.handle_pointer_down(PointerEvent::at(60.0, 60.0));
    editor.handle_pointer_move(PointerEvent::at(300.0, 300.0));
    let outcome = editor.handle_key_down(KeyEvent::new(Key::Escape, Modifiers::NONE));
    assert_eq!(outcome, InputOutcome::DragEnded(ids[0]));
    assert_eq!(position_of(&editor, ids[0]), Point::new(50.0, 50.0));
    assert!(!editor.is_dragging());
}

#[test]
fn test_snap_on_release() {
    let settings = Settings {
        snap_on_release: true,
        grid_size: 10.0,
        ..Settings::default()
    };
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_settings(settings)
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .build_with_ids();

    editor.handle_pointer_down(PointerEvent::at(60.0, 60.0));
    editor.handle_pointer_move(PointerEvent::at(73.0, 86.0));
    assert_eq!(position_of(&editor, ids[0]), Point::new(63.0, 76.0));
    editor.handle_pointer_up(PointerEvent::at(73.0, 86.0));
    assert_eq!(position_of(&editor, ids[0]), Point::new(60.0, 80.0));
}

#[test]
fn test_moves_are_counted_on_the_session() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_surface(800.0, 600.0)
        .with_text_item("A", (50.0, 50.0))
        .build_with_ids();

    editor.handle_pointer_down(PointerEvent::at(60.0, 60.0));
    for i in 0..5 {
        editor.handle_pointer_move(PointerEvent::at(60.0 + i as f32, 60.0));
    }
    assert_eq!(editor.input_state().session().unwrap().moves(), 5);
}
