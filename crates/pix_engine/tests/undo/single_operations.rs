//! Single brush undo/redo tests
//!
//! Brush calls outside of an undo block are their own undo step.

use pix_engine::{Color, EngineError, UndoState};
use pretty_assertions::assert_eq;

use crate::helpers::{create_test_state, snapshot, C1, C2};

#[test]
fn test_brush_then_get_returns_color() {
    let mut state = create_test_state();
    assert!(state.brush((1, 0), C1).unwrap());
    assert_eq!(state.get((1, 0)).unwrap(), C1);
}

#[test]
fn test_brush_pushes_one_undo_step() {
    let mut state = create_test_state();
    state.brush((0, 0), C1).unwrap();
    state.brush((1, 1), C2).unwrap();
    assert_eq!(state.undo_len(), 2);
    assert_eq!(state.redo_len(), 0);
    assert_eq!(state.undo_description(), Some("Brush".to_string()));
}

#[test]
fn test_brush_same_color_is_noop() {
    let mut state = create_test_state();
    assert!(!state.brush((0, 0), Color::WHITE).unwrap());
    assert_eq!(state.undo_len(), 0);

    state.brush((0, 0), C1).unwrap();
    assert!(!state.brush((0, 0), C1).unwrap());
    assert_eq!(state.undo_len(), 1);
}

#[test]
fn test_noop_brush_keeps_redo_stack() {
    let mut state = create_test_state();
    state.brush((0, 0), C1).unwrap();
    state.undo().unwrap();
    assert_eq!(state.redo_len(), 1);

    // (0, 0) is white again, brushing white changes nothing
    assert!(!state.brush((0, 0), Color::WHITE).unwrap());
    assert_eq!(state.redo_len(), 1);
    assert!(state.redo().unwrap());
    assert_eq!(state.get((0, 0)).unwrap(), C1);
}

#[test]
fn test_undo_single_brush() {
    let mut state = create_test_state();
    state.brush((0, 0), C1).unwrap();
    state.brush((0, 0), C2).unwrap();

    assert!(state.undo().unwrap());
    assert_eq!(state.get((0, 0)).unwrap(), C1);
    assert!(state.undo().unwrap());
    assert_eq!(state.get((0, 0)).unwrap(), Color::WHITE);
    assert_eq!(state.redo_len(), 2);
}

#[test]
fn test_undo_redo_roundtrip() {
    let mut state = create_test_state();
    state.brush((0, 0), C1).unwrap();
    state.brush((1, 0), C2).unwrap();
    state.brush((0, 1), C1).unwrap();

    let before = snapshot(&state);
    state.undo().unwrap();
    state.redo().unwrap();
    assert_eq!(snapshot(&state), before);

    state.undo().unwrap();
    state.undo().unwrap();
    let before = snapshot(&state);
    state.undo().unwrap();
    state.redo().unwrap();
    assert_eq!(snapshot(&state), before);
}

#[test]
fn test_brush_after_undo_clears_redo() {
    let mut state = create_test_state();
    state.brush((0, 0), C1).unwrap();
    state.brush((1, 0), C1).unwrap();
    state.undo().unwrap();
    assert!(state.can_redo());

    state.brush((1, 1), C2).unwrap();
    assert!(!state.can_redo());

    let before = snapshot(&state);
    assert!(!state.redo().unwrap());
    assert_eq!(snapshot(&state), before);
}

#[test]
fn test_undo_redo_on_empty_stacks() {
    let mut state = create_test_state();
    let before = snapshot(&state);

    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.undo().unwrap());
    assert!(!state.redo().unwrap());
    assert_eq!(snapshot(&state), before);
    assert_eq!(state.undo_description(), None);
    assert_eq!(state.redo_description(), None);
}

#[test]
fn test_brush_out_of_bounds() {
    let mut state = create_test_state();
    state.brush((0, 0), C1).unwrap();
    let before = snapshot(&state);

    assert_eq!(
        state.brush((5, 5), C2),
        Err(EngineError::OutOfBounds { x: 5, y: 5, width: 2, height: 2 })
    );
    assert_eq!(snapshot(&state), before);
    assert_eq!(state.undo_len(), 1);
}

#[test]
fn test_undo_depth_limit_drops_oldest() {
    let mut state = create_test_state().with_max_undo_depth(Some(2));
    state.brush((0, 0), C1).unwrap();
    state.brush((1, 0), C1).unwrap();
    state.brush((0, 1), C1).unwrap();
    assert_eq!(state.undo_len(), 2);

    assert!(state.undo().unwrap());
    assert!(state.undo().unwrap());
    assert!(!state.undo().unwrap());

    // the first brush fell off the history
    assert_eq!(state.get((0, 0)).unwrap(), C1);
    assert_eq!(state.get((1, 0)).unwrap(), Color::WHITE);
    assert_eq!(state.get((0, 1)).unwrap(), Color::WHITE);
}

#[test]
fn test_history_is_serializable() {
    let mut state = create_test_state();
    state.brush((1, 1), C2).unwrap();
    let ops = state.undo_stack().undo_operations();
    let json = serde_json::to_string(ops).unwrap();
    let restored: Vec<pix_engine::Transaction> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.as_slice(), ops);
    assert_eq!(restored[0].edits()[0].old_color, Color::WHITE);
}
