//! Undo block tests
//!
//! Tests grouping multiple brush calls into a single undoable step.

use pix_engine::{Color, EngineError, UndoState};
use pretty_assertions::assert_eq;

use crate::helpers::{create_test_state, snapshot, C1, C2, C3};

#[test]
fn test_block_groups_brushes() {
    let mut state = create_test_state();
    state.start_undo_block().unwrap();
    assert!(state.is_recording());
    state.brush((0, 0), C1).unwrap();
    state.brush((1, 0), C2).unwrap();
    state.brush((1, 1), C3).unwrap();
    assert_eq!(state.open_edit_count(), 3);
    // nothing is committed while recording
    assert_eq!(state.undo_len(), 0);
    state.close_undo_block().unwrap();

    assert!(!state.is_recording());
    assert_eq!(state.undo_len(), 1);
    assert_eq!(state.undo_stack().undo_operations()[0].len(), 3);
}

#[test]
fn test_block_undo_redo_scenario() {
    let mut state = create_test_state();
    state.start_undo_block().unwrap();
    state.brush((0, 0), C1).unwrap();
    state.brush((0, 0), C2).unwrap();
    state.brush((1, 1), C3).unwrap();
    state.close_undo_block().unwrap();

    assert_eq!(snapshot(&state), vec![C2, Color::WHITE, Color::WHITE, C3]);

    assert!(state.undo().unwrap());
    assert_eq!(snapshot(&state), vec![Color::WHITE; 4]);

    assert!(state.redo().unwrap());
    assert_eq!(snapshot(&state), vec![C2, Color::WHITE, Color::WHITE, C3]);
}

#[test]
fn test_block_undo_restores_repeatedly_edited_cell() {
    let mut state = create_test_state();
    state.brush((0, 0), C3).unwrap();
    let before = snapshot(&state);

    state.start_undo_block().unwrap();
    for color in [C1, C2, C1, Color::WHITE, C2] {
        state.brush((0, 0), color).unwrap();
    }
    state.brush((1, 0), C1).unwrap();
    state.close_undo_block().unwrap();

    state.undo().unwrap();
    assert_eq!(snapshot(&state), before);
    assert_eq!(state.get((0, 0)).unwrap(), C3);
}

#[test]
fn test_block_can_revisit_original_color() {
    let mut state = create_test_state();
    state.start_undo_block().unwrap();
    state.brush((0, 0), C1).unwrap();
    state.brush((0, 0), Color::WHITE).unwrap();
    state.close_undo_block().unwrap();

    // both writes changed the cell, so the transaction is kept
    assert_eq!(state.undo_len(), 1);
    assert_eq!(state.undo_stack().undo_operations()[0].len(), 2);
    state.undo().unwrap();
    assert_eq!(state.get((0, 0)).unwrap(), Color::WHITE);
}

#[test]
fn test_empty_block_is_discarded() {
    let mut state = create_test_state();
    state.brush((0, 0), C1).unwrap();
    state.undo().unwrap();

    state.start_undo_block().unwrap();
    // only no-op brushes
    state.brush((0, 0), Color::WHITE).unwrap();
    state.brush((1, 1), Color::WHITE).unwrap();
    state.close_undo_block().unwrap();

    assert_eq!(state.undo_len(), 0);
    // redo history survives an empty block
    assert_eq!(state.redo_len(), 1);
}

#[test]
fn test_block_commit_clears_redo() {
    let mut state = create_test_state();
    state.brush((0, 0), C1).unwrap();
    state.undo().unwrap();

    state.start_undo_block().unwrap();
    state.brush((1, 1), C2).unwrap();
    state.close_undo_block().unwrap();

    assert_eq!(state.redo_len(), 0);
    assert!(!state.redo().unwrap());
}

#[test]
fn test_nested_block_not_supported() {
    let mut state = create_test_state();
    state.start_undo_block().unwrap();
    state.brush((0, 0), C1).unwrap();

    assert_eq!(state.start_undo_block(), Err(EngineError::BlockAlreadyOpen));
    // the first block is still open and unchanged
    assert!(state.is_recording());
    assert_eq!(state.open_edit_count(), 1);

    state.close_undo_block().unwrap();
    assert_eq!(state.undo_len(), 1);
}

#[test]
fn test_close_without_start() {
    let mut state = create_test_state();
    assert_eq!(state.close_undo_block(), Err(EngineError::NoBlockOpen));
    assert_eq!(state.cancel_undo_block(), Err(EngineError::NoBlockOpen));
}

#[test]
fn test_undo_redo_rejected_while_recording() {
    let mut state = create_test_state();
    state.brush((0, 0), C1).unwrap();
    state.undo().unwrap();
    state.brush((1, 0), C2).unwrap();

    state.start_undo_block().unwrap();
    state.brush((1, 1), C3).unwrap();
    let before = snapshot(&state);

    assert_eq!(state.undo(), Err(EngineError::BlockAlreadyOpen));
    assert_eq!(state.redo(), Err(EngineError::BlockAlreadyOpen));
    assert_eq!(snapshot(&state), before);
    assert_eq!(state.undo_len(), 1);

    state.close_undo_block().unwrap();
    assert_eq!(state.undo_len(), 2);
}

#[test]
fn test_failed_brush_inside_block() {
    let mut state = create_test_state();
    state.start_undo_block().unwrap();
    state.brush((0, 0), C1).unwrap();
    assert!(state.brush((9, 0), C2).is_err());
    assert_eq!(state.open_edit_count(), 1);
    state.close_undo_block().unwrap();

    state.undo().unwrap();
    assert_eq!(snapshot(&state), vec![Color::WHITE; 4]);
}

#[test]
fn test_cancel_block_reverts_edits() {
    let mut state = create_test_state();
    state.brush((1, 1), C3).unwrap();
    let before = snapshot(&state);

    state.start_undo_block().unwrap();
    state.brush((0, 0), C1).unwrap();
    state.brush((0, 0), C2).unwrap();
    state.brush((1, 1), C1).unwrap();
    state.cancel_undo_block().unwrap();

    assert!(!state.is_recording());
    assert_eq!(snapshot(&state), before);
    assert_eq!(state.undo_len(), 1);
}

#[test]
fn test_undo_block_closure_commits() {
    let mut state = create_test_state();
    let changed = state
        .undo_block("Line", |state| {
            let mut changed = 0;
            for x in 0..2 {
                if state.brush((x, 0), C1)? {
                    changed += 1;
                }
            }
            Ok(changed)
        })
        .unwrap();

    assert_eq!(changed, 2);
    assert_eq!(state.undo_len(), 1);
    assert_eq!(state.undo_description(), Some("Line".to_string()));

    state.undo().unwrap();
    assert_eq!(state.redo_description(), Some("Line".to_string()));
}

#[test]
fn test_undo_block_closure_may_close_block_itself() {
    let mut state = create_test_state();
    state
        .undo_block("Dot", |state| {
            state.brush((1, 1), C2)?;
            state.close_undo_block()
        })
        .unwrap();

    assert!(!state.is_recording());
    assert_eq!(state.undo_len(), 1);
    assert_eq!(state.undo_description(), Some("Dot".to_string()));
    assert_eq!(state.get((1, 1)).unwrap(), C2);

    state.undo().unwrap();
    assert_eq!(state.get((1, 1)).unwrap(), Color::WHITE);
}

#[test]
fn test_undo_block_closure_rolls_back_on_error() {
    let mut state = create_test_state();
    let before = snapshot(&state);

    let result = state.undo_block("Broken", |state| {
        state.brush((0, 0), C1)?;
        state.brush((1, 1), C2)?;
        state.brush((2, 2), C3)?;
        Ok(())
    });

    assert!(matches!(result, Err(EngineError::OutOfBounds { x: 2, y: 2, .. })));
    assert!(!state.is_recording());
    assert_eq!(snapshot(&state), before);
    assert_eq!(state.undo_len(), 0);
}

#[test]
fn test_many_blocks_undo_in_order() {
    let mut state = create_test_state();
    let mut snapshots = vec![snapshot(&state)];
    for (i, color) in [C1, C2, C3].into_iter().enumerate() {
        state.start_undo_block().unwrap();
        state.brush((i as i32 % 2, i as i32 / 2), color).unwrap();
        state.brush((1, 1), color).unwrap();
        state.close_undo_block().unwrap();
        snapshots.push(snapshot(&state));
    }

    for expected in snapshots.iter().rev().skip(1) {
        state.undo().unwrap();
        assert_eq!(&snapshot(&state), expected);
    }
    for expected in snapshots.iter().skip(1) {
        state.redo().unwrap();
        assert_eq!(&snapshot(&state), expected);
    }
}
