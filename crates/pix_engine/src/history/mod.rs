//! Undo/redo history for pixel editing
//!
//! - `EditRecord` - one cell's before/after color, the minimal undo unit
//! - `Transaction` - an ordered group of edit records undone/redone as one step
//! - `UndoStack` - linear undo/redo stacks with an optional depth limit
//! - `PixelEditState` - owns the grid and the history, exposes brushing and undo blocks
//!
//! A single brush call while no block is open becomes its own transaction.
//! Brush calls between `start_undo_block()` and `close_undo_block()` are grouped
//! into one transaction, so a whole drag gesture is undone with one step.

mod edit_state;
mod undo_operation;
mod undo_stack;

pub use edit_state::*;
pub use undo_operation::*;
pub use undo_stack::*;
