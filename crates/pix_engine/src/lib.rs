#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]
//! Pixel grid editing engine
//!
//! Provides the model layer of a pixel editor:
//! - `Grid` - a fixed size buffer of RGB cells
//! - `PixelEditState` - owns the grid and the transactional undo/redo history
//! - `CanvasState` - maps pointer gestures on a canvas to engine calls
//!
//! Rendering and input handling live outside of this crate. They read the grid
//! through `PixelEditState::image()` / `PixelEditState::cells()` and forward
//! grid coordinates to `PixelEditState::brush()`.

mod color;
pub use color::*;

mod position;
pub use position::*;

mod error;
pub use error::*;

mod grid;
pub use grid::*;

pub mod history;
pub use history::{EditRecord, PixelEditState, Transaction, UndoStack, UndoState};

pub mod canvas;
pub use canvas::CanvasState;

pub type Result<T> = std::result::Result<T, EngineError>;
