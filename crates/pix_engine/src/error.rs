//! Unified error type for pix_engine

use thiserror::Error;

/// Main error type for pix_engine operations
///
/// All errors are reported at the call that violates the contract. A failing
/// call never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    // === Grid Errors ===
    #[error("Invalid grid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Position (x: {x}, y: {y}) out of bounds (grid is {width}x{height})")]
    OutOfBounds { x: i32, y: i32, width: i32, height: i32 },

    // === Undo Block Errors ===
    #[error("An undo block is already open")]
    BlockAlreadyOpen,

    #[error("No undo block is open")]
    NoBlockOpen,

    // === Color Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    #[error("Color data must be 3 bytes (r, g, b), got {len}")]
    InvalidColorData { len: usize },

    // === Canvas Errors ===
    #[error("Invalid cell size: {size} (must be positive)")]
    InvalidCellSize { size: f64 },
}
