//! Pixel edit state
//!
//! The main state container for pixel editing. It exclusively owns the grid and
//! the undo history, the UI layer only reads from it and calls methods to modify it.
//!
//! ## Undo blocks
//!
//! The state is either *idle* or *recording*:
//!
//! | Call                 | Idle                                   | Recording                         |
//! |----------------------|----------------------------------------|-----------------------------------|
//! | `brush`              | commits a one-edit transaction         | appends to the open transaction   |
//! | `start_undo_block`   | opens a transaction -> recording       | `BlockAlreadyOpen`                |
//! | `close_undo_block`   | `NoBlockOpen`                          | commits (or drops if empty) -> idle |
//! | `cancel_undo_block`  | `NoBlockOpen`                          | reverts open edits -> idle        |
//! | `undo` / `redo`      | steps through history                  | `BlockAlreadyOpen`                |
//!
//! Brushing a cell with the color it already holds is a no-op: no grid write,
//! no edit record, and the redo history stays intact.

use crate::{Color, EngineError, Grid, Position, Result};

use super::{EditRecord, Transaction, UndoStack, UndoState};

/// Description used for single brush transactions and unnamed blocks
pub const BRUSH_DESCRIPTION: &str = "Brush";

pub struct PixelEditState {
    grid: Grid,
    undo_stack: UndoStack,
    /// Transaction accumulating edits while an undo block is open
    open_block: Option<Transaction>,
    /// Grid changed since the last `clear_dirty()`
    is_dirty: bool,
}

impl PixelEditState {
    /// Create a state with a `width` x `height` grid filled with [`Color::WHITE`]
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }

    /// Create a state around an existing grid with an empty history
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            undo_stack: UndoStack::new(),
            open_block: None,
            is_dirty: false,
        }
    }

    /// Limit the number of undo steps kept. `None` keeps everything.
    pub fn with_max_undo_depth(mut self, max_depth: Option<usize>) -> Self {
        self.undo_stack.set_max_depth(max_depth);
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Grid access
    // ═══════════════════════════════════════════════════════════════════════

    /// Read only view of the grid for rendering
    pub fn image(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Flat row-major RGB triplets, see [`Grid::cells`]
    pub fn cells(&self) -> Vec<u8> {
        self.grid.cells()
    }

    pub fn get(&self, pos: impl Into<Position>) -> Result<Color> {
        self.grid.get(pos)
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Called by the renderer after it has drawn the current grid
    pub fn clear_dirty(&mut self) {
        self.is_dirty = false;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Brushing
    // ═══════════════════════════════════════════════════════════════════════

    /// Set a single cell, recording the change for undo.
    ///
    /// Returns `false` if the cell already had `color` (nothing is recorded).
    pub fn brush(&mut self, pos: impl Into<Position>, color: Color) -> Result<bool> {
        let pos = pos.into();
        let old_color = self.grid.get(pos)?;
        if old_color == color {
            return Ok(false);
        }
        self.grid.set(pos, color)?;
        self.is_dirty = true;
        log::trace!("brush {pos}: {old_color} -> {color}");
        self.record_edit(EditRecord::new(pos, old_color, color));
        Ok(true)
    }

    /// Shared by the idle and recording paths, the open block decides
    /// whether the edit is committed right away.
    fn record_edit(&mut self, edit: EditRecord) {
        if let Some(block) = &mut self.open_block {
            block.push(edit);
            return;
        }
        let mut transaction = Transaction::new(BRUSH_DESCRIPTION);
        transaction.push(edit);
        self.commit(transaction);
    }

    fn commit(&mut self, transaction: Transaction) {
        log::debug!("commit '{}' ({} edit(s))", transaction.description(), transaction.len());
        self.undo_stack.push(transaction);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Undo blocks
    // ═══════════════════════════════════════════════════════════════════════

    pub fn is_recording(&self) -> bool {
        self.open_block.is_some()
    }

    /// Number of edits collected by the open block (0 when idle)
    pub fn open_edit_count(&self) -> usize {
        self.open_block.as_ref().map_or(0, Transaction::len)
    }

    /// Begin grouping brush calls into one undo step
    pub fn start_undo_block(&mut self) -> Result<()> {
        self.start_described_undo_block(BRUSH_DESCRIPTION)
    }

    /// Same as `start_undo_block` with a custom description for the transaction
    pub fn start_described_undo_block(&mut self, description: impl Into<String>) -> Result<()> {
        if self.open_block.is_some() {
            return Err(EngineError::BlockAlreadyOpen);
        }
        self.open_block = Some(Transaction::new(description));
        Ok(())
    }

    /// Finish the open block. Empty blocks are discarded and leave the redo history alone.
    pub fn close_undo_block(&mut self) -> Result<()> {
        let Some(block) = self.open_block.take() else {
            return Err(EngineError::NoBlockOpen);
        };
        if block.is_empty() {
            log::debug!("discard empty undo block '{}'", block.description());
            return Ok(());
        }
        self.commit(block);
        Ok(())
    }

    /// Revert every edit of the open block and drop it without touching the history
    pub fn cancel_undo_block(&mut self) -> Result<()> {
        let Some(block) = self.open_block.take() else {
            return Err(EngineError::NoBlockOpen);
        };
        if !block.is_empty() {
            block.undo(&mut self.grid)?;
            self.is_dirty = true;
        }
        log::debug!("cancel undo block '{}' ({} edit(s) reverted)", block.description(), block.len());
        Ok(())
    }

    /// Run `f` inside an undo block.
    ///
    /// On success the block is committed as one step, on error all edits made by
    /// `f` are reverted and the error is returned.
    pub fn undo_block<T>(&mut self, description: impl Into<String>, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.start_described_undo_block(description)?;
        match f(self) {
            Ok(value) => {
                // `f` may have closed the block on its own
                if self.is_recording() {
                    self.close_undo_block()?;
                }
                Ok(value)
            }
            Err(err) => {
                if self.is_recording() {
                    self.cancel_undo_block()?;
                }
                Err(err)
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // History
    // ═══════════════════════════════════════════════════════════════════════

    /// Get undo stack length
    pub fn undo_len(&self) -> usize {
        self.undo_stack.undo_len()
    }

    /// Get redo stack length
    pub fn redo_len(&self) -> usize {
        self.undo_stack.redo_len()
    }

    /// Get access to the undo stack
    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo_stack
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.open_block.is_some() {
            return Err(EngineError::BlockAlreadyOpen);
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl UndoState for PixelEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> Result<bool> {
        self.ensure_idle()?;
        let Some(op) = self.undo_stack.pop_undo() else {
            log::debug!("nothing to undo");
            return Ok(false);
        };
        if let Err(err) = op.undo(&mut self.grid) {
            self.undo_stack.push_undo(op);
            return Err(err);
        }
        self.is_dirty = true;
        log::debug!("undo '{}' ({} edit(s))", op.description(), op.len());
        self.undo_stack.push_redo(op);
        Ok(true)
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> Result<bool> {
        self.ensure_idle()?;
        let Some(op) = self.undo_stack.pop_redo() else {
            log::debug!("nothing to redo");
            return Ok(false);
        };
        if let Err(err) = op.redo(&mut self.grid) {
            self.undo_stack.push_redo(op);
            return Err(err);
        }
        self.is_dirty = true;
        log::debug!("redo '{}' ({} edit(s))", op.description(), op.len());
        self.undo_stack.push_undo(op);
        Ok(true)
    }
}
