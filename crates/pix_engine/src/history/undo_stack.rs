//! Undo stack for the pixel editor

use super::Transaction;
use crate::Result;

/// Trait for types that support undo/redo operations
pub trait UndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation. Returns `false` if there was nothing to undo.
    fn undo(&mut self) -> Result<bool>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation. Returns `false` if there was nothing to redo.
    fn redo(&mut self) -> Result<bool>;
}

/// Linear undo/redo history of committed transactions
#[derive(Debug, Default)]
pub struct UndoStack {
    /// Undo operations, most recent last
    undo_stack: Vec<Transaction>,
    /// Redo operations, most recent last
    redo_stack: Vec<Transaction>,
    /// Maximum number of undo entries kept, `None` for unbounded
    max_depth: Option<usize>,
}

impl UndoStack {
    /// Create a new empty, unbounded undo stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty undo stack keeping at most `max_depth` entries
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Change the depth limit, dropping the oldest entries if needed
    pub fn set_max_depth(&mut self, max_depth: Option<usize>) {
        self.max_depth = max_depth;
        self.trim();
    }

    /// Commit a new transaction. Invalidates the redo history.
    pub fn push(&mut self, op: Transaction) {
        self.undo_stack.push(op);
        self.redo_stack.clear();
        self.trim();
    }

    fn trim(&mut self) {
        let Some(max_depth) = self.max_depth else {
            return;
        };
        if self.undo_stack.len() > max_depth {
            let excess = self.undo_stack.len() - max_depth;
            self.undo_stack.drain(..excess);
            log::debug!("Undo depth limit {max_depth} reached, dropped {excess} oldest transaction(s)");
        }
    }

    /// Pop an operation from the undo stack
    pub fn pop_undo(&mut self) -> Option<Transaction> {
        self.undo_stack.pop()
    }

    /// Push an operation back onto the undo stack without touching the redo stack
    pub fn push_undo(&mut self, op: Transaction) {
        self.undo_stack.push(op);
        self.trim();
    }

    /// Push an operation onto the redo stack
    pub fn push_redo(&mut self, op: Transaction) {
        self.redo_stack.push(op);
    }

    /// Pop an operation from the redo stack
    pub fn pop_redo(&mut self) -> Option<Transaction> {
        self.redo_stack.pop()
    }

    /// Get the number of undo operations
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo operations
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get description of next undo operation
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|op| op.description().to_string())
    }

    /// Get description of next redo operation
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|op| op.description().to_string())
    }

    /// Committed transactions, oldest first
    pub fn undo_operations(&self) -> &[Transaction] {
        &self.undo_stack
    }

    /// Undone transactions, the next one to redo last
    pub fn redo_operations(&self) -> &[Transaction] {
        &self.redo_stack
    }

    /// Clear both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
