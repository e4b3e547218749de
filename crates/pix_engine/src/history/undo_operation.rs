//! Undo records for pixel editing

use serde::{Deserialize, Serialize};

use crate::{Color, Grid, Position, Result};

/// A single cell write that actually changed the cell's color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRecord {
    pub position: Position,
    pub old_color: Color,
    pub new_color: Color,
}

impl EditRecord {
    pub fn new(position: Position, old_color: Color, new_color: Color) -> Self {
        Self {
            position,
            old_color,
            new_color,
        }
    }
}

/// Group of edits committed, undone and redone as one unit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    description: String,
    edits: Vec<EditRecord>,
}

impl Transaction {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            edits: Vec::new(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn edits(&self) -> &[EditRecord] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub(crate) fn push(&mut self, edit: EditRecord) {
        self.edits.push(edit);
    }

    /// Write back every old color, last edit first.
    ///
    /// The same cell may be touched several times inside one transaction,
    /// only strict reverse order ends on the color it had before the first edit.
    pub fn undo(&self, grid: &mut Grid) -> Result<()> {
        for edit in self.edits.iter().rev() {
            grid.set(edit.position, edit.old_color)?;
        }
        Ok(())
    }

    /// Replay every new color in recording order.
    pub fn redo(&self, grid: &mut Grid) -> Result<()> {
        for edit in &self.edits {
            grid.set(edit.position, edit.new_color)?;
        }
        Ok(())
    }
}
