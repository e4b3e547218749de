//! Canvas adapter
//!
//! Translates pointer gestures on a drawing surface into engine calls. The
//! dragging flag and the current brush color are kept here as explicit state
//! instead of living in the front end.
//!
//! A gesture maps to one undo step:
//! - pointer down opens an undo block and paints the cell under the pointer
//! - pointer moves paint while the button is held
//! - pointer up closes the block

use crate::{Color, EngineError, PixelEditState, Position, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct CanvasState {
    /// Displayed size of one grid cell in surface pixels
    cell_size: f64,
    /// Surface coordinate of the top left corner of cell (0, 0)
    origin: (f64, f64),
    dragging: bool,
    color: Color,
}

impl CanvasState {
    pub fn new(cell_size: f64, color: Color) -> Result<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(EngineError::InvalidCellSize { size: cell_size });
        }
        Ok(Self {
            cell_size,
            origin: (0.0, 0.0),
            dragging: false,
            color,
        })
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// `floor((pointer - origin) / cell_size)` per axis. The result may lie outside the grid.
    ///
    /// Returns `None` if the pointer maps to no representable cell (NaN, infinite
    /// or beyond the `i32` range).
    pub fn pointer_to_cell(&self, px: f64, py: f64) -> Option<Position> {
        let x = to_cell_coord((px - self.origin.0) / self.cell_size)?;
        let y = to_cell_coord((py - self.origin.1) / self.cell_size)?;
        Some(Position::new(x, y))
    }

    /// Surface coordinate of the top left corner of a cell
    pub fn cell_origin(&self, pos: Position) -> (f64, f64) {
        (
            self.origin.0 + f64::from(pos.x) * self.cell_size,
            self.origin.1 + f64::from(pos.y) * self.cell_size,
        )
    }

    /// Surface size needed to show the whole grid of `state`
    pub fn surface_size(&self, state: &PixelEditState) -> (f64, f64) {
        (f64::from(state.width()) * self.cell_size, f64::from(state.height()) * self.cell_size)
    }

    fn paint(&self, state: &mut PixelEditState, px: f64, py: f64) -> Result<bool> {
        let Some(pos) = self.pointer_to_cell(px, py) else {
            log::trace!("pointer ({px}, {py}) maps to no cell");
            return Ok(false);
        };
        if !state.image().is_inside(pos) {
            log::trace!("pointer ({px}, {py}) maps to {pos}, outside of the grid");
            return Ok(false);
        }
        state.brush(pos, self.color)
    }

    /// Start a stroke. Returns whether the grid changed.
    pub fn pointer_down(&mut self, state: &mut PixelEditState, px: f64, py: f64) -> Result<bool> {
        if self.dragging {
            // the matching pointer up got lost, finish the old stroke first
            self.pointer_up(state)?;
        }
        state.start_undo_block()?;
        self.dragging = true;
        self.paint(state, px, py)
    }

    /// Continue a stroke. Moves without a pressed pointer are ignored.
    pub fn pointer_move(&mut self, state: &mut PixelEditState, px: f64, py: f64) -> Result<bool> {
        if !self.dragging {
            return Ok(false);
        }
        self.paint(state, px, py)
    }

    /// Finish a stroke, committing it as one undo step.
    pub fn pointer_up(&mut self, state: &mut PixelEditState) -> Result<()> {
        if !self.dragging {
            return Ok(());
        }
        self.dragging = false;
        state.close_undo_block()
    }

    /// Paint a single cell as its own undo step, for front ends that only report clicks.
    pub fn click(&mut self, state: &mut PixelEditState, px: f64, py: f64) -> Result<bool> {
        self.paint(state, px, py)
    }
}

fn to_cell_coord(value: f64) -> Option<i32> {
    let value = value.floor();
    if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}
