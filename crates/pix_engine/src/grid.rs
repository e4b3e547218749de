//! Fixed size pixel grid
//!
//! Cells are stored row-major (`index = y * width + x`). The flat byte layout
//! returned by [`Grid::cells`] is consumed directly by the renderer, so the
//! order and the stride of 3 bytes per cell must not change.

use crate::{Color, EngineError, Position, Result, Size};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Color>,
}

impl Grid {
    /// Create a grid with every cell set to [`Color::WHITE`].
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_color(width, height, Color::WHITE)
    }

    /// Create a grid with every cell set to `color`.
    pub fn with_color(width: i32, height: i32, color: Color) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        let Some(len) = (width as usize).checked_mul(height as usize) else {
            return Err(EngineError::InvalidDimensions { width, height });
        };
        let mut cells = Vec::new();
        if cells.try_reserve_exact(len).is_err() {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        cells.resize(len, color);
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_inside(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Result<usize> {
        if !self.is_inside(pos) {
            return Err(EngineError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn get(&self, pos: impl Into<Position>) -> Result<Color> {
        let idx = self.index(pos.into())?;
        Ok(self.cells[idx])
    }

    /// Overwrite a cell and return the color it held before.
    pub fn set(&mut self, pos: impl Into<Position>, color: Color) -> Result<Color> {
        let idx = self.index(pos.into())?;
        Ok(std::mem::replace(&mut self.cells[idx], color))
    }

    /// Borrowed row-major view of all cells.
    pub fn colors(&self) -> &[Color] {
        &self.cells
    }

    /// Flat row-major `R, G, B` triplets, `3 * width * height` bytes.
    pub fn cells(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.cells.len() * 3);
        for c in &self.cells {
            result.extend_from_slice(&[c.r, c.g, c.b]);
        }
        result
    }
}
