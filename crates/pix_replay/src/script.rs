//! Gesture scripts
//!
//! A script is a TOML file with an ordered list of pointer and history events:
//!
//! ```toml
//! [[event]]
//! kind = "down"
//! x = 10.0
//! y = 10.0
//!
//! [[event]]
//! kind = "up"
//!
//! [[event]]
//! kind = "undo"
//! ```

use pix_engine::{CanvasState, Color, PixelEditState, UndoState};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Event {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Click { x: f64, y: f64 },
    Color { value: String },
    Undo,
    Redo,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Script {
    #[serde(default, rename = "event")]
    pub events: Vec<Event>,
}

/// Counters collected while replaying
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub changed_cells: usize,
    pub undone: usize,
    pub redone: usize,
}

impl Script {
    pub fn parse(txt: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    /// Feeds every event through the canvas adapter into the edit state.
    pub fn replay(&self, canvas: &mut CanvasState, state: &mut PixelEditState) -> anyhow::Result<ReplayStats> {
        let mut stats = ReplayStats::default();
        for (i, event) in self.events.iter().enumerate() {
            log::debug!("event {i}: {event:?}");
            let changed = match event {
                Event::Down { x, y } => canvas.pointer_down(state, *x, *y)?,
                Event::Move { x, y } => canvas.pointer_move(state, *x, *y)?,
                Event::Click { x, y } => canvas.click(state, *x, *y)?,
                Event::Up => {
                    canvas.pointer_up(state)?;
                    false
                }
                Event::Color { value } => {
                    canvas.set_color(Color::from_hex(value)?);
                    false
                }
                Event::Undo => {
                    if state.undo()? {
                        stats.undone += 1;
                    } else {
                        log::info!("event {i}: nothing to undo");
                    }
                    false
                }
                Event::Redo => {
                    if state.redo()? {
                        stats.redone += 1;
                    } else {
                        log::info!("event {i}: nothing to redo");
                    }
                    false
                }
            };
            if changed {
                stats.changed_cells += 1;
            }
            stats.events += 1;
        }
        if canvas.is_dragging() {
            log::warn!("script ended while dragging, closing the stroke");
            canvas.pointer_up(state)?;
        }
        Ok(stats)
    }
}
