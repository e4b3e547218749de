use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

lazy_static! {
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^\s*#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})\s*$").unwrap();
}

/// A single grid cell: an RGB triple with 8 bits per channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#RRGGBB` or `RRGGBB` (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let Some(cap) = HEX_COLOR_REGEX.captures(hex) else {
            return Err(EngineError::InvalidHexColor { value: hex.to_string() });
        };
        let (_, [r, g, b]) = cap.extract();
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| EngineError::InvalidHexColor { value: hex.to_string() });
        Ok(Color::new(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Builds a color from raw `[r, g, b]` bytes as sent by the drawing front end.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [r, g, b] => Ok(Color::new(*r, *g, *b)),
            _ => Err(EngineError::InvalidColorData { len: bytes.len() }),
        }
    }
}
