//! Hex color parsing for room fills and wall strokes.

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
///
/// Rooms and walls persist their color as the original hex string; this type
/// is the parsed form handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Neutral fallback used when a stored color string is missing or
    /// unparseable.
    pub const fn gray() -> Self {
        Self::new(128, 128, 128, 255)
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (leading `#` optional,
    /// case-insensitive). Returns `None` on any other input.
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let component = |range: std::ops::Range<usize>| -> Option<u8> {
            u8::from_str_radix(hex.get(range)?, 16).ok()
        };

        match hex.len() {
            6 => Some(Self::new(
                component(0..2)?,
                component(2..4)?,
                component(4..6)?,
                255,
            )),
            8 => Some(Self::new(
                component(2..4)?,
                component(4..6)?,
                component(6..8)?,
                component(0..2)?,
            )),
            _ => None,
        }
    }

    /// Parse with the neutral gray fallback. Never fails.
    pub fn from_hex_or_gray(hex: Option<&str>) -> Self {
        hex.and_then(Self::parse_hex).unwrap_or_else(Self::gray)
    }

    /// Format back to a hex string (`#RRGGBB`, or `#AARRGGBB` when the alpha
    /// channel is not fully opaque).
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::gray()
    }
}
