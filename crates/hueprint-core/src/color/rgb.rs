//! RGB value type shared by every stage of the pipeline

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color. Plain value type with no identity beyond its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Construct from individual channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` representation.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("Invalid hex color '{}': expected 6 hex digits", hex));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| format!("Invalid hex color '{}': {}", hex, e))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Largest channel value.
    #[inline]
    pub fn max_channel(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel value.
    #[inline]
    pub fn min_channel(&self) -> u8 {
        self.r.min(self.g).min(self.b)
    }
}

// =============================================================================
// Tests
// =============================================================================
