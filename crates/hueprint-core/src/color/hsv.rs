//! HSV (Hue-Saturation-Value) conversion used by the generic color bucketing

use super::Rgb;

/// HSV color representation
/// - H (hue): 0.0-360.0 degrees
/// - S (saturation): 0.0-1.0
/// - V (value): 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Convert an 8-bit RGB color to HSV.
///
/// Hue is 0.0-360.0 degrees (0.0 for achromatic input), saturation and value
/// are 0.0-1.0. Saturation is defined as 0.0 when the max channel is 0.
#[inline]
pub fn rgb_to_hsv(color: Rgb) -> Hsv {
    let max = color.max_channel();
    let min = color.min_channel();

    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;
    let max_val = max as f64 / 255.0;
    let diff = (max - min) as f64 / 255.0;

    let v = max_val;

    let s = if max == 0 { 0.0 } else { diff / max_val };

    // Channel comparisons stay on the integer values, so branch choice is exact.
    let h = if max == min {
        0.0
    } else if max == color.r {
        (60.0 * ((g - b) / diff) + 360.0) % 360.0
    } else if max == color.g {
        (60.0 * ((b - r) / diff) + 120.0) % 360.0
    } else {
        (60.0 * ((r - g) / diff) + 240.0) % 360.0
    };

    Hsv { h, s, v }
}

// =============================================================================
// Tests
// =============================================================================
