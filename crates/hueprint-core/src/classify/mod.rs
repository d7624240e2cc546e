//! Color naming
//!
//! Maps an arbitrary RGB color to a human-readable name in three steps:
//! 1. Exact catalog lookup.
//! 2. Nearest catalog entry by Euclidean distance (first match wins ties).
//! 3. Generic HSV bucket when the nearest entry is farther than the threshold.
//!
//! Step 3 keeps the output sensible for colors far from every curated entry
//! instead of stretching a specific name like "Peach Puff" across half the
//! cube. Naming is a total function: every RGB value gets a non-empty name.

use crate::catalog;
use crate::color::{self, Rgb, rgb_to_hsv};

/// Distance beyond which the nearest catalog entry is rejected in favor of a
/// generic bucket name. RGB-space units; the maximum possible distance is
/// ~441.67.
pub const NEAREST_NAME_THRESHOLD: f64 = 100.0;

/// Name a color using the default distance threshold.
pub fn name_for(color: Rgb) -> String {
    name_with_threshold(color, NEAREST_NAME_THRESHOLD)
}

/// Name a color, rejecting catalog matches farther than `threshold`.
pub fn name_with_threshold(color: Rgb, threshold: f64) -> String {
    if let Some(name) = catalog::lookup_exact(color) {
        return name.to_string();
    }

    let mut min_distance = f64::INFINITY;
    let mut closest_name = "";
    for (entry, name) in catalog::entries() {
        let dist = color::distance(color, *entry);
        if dist < min_distance {
            min_distance = dist;
            closest_name = name;
        }
    }

    if min_distance > threshold {
        return generic_name(color).to_string();
    }
    closest_name.to_string()
}

/// Coarse bucket name from HSV. Low-saturation colors map to a five-step
/// grayscale ladder; everything else maps to one of seven hue families.
pub fn generic_name(color: Rgb) -> &'static str {
    let hsv = rgb_to_hsv(color);

    if hsv.s < 0.1 {
        return if hsv.v < 0.2 {
            "Black"
        } else if hsv.v < 0.4 {
            "Dark Gray"
        } else if hsv.v < 0.6 {
            "Gray"
        } else if hsv.v < 0.8 {
            "Light Gray"
        } else {
            "White"
        };
    }

    let h = hsv.h;
    if !(15.0..345.0).contains(&h) {
        "Red"
    } else if h < 45.0 {
        "Orange"
    } else if h < 75.0 {
        "Yellow"
    } else if h < 150.0 {
        "Green"
    } else if h < 210.0 {
        "Blue"
    } else if h < 270.0 {
        "Purple"
    } else if h < 330.0 {
        "Pink"
    } else {
        // 330-345 degrees reads as red again
        "Red"
    }
}

// =============================================================================
// Tests
// =============================================================================
