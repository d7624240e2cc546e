//! Color types and measurements
//!
//! Provides the `Rgb` value type, RGB -> HSV conversion, and the scalar
//! metrics (Euclidean distance, luminances, WCAG contrast, warmth) shared by
//! the classifier, cluster engine, and regional analyzer.

mod hsv;
mod metrics;
mod rgb;


// Re-export primary types
pub use rgb::Rgb;

// Re-export HSV conversion
pub use hsv::{Hsv, rgb_to_hsv};

// Re-export scalar metrics
pub use metrics::{
    MAX_RGB_DISTANCE, brightness, contrast_ratio, distance, luminance, relative_luminance,
    saturation, warmth,
};
