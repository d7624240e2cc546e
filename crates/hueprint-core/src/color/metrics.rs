//! Scalar color metrics: distances, luminances, contrast, warmth

use super::Rgb;

/// Maximum possible Euclidean distance in 8-bit RGB space (black to white).
pub const MAX_RGB_DISTANCE: f64 = 441.67;

/// Euclidean distance between two colors in RGB space.
#[inline]
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Perceptual (Rec.601) luminance over normalized channels, 0.0-1.0.
///
/// This is the brightness weighting used for dominant-color reporting and the
/// characteristics summaries. Display contrast uses [`relative_luminance`]
/// instead.
#[inline]
pub fn luminance(color: Rgb) -> f64 {
    0.299 * (color.r as f64 / 255.0) + 0.587 * (color.g as f64 / 255.0)
        + 0.114 * (color.b as f64 / 255.0)
}

/// Flat brightness `(r + g + b) / (3 * 255)`, 0.0-1.0. Used by the regional
/// statistics, which average it over many pixels.
#[inline]
pub fn brightness(color: Rgb) -> f64 {
    (color.r as u32 + color.g as u32 + color.b as u32) as f64 / (3.0 * 255.0)
}

/// Chroma-style saturation `(max - min) / max`, 0.0-1.0; 0.0 for black.
#[inline]
pub fn saturation(color: Rgb) -> f64 {
    let max = color.max_channel();
    if max == 0 {
        return 0.0;
    }
    (max - color.min_channel()) as f64 / max as f64
}

/// Warmth of a color: positive values read as warm, zero or below as cool.
#[inline]
pub fn warmth(color: Rgb) -> f64 {
    (color.r as f64 + color.g as f64 / 2.0) - color.b as f64
}

/// WCAG relative luminance with sRGB gamma linearization.
#[inline]
pub fn relative_luminance(color: Rgb) -> f64 {
    let linearize = |channel: u8| {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors, range 1.0-21.0.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}
