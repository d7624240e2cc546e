//! Scalar statistics over samples and channels

use crate::color::Rgb;

/// Number of buckets in each channel histogram.
pub const HISTOGRAM_BUCKETS: usize = 16;

/// Width of one histogram bucket in channel units.
pub const BUCKET_WIDTH: usize = 256 / HISTOGRAM_BUCKETS;

/// Per-channel occupancy over 16 equal buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelHistograms {
    pub red: Vec<usize>,
    pub green: Vec<usize>,
    pub blue: Vec<usize>,
}

/// Min/max/average of one channel across a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSpread {
    pub min: u8,
    pub max: u8,
    pub avg: f64,
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median (midpoint average for even lengths); 0.0 for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample variance (n - 1 denominator); 0.0 when fewer than two values.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    values.iter().map(|v| (v - avg) * (v - avg)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation; 0.0 when fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Round to `decimals` fractional digits.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Bucket every channel of every color into 16 equal-width bins.
pub fn histogram_buckets(colors: &[Rgb]) -> ChannelHistograms {
    let mut red = vec![0usize; HISTOGRAM_BUCKETS];
    let mut green = vec![0usize; HISTOGRAM_BUCKETS];
    let mut blue = vec![0usize; HISTOGRAM_BUCKETS];

    for color in colors {
        red[color.r as usize / BUCKET_WIDTH] += 1;
        green[color.g as usize / BUCKET_WIDTH] += 1;
        blue[color.b as usize / BUCKET_WIDTH] += 1;
    }

    ChannelHistograms { red, green, blue }
}

/// Min/max/average for one channel, extracted by `channel_of`.
///
/// An empty sample reports the full-range neutral spread (min 0, max 255,
/// avg 128) so downstream summaries stay well-formed.
pub fn channel_spread(colors: &[Rgb], channel_of: impl Fn(&Rgb) -> u8) -> ChannelSpread {
    if colors.is_empty() {
        return ChannelSpread {
            min: 0,
            max: 255,
            avg: 128.0,
        };
    }

    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum = 0u64;
    for color in colors {
        let value = channel_of(color);
        min = min.min(value);
        max = max.max(value);
        sum += value as u64;
    }

    ChannelSpread {
        min,
        max,
        avg: sum as f64 / colors.len() as f64,
    }
}

// =============================================================================
// Tests
// =============================================================================
