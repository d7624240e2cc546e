//! 3x3 region construction and per-region statistics

use crate::classify;
use crate::color::{self, Rgb};
use crate::config::AnalysisOptions;
use crate::models::{NamedColorRef, RegionDominant, RegionReport, RegionStatistics, TopColor};
use crate::sampler::FrequencyTable;
use crate::stats::round_to;

/// Region names in row-major order, top row first.
pub const REGION_NAMES: [&str; 9] = [
    "Top-Left",
    "Top-Center",
    "Top-Right",
    "Middle-Left",
    "Center",
    "Middle-Right",
    "Bottom-Left",
    "Bottom-Center",
    "Bottom-Right",
];

/// Placeholder color reported for regions that received no samples.
const EMPTY_REGION_GRAY: Rgb = Rgb::new(128, 128, 128);

/// Split the sample into a 3x3 grid and analyze each cell.
///
/// The last row and column absorb any remainder when the estimated
/// dimensions do not divide evenly by three. Sample indices past the end of
/// the slice are skipped, so a partial final row never causes a region to
/// read out of bounds.
pub fn analyze_grid(
    colors: &[Rgb],
    width: usize,
    height: usize,
    options: &AnalysisOptions,
) -> Vec<RegionReport> {
    let region_width = width / 3;
    let region_height = height / 3;

    let mut regions = Vec::with_capacity(REGION_NAMES.len());
    for (index, name) in REGION_NAMES.iter().enumerate() {
        let row = index / 3;
        let col = index % 3;

        let start_x = col * region_width;
        let end_x = if col < 2 { (col + 1) * region_width } else { width };
        let start_y = row * region_height;
        let end_y = if row < 2 { (row + 1) * region_height } else { height };

        let mut region_colors = Vec::new();
        for y in start_y..end_y.min(height) {
            for x in start_x..end_x.min(width) {
                let pixel_index = y * width + x;
                if pixel_index < colors.len() {
                    region_colors.push(colors[pixel_index]);
                }
            }
        }

        regions.push(analyze_region(&region_colors, name, options));
    }

    regions
}

/// Compute the report for a single region.
fn analyze_region(region_colors: &[Rgb], name: &str, options: &AnalysisOptions) -> RegionReport {
    if region_colors.is_empty() {
        return empty_region(name, options);
    }

    let table = FrequencyTable::from_colors(region_colors);
    let total = region_colors.len();
    let ranked = table.most_common(options.region_top_colors.max(1));

    let (dominant, dominant_count) = ranked[0];
    let dominant_percentage = round_to(dominant_count as f64 * 100.0 / total as f64, 2);

    let average = average_color(region_colors);

    let brightness_mean = region_colors.iter().map(|c| color::brightness(*c)).sum::<f64>() / total as f64;
    let saturation_mean = region_colors.iter().map(|c| color::saturation(*c)).sum::<f64>() / total as f64;
    let diversity = table.distinct_count() as f64 / total as f64;

    let top_colors = ranked
        .iter()
        .map(|&(rgb, count)| TopColor {
            hex: rgb.hex(),
            rgb,
            name: classify::name_with_threshold(rgb, options.name_distance_threshold),
            count,
            percentage: round_to(count as f64 * 100.0 / total as f64, 2),
        })
        .collect();

    RegionReport {
        region: name.to_string(),
        dominant_color: RegionDominant {
            hex: dominant.hex(),
            rgb: dominant,
            name: classify::name_with_threshold(dominant, options.name_distance_threshold),
            percentage: dominant_percentage,
        },
        average_color: NamedColorRef {
            hex: average.hex(),
            rgb: average,
            name: classify::name_with_threshold(average, options.name_distance_threshold),
        },
        statistics: RegionStatistics {
            pixel_count: total,
            unique_colors: table.distinct_count(),
            color_diversity: round_to(diversity, 3),
            brightness: round_to(brightness_mean, 3),
            saturation: round_to(saturation_mean, 3),
        },
        top_colors,
    }
}

/// Neutral placeholder for a region with no samples.
///
/// Brightness and saturation default to 0.5 so the balance pass treats the
/// region as mid-weight rather than pulling the composition toward a corner.
fn empty_region(name: &str, options: &AnalysisOptions) -> RegionReport {
    let gray_name = classify::name_with_threshold(EMPTY_REGION_GRAY, options.name_distance_threshold);
    RegionReport {
        region: name.to_string(),
        dominant_color: RegionDominant {
            hex: EMPTY_REGION_GRAY.hex(),
            rgb: EMPTY_REGION_GRAY,
            name: gray_name.clone(),
            percentage: 0.0,
        },
        average_color: NamedColorRef {
            hex: EMPTY_REGION_GRAY.hex(),
            rgb: EMPTY_REGION_GRAY,
            name: gray_name,
        },
        statistics: RegionStatistics {
            pixel_count: 0,
            unique_colors: 0,
            color_diversity: 0.0,
            brightness: 0.5,
            saturation: 0.5,
        },
        top_colors: Vec::new(),
    }
}

/// Component-wise mean of the region, rounded to the nearest channel value.
fn average_color(region_colors: &[Rgb]) -> Rgb {
    let total = region_colors.len() as f64;
    let sum_r: u64 = region_colors.iter().map(|c| c.r as u64).sum();
    let sum_g: u64 = region_colors.iter().map(|c| c.g as u64).sum();
    let sum_b: u64 = region_colors.iter().map(|c| c.b as u64).sum();
    Rgb::new(
        (sum_r as f64 / total).round() as u8,
        (sum_g as f64 / total).round() as u8,
        (sum_b as f64 / total).round() as u8,
    )
}
