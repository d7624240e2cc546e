//! Regional composition analysis
//!
//! Splits a color sample into a 3x3 spatial grid and reports how color is
//! distributed across it.
//!
//! This module is organized into submodules:
//! - `grid`: 3x3 region construction and per-region statistics
//! - `zones`: Center-versus-edge comparison and contrast
//! - `balance`: Brightness/saturation distribution and visual weight balance

mod balance;
mod grid;
mod zones;

#[cfg(test)]
mod tests;

// Re-export public items from submodules
pub use balance::{analyze_distribution, analyze_visual_balance};
pub use grid::{analyze_grid, REGION_NAMES};
pub use zones::analyze_center_vs_edges;

use crate::color::Rgb;
use crate::config::AnalysisOptions;
use crate::models::{EstimatedDimensions, RegionalAnalysis};
use crate::verbose_println;

/// Estimate image dimensions from a flat sample count.
///
/// A raw byte stream carries no geometry, so the sample is treated as a
/// near-square image: width is the integer square root of the count and
/// height is the count divided by that width. For non-square sources the
/// grid positions are therefore approximate, but the statistics per region
/// stay meaningful because every sampled color lands in exactly one region.
pub fn estimate_dimensions(sample_count: usize) -> (usize, usize) {
    let width = (sample_count as f64).sqrt() as usize;
    let height = if width > 0 { sample_count / width } else { 1 };
    (width, height)
}

/// Execute the full regional pipeline over a sample.
///
/// Always produces exactly nine regions. Regions that receive no samples
/// (tiny or empty inputs) are reported as neutral-gray placeholders so the
/// output shape never changes.
pub fn analyze_regions(colors: &[Rgb], options: &AnalysisOptions) -> RegionalAnalysis {
    let (width, height) = estimate_dimensions(colors.len());
    verbose_println!(
        "[hueprint] Regional grid: {}x{} estimated from {} samples",
        width,
        height,
        colors.len()
    );

    let regions = analyze_grid(colors, width, height, options);
    let total_regions = regions.len();
    let center_edge_analysis = analyze_center_vs_edges(colors, width, height, options);
    let distribution_analysis = analyze_distribution(&regions);
    let balance_analysis = analyze_visual_balance(&regions);

    RegionalAnalysis {
        regions,
        center_edge_analysis,
        distribution_analysis,
        balance_analysis,
        estimated_dimensions: EstimatedDimensions {
            width,
            height,
            total_pixels: colors.len(),
        },
        total_regions,
    }
}
