//! Regional analysis report types.

use serde::{Deserialize, Serialize};

use super::report::{Grade, Level, NamedColorRef};
use crate::color::Rgb;

/// Dominant color of one grid region, with its share of the region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionDominant {
    pub hex: String,
    pub rgb: Rgb,
    pub name: String,
    pub percentage: f64,
}

/// Aggregate statistics of one grid region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionStatistics {
    pub pixel_count: usize,
    pub unique_colors: usize,
    /// unique / pixel_count, 0.0-1.0
    pub color_diversity: f64,
    /// Mean flat brightness, 0.0-1.0
    pub brightness: f64,
    /// Mean chroma saturation, 0.0-1.0
    pub saturation: f64,
}

/// One of a region's most frequent colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopColor {
    pub hex: String,
    pub rgb: Rgb,
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

/// Full report for one cell of the 3x3 grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionReport {
    /// Region label, "Top-Left" through "Bottom-Right"
    pub region: String,
    pub dominant_color: RegionDominant,
    pub average_color: NamedColorRef,
    pub statistics: RegionStatistics,
    /// Up to three most frequent colors
    pub top_colors: Vec<TopColor>,
}

/// Dominant color of the center or edge zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDominant {
    pub hex: String,
    pub name: String,
    pub count: usize,
}

/// Summary of the center or edge zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneReport {
    pub dominant_color: ZoneDominant,
    pub pixel_count: usize,
    pub unique_colors: usize,
}

/// Center-vs-edge comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterEdgeAnalysis {
    /// Absent when the estimated geometry leaves the zone empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<ZoneReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<ZoneReport>,
    /// WCAG contrast ratio between the zone dominants, 1.0-21.0
    pub center_edge_contrast: f64,
}

/// Mean/variance/uniformity of one per-region metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionBand {
    pub mean: f64,
    pub variance: f64,
    pub uniformity: Level,
}

/// Spread of brightness and saturation across the nine regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionAnalysis {
    pub brightness_distribution: DistributionBand,
    pub saturation_distribution: DistributionBand,
}

/// Row-band weights and the top-vs-bottom balance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorizontalBalance {
    pub top: f64,
    pub middle: f64,
    pub bottom: f64,
    pub balance_score: f64,
}

/// Column-band weights and the left-vs-right balance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerticalBalance {
    pub left: f64,
    pub center: f64,
    pub right: f64,
    pub balance_score: f64,
}

/// Visual-weight balance across the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceAnalysis {
    pub horizontal_balance: HorizontalBalance,
    pub vertical_balance: VerticalBalance,
    pub overall_balance: Grade,
}

/// Geometry inferred from the sample count.
///
/// The true image geometry is unknown to the pipeline; these dimensions assume
/// a roughly square image and position-derived results are estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedDimensions {
    pub width: usize,
    pub height: usize,
    pub total_pixels: usize,
}

/// Regional section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalAnalysis {
    /// Always exactly nine entries, row-major from Top-Left
    pub regions: Vec<RegionReport>,
    pub center_edge_analysis: CenterEdgeAnalysis,
    pub distribution_analysis: DistributionAnalysis,
    pub balance_analysis: BalanceAnalysis,
    pub estimated_dimensions: EstimatedDimensions,
    pub total_regions: usize,
}
