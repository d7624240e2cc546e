//! Center-versus-edge zone comparison

use crate::classify;
use crate::color::{self, Rgb};
use crate::config::AnalysisOptions;
use crate::models::{CenterEdgeAnalysis, ZoneDominant, ZoneReport};
use crate::sampler::FrequencyTable;
use crate::stats::round_to;

/// Fallback color used for contrast when a zone has no samples.
const EMPTY_ZONE_GRAY: Rgb = Rgb::new(128, 128, 128);

/// Compare the central zone of the estimated image against its border.
///
/// The center is the axis-aligned rectangle inset by a quarter of the
/// shorter estimated side. Everything else counts as edge. When the margin
/// rounds down to zero the whole sample is central and the edge zone is
/// reported as absent.
pub fn analyze_center_vs_edges(
    colors: &[Rgb],
    width: usize,
    height: usize,
    options: &AnalysisOptions,
) -> CenterEdgeAnalysis {
    let margin = width.min(height) / 4;

    let mut center_colors = Vec::new();
    let mut edge_colors = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let pixel_index = y * width + x;
            if pixel_index >= colors.len() {
                continue;
            }
            let in_center =
                x >= margin && x < width - margin && y >= margin && y < height - margin;
            if in_center {
                center_colors.push(colors[pixel_index]);
            } else {
                edge_colors.push(colors[pixel_index]);
            }
        }
    }

    let center = zone_summary(&center_colors, options);
    let edges = zone_summary(&edge_colors, options);

    let center_rgb = center.as_ref().map_or(EMPTY_ZONE_GRAY, |(_, rgb)| *rgb);
    let edge_rgb = edges.as_ref().map_or(EMPTY_ZONE_GRAY, |(_, rgb)| *rgb);
    let contrast = round_to(color::contrast_ratio(center_rgb, edge_rgb), 2);

    CenterEdgeAnalysis {
        center: center.map(|(report, _)| report),
        edges: edges.map(|(report, _)| report),
        center_edge_contrast: contrast,
    }
}

/// Summarize one zone, returning the report plus its dominant color.
///
/// Returns `None` for a zone with no samples so the serialized output omits
/// the key entirely instead of inventing statistics.
fn zone_summary(
    zone_colors: &[Rgb],
    options: &AnalysisOptions,
) -> Option<(ZoneReport, Rgb)> {
    if zone_colors.is_empty() {
        return None;
    }

    let table = FrequencyTable::from_colors(zone_colors);
    let (dominant, count) = table.most_common(1).into_iter().next()?;

    let report = ZoneReport {
        dominant_color: ZoneDominant {
            hex: dominant.hex(),
            name: classify::name_with_threshold(dominant, options.name_distance_threshold),
            count,
        },
        pixel_count: zone_colors.len(),
        unique_colors: table.distinct_count(),
    };

    Some((report, dominant))
}
