//! Tests for the regional composition pipeline

use super::*;
use crate::config::AnalysisOptions;
use crate::models::{Grade, Level};

fn options() -> AnalysisOptions {
    AnalysisOptions::default()
}

fn solid(color: Rgb, count: usize) -> Vec<Rgb> {
    vec![color; count]
}

/// Paint an NxN sample where each 3x3 grid cell gets its own color.
fn block_grid(side: usize, palette: &[Rgb; 9]) -> Vec<Rgb> {
    let cell = side / 3;
    let mut colors = Vec::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            let row = (y / cell).min(2);
            let col = (x / cell).min(2);
            colors.push(palette[row * 3 + col]);
        }
    }
    colors
}

// ========================================================================
// Dimension Estimation Tests
// ========================================================================

#[test]
fn test_estimate_dimensions_squares() {
    assert_eq!(estimate_dimensions(100), (10, 10));
    assert_eq!(estimate_dimensions(81), (9, 9));
    assert_eq!(estimate_dimensions(1), (1, 1));
}

#[test]
fn test_estimate_dimensions_non_squares() {
    // Width floors to the integer square root; height takes the quotient.
    assert_eq!(estimate_dimensions(99), (9, 11));
    assert_eq!(estimate_dimensions(5), (2, 2));
    assert_eq!(estimate_dimensions(2), (1, 2));
}

#[test]
fn test_estimate_dimensions_empty() {
    assert_eq!(estimate_dimensions(0), (0, 1), "empty sample keeps height 1");
}

// ========================================================================
// Grid Construction Tests
// ========================================================================

#[test]
fn test_grid_always_nine_regions() {
    let opts = options();
    for sample in [
        Vec::new(),
        solid(Rgb::new(10, 20, 30), 1),
        solid(Rgb::new(0, 0, 0), 5),
        solid(Rgb::new(255, 255, 255), 100),
    ] {
        let (w, h) = estimate_dimensions(sample.len());
        let regions = analyze_grid(&sample, w, h, &opts);
        assert_eq!(regions.len(), 9, "sample of {} colors", sample.len());
    }
}

#[test]
fn test_grid_region_names_row_major() {
    let regions = analyze_grid(&solid(Rgb::new(0, 0, 0), 81), 9, 9, &options());
    let names: Vec<&str> = regions.iter().map(|r| r.region.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Top-Left",
            "Top-Center",
            "Top-Right",
            "Middle-Left",
            "Center",
            "Middle-Right",
            "Bottom-Left",
            "Bottom-Center",
            "Bottom-Right",
        ]
    );
}

#[test]
fn test_grid_maps_blocks_to_regions() {
    let palette = [
        Rgb::new(255, 0, 0),
        Rgb::new(0, 255, 0),
        Rgb::new(0, 0, 255),
        Rgb::new(255, 255, 0),
        Rgb::new(0, 255, 255),
        Rgb::new(255, 0, 255),
        Rgb::new(255, 255, 255),
        Rgb::new(0, 0, 0),
        Rgb::new(128, 128, 128),
    ];
    let sample = block_grid(9, &palette);
    let regions = analyze_grid(&sample, 9, 9, &options());

    for (i, region) in regions.iter().enumerate() {
        assert_eq!(
            region.dominant_color.rgb, palette[i],
            "region {} should be dominated by its painted color",
            region.region
        );
        assert_eq!(region.dominant_color.percentage, 100.0);
        assert_eq!(region.statistics.pixel_count, 9);
        assert_eq!(region.statistics.unique_colors, 1);
    }
}

#[test]
fn test_grid_last_row_and_column_absorb_remainder() {
    // 10x10 grid: cells are 3 wide/tall, the last row and column take 4.
    let regions = analyze_grid(&solid(Rgb::new(50, 50, 50), 100), 10, 10, &options());
    let counts: Vec<usize> = regions.iter().map(|r| r.statistics.pixel_count).collect();
    assert_eq!(counts, vec![9, 9, 12, 9, 9, 12, 12, 12, 16]);
    assert_eq!(counts.iter().sum::<usize>(), 100);
}

#[test]
fn test_grid_pixel_counts_never_exceed_sample() {
    let opts = options();
    for n in [0usize, 1, 2, 5, 11, 50, 99, 100, 300] {
        let sample = solid(Rgb::new(7, 7, 7), n);
        let (w, h) = estimate_dimensions(n);
        let regions = analyze_grid(&sample, w, h, &opts);
        let counted: usize = regions.iter().map(|r| r.statistics.pixel_count).sum();
        assert!(counted <= n, "counted {} of {} samples", counted, n);
        // Samples beyond width*height are dropped, never duplicated.
        assert_eq!(counted, n.min(w * h));
    }
}

#[test]
fn test_grid_empty_sample_reports_placeholders() {
    let regions = analyze_grid(&[], 0, 1, &options());
    assert_eq!(regions.len(), 9);
    for region in &regions {
        assert_eq!(region.dominant_color.hex, "#808080");
        assert_eq!(region.dominant_color.percentage, 0.0);
        assert_eq!(region.average_color.hex, "#808080");
        assert_eq!(region.statistics.pixel_count, 0);
        assert_eq!(region.statistics.unique_colors, 0);
        assert_eq!(region.statistics.color_diversity, 0.0);
        assert_eq!(region.statistics.brightness, 0.5);
        assert_eq!(region.statistics.saturation, 0.5);
        assert!(region.top_colors.is_empty());
    }
}

#[test]
fn test_grid_all_black_brightness_zero() {
    let regions = analyze_grid(&solid(Rgb::new(0, 0, 0), 100), 10, 10, &options());
    for region in &regions {
        assert_eq!(region.statistics.brightness, 0.0);
        assert_eq!(region.statistics.saturation, 0.0);
        assert_eq!(region.dominant_color.name, "Black");
    }
}

#[test]
fn test_grid_region_statistics_rounding() {
    // A region of 9 identical pixels: diversity 1/9 rounds to 0.111.
    let regions = analyze_grid(&solid(Rgb::new(255, 0, 0), 81), 9, 9, &options());
    let stats = &regions[0].statistics;
    assert_eq!(stats.color_diversity, 0.111);
    assert_eq!(stats.brightness, 0.333, "red brightness is 255/765");
    assert_eq!(stats.saturation, 1.0);
}

#[test]
fn test_grid_average_color_is_named() {
    // Four samples collapse into the bottom-right cell of a 2x2 grid.
    // Half red and half blue average to (128, 0, 128), cataloged Purple.
    let sample = vec![
        Rgb::new(255, 0, 0),
        Rgb::new(255, 0, 0),
        Rgb::new(0, 0, 255),
        Rgb::new(0, 0, 255),
    ];
    let regions = analyze_grid(&sample, 2, 2, &options());
    let br = &regions[8];
    assert_eq!(br.statistics.pixel_count, 4);
    assert_eq!(br.average_color.hex, "#800080");
    assert_eq!(br.average_color.name, "Purple");
}

#[test]
fn test_grid_dominant_percentage() {
    let sample = vec![
        Rgb::new(255, 0, 0),
        Rgb::new(255, 0, 0),
        Rgb::new(255, 0, 0),
        Rgb::new(0, 0, 255),
    ];
    let regions = analyze_grid(&sample, 2, 2, &options());
    let br = &regions[8];
    assert_eq!(br.dominant_color.rgb, Rgb::new(255, 0, 0));
    assert_eq!(br.dominant_color.percentage, 75.0);
}

#[test]
fn test_grid_top_colors_honor_configured_limit() {
    let mut opts = options();
    opts.region_top_colors = 2;
    let sample = vec![
        Rgb::new(255, 0, 0),
        Rgb::new(255, 0, 0),
        Rgb::new(0, 255, 0),
        Rgb::new(0, 0, 255),
    ];
    let regions = analyze_grid(&sample, 2, 2, &opts);
    let top = &regions[8].top_colors;
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].rgb, Rgb::new(255, 0, 0));
    assert_eq!(top[0].count, 2);
    assert_eq!(top[0].percentage, 50.0);
}

// ========================================================================
// Center/Edge Zone Tests
// ========================================================================

#[test]
fn test_zones_margin_splits_center_from_edges() {
    // 8x8 grid: margin 2, so the center is the 4x4 square at (2..6, 2..6).
    let mut sample = solid(Rgb::new(0, 0, 255), 64);
    for y in 2..6 {
        for x in 2..6 {
            sample[y * 8 + x] = Rgb::new(255, 0, 0);
        }
    }
    let analysis = analyze_center_vs_edges(&sample, 8, 8, &options());

    let center = analysis.center.as_ref().unwrap();
    assert_eq!(center.pixel_count, 16);
    assert_eq!(center.dominant_color.name, "Red");
    assert_eq!(center.dominant_color.count, 16);
    assert_eq!(center.unique_colors, 1);

    let edges = analysis.edges.as_ref().unwrap();
    assert_eq!(edges.pixel_count, 48);
    assert_eq!(edges.dominant_color.name, "Blue");

    // Red vs blue: (0.2626 / 0.1222) rounded to two decimals.
    assert_eq!(analysis.center_edge_contrast, 2.15);
}

#[test]
fn test_zones_zero_margin_puts_everything_in_center() {
    // 2x2 grid has margin 0: every pixel is central, the edge zone is absent.
    let analysis =
        analyze_center_vs_edges(&solid(Rgb::new(128, 128, 128), 4), 2, 2, &options());
    assert!(analysis.center.is_some());
    assert!(analysis.edges.is_none());
    // Absent edges fall back to gray, which matches the gray center exactly.
    assert_eq!(analysis.center_edge_contrast, 1.0);
}

#[test]
fn test_zones_empty_sample() {
    let analysis = analyze_center_vs_edges(&[], 0, 1, &options());
    assert!(analysis.center.is_none());
    assert!(analysis.edges.is_none());
    assert_eq!(analysis.center_edge_contrast, 1.0);
}

// ========================================================================
// Distribution Tests
// ========================================================================

#[test]
fn test_distribution_uniform_sample_is_high_uniformity() {
    let regions = analyze_grid(&solid(Rgb::new(40, 40, 40), 81), 9, 9, &options());
    let dist = analyze_distribution(&regions);
    assert_eq!(dist.brightness_distribution.variance, 0.0);
    assert_eq!(dist.brightness_distribution.uniformity, Level::High);
    assert_eq!(dist.saturation_distribution.uniformity, Level::High);
}

#[test]
fn test_distribution_split_sample_is_low_uniformity() {
    // Top third white, rest black: brightness values are three 1.0s and
    // six 0.0s, sample variance 0.25.
    let mut sample = solid(Rgb::new(0, 0, 0), 81);
    for item in sample.iter_mut().take(27) {
        *item = Rgb::new(255, 255, 255);
    }
    let regions = analyze_grid(&sample, 9, 9, &options());
    let dist = analyze_distribution(&regions);
    assert!((dist.brightness_distribution.mean - 1.0 / 3.0).abs() < 1e-9);
    assert!((dist.brightness_distribution.variance - 0.25).abs() < 1e-9);
    assert_eq!(dist.brightness_distribution.uniformity, Level::Low);
}

// ========================================================================
// Visual Balance Tests
// ========================================================================

#[test]
fn test_balance_uniform_sample_is_perfectly_balanced() {
    let regions = analyze_grid(&solid(Rgb::new(0, 0, 0), 81), 9, 9, &options());
    let balance = analyze_visual_balance(&regions);
    assert_eq!(balance.horizontal_balance.balance_score, 1.0);
    assert_eq!(balance.vertical_balance.balance_score, 1.0);
    assert_eq!(balance.overall_balance, Grade::Excellent);
    // All-black regions weigh 0.7 each, three per row.
    assert_eq!(balance.horizontal_balance.top, 2.1);
    assert_eq!(balance.horizontal_balance.bottom, 2.1);
}

#[test]
fn test_balance_top_heavy_sample_scores_low() {
    // White top third carries no visual weight; the dark remainder does.
    let mut sample = solid(Rgb::new(0, 0, 0), 81);
    for item in sample.iter_mut().take(27) {
        *item = Rgb::new(255, 255, 255);
    }
    let regions = analyze_grid(&sample, 9, 9, &options());
    let balance = analyze_visual_balance(&regions);

    assert!(balance.horizontal_balance.balance_score.abs() < 1e-9);
    // Columns stay symmetric, so the vertical axis is still balanced.
    assert!((balance.vertical_balance.balance_score - 1.0).abs() < 1e-9);
    assert_eq!(balance.overall_balance, Grade::Fair);
}

#[test]
fn test_balance_empty_regions_count_as_mid_weight() {
    // Placeholders report brightness and saturation 0.5, weight 0.5 each.
    let regions = analyze_grid(&[], 0, 1, &options());
    let balance = analyze_visual_balance(&regions);
    assert_eq!(balance.horizontal_balance.top, 1.5);
    assert_eq!(balance.horizontal_balance.balance_score, 1.0);
    assert_eq!(balance.overall_balance, Grade::Excellent);
}

// ========================================================================
// Full Pipeline Tests
// ========================================================================

#[test]
fn test_analyze_regions_reports_dimensions() {
    let analysis = analyze_regions(&solid(Rgb::new(0, 0, 0), 100), &options());
    assert_eq!(analysis.estimated_dimensions.width, 10);
    assert_eq!(analysis.estimated_dimensions.height, 10);
    assert_eq!(analysis.estimated_dimensions.total_pixels, 100);
    assert_eq!(analysis.total_regions, 9);
    assert_eq!(analysis.regions.len(), 9);
}

#[test]
fn test_analyze_regions_empty_sample() {
    let analysis = analyze_regions(&[], &options());
    assert_eq!(analysis.total_regions, 9);
    assert_eq!(analysis.estimated_dimensions.width, 0);
    assert_eq!(analysis.estimated_dimensions.height, 1);
    assert_eq!(analysis.estimated_dimensions.total_pixels, 0);
    assert!(analysis.center_edge_analysis.center.is_none());
    assert_eq!(analysis.balance_analysis.overall_balance, Grade::Excellent);
}
