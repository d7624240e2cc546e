//! Brightness/saturation distribution and visual weight balance

use crate::models::{
    BalanceAnalysis, DistributionAnalysis, DistributionBand, Grade, HorizontalBalance, Level,
    RegionReport, VerticalBalance,
};
use crate::stats::{mean, round_to, sample_variance};

/// Summarize how brightness and saturation spread across the grid.
///
/// Uniformity bands on the sample variance of the nine per-region values:
/// below 0.01 is High, below 0.05 is Medium, anything wider is Low.
pub fn analyze_distribution(regions: &[RegionReport]) -> DistributionAnalysis {
    let brightnesses: Vec<f64> = regions.iter().map(|r| r.statistics.brightness).collect();
    let saturations: Vec<f64> = regions.iter().map(|r| r.statistics.saturation).collect();

    DistributionAnalysis {
        brightness_distribution: distribution_band(&brightnesses),
        saturation_distribution: distribution_band(&saturations),
    }
}

fn distribution_band(values: &[f64]) -> DistributionBand {
    let variance = sample_variance(values);
    DistributionBand {
        mean: mean(values),
        variance,
        uniformity: uniformity_level(variance),
    }
}

fn uniformity_level(variance: f64) -> Level {
    if variance < 0.01 {
        Level::High
    } else if variance < 0.05 {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Judge visual balance from per-region weights.
///
/// Each region's weight blends darkness and saturation: dark, saturated
/// areas read as visually heavy. Rows are compared top against bottom and
/// columns left against right; a score of 1.0 means perfectly balanced.
///
/// Expects the nine regions produced by [`analyze_grid`](super::analyze_grid)
/// in row-major order.
pub fn analyze_visual_balance(regions: &[RegionReport]) -> BalanceAnalysis {
    let weights: Vec<f64> = regions.iter().map(visual_weight).collect();

    let top = weights[0..3].iter().sum::<f64>();
    let middle = weights[3..6].iter().sum::<f64>();
    let bottom = weights[6..9].iter().sum::<f64>();

    let left = weights[0] + weights[3] + weights[6];
    let center = weights[1] + weights[4] + weights[7];
    let right = weights[2] + weights[5] + weights[8];

    let horizontal_score = balance_score(top, bottom);
    let vertical_score = balance_score(left, right);

    BalanceAnalysis {
        horizontal_balance: HorizontalBalance {
            top: round_to(top, 3),
            middle: round_to(middle, 3),
            bottom: round_to(bottom, 3),
            balance_score: horizontal_score,
        },
        vertical_balance: VerticalBalance {
            left: round_to(left, 3),
            center: round_to(center, 3),
            right: round_to(right, 3),
            balance_score: vertical_score,
        },
        overall_balance: overall_grade(horizontal_score.min(vertical_score)),
    }
}

#[inline]
fn visual_weight(region: &RegionReport) -> f64 {
    (1.0 - region.statistics.brightness) * 0.7 + region.statistics.saturation * 0.3
}

/// Symmetry score for a pair of opposing zones, 1.0 when equal.
///
/// The denominator is floored at 0.001 so two zero-weight halves still
/// score as perfectly balanced instead of dividing by zero.
#[inline]
fn balance_score(a: f64, b: f64) -> f64 {
    1.0 - (a - b).abs() / (a + b).max(0.001)
}

fn overall_grade(min_score: f64) -> Grade {
    if min_score > 0.8 {
        Grade::Excellent
    } else if min_score > 0.6 {
        Grade::Good
    } else {
        Grade::Fair
    }
}
