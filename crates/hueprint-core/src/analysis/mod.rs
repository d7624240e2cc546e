//! Full-report assembly
//!
//! Drives the sampler, classifier, cluster engine, and regional analyzer
//! over one byte stream and merges their outputs into an [`AnalysisReport`].
//!
//! Sections degrade independently: a failure in one pipeline branch is
//! recorded as that section's error while every other section still
//! reports its result.

mod sections;


use chrono::Utc;

use crate::catalog;
use crate::cluster::{SeedSource, ThreadSource};
use crate::config::AnalysisOptions;
use crate::models::{AnalysisReport, DominantColorEntry, Metadata, Section};
use crate::regional;
use crate::sampler::{sample_bytes, FrequencyTable};
use crate::verbose_println;

/// Analyze a byte stream with default options and process-level randomness.
pub fn analyze(bytes: &[u8]) -> Result<AnalysisReport, String> {
    let mut source = ThreadSource;
    analyze_with(bytes, &AnalysisOptions::default(), &mut source)
}

/// Analyze a byte stream with explicit options and randomness source.
///
/// Injecting a seeded [`SeedSource`] makes the dominant-color and cluster
/// sections reproducible across runs.
pub fn analyze_with(
    bytes: &[u8],
    options: &AnalysisOptions,
    source: &mut dyn SeedSource,
) -> Result<AnalysisReport, String> {
    let sample = sample_bytes(bytes);
    verbose_println!(
        "[hueprint] Sampled {} colors from {} bytes",
        sample.len(),
        bytes.len()
    );

    let table = FrequencyTable::from_colors(sample.colors());
    verbose_println!("[hueprint] {} distinct colors observed", table.distinct_count());

    let dominant = sections::build_dominant_colors(&sample, &table, options, source);
    let dominant_for_features: &[DominantColorEntry] =
        dominant.as_ref().map(|entries| entries.as_slice()).unwrap_or(&[]);

    let color_frequency = sections::build_color_frequency(&sample, &table, options);
    let cluster_analysis = sections::build_cluster_analysis(&sample, &table, options, source);
    let regional_analysis = regional::analyze_regions(sample.colors(), options);
    let histograms = sections::build_histograms(&sample);
    let color_spaces = sections::build_color_spaces(&sample);
    let characteristics = sections::build_characteristics(&sample);
    let feature_vectors =
        sections::build_feature_vectors(bytes.len(), &sample, dominant_for_features);
    verbose_println!("[hueprint] Report sections assembled");

    let metadata = Metadata {
        timestamp: Utc::now().to_rfc3339(),
        engine: "hueprint".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        image_size_bytes: bytes.len(),
        total_color_samples: sample.len(),
        unique_colors_found: table.distinct_count(),
        color_database_size: catalog::len(),
    };

    Ok(AnalysisReport {
        dominant_colors: dominant.into(),
        color_frequency: color_frequency.into(),
        cluster_analysis: cluster_analysis.into(),
        regional_analysis: Section::Ok(regional_analysis),
        histograms: histograms.into(),
        color_spaces: color_spaces.into(),
        characteristics: characteristics.into(),
        feature_vectors: feature_vectors.into(),
        metadata,
    })
}
