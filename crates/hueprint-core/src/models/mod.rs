//! Data models for hueprint
//!
//! Serializable report types produced by one analysis run, plus the
//! section wrapper that lets each report section fail independently.

mod regional;
mod report;

// Re-export all public types to keep the public API flat
pub use regional::{
    BalanceAnalysis, CenterEdgeAnalysis, DistributionAnalysis, DistributionBand,
    EstimatedDimensions, HorizontalBalance, RegionDominant, RegionReport, RegionStatistics,
    RegionalAnalysis, TopColor, VerticalBalance, ZoneDominant, ZoneReport,
};

pub use report::{
    AnalysisReport, BalanceScore, BrightnessBlock, Characteristics, ChannelRange, ClusterAnalysis,
    ClusterEntry, ColorFrequency, ColorSpaces, ColorVector, DominantColorEntry, FeatureVectors,
    FrequencyDistribution, Grade, HarmonyBlock, HistogramChannels, HistogramSummary, Histograms,
    Level, Metadata, MoodBlock, MostFrequentColor, NamedColorRef, RgbChannelRanges,
    SaturationBlock, StatisticalFeatures, TemperatureBlock, TemperatureClass,
};

use serde::{Deserialize, Serialize};

/// One report section: either its computed value or a structured error.
///
/// Sections degrade independently; a failed section serializes as
/// `{"error": "<message>"}` while the rest of the report renders normally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ok(T),
    Err { error: String },
}

impl<T> Section<T> {
    /// The section value, if it completed.
    pub fn value(&self) -> Option<&T> {
        match self {
            Section::Ok(value) => Some(value),
            Section::Err { .. } => None,
        }
    }

    /// The error message, if the section failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Section::Ok(_) => None,
            Section::Err { error } => Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Section::Ok(_))
    }
}

impl<T> From<Result<T, String>> for Section<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Section::Ok(value),
            Err(error) => Section::Err { error },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
