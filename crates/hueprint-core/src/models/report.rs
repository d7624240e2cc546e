//! Top-level report types and the scalar summary sections.

use serde::{Deserialize, Serialize};

use super::Section;
use super::regional::RegionalAnalysis;
use crate::color::Rgb;

/// Three-step scale used for uniformity, richness, and intensity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    High,
    Medium,
    Low,
}

/// Three-step quality scale used for balance and clustering labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
}

/// Warm/cool classification of the whole sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureClass {
    Warm,
    Cool,
    Neutral,
}

/// A color with its hex form and resolved name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedColorRef {
    pub hex: String,
    pub rgb: Rgb,
    pub name: String,
}

/// One ranked dominant color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DominantColorEntry {
    /// 1-based rank, most dominant first
    pub rank: usize,
    pub hex: String,
    pub rgb: Rgb,
    pub name: String,
    /// Estimated share of the sample; estimates do not sum to 100
    pub percentage: f64,
    /// Estimated sample count backing this color
    pub pixel_count: usize,
    /// Separation from the other selected colors, 0.0-1.0
    pub quality_score: f64,
    /// Rec.601 luminance, 0.0-1.0
    pub luminance: f64,
    /// Chroma saturation, 0.0-1.0
    pub saturation: f64,
}

/// The single most frequent color of the sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MostFrequentColor {
    /// Hex form of the color
    pub color: String,
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

/// Mean/median/spread over the per-color occurrence counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyDistribution {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// How often colors repeat across the sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorFrequency {
    pub total_pixels: usize,
    pub unique_colors: usize,
    /// unique / total, 0.0-1.0
    pub diversity_index: f64,
    pub most_frequent: MostFrequentColor,
    pub frequency_distribution: FrequencyDistribution,
    pub color_richness: Level,
}

/// One K-Means++ cluster center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterEntry {
    /// 1-based cluster id
    pub cluster_id: usize,
    pub center_color: NamedColorRef,
    /// Estimated member count (total / k)
    pub size: usize,
    pub percentage: f64,
    /// Sample variance of channel sums over this cluster's slice
    pub variance: f64,
}

/// Cluster decomposition of the distinct colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterAnalysis {
    pub clusters: Vec<ClusterEntry>,
    pub optimal_k: usize,
    pub total_variance: f64,
    /// Fixed separation estimate carried in the report schema
    pub silhouette_score: f64,
    pub clustering_quality: Grade,
}

/// 16-bucket occupancy per channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramChannels {
    pub red: Vec<usize>,
    pub green: Vec<usize>,
    pub blue: Vec<usize>,
}

/// Score/status pair for channel balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceScore {
    pub score: f64,
    pub status: Grade,
}

/// Summary attached to the histogram block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramSummary {
    pub total_colors: usize,
    pub color_balance: BalanceScore,
}

/// Histogram section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histograms {
    pub rgb: HistogramChannels,
    pub statistics: HistogramSummary,
}

/// Min/max/average of one channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
    pub avg: f64,
}

/// Per-channel ranges of the RGB sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RgbChannelRanges {
    pub red: ChannelRange,
    pub green: ChannelRange,
    pub blue: ChannelRange,
}

/// Color-space section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSpaces {
    pub rgb: RgbChannelRanges,
}

/// Warm/cool split of the sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureBlock {
    pub classification: TemperatureClass,
    pub temperature_score: f64,
    pub warm_percentage: f64,
    pub cool_percentage: f64,
}

/// Overall lightness of the sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrightnessBlock {
    pub level: Level,
    pub average: f64,
    pub distribution: String,
}

/// Overall color intensity of the sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaturationBlock {
    pub level: Level,
    pub average: f64,
    pub vibrancy: String,
}

/// Descriptive harmony block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonyBlock {
    #[serde(rename = "type")]
    pub harmony_type: String,
    pub score: f64,
    pub balance: Grade,
}

/// Descriptive mood block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodBlock {
    pub primary: String,
    pub secondary: String,
    pub emotional_impact: String,
}

/// Qualitative characteristics of the whole sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Characteristics {
    pub temperature: TemperatureBlock,
    pub brightness: BrightnessBlock,
    pub saturation: SaturationBlock,
    pub harmony: HarmonyBlock,
    pub mood: MoodBlock,
}

/// One weighted color vector for downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorVector {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Dominance weight, 0.0-1.0
    pub weight: f64,
}

/// Aggregate numeric features of the sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticalFeatures {
    /// Component-wise mean of all sampled colors
    pub mean_rgb: [f64; 3],
    pub image_size_bytes: usize,
}

/// Machine-consumable feature section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVectors {
    /// Top dominant colors as weighted vectors, at most five
    pub color_vectors: Vec<ColorVector>,
    pub statistical_features: StatisticalFeatures,
    /// Version tag of the feature schema
    pub model_version: String,
}

/// Request-scoped metadata attached to every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC-3339 UTC timestamp of report assembly
    pub timestamp: String,
    pub engine: String,
    pub version: String,
    pub image_size_bytes: usize,
    pub total_color_samples: usize,
    pub unique_colors_found: usize,
    pub color_database_size: usize,
}

/// The complete analysis response.
///
/// Every section except `metadata` is wrapped in [`Section`] and may carry an
/// error instead of a value; consumers must check before use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub dominant_colors: Section<Vec<DominantColorEntry>>,
    pub color_frequency: Section<ColorFrequency>,
    pub cluster_analysis: Section<ClusterAnalysis>,
    pub regional_analysis: Section<RegionalAnalysis>,
    pub histograms: Section<Histograms>,
    pub color_spaces: Section<ColorSpaces>,
    pub characteristics: Section<Characteristics>,
    pub feature_vectors: Section<FeatureVectors>,
    pub metadata: Metadata,
}
