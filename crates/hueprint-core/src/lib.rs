//! Hueprint Core Library
//!
//! Color profile extraction from raw byte streams: named dominant colors,
//! 3x3 regional composition, and descriptive scalar statistics.

pub mod analysis;
pub mod catalog;
pub mod classify;
pub mod cluster;
pub mod color;
pub mod config;
pub mod models;
pub mod regional;
pub mod sampler;
pub mod stats;

// Re-export commonly used types
pub use analysis::{analyze, analyze_with};
pub use classify::name_for;
pub use cluster::{SeedSource, SeededSource, ThreadSource};
pub use color::Rgb;
pub use config::AnalysisOptions;
pub use models::{AnalysisReport, Section};
pub use sampler::{sample_bytes, ColorSample, FrequencyTable};
