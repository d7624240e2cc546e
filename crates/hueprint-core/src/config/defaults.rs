//! Default analysis parameter values and their validation/sanitization.

use serde::{Deserialize, Serialize};

use crate::color::MAX_RGB_DISTANCE;

/// Tunable parameters for the analysis pipeline.
///
/// Every field has a built-in default, so a config file only needs to list
/// the values it wants to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// How many of the most frequent colors feed the dominant-color pool
    pub dominant_pool_size: usize,
    /// Number of representative colors picked when the pool is diverse
    pub dominant_k: usize,
    /// Upper bound on the cluster count reported by the cluster summary
    pub cluster_max_k: usize,
    /// Euclidean RGB distance beyond which catalog names are rejected
    /// in favor of a generic hue family name
    pub name_distance_threshold: f64,
    /// How many ranked colors each grid region lists
    pub region_top_colors: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            dominant_pool_size: 15,
            dominant_k: 8,
            cluster_max_k: 6,
            name_distance_threshold: 100.0,
            region_top_colors: 3,
        }
    }
}

impl AnalysisOptions {
    /// Clamp out-of-range values, returning a warning per adjustment.
    pub(crate) fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        let pool = self.dominant_pool_size.clamp(1, 64);
        if pool != self.dominant_pool_size {
            warnings.push(format!(
                "dominant_pool_size {} out of range, clamped to {}",
                self.dominant_pool_size, pool
            ));
            self.dominant_pool_size = pool;
        }

        let k = self.dominant_k.clamp(1, 16);
        if k != self.dominant_k {
            warnings.push(format!(
                "dominant_k {} out of range, clamped to {}",
                self.dominant_k, k
            ));
            self.dominant_k = k;
        }

        let max_k = self.cluster_max_k.clamp(1, 16);
        if max_k != self.cluster_max_k {
            warnings.push(format!(
                "cluster_max_k {} out of range, clamped to {}",
                self.cluster_max_k, max_k
            ));
            self.cluster_max_k = max_k;
        }

        if !self.name_distance_threshold.is_finite() {
            warnings.push(format!(
                "name_distance_threshold {} is not finite, reset to default",
                self.name_distance_threshold
            ));
            self.name_distance_threshold = Self::default().name_distance_threshold;
        }
        let threshold = self.name_distance_threshold.clamp(0.0, MAX_RGB_DISTANCE);
        if threshold != self.name_distance_threshold {
            warnings.push(format!(
                "name_distance_threshold {} out of range, clamped to {}",
                self.name_distance_threshold, threshold
            ));
            self.name_distance_threshold = threshold;
        }

        let top = self.region_top_colors.clamp(1, 10);
        if top != self.region_top_colors {
            warnings.push(format!(
                "region_top_colors {} out of range, clamped to {}",
                self.region_top_colors, top
            ));
            self.region_top_colors = top;
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let options = AnalysisOptions::default();
        assert_eq!(options.dominant_pool_size, 15);
        assert_eq!(options.dominant_k, 8);
        assert_eq!(options.cluster_max_k, 6);
        assert_eq!(options.name_distance_threshold, 100.0);
        assert_eq!(options.region_top_colors, 3);
    }

    #[test]
    fn test_sanitize_accepts_defaults_silently() {
        let mut options = AnalysisOptions::default();
        assert!(options.sanitize().is_empty());
    }

    #[test]
    fn test_sanitize_clamps_out_of_range_values() {
        let mut options = AnalysisOptions {
            dominant_pool_size: 0,
            dominant_k: 100,
            cluster_max_k: 0,
            name_distance_threshold: 9999.0,
            region_top_colors: 50,
        };
        let warnings = options.sanitize();
        assert_eq!(options.dominant_pool_size, 1);
        assert_eq!(options.dominant_k, 16);
        assert_eq!(options.cluster_max_k, 1);
        assert_eq!(options.name_distance_threshold, MAX_RGB_DISTANCE);
        assert_eq!(options.region_top_colors, 10);
        assert_eq!(warnings.len(), 5);
    }

    #[test]
    fn test_sanitize_resets_non_finite_threshold() {
        let mut options = AnalysisOptions {
            name_distance_threshold: f64::NAN,
            ..AnalysisOptions::default()
        };
        let warnings = options.sanitize();
        assert_eq!(options.name_distance_threshold, 100.0);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_partial_yaml_merges_with_defaults() {
        let options: AnalysisOptions =
            serde_yaml::from_str("dominant_k: 4\n").expect("partial config should parse");
        assert_eq!(options.dominant_k, 4);
        assert_eq!(options.dominant_pool_size, 15, "unset fields keep defaults");
    }
}
