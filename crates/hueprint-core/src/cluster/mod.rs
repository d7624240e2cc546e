//! Dominant-color selection
//!
//! K-Means++ seeding over observed colors: the first center is drawn
//! uniformly, each following center is drawn with probability proportional to
//! its squared distance from the nearest already-chosen center. The seeding
//! selection itself is the answer; no Lloyd refinement passes run afterward,
//! which keeps the cost one distance pass per selected center and still
//! spreads the picks across the occupied part of the RGB cube.
//!
//! Randomness is injected through [`SeedSource`] so callers can make runs
//! reproducible and tests can script the exact sequence of draws.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::color::{self, Rgb};

/// Source of pseudo-random fractions for center selection.
pub trait SeedSource {
    /// Next fraction in `[0, 1)`.
    fn next_fraction(&mut self) -> f64;
}

/// Process-level RNG. The default for ordinary analysis runs; no seeding
/// contract across runs.
#[derive(Debug, Default)]
pub struct ThreadSource;

impl SeedSource for ThreadSource {
    fn next_fraction(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Deterministic source derived from a fixed seed. Used by reproducible runs
/// (`--seed` in the CLI).
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SeedSource for SeededSource {
    fn next_fraction(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Select up to `k` representative colors via K-Means++ seeding.
///
/// Inputs no longer than `k` are returned unchanged (duplicates included).
/// Otherwise exactly `k` colors come back; they are distinct as long as the
/// input contains more than `k` distinct values, since a chosen center's
/// selection weight drops to zero.
pub fn select_dominant(colors: &[Rgb], k: usize, source: &mut dyn SeedSource) -> Vec<Rgb> {
    if colors.len() <= k {
        return colors.to_vec();
    }

    let mut centers = Vec::with_capacity(k);
    centers.push(colors[uniform_index(colors.len(), source)]);

    let mut weights = vec![0.0f64; colors.len()];
    for _ in 1..k {
        let mut total = 0.0;
        for (slot, color) in weights.iter_mut().zip(colors) {
            let nearest = centers
                .iter()
                .map(|center| distance_squared(*color, *center))
                .fold(f64::INFINITY, f64::min);
            *slot = nearest;
            total += nearest;
        }

        let next = if total == 0.0 {
            // Every input coincides with a chosen center; fall back to a
            // uniform draw.
            colors[uniform_index(colors.len(), source)]
        } else {
            colors[weighted_index(&weights, total, source)]
        };
        centers.push(next);
    }

    centers
}

/// How well separated `color` is from the other colors in `set`, in `[0, 1]`.
///
/// Mean Euclidean distance to every entry that differs from `color`, scaled by
/// the maximum possible RGB distance. Sets of one score a full 1.0; a set
/// whose entries all equal `color` scores 0.0.
pub fn separation_score(color: Rgb, set: &[Rgb]) -> f64 {
    if set.len() <= 1 {
        return 1.0;
    }

    let mut total = 0.0;
    let mut counted = 0usize;
    for other in set {
        if *other != color {
            total += color::distance(color, *other);
            counted += 1;
        }
    }
    if counted == 0 {
        return 0.0;
    }

    let average = total / counted as f64;
    (average / color::MAX_RGB_DISTANCE).clamp(0.0, 1.0)
}

#[inline]
fn distance_squared(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    dr * dr + dg * dg + db * db
}

/// Uniform index draw over `0..len`. `len` must be non-zero.
fn uniform_index(len: usize, source: &mut dyn SeedSource) -> usize {
    ((source.next_fraction() * len as f64) as usize).min(len - 1)
}

/// Draw an index with probability proportional to its weight.
fn weighted_index(weights: &[f64], total: f64, source: &mut dyn SeedSource) -> usize {
    let target = source.next_fraction() * total;
    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if target <= cumulative {
            return index;
        }
    }
    weights.len() - 1
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays back a fixed fraction sequence; panics when the script runs dry
    /// so tests notice unexpected extra draws.
    struct ScriptedSource {
        fractions: Vec<f64>,
        cursor: usize,
    }

    impl ScriptedSource {
        fn new(fractions: &[f64]) -> Self {
            Self {
                fractions: fractions.to_vec(),
                cursor: 0,
            }
        }
    }

    impl SeedSource for ScriptedSource {
        fn next_fraction(&mut self) -> f64 {
            let value = self.fractions[self.cursor];
            self.cursor += 1;
            value
        }
    }

    // === Selection ===

    #[test]
    fn test_small_input_passes_through() {
        let colors = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        let mut source = ScriptedSource::new(&[]);
        let picked = select_dominant(&colors, 8, &mut source);
        assert_eq!(picked, colors.to_vec(), "len <= k must return input unchanged");
    }

    #[test]
    fn test_k_equal_to_len_returns_all_in_order() {
        let colors = [
            Rgb::new(10, 0, 0),
            Rgb::new(0, 10, 0),
            Rgb::new(0, 0, 10),
        ];
        let mut source = ScriptedSource::new(&[]);
        assert_eq!(select_dominant(&colors, 3, &mut source), colors.to_vec());
    }

    #[test]
    fn test_scripted_selection_is_exact() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 255, 255);
        let c = Rgb::new(10, 10, 10);
        // First draw 0.0 picks index 0 (a). Second draw 0.5 lands in b's span
        // of the squared-distance weights (a: 0, b: 195075, c: 300).
        let mut source = ScriptedSource::new(&[0.0, 0.5]);
        let picked = select_dominant(&[a, b, c], 2, &mut source);
        assert_eq!(picked, vec![a, b]);
    }

    #[test]
    fn test_scripted_selection_prefers_far_colors() {
        let near = Rgb::new(0, 0, 0);
        let close = Rgb::new(1, 0, 0);
        let far = Rgb::new(200, 200, 200);
        // Weights after picking `near`: close = 1, far = 120000. Any draw
        // above close's sliver selects `far`.
        let mut source = ScriptedSource::new(&[0.0, 0.1]);
        let picked = select_dominant(&[near, close, far], 2, &mut source);
        assert_eq!(picked, vec![near, far]);
    }

    #[test]
    fn test_identical_inputs_fall_back_to_uniform() {
        let same = Rgb::new(42, 42, 42);
        let colors = vec![same; 10];
        let mut source = ScriptedSource::new(&[0.3, 0.7, 0.9]);
        let picked = select_dominant(&colors, 3, &mut source);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|c| *c == same));
    }

    #[test]
    fn test_returns_exactly_k_with_seeded_source() {
        let colors: Vec<Rgb> = (0..50u8).map(|i| Rgb::new(i * 5, 255 - i * 5, i)).collect();
        let mut source = SeededSource::new(7);
        let picked = select_dominant(&colors, 8, &mut source);
        assert_eq!(picked.len(), 8);
        // Distinct inputs give distinct centers.
        for (i, a) in picked.iter().enumerate() {
            for b in &picked[i + 1..] {
                assert_ne!(a, b, "centers should not repeat for distinct inputs");
            }
        }
    }

    // === Separation score ===

    #[test]
    fn test_separation_degenerate_sets() {
        let c = Rgb::new(5, 5, 5);
        assert_eq!(separation_score(c, &[]), 1.0);
        assert_eq!(separation_score(c, &[c]), 1.0);
        // Larger sets whose entries all equal the probe have no separation.
        assert_eq!(separation_score(c, &[c, c, c]), 0.0);
    }

    #[test]
    fn test_separation_extremes_clamp_to_one() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        // Mean distance 441.67295... nudges past the nominal maximum and must
        // clamp.
        assert_eq!(separation_score(black, &[black, white]), 1.0);
    }

    #[test]
    fn test_separation_mid_range() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(100, 0, 0);
        let c = Rgb::new(0, 100, 0);
        let score = separation_score(a, &[a, b, c]);
        let expected = 100.0 / color::MAX_RGB_DISTANCE;
        assert!(
            (score - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            score
        );
    }
}
