//! Pixel sampling
//!
//! Reinterprets a raw byte stream as a flat sequence of RGB triples: bytes are
//! grouped into non-overlapping runs of three, trailing bytes that do not fill
//! a triple are dropped. No image decoding happens here; byte order in the
//! container format is taken as-is, so the "pixels" are pseudo-pixels. The
//! sampler is total: any input, including empty, yields a valid (possibly
//! empty) sample.

use std::collections::HashMap;

use crate::color::Rgb;

/// The ordered sequence of colors extracted from one input.
#[derive(Debug, Clone)]
pub struct ColorSample {
    colors: Vec<Rgb>,
}

impl ColorSample {
    /// All sampled colors in input order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of sampled colors, `floor(byte_count / 3)` of the source.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Group `bytes` into RGB triples.
pub fn sample_bytes(bytes: &[u8]) -> ColorSample {
    let mut colors = Vec::with_capacity(bytes.len() / 3);
    for triple in bytes.chunks_exact(3) {
        colors.push(Rgb::new(triple[0], triple[1], triple[2]));
    }
    ColorSample { colors }
}

#[derive(Debug, Clone, Copy)]
struct CountSlot {
    count: usize,
    first_seen: usize,
}

/// Occurrence counts for a color sequence.
///
/// Ties in `most_common` are broken by first appearance in the sequence, so
/// top-N queries are deterministic for a given input.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<Rgb, CountSlot>,
}

impl FrequencyTable {
    /// Count occurrences over a color slice.
    pub fn from_colors(colors: &[Rgb]) -> Self {
        let mut counts: HashMap<Rgb, CountSlot> = HashMap::new();
        for (index, color) in colors.iter().enumerate() {
            counts
                .entry(*color)
                .and_modify(|slot| slot.count += 1)
                .or_insert(CountSlot {
                    count: 1,
                    first_seen: index,
                });
        }
        Self { counts }
    }

    /// Number of distinct colors.
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().map(|slot| slot.count).sum()
    }

    /// The `n` most frequent colors with their counts, most frequent first.
    pub fn most_common(&self, n: usize) -> Vec<(Rgb, usize)> {
        let mut ranked: Vec<(Rgb, CountSlot)> =
            self.counts.iter().map(|(color, slot)| (*color, *slot)).collect();
        ranked.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        ranked
            .into_iter()
            .take(n)
            .map(|(color, slot)| (color, slot.count))
            .collect()
    }

    /// Every distinct color, ordered by first appearance.
    pub fn distinct_in_order(&self) -> Vec<Rgb> {
        let mut ordered: Vec<(Rgb, usize)> = self
            .counts
            .iter()
            .map(|(color, slot)| (*color, slot.first_seen))
            .collect();
        ordered.sort_by_key(|(_, first_seen)| *first_seen);
        ordered.into_iter().map(|(color, _)| color).collect()
    }

    /// All occurrence counts, in first-appearance order of their colors.
    pub fn all_counts(&self) -> Vec<usize> {
        let mut ordered: Vec<CountSlot> = self.counts.values().copied().collect();
        ordered.sort_by_key(|slot| slot.first_seen);
        ordered.into_iter().map(|slot| slot.count).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
