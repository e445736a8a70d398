//! Gap placement randomness
//!
//! The tick never touches a global generator; it draws gap offsets from an
//! injected [`GapSource`] so tests can replay fixed sequences.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplies the gap-top offset of each newly spawned pipe
pub trait GapSource {
    /// Next gap top, a whole number inside `range`
    fn next_gap_top(&mut self, range: Range<u32>) -> f32;
}

/// Seeded PCG generator drawing uniformly from the range
#[derive(Debug, Clone)]
pub struct SeededGaps {
    rng: Pcg32,
}

impl SeededGaps {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl GapSource for SeededGaps {
    fn next_gap_top(&mut self, range: Range<u32>) -> f32 {
        if range.is_empty() {
            return range.start as f32;
        }
        self.rng.random_range(range) as f32
    }
}

/// Replays a fixed cycle of offsets, clamped into the requested range
#[derive(Debug, Clone)]
pub struct FixedGaps {
    values: Vec<u32>,
    cursor: usize,
}

impl FixedGaps {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl GapSource for FixedGaps {
    fn next_gap_top(&mut self, range: Range<u32>) -> f32 {
        let Some(&value) = self.values.get(self.cursor % self.values.len().max(1)) else {
            return range.start as f32;
        };
        self.cursor += 1;
        let max = range.end.saturating_sub(1).max(range.start);
        value.clamp(range.start, max) as f32
    }
}
