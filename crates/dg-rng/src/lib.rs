//! dg-rng: deterministic random sequences for dungeon generation
//!
//! Wraps a seeded ChaCha stream so that a seed fully determines every draw.
//! ChaCha8 output is value-stable across platforms, which is what makes two
//! generation runs with the same seed produce identical dungeons.
//!
//! Draws can optionally be traced for diffing two runs call by call.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// One recorded draw, kept while tracing is enabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RngTraceEntry {
    /// Sequence number (0-indexed)
    pub seq: u64,
    /// Function name (e.g. "next_int", "rn2", "next_f64")
    pub func: &'static str,
    /// Argument (upper bound or range width; 0 when unused)
    pub arg: i64,
    /// Value handed back to the caller
    pub result: f64,
}

/// Seeded random number source used by every generation stage.
///
/// Only the seed is serialized; deserializing restarts the stream from the
/// beginning of that seed.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
    call_count: u64,
    tracing: bool,
    trace: Vec<RngTraceEntry>,
}

impl Serialize for DungeonRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DungeonRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(DungeonRng::new(seed))
    }
}

impl DungeonRng {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            call_count: 0,
            tracing: false,
            trace: Vec::new(),
        }
    }

    /// Get the seed used to create this generator
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        let value: f64 = self.rng.r#gen();
        self.record("next_f64", 0, value);
        value
    }

    /// Integer in `[min, max]`, both ends inclusive.
    ///
    /// Returns `min` when the range is empty (`max < min`) without consuming
    /// a draw.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        if max < min {
            return min;
        }
        let value = self.rng.gen_range(min..=max);
        self.record("next_int", i64::from(max) - i64::from(min) + 1, f64::from(value));
        value
    }

    /// Returns 0..n-1, or 0 if n is 0
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let value = self.rng.gen_range(0..n);
        self.record("rn2", i64::from(n), f64::from(value));
        value
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }

    /// Fair coin
    pub fn coin_flip(&mut self) -> bool {
        self.next_f64() < 0.5
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }

    /// Shuffle a slice in place (Fisher-Yates, high index first)
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// Shuffled copy of `items`; the input is left untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle_in_place(&mut out);
        out
    }

    /// Uniform index in `0..len`. `len` must fit in a `u32`.
    fn index(&mut self, len: usize) -> usize {
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        self.rn2(bound) as usize
    }

    fn record(&mut self, func: &'static str, arg: i64, result: f64) {
        if self.tracing {
            self.trace.push(RngTraceEntry {
                seq: self.call_count,
                func,
                arg,
                result,
            });
        }
        self.call_count += 1;
    }

    /// Enable draw tracing, discarding any previous trace
    pub fn enable_tracing(&mut self) {
        self.tracing = true;
        self.trace.clear();
    }

    /// Disable draw tracing; the recorded trace is kept
    pub fn disable_tracing(&mut self) {
        self.tracing = false;
    }

    /// Draws recorded since tracing was enabled
    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }

    /// Total number of draws made from this generator
    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}
