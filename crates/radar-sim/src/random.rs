//! Randomness behind course corrections.
//!
//! The engine only needs uniform integers in a range, so the source is a
//! small capability trait. Production runs use a seeded ChaCha stream; tests
//! script the exact draws.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Supplies uniform integers for course corrections.
pub trait CourseRandom {
    /// Uniform value in `0..bound`. A `bound` of zero yields zero.
    fn uniform_below(&mut self, bound: u32) -> u32;
}

impl CourseRandom for ChaCha8Rng {
    fn uniform_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.gen_range(0..bound)
    }
}

impl<R: CourseRandom + ?Sized> CourseRandom for &mut R {
    fn uniform_below(&mut self, bound: u32) -> u32 {
        (**self).uniform_below(bound)
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound. An empty script always
/// answers `bound / 2`, which for course corrections means "no turn".
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws answered so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl CourseRandom for ScriptedRandom {
    fn uniform_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        if self.values.is_empty() {
            self.cursor += 1;
            return bound / 2;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}
