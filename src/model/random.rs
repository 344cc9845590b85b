//! Injectable randomness for shuffle selection

use rand::Rng;

/// Source of uniformly distributed queue indices.
pub trait RandomSource {
    /// Returns an index in `[0, len)`. Only called with `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG backed source used by the running application
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Replays a fixed sequence of values, each reduced modulo `len`.
///
/// Once the script runs out it starts over from the beginning.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, len: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % len
    }
}
