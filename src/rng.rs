//! Minimal seeded pseudo-random generator
//!
//! Every random decision in the generation pipeline draws from this
//! generator, so identical options reproduce identical templates.

/// Deterministic generator based on the fractional part of a scaled sine.
///
/// The state advances by one per draw, so the sequence is a pure function
/// of the initial seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRng {
    state: f64,
}

impl SeededRng {
    pub fn new(seed: f64) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1)
    pub fn next(&mut self) -> f64 {
        let x = self.state.sin() * 10000.0;
        self.state += 1.0;
        x - x.floor()
    }

    /// Next value in [min, max)
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// Pick an element of a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = (self.next() * items.len() as f64) as usize;
        &items[index.min(items.len() - 1)]
    }
}
