pub mod document;
pub mod draw;
pub mod store;

use crate::error::ValidationError;
use draw::Draw;
use tracing::debug;

/// Recorded draws, most recent first, never longer than `max_len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    draws: Vec<Draw>,
    max_len: usize,
}

impl History {
    pub fn new(max_len: usize) -> Self {
        History {
            draws: Vec::new(),
            max_len,
        }
    }

    pub fn from_draws(mut draws: Vec<Draw>, max_len: usize) -> Self {
        draws.truncate(max_len);
        History { draws, max_len }
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// The `count` most recent draws, or all of them if there are fewer.
    pub fn recent(&self, count: usize) -> &[Draw] {
        &self.draws[..count.min(self.draws.len())]
    }

    /// Prepends an already validated draw and drops the oldest beyond the cap.
    pub fn push_front(&mut self, draw: Draw) {
        self.draws.insert(0, draw);
        self.draws.truncate(self.max_len);
        debug!(len = self.draws.len(), "draw added to history");
    }

    /// Validates `numbers` and prepends them. The history is untouched on error.
    pub fn add(&mut self, numbers: &[i64]) -> Result<Draw, ValidationError> {
        let draw = Draw::new(numbers)?;
        self.push_front(draw);
        Ok(draw)
    }

    /// Replaces the whole history, as import and load do.
    pub fn replace(&mut self, draws: Vec<Draw>) {
        *self = History::from_draws(draws, self.max_len);
        debug!(len = self.draws.len(), "history replaced");
    }
}

#[cfg(test)]
pub(crate) fn make_test_draws(n: usize) -> Vec<Draw> {
    (0..n)
        .map(|i| {
            let base = (i * 7) as i64;
            let numbers: Vec<i64> = (0..6).map(|k| (base + k * 8) % 45 + 1).collect();
            Draw::new(&numbers).expect("test draw is valid")
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn arb_draws(max: usize) -> impl proptest::strategy::Strategy<Value = Vec<Draw>> {
    use proptest::prelude::*;

    let draw = proptest::sample::subsequence((1i64..=45).collect::<Vec<_>>(), 6)
        .prop_shuffle()
        .prop_map(|numbers| Draw::new(&numbers).expect("6 distinct numbers in range"));
    proptest::collection::vec(draw, 0..=max)
}
