//! The per-round pool of callable numbers.
//!
//! `remaining` holds a uniformly shuffled permutation of the values not yet
//! called; drawing pops its tail. `called` records call order in an
//! `im::Vector` so renderers can take O(1) snapshots of the history.
//!
//! Invariant: `remaining ∪ called = {1..75}`, disjoint.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::call::{Call, MAX_NUMBER};
use crate::core::{GameRng, RoundError};

/// Result of asking for the next call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Draw {
    /// A new number was called.
    Called(Call),
    /// Every number has been called; the natural end of a round.
    Exhausted,
    /// The source has nothing to call yet (remote caller silent).
    ///
    /// `NumberPool` itself never returns this.
    Idle,
}

/// Call counters, as shown next to the called-number board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    pub called: usize,
    pub remaining: usize,
    pub total: usize,
}

/// Source of the 75 call values with no repeats within a round.
#[derive(Clone, Debug)]
pub struct NumberPool {
    rng: GameRng,
    remaining: Vec<u8>,
    called: Vector<u8>,
    called_mask: [bool; MAX_NUMBER as usize + 1],
}

impl NumberPool {
    /// Create a freshly shuffled pool.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        let mut pool = Self {
            rng,
            remaining: Vec::with_capacity(usize::from(MAX_NUMBER)),
            called: Vector::new(),
            called_mask: [false; MAX_NUMBER as usize + 1],
        };
        pool.reset();
        pool
    }

    /// Refill with all 75 values in a new uniformly shuffled order.
    pub fn reset(&mut self) {
        self.remaining.clear();
        self.remaining.extend(1..=MAX_NUMBER);
        self.rng.shuffle(&mut self.remaining);
        self.called = Vector::new();
        self.called_mask = [false; MAX_NUMBER as usize + 1];
    }

    /// Draw one value not yet returned this round.
    pub fn next(&mut self) -> Draw {
        match self.remaining.pop() {
            Some(value) => Draw::Called(self.record(value)),
            None => Draw::Exhausted,
        }
    }

    /// Remove a specific value, as dictated by a remote caller.
    ///
    /// Nothing changes when the value is out of range or already called.
    pub fn take(&mut self, value: u8) -> Result<Call, RoundError> {
        Call::new(value)?;
        let idx = self
            .remaining
            .iter()
            .position(|&v| v == value)
            .ok_or(RoundError::AlreadyCalled(value))?;
        self.remaining.remove(idx);
        Ok(self.record(value))
    }

    fn record(&mut self, value: u8) -> Call {
        self.called.push_back(value);
        self.called_mask[usize::from(value)] = true;
        Call::from_pool(value)
    }

    /// Values called so far, in call order.
    #[must_use]
    pub fn called(&self) -> &Vector<u8> {
        &self.called
    }

    /// The most recent call.
    #[must_use]
    pub fn last_call(&self) -> Option<Call> {
        self.called.last().map(|&v| Call::from_pool(v))
    }

    /// Whether `value` has been called this round.
    #[must_use]
    pub fn is_called(&self, value: u8) -> bool {
        self.called_mask.get(usize::from(value)).copied().unwrap_or(false)
    }

    /// Values left to call.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Every value has been called.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Called/remaining counters.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            called: self.called.len(),
            remaining: self.remaining.len(),
            total: usize::from(MAX_NUMBER),
        }
    }
}
