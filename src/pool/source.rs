//! Where call values come from.
//!
//! The controller always owns the `NumberPool`; a `CallSource` only decides
//! which value the pool gives up next. A local game draws at random. A
//! server-driven game pushes the values the server announced into a
//! `ScriptedSource`, and the pool still guarantees no repeats.

use std::collections::VecDeque;

use super::number_pool::{Draw, NumberPool};
use crate::core::RoundError;

/// Origin of call values.
pub trait CallSource {
    /// Produce the next draw from `pool`.
    ///
    /// Must leave `pool` untouched when returning `Err` or `Draw::Idle`.
    fn draw(&mut self, pool: &mut NumberPool) -> Result<Draw, RoundError>;

    /// Forget any buffered values. Called when the round resets.
    fn reset(&mut self) {}
}

/// Uniform random draws from the pool's shuffled order.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSource;

impl CallSource for RandomSource {
    fn draw(&mut self, pool: &mut NumberPool) -> Result<Draw, RoundError> {
        Ok(pool.next())
    }
}

/// Values dictated from outside, in arrival order.
///
/// ```
/// use bingo_round::core::GameRng;
/// use bingo_round::pool::{CallSource, Draw, NumberPool, ScriptedSource};
///
/// let mut pool = NumberPool::new(GameRng::new(1));
/// let mut source = ScriptedSource::from_values([12, 40]);
///
/// assert!(matches!(source.draw(&mut pool), Ok(Draw::Called(c)) if c.value == 12));
/// assert!(matches!(source.draw(&mut pool), Ok(Draw::Called(c)) if c.value == 40));
/// assert_eq!(source.draw(&mut pool), Ok(Draw::Idle));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<u8>,
}

impl ScriptedSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source preloaded with values.
    pub fn from_values(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            queue: values.into_iter().collect(),
        }
    }

    /// Queue a value announced by the remote caller.
    pub fn push(&mut self, value: u8) {
        self.queue.push_back(value);
    }

    /// Values waiting to be called.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl CallSource for ScriptedSource {
    fn draw(&mut self, pool: &mut NumberPool) -> Result<Draw, RoundError> {
        if pool.is_exhausted() {
            return Ok(Draw::Exhausted);
        }
        let Some(&value) = self.queue.front() else {
            return Ok(Draw::Idle);
        };
        // Rejected values are dropped from the queue; the pool stays untouched.
        self.queue.pop_front();
        pool.take(value).map(Draw::Called)
    }

    fn reset(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_random_source_exhausts() {
        let mut pool = NumberPool::new(GameRng::new(4));
        let mut source = RandomSource;

        for _ in 0..75 {
            assert!(matches!(source.draw(&mut pool), Ok(Draw::Called(_))));
        }
        assert_eq!(source.draw(&mut pool), Ok(Draw::Exhausted));
    }

    #[test]
    fn test_scripted_rejects_duplicate_without_touching_pool() {
        let mut pool = NumberPool::new(GameRng::new(4));
        let mut source = ScriptedSource::from_values([5, 5, 6]);

        assert!(matches!(source.draw(&mut pool), Ok(Draw::Called(_))));
        let before = pool.stats();

        assert_eq!(source.draw(&mut pool), Err(RoundError::AlreadyCalled(5)));
        assert_eq!(pool.stats(), before);

        assert!(matches!(source.draw(&mut pool), Ok(Draw::Called(c)) if c.value == 6));
        assert_eq!(source.pending(), 0);
    }

    #[test]
    fn test_scripted_idle_until_pushed() {
        let mut pool = NumberPool::new(GameRng::new(4));
        let mut source = ScriptedSource::new();

        assert_eq!(source.draw(&mut pool), Ok(Draw::Idle));
        assert_eq!(pool.called().len(), 0);

        source.push(70);
        assert!(matches!(source.draw(&mut pool), Ok(Draw::Called(c)) if c.value == 70));
    }

    #[test]
    fn test_scripted_reports_exhaustion() {
        let mut pool = NumberPool::new(GameRng::new(4));
        let mut source = ScriptedSource::from_values(1..=75);

        for _ in 0..75 {
            assert!(matches!(source.draw(&mut pool), Ok(Draw::Called(_))));
        }
        source.push(1);
        assert_eq!(source.draw(&mut pool), Ok(Draw::Exhausted));

        source.reset();
        assert_eq!(source.pending(), 0);
    }
}
