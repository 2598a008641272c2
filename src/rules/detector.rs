//! Win detection.
//!
//! A card wins when any one pattern is fully marked. The FREE cell counts as
//! marked in every pattern it belongs to. Counting marked cells anywhere on
//! the card is not a win condition.

use smallvec::SmallVec;

use super::patterns::Pattern;
use crate::cards::{BingoCard, MarkGrid};

/// Evaluates mark grids against the pattern set.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinDetector;

impl WinDetector {
    /// True if any pattern on `card` is complete.
    #[must_use]
    pub fn check_win(card: &BingoCard) -> bool {
        Self::check_grid(card.marks())
    }

    /// True if any pattern on `marks` is complete.
    #[must_use]
    pub fn check_grid(marks: &MarkGrid) -> bool {
        Self::first_pattern(marks).is_some()
    }

    /// The first complete pattern in `Pattern::all()` order.
    #[must_use]
    pub fn first_pattern(marks: &MarkGrid) -> Option<Pattern> {
        Pattern::all().find(|&p| Self::is_complete(marks, p))
    }

    /// Every complete pattern. Usually zero or one; a 5x5 card can hold
    /// at most 12.
    #[must_use]
    pub fn winning_patterns(marks: &MarkGrid) -> SmallVec<[Pattern; 4]> {
        Pattern::all().filter(|&p| Self::is_complete(marks, p)).collect()
    }

    /// Whether every cell of `pattern` is marked.
    #[must_use]
    pub fn is_complete(marks: &MarkGrid, pattern: Pattern) -> bool {
        pattern.cells().iter().all(|&pos| marks.is_marked(pos))
    }
}
