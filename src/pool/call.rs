//! Called numbers and their BINGO letters.

use serde::{Deserialize, Serialize};

use crate::core::RoundError;

/// Highest callable number.
pub const MAX_NUMBER: u8 = 75;

/// Numbers per letter column.
pub const COLUMN_SPAN: u8 = 15;

/// Column letter of a bingo number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    B,
    I,
    N,
    G,
    O,
}

impl Letter {
    /// All letters in column order.
    pub const ALL: [Letter; 5] = [Letter::B, Letter::I, Letter::N, Letter::G, Letter::O];

    /// Letter of the column holding `value`, or `None` outside 1..=75.
    #[must_use]
    pub fn for_value(value: u8) -> Option<Letter> {
        if value == 0 || value > MAX_NUMBER {
            return None;
        }
        Some(Self::ALL[usize::from((value - 1) / COLUMN_SPAN)])
    }

    /// Letter of card column `col` (0..5).
    #[must_use]
    pub fn for_column(col: usize) -> Option<Letter> {
        Self::ALL.get(col).copied()
    }

    /// Card column index.
    #[must_use]
    pub const fn column(self) -> usize {
        self as usize
    }

    /// Inclusive range of numbers in this column: `15c+1 ..= 15c+15`.
    #[must_use]
    pub fn range(self) -> std::ops::RangeInclusive<u8> {
        let low = self.column() as u8 * COLUMN_SPAN + 1;
        low..=low + COLUMN_SPAN - 1
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Letter::B => "B",
            Letter::I => "I",
            Letter::N => "N",
            Letter::G => "G",
            Letter::O => "O",
        };
        f.write_str(c)
    }
}

/// One drawn number with its derived letter.
///
/// ```
/// use bingo_round::pool::{Call, Letter};
///
/// let call = Call::new(42).unwrap();
/// assert_eq!(call.letter, Letter::N);
/// assert_eq!(call.to_string(), "N-42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Call {
    pub value: u8,
    pub letter: Letter,
}

impl Call {
    /// Build a call, rejecting values outside 1..=75.
    pub fn new(value: u8) -> Result<Self, RoundError> {
        let letter = Letter::for_value(value).ok_or(RoundError::NumberOutOfRange(value))?;
        Ok(Self { value, letter })
    }

    /// Build a call for a value already known to be in 1..=75.
    pub(crate) fn from_pool(value: u8) -> Self {
        debug_assert!((1..=MAX_NUMBER).contains(&value));
        Self {
            value,
            letter: Letter::ALL[usize::from((value - 1) / COLUMN_SPAN)],
        }
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.letter, self.value)
    }
}
