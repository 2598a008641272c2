//! Card identification.
//!
//! Every card seated in a round has a unique `CardId`. Ids are opaque to the
//! engine; the controller hands them out from a counter that only grows, so
//! a regenerated or re-dealt card never reuses an id from the same session.
//!
//! ```
//! use bingo_round::core::CardId;
//!
//! let card = CardId::new(7);
//! assert_eq!(card.raw(), 7);
//! assert_eq!(card.to_string(), "Card#7");
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identifier for a bingo card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
