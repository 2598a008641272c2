//! Read-only views for renderers.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::outcome::RoundOutcome;
use crate::cards::BingoCard;
use crate::core::{CardId, ParticipantId, RoundPhase};
use crate::pool::{Call, PoolStats};

/// A card in play, with its owner and marking mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatedCard {
    pub card: BingoCard,
    pub owner: ParticipantId,
    pub auto_mark: bool,
}

impl SeatedCard {
    #[must_use]
    pub fn new(card: BingoCard, owner: ParticipantId, auto_mark: bool) -> Self {
        Self { card, owner, auto_mark }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.card.id()
    }
}

/// Everything a renderer needs for one frame.
///
/// The call history is an `im::Vector`, so taking a snapshot per frame does
/// not copy it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: RoundPhase,
    pub called: Vector<u8>,
    pub last_call: Option<Call>,
    pub pool: PoolStats,
    pub cards: Vec<SeatedCard>,
    pub next_call_at: Option<u64>,
    pub outcome: Option<RoundOutcome>,
}

impl RoundSnapshot {
    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&SeatedCard> {
        self.cards.iter().find(|seat| seat.id() == id)
    }
}
