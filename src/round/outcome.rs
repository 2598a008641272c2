//! How a round ended and what it is worth.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, ParticipantId, RewardConfig};
use crate::rules::Pattern;

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// A card completed a pattern.
    Win,
    /// All 75 numbers were called without a winner.
    PoolExhausted,
    /// The last active card left.
    Abandoned,
}

impl EndReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EndReason::Win => "win",
            EndReason::PoolExhausted => "pool-exhausted",
            EndReason::Abandoned => "abandoned",
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile changes produced by one round for one participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDelta {
    pub games_played: u32,
    pub games_won: u32,
    pub coins: i64,
    pub xp: u32,
}

impl StatsDelta {
    /// A round played and not won.
    #[must_use]
    pub const fn played() -> Self {
        Self {
            games_played: 1,
            games_won: 0,
            coins: 0,
            xp: 0,
        }
    }

    /// A round won while holding `cards_held` cards.
    #[must_use]
    pub fn won(rewards: &RewardConfig, cards_held: usize) -> Self {
        Self {
            games_played: 1,
            games_won: 1,
            coins: rewards.winnings(cards_held),
            xp: rewards.win_xp,
        }
    }
}

/// Final result of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub reason: EndReason,
    pub winning_card: Option<CardId>,
    pub winner: Option<ParticipantId>,
    pub pattern: Option<Pattern>,
    /// Numbers called before the round ended.
    pub calls: usize,
}

impl RoundOutcome {
    /// Check if a participant won.
    #[must_use]
    pub fn is_winner(&self, participant: ParticipantId) -> bool {
        self.winner == Some(participant)
    }

    /// The stats delta for a participant who held `cards_held` cards.
    #[must_use]
    pub fn delta_for(&self, participant: ParticipantId, cards_held: usize, rewards: &RewardConfig) -> StatsDelta {
        if self.is_winner(participant) {
            StatsDelta::won(rewards, cards_held)
        } else {
            StatsDelta::played()
        }
    }
}
