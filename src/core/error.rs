//! Errors reported by round operations.
//!
//! Every fallible operation validates before it mutates, so an `Err` means
//! the pool, the cards and the phase are exactly as they were before the
//! call. Pool exhaustion is not an error; it ends the round with
//! `EndReason::PoolExhausted`.

use thiserror::Error;

use super::entity::CardId;
use super::phase::RoundPhase;
use super::player::ParticipantId;

/// Error returned by round operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A manual claim named a card with no completed pattern.
    #[error("claim rejected: {card} has no completed pattern")]
    InvalidClaim { card: CardId },

    /// The operation needs a playing round.
    #[error("round is not active (phase: {phase})")]
    RoundNotActive { phase: RoundPhase },

    /// The operation needs an open lobby.
    #[error("lobby is not open (phase: {phase})")]
    LobbyClosed { phase: RoundPhase },

    #[error("unknown card {0}")]
    UnknownCard(CardId),

    #[error("unknown participant {0}")]
    UnknownParticipant(ParticipantId),

    #[error("{0} already joined")]
    AlreadyJoined(ParticipantId),

    #[error("lobby is full ({max} participants)")]
    LobbyFull { max: usize },

    /// Only the host may start the round.
    #[error("{requester} is not the host")]
    NotHost { requester: ParticipantId },

    #[error("need at least {required} participants, have {present}")]
    NotEnoughParticipants { required: usize, present: usize },

    #[error("no cards seated")]
    NoCards,

    #[error("{participant} already holds {max} cards")]
    CardLimit { participant: ParticipantId, max: usize },

    #[error("cell ({row}, {col}) is outside the 5x5 grid")]
    CellOutOfRange { row: usize, col: usize },

    #[error("malformed card: {0}")]
    MalformedCard(String),

    #[error("number {0} is outside 1..=75")]
    NumberOutOfRange(u8),

    #[error("number {0} has already been called")]
    AlreadyCalled(u8),
}
