//! Round events.
//!
//! Events describe what the engine did, after it did it. The controller
//! queues them while an operation runs and hands them out once the operation
//! is complete, so a renderer never sees a half-applied tick.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, ParticipantId, RoundPhase};
use crate::pool::Call;
use crate::round::{EndReason, StatsDelta};
use crate::rules::Pattern;

/// Something that happened in a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RoundEvent {
    PhaseChanged {
        from: RoundPhase,
        to: RoundPhase,
    },

    ParticipantJoined {
        participant: ParticipantId,
        is_bot: bool,
    },

    ParticipantLeft {
        participant: ParticipantId,
    },

    CardSeated {
        card: CardId,
        owner: ParticipantId,
    },

    /// A number was called. `sequence` counts from 1 within the round.
    CallMade {
        call: Call,
        sequence: usize,
    },

    /// A cell changed, by auto-mark or a manual toggle.
    CardMarked {
        card: CardId,
        row: usize,
        col: usize,
        marked: bool,
    },

    ClaimRejected {
        card: CardId,
    },

    CardLeft {
        card: CardId,
    },

    RoundEnded {
        reason: EndReason,
        winning_card: Option<CardId>,
        winner: Option<ParticipantId>,
        pattern: Option<Pattern>,
    },

    /// Profile changes for the persistence layer to merge.
    StatsDelta {
        participant: ParticipantId,
        delta: StatsDelta,
    },
}

/// Feedback a platform host can play for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostFeedback {
    /// Light impact, on every call.
    Light,
    /// Success notification, on a win.
    Success,
    /// Error notification, on a rejected claim.
    Error,
}

impl RoundEvent {
    /// The host feedback this event asks for, if any.
    #[must_use]
    pub fn host_feedback(&self) -> Option<HostFeedback> {
        match self {
            RoundEvent::CallMade { .. } => Some(HostFeedback::Light),
            RoundEvent::RoundEnded {
                reason: EndReason::Win,
                ..
            } => Some(HostFeedback::Success),
            RoundEvent::ClaimRejected { .. } => Some(HostFeedback::Error),
            _ => None,
        }
    }
}
