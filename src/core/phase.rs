//! Round lifecycle phases.

use serde::{Deserialize, Serialize};

/// Lifecycle of a round: `Idle → Waiting → Playing → Ended`, back to `Idle`
/// only through an explicit reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    /// No lobby open.
    #[default]
    Idle,
    /// Participants assembling, cards being seated.
    Waiting,
    /// Calls being issued.
    Playing,
    /// Won, exhausted, or abandoned.
    Ended,
}

impl RoundPhase {
    /// Lowercase name, as used in events and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundPhase::Idle => "idle",
            RoundPhase::Waiting => "waiting",
            RoundPhase::Playing => "playing",
            RoundPhase::Ended => "ended",
        }
    }

    /// Whether `self → next` is a legal transition other than reset.
    #[must_use]
    pub const fn can_advance_to(self, next: RoundPhase) -> bool {
        matches!(
            (self, next),
            (RoundPhase::Idle, RoundPhase::Waiting)
                | (RoundPhase::Waiting, RoundPhase::Playing)
                | (RoundPhase::Playing, RoundPhase::Ended)
        )
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
