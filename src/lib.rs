//! # bingo-round
//!
//! A deterministic engine for 75-ball bingo rounds.
//!
//! ## Design Principles
//!
//! 1. **Owned, not global**: A round is a `RoundController` value. Run as
//!    many side by side as you like.
//!
//! 2. **Headless**: The engine renders nothing and stores nothing. It
//!    reports what happened as events; renderers, persistence and platform
//!    hosts subscribe.
//!
//! 3. **Reproducible**: Cards and calls come from seeded ChaCha8 streams, and
//!    time is a logical clock the host advances. The same seed and the same
//!    inputs replay the same round.
//!
//! ## Modules
//!
//! - `core`: Ids, participants, phases, configuration, errors, RNG
//! - `pool`: The 75-number pool and where call values come from
//! - `cards`: Card layouts and marks
//! - `rules`: Winning patterns and detection
//! - `events`: Outbound events and observers
//! - `round`: Lobby, scheduler and the round state machine
//! - `profile`: Merging round results into profile statistics

pub mod core;
pub mod pool;
pub mod cards;
pub mod rules;
pub mod events;
pub mod round;
pub mod profile;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameRng, LobbyConfig, Participant, ParticipantId, RewardConfig, RoundConfig, RoundError,
    RoundPhase,
};

pub use crate::pool::{Call, CallSource, Draw, Letter, NumberPool, RandomSource, ScriptedSource};

pub use crate::cards::{BingoCard, CellPos, MarkGrid, MarkTracker};

pub use crate::rules::{Pattern, WinDetector};

pub use crate::events::{EventLog, HostBridge, HostFeedback, HostRelay, RoundEvent, RoundObserver};

pub use crate::round::{EndReason, RoundController, RoundOutcome, RoundSnapshot, SeatedCard, StatsDelta};

pub use crate::profile::ProfileStats;
