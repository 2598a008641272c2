//! Round orchestration: lobby, call cadence, claims and results.
//!
//! ## Key Types
//!
//! - [`RoundController`]: The state machine driving one round
//! - [`Lobby`]: Participants gathered while the round is waiting
//! - [`CallScheduler`]: When the next call is due on the logical clock
//! - [`RoundOutcome`] / [`EndReason`]: How the round finished
//! - [`StatsDelta`]: Per-participant profile changes for persistence
//! - [`RoundSnapshot`]: A render-ready copy of the round

mod controller;
mod lobby;
mod outcome;
mod scheduler;
mod snapshot;

pub use controller::RoundController;
pub use lobby::Lobby;
pub use outcome::{EndReason, RoundOutcome, StatsDelta};
pub use scheduler::CallScheduler;
pub use snapshot::{RoundSnapshot, SeatedCard};
