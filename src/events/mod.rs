//! Outbound event stream.
//!
//! The engine has no rendering, storage, or host dependency. It describes
//! what happened as [`RoundEvent`]s; collaborators subscribe as
//! [`RoundObserver`]s.
//!
//! ## Key Components
//!
//! - [`RoundEvent`]: Calls, marks, claims, phase changes, round end, stats
//! - [`RoundObserver`]: Anything that consumes events (closures included)
//! - [`EventLog`]: Records events, mostly for tests and replays
//! - [`HostBridge`] / [`HostRelay`]: Haptic feedback for a platform host
//!
//! ## Example Usage
//!
//! ```
//! use bingo_round::core::{Participant, ParticipantId, RoundConfig};
//! use bingo_round::events::{EventLog, RoundEvent};
//! use bingo_round::round::RoundController;
//!
//! let mut round = RoundController::new(RoundConfig::default(), 7);
//! let host = ParticipantId::new(1);
//! round.open(Participant::new(host, "Host"), 0).unwrap();
//!
//! let card = round.deal_card();
//! round.start_round(host, vec![(host, card)], 0).unwrap();
//! round.tick().unwrap();
//!
//! let mut log = EventLog::new();
//! round.publish(&mut log);
//! assert_eq!(log.count(|e| matches!(e, RoundEvent::CallMade { .. })), 1);
//! ```

mod event;
mod observer;

pub use event::{HostFeedback, RoundEvent};
pub use observer::{EventLog, HostBridge, HostRelay, RoundObserver};
