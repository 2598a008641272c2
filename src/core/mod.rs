//! Core engine types: ids, participants, phases, errors, RNG, configuration.
//!
//! Everything else in the crate builds on these. Nothing in `core` knows
//! about cards, pools or patterns.

pub mod config;
pub mod entity;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;

pub use config::{LobbyConfig, RewardConfig, RoundConfig};
pub use entity::CardId;
pub use error::RoundError;
pub use phase::RoundPhase;
pub use player::{Participant, ParticipantId};
pub use rng::GameRng;
