//! Participants assembling for a round.
//!
//! The lobby only exists while the round is `waiting`. The first participant
//! in join order is the host; if the host leaves, the next one takes over.

use rustc_hash::FxHashMap;

use crate::core::{LobbyConfig, Participant, ParticipantId, RoundError};

/// Who is in the round, in join order, plus the auto-start deadline.
#[derive(Clone, Debug)]
pub struct Lobby {
    config: LobbyConfig,
    participants: FxHashMap<ParticipantId, Participant>,
    order: Vec<ParticipantId>,
    deadline: Option<u64>,
}

impl Lobby {
    #[must_use]
    pub fn new(config: LobbyConfig) -> Self {
        Self {
            config,
            participants: FxHashMap::default(),
            order: Vec::new(),
            deadline: None,
        }
    }

    /// Start a fresh lobby with `host` as its first member.
    pub fn open(&mut self, host: Participant, now: u64) -> Result<(), RoundError> {
        self.clear();
        self.join(host)?;
        if self.config.auto_start {
            self.deadline = Some(now.saturating_add(self.config.countdown));
        }
        Ok(())
    }

    pub fn join(&mut self, participant: Participant) -> Result<(), RoundError> {
        if self.participants.contains_key(&participant.id) {
            return Err(RoundError::AlreadyJoined(participant.id));
        }
        if self.order.len() >= self.config.max_participants {
            return Err(RoundError::LobbyFull {
                max: self.config.max_participants,
            });
        }

        self.order.push(participant.id);
        self.participants.insert(participant.id, participant);
        Ok(())
    }

    pub fn leave(&mut self, id: ParticipantId) -> Result<Participant, RoundError> {
        let participant = self
            .participants
            .remove(&id)
            .ok_or(RoundError::UnknownParticipant(id))?;
        self.order.retain(|&p| p != id);
        Ok(participant)
    }

    /// Check that `requester` may start the round now.
    pub fn check_start(&self, requester: ParticipantId) -> Result<(), RoundError> {
        if !self.contains(requester) {
            return Err(RoundError::UnknownParticipant(requester));
        }
        if self.config.host_only_start && self.host() != Some(requester) {
            return Err(RoundError::NotHost { requester });
        }
        self.check_quorum()
    }

    /// Check the participant minimum.
    pub fn check_quorum(&self) -> Result<(), RoundError> {
        if self.order.len() < self.config.min_participants {
            return Err(RoundError::NotEnoughParticipants {
                required: self.config.min_participants,
                present: self.order.len(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn host(&self) -> Option<ParticipantId> {
        self.order.first().copied()
    }

    #[must_use]
    pub fn contains(&self, id: ParticipantId) -> bool {
        self.participants.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(&id)
    }

    /// Participants in join order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.order.iter().filter_map(|id| self.participants.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// When the countdown expires, if it is armed.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    #[must_use]
    pub fn countdown_expired(&self, now: u64) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    #[must_use]
    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    pub fn clear(&mut self) {
        self.participants.clear();
        self.order.clear();
        self.deadline = None;
    }
}
