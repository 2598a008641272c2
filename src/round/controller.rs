//! The round state machine.
//!
//! `RoundController` owns everything a round touches: the lobby, the number
//! pool, the seated cards and the call scheduler. Hosts drive it with a
//! logical clock (`advance_to`) or one call at a time (`tick`), and read what
//! happened back as events.
//!
//! ## Phases
//!
//! ```text
//! idle --open--> waiting --start_round / countdown--> playing --win / exhausted / abandoned--> ended
//!   ^                                                                                           |
//!   +------------------------------------------ reset ------------------------------------------+
//! ```
//!
//! `reset` returns to `idle` from any phase.

use tracing::{debug, info, warn};

use super::lobby::Lobby;
use super::outcome::{EndReason, RoundOutcome};
use super::scheduler::CallScheduler;
use super::snapshot::{RoundSnapshot, SeatedCard};
use crate::cards::{BingoCard, CellPos, MarkTracker};
use crate::core::{CardId, GameRng, Participant, ParticipantId, RoundConfig, RoundError, RoundPhase};
use crate::events::{RoundEvent, RoundObserver};
use crate::pool::{Call, CallSource, Draw, NumberPool, RandomSource};
use crate::rules::{Pattern, WinDetector};

/// One bingo round, from lobby to result.
#[derive(Clone, Debug)]
pub struct RoundController<S = RandomSource> {
    config: RoundConfig,
    phase: RoundPhase,
    lobby: Lobby,
    pool: NumberPool,
    source: S,
    card_rng: GameRng,
    next_card_id: CardId,
    /// Seating order; also the order auto-mark cards are checked for a win.
    seats: Vec<SeatedCard>,
    scheduler: CallScheduler,
    outcome: Option<RoundOutcome>,
    events: Vec<RoundEvent>,
}

impl RoundController<RandomSource> {
    /// Create a controller that calls numbers at random.
    #[must_use]
    pub fn new(config: RoundConfig, seed: u64) -> Self {
        Self::with_source(config, seed, RandomSource)
    }
}

impl<S: CallSource> RoundController<S> {
    /// Create a controller whose calls come from `source`.
    ///
    /// Cards and calls use separate streams derived from `seed`, so dealing
    /// an extra card never changes the call order.
    pub fn with_source(config: RoundConfig, seed: u64, source: S) -> Self {
        config.validate();
        let rng = GameRng::new(seed);

        Self {
            phase: RoundPhase::Idle,
            lobby: Lobby::new(config.lobby.clone()),
            pool: NumberPool::new(rng.for_context("calls")),
            source,
            card_rng: rng.for_context("cards"),
            next_card_id: CardId::new(1),
            seats: Vec::new(),
            scheduler: CallScheduler::new(config.call_interval),
            outcome: None,
            events: Vec::new(),
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn lobby(&self) -> &Lobby {
        &self.lobby
    }

    #[must_use]
    pub fn pool(&self) -> &NumberPool {
        &self.pool
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the call source, e.g. to push remote calls.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Seated cards in seating order.
    #[must_use]
    pub fn cards(&self) -> &[SeatedCard] {
        &self.seats
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&SeatedCard> {
        self.seats.iter().find(|seat| seat.id() == id)
    }

    /// Number of cards `owner` has seated.
    #[must_use]
    pub fn cards_held(&self, owner: ParticipantId) -> usize {
        self.seats.iter().filter(|seat| seat.owner == owner).count()
    }

    /// Result of the last round, once it has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Logical time of the next scheduled call, while playing.
    #[must_use]
    pub fn next_call_at(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            phase: self.phase,
            called: self.pool.called().clone(),
            last_call: self.pool.last_call(),
            pool: self.pool.stats(),
            cards: self.seats.clone(),
            next_call_at: self.scheduler.next_due(),
            outcome: self.outcome.clone(),
        }
    }

    // === Events ===

    /// Take every queued event.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand every queued event to `observer`, oldest first.
    pub fn publish<O: RoundObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.events.drain(..) {
            observer.on_event(&event);
        }
    }

    // === Lobby ===

    /// Open the lobby with `host` as its first participant.
    pub fn open(&mut self, host: Participant, now: u64) -> Result<(), RoundError> {
        if self.phase != RoundPhase::Idle {
            return Err(RoundError::LobbyClosed { phase: self.phase });
        }
        let (id, is_bot) = (host.id, host.is_bot);
        self.lobby.open(host, now)?;

        self.set_phase(RoundPhase::Waiting);
        info!(host = %id, deadline = ?self.lobby.deadline(), "Lobby opened");
        self.events.push(RoundEvent::ParticipantJoined { participant: id, is_bot });
        Ok(())
    }

    pub fn join(&mut self, participant: Participant) -> Result<(), RoundError> {
        self.require_waiting()?;
        let (id, is_bot) = (participant.id, participant.is_bot);
        self.lobby.join(participant)?;

        debug!(participant = %id, is_bot, present = self.lobby.len(), "Participant joined");
        self.events.push(RoundEvent::ParticipantJoined { participant: id, is_bot });
        Ok(())
    }

    /// Remove a participant and their cards.
    ///
    /// During play this can end the round as abandoned.
    pub fn leave(&mut self, participant: ParticipantId) -> Result<(), RoundError> {
        if !matches!(self.phase, RoundPhase::Waiting | RoundPhase::Playing) {
            return Err(RoundError::LobbyClosed { phase: self.phase });
        }
        self.lobby.leave(participant)?;

        debug!(%participant, "Participant left");
        self.events.push(RoundEvent::ParticipantLeft { participant });

        let events = &mut self.events;
        self.seats.retain(|seat| {
            let keep = seat.owner != participant;
            if !keep {
                events.push(RoundEvent::CardLeft { card: seat.id() });
            }
            keep
        });

        if self.phase == RoundPhase::Playing && self.seats.is_empty() {
            self.end(EndReason::Abandoned, None);
        }
        Ok(())
    }

    // === Cards ===

    /// Generate a fresh card from the round's card stream.
    pub fn deal_card(&mut self) -> BingoCard {
        let id = self.next_card_id;
        self.next_card_id = id.next();
        BingoCard::generate(id, &mut self.card_rng)
    }

    /// Seat a card for `owner` before the round starts.
    pub fn seat_card(&mut self, owner: ParticipantId, card: BingoCard) -> Result<CardId, RoundError> {
        self.require_waiting()?;
        self.check_seat(owner, card.id(), 0)?;
        Ok(self.push_seat(owner, card))
    }

    /// Replace a seated card's layout. Only allowed while waiting.
    pub fn regenerate_card(&mut self, card: CardId) -> Result<(), RoundError> {
        self.require_waiting()?;
        let idx = self.seat_index(card)?;
        self.seats[idx].card.regenerate(&mut self.card_rng);
        debug!(%card, "Card regenerated");
        Ok(())
    }

    /// Switch a card between auto-marking and manual marking.
    ///
    /// Only while the round is waiting or playing.
    pub fn set_auto_mark(&mut self, card: CardId, enabled: bool) -> Result<(), RoundError> {
        if !matches!(self.phase, RoundPhase::Waiting | RoundPhase::Playing) {
            return Err(RoundError::RoundNotActive { phase: self.phase });
        }
        let idx = self.seat_index(card)?;
        let seat = &mut self.seats[idx];
        seat.auto_mark = enabled;

        // Catch up on numbers called while marking was manual.
        if enabled && self.phase == RoundPhase::Playing {
            for &value in self.pool.called().iter() {
                if let Some(pos) = MarkTracker::mark_number(&mut seat.card, value) {
                    self.events.push(RoundEvent::CardMarked {
                        card,
                        row: pos.row,
                        col: pos.col,
                        marked: true,
                    });
                }
            }
        }
        Ok(())
    }

    // === Play ===

    /// Start the round, seating `cards` first.
    ///
    /// Nothing is seated unless every check passes.
    pub fn start_round(
        &mut self,
        requester: ParticipantId,
        cards: Vec<(ParticipantId, BingoCard)>,
        now: u64,
    ) -> Result<(), RoundError> {
        self.require_waiting()?;
        self.lobby.check_start(requester)?;

        for (i, (owner, card)) in cards.iter().enumerate() {
            let earlier = &cards[..i];
            if earlier.iter().any(|(_, c)| c.id() == card.id()) {
                return Err(RoundError::MalformedCard(format!("{} is dealt twice", card.id())));
            }
            let pending = earlier.iter().filter(|(o, _)| o == owner).count();
            self.check_seat(*owner, card.id(), pending)?;
        }
        if self.seats.is_empty() && cards.is_empty() {
            return Err(RoundError::NoCards);
        }

        for (owner, card) in cards {
            self.push_seat(owner, card);
        }
        self.begin(now);
        Ok(())
    }

    /// Move the logical clock to `now`.
    ///
    /// Starts the round when the lobby countdown has expired and cards are
    /// seated, then makes every call that has come due, stopping as soon as
    /// the round ends. Returns the number of calls made.
    ///
    /// If a call fails part way (a rejected scripted value), the error is
    /// returned and the count is lost. Calls made before the failure stay
    /// applied and are reported as `CallMade` events; count those instead.
    /// The failed tick is consumed, so the next `advance_to` carries on
    /// from the following one.
    pub fn advance_to(&mut self, now: u64) -> Result<usize, RoundError> {
        if self.phase == RoundPhase::Waiting
            && self.lobby.countdown_expired(now)
            && !self.seats.is_empty()
            && self.lobby.check_quorum().is_ok()
        {
            let started_at = self.lobby.deadline().unwrap_or(now);
            info!(started_at, "Countdown expired");
            self.begin(started_at);
        }

        let mut calls = 0;
        while self.phase == RoundPhase::Playing && self.scheduler.take_due(now).is_some() {
            if let Draw::Called(_) = self.tick()? {
                calls += 1;
            }
        }
        Ok(calls)
    }

    /// Make one call now, regardless of the schedule.
    pub fn tick(&mut self) -> Result<Draw, RoundError> {
        self.require_playing()?;

        let draw = self.source.draw(&mut self.pool)?;
        match draw {
            Draw::Called(call) => self.apply_call(call),
            Draw::Exhausted => self.end(EndReason::PoolExhausted, None),
            Draw::Idle => debug!("Call source idle"),
        }
        Ok(draw)
    }

    /// Claim a win for `card`, re-checked against its marks.
    pub fn manual_claim(&mut self, card: CardId) -> Result<Pattern, RoundError> {
        self.require_playing()?;
        let idx = self.seat_index(card)?;

        match self.claim_pattern(&self.seats[idx].card) {
            Some(pattern) => {
                self.end(EndReason::Win, Some((card, pattern)));
                Ok(pattern)
            }
            None => {
                warn!(%card, "Claim rejected");
                self.events.push(RoundEvent::ClaimRejected { card });
                Err(RoundError::InvalidClaim { card })
            }
        }
    }

    /// Flip a cell by hand. Returns whether the cell is now marked.
    pub fn toggle_mark(&mut self, card: CardId, row: usize, col: usize) -> Result<bool, RoundError> {
        self.require_playing()?;
        let pos = CellPos::try_new(row, col)?;
        let idx = self.seat_index(card)?;

        let Some(marked) = MarkTracker::toggle_mark(&mut self.seats[idx].card, pos) else {
            return Ok(true);
        };
        debug!(%card, row, col, marked, "Cell toggled");
        self.events.push(RoundEvent::CardMarked { card, row, col, marked });
        Ok(marked)
    }

    /// Take a card out of play. The pool is untouched.
    pub fn leave_round(&mut self, card: CardId) -> Result<(), RoundError> {
        self.require_playing()?;
        let idx = self.seat_index(card)?;
        let seat = self.seats.remove(idx);

        debug!(%card, owner = %seat.owner, remaining = self.seats.len(), "Card left");
        self.events.push(RoundEvent::CardLeft { card });

        if self.seats.is_empty() {
            self.end(EndReason::Abandoned, None);
        }
        Ok(())
    }

    /// Back to `idle` from any phase, with a freshly shuffled pool.
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.pool.reset();
        self.source.reset();
        self.seats.clear();
        self.lobby.clear();
        self.outcome = None;

        if self.phase != RoundPhase::Idle {
            let from = self.phase;
            self.phase = RoundPhase::Idle;
            info!(%from, "Round reset");
            self.events.push(RoundEvent::PhaseChanged {
                from,
                to: RoundPhase::Idle,
            });
        }
    }

    // === Internals ===

    fn require_playing(&self) -> Result<(), RoundError> {
        match self.phase {
            RoundPhase::Playing => Ok(()),
            phase => Err(RoundError::RoundNotActive { phase }),
        }
    }

    fn require_waiting(&self) -> Result<(), RoundError> {
        match self.phase {
            RoundPhase::Waiting => Ok(()),
            phase => Err(RoundError::LobbyClosed { phase }),
        }
    }

    fn seat_index(&self, card: CardId) -> Result<usize, RoundError> {
        self.seats
            .iter()
            .position(|seat| seat.id() == card)
            .ok_or(RoundError::UnknownCard(card))
    }

    /// Validate seating one more card for `owner`, who already has
    /// `pending` cards queued on top of those seated.
    fn check_seat(&self, owner: ParticipantId, card: CardId, pending: usize) -> Result<(), RoundError> {
        if !self.lobby.contains(owner) {
            return Err(RoundError::UnknownParticipant(owner));
        }
        if self.card(card).is_some() {
            return Err(RoundError::MalformedCard(format!("{} is already seated", card)));
        }
        let max = self.config.max_cards_per_participant;
        if self.cards_held(owner) + pending >= max {
            return Err(RoundError::CardLimit { participant: owner, max });
        }
        Ok(())
    }

    fn push_seat(&mut self, owner: ParticipantId, card: BingoCard) -> CardId {
        let id = card.id();
        debug!(card = %id, %owner, "Card seated");
        self.events.push(RoundEvent::CardSeated { card: id, owner });
        self.seats.push(SeatedCard::new(card, owner, self.config.auto_mark));
        id
    }

    fn set_phase(&mut self, to: RoundPhase) {
        let from = self.phase;
        debug_assert!(from.can_advance_to(to), "Illegal transition {} -> {}", from, to);
        self.phase = to;
        self.events.push(RoundEvent::PhaseChanged { from, to });
    }

    fn begin(&mut self, now: u64) {
        self.outcome = None;
        self.scheduler.start(now);
        self.set_phase(RoundPhase::Playing);
        info!(
            cards = self.seats.len(),
            participants = self.lobby.len(),
            first_call_at = ?self.scheduler.next_due(),
            "Round started"
        );
    }

    fn apply_call(&mut self, call: Call) {
        let sequence = self.pool.called().len();
        debug!(%call, sequence, "Number called");
        self.events.push(RoundEvent::CallMade { call, sequence });

        for seat in self.seats.iter_mut().filter(|seat| seat.auto_mark) {
            if let Some(pos) = MarkTracker::mark_number(&mut seat.card, call.value) {
                self.events.push(RoundEvent::CardMarked {
                    card: seat.card.id(),
                    row: pos.row,
                    col: pos.col,
                    marked: true,
                });
            }
        }

        // Every card is marked before any is checked; the first winner in
        // seating order takes the round.
        let winner = self
            .seats
            .iter()
            .filter(|seat| seat.auto_mark)
            .find_map(|seat| self.claim_pattern(&seat.card).map(|pattern| (seat.id(), pattern)));

        if let Some(win) = winner {
            self.end(EndReason::Win, Some(win));
        }
    }

    /// The first pattern `card` completes, counting only called numbers
    /// when claims are strict.
    fn claim_pattern(&self, card: &BingoCard) -> Option<Pattern> {
        if self.config.strict_claims {
            let called_only = card
                .marks()
                .retain(|pos| card.number_at(pos).map_or(true, |n| self.pool.is_called(n)));
            WinDetector::first_pattern(&called_only)
        } else {
            WinDetector::first_pattern(card.marks())
        }
    }

    fn end(&mut self, reason: EndReason, win: Option<(CardId, Pattern)>) {
        self.scheduler.cancel();

        let winning_card = win.map(|(card, _)| card);
        let outcome = RoundOutcome {
            reason,
            winning_card,
            winner: winning_card.and_then(|card| self.card(card)).map(|seat| seat.owner),
            pattern: win.map(|(_, pattern)| pattern),
            calls: self.pool.called().len(),
        };

        self.set_phase(RoundPhase::Ended);
        info!(
            %reason,
            winning_card = ?outcome.winning_card,
            winner = ?outcome.winner,
            pattern = ?outcome.pattern,
            calls = outcome.calls,
            "Round ended"
        );
        self.events.push(RoundEvent::RoundEnded {
            reason,
            winning_card: outcome.winning_card,
            winner: outcome.winner,
            pattern: outcome.pattern,
        });

        let mut holders: Vec<ParticipantId> = Vec::new();
        for seat in &self.seats {
            if !holders.contains(&seat.owner) {
                holders.push(seat.owner);
            }
        }
        for participant in holders {
            let delta = outcome.delta_for(participant, self.cards_held(participant), &self.config.rewards);
            self.events.push(RoundEvent::StatsDelta { participant, delta });
        }

        self.outcome = Some(outcome);
    }
}
