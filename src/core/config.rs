//! Round configuration types.
//!
//! Hosts configure a round at construction by providing:
//! - `LobbyConfig`: Who may join and how the waiting phase ends
//! - `RewardConfig`: What a win is worth to the persistence layer
//! - `RoundConfig`: Call cadence, marking rules, and the two above
//!
//! All types deserialize with defaults for missing fields, so a host can
//! load a partial JSON document and get the standard game for the rest.

use serde::{Deserialize, Serialize};

/// Lobby rules for the waiting phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LobbyConfig {
    /// Maximum participants in one round.
    pub max_participants: usize,

    /// Participants required before the round can start.
    pub min_participants: usize,

    /// Only the host may start the round manually.
    pub host_only_start: bool,

    /// Logical time units the lobby waits before auto-starting.
    pub countdown: u64,

    /// Start automatically when the countdown expires and cards are seated.
    pub auto_start: bool,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            max_participants: 8,
            min_participants: 1,
            host_only_start: true,
            countdown: 30_000,
            auto_start: true,
        }
    }
}

impl LobbyConfig {
    /// Set the participant limit.
    #[must_use]
    pub fn with_max_participants(mut self, max: usize) -> Self {
        self.max_participants = max;
        self
    }

    /// Set the participant minimum.
    #[must_use]
    pub fn with_min_participants(mut self, min: usize) -> Self {
        self.min_participants = min;
        self
    }

    /// Let any participant start the round.
    #[must_use]
    pub fn anyone_can_start(mut self) -> Self {
        self.host_only_start = false;
        self
    }

    /// Set the auto-start countdown.
    #[must_use]
    pub fn with_countdown(mut self, countdown: u64) -> Self {
        self.countdown = countdown;
        self
    }

    /// Disable the countdown auto-start.
    #[must_use]
    pub fn manual_start(mut self) -> Self {
        self.auto_start = false;
        self
    }
}

/// Reward rules surfaced as stats deltas when a round ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Flat coins for winning.
    pub win_coins: i64,

    /// Experience for winning.
    pub win_xp: u32,

    /// Bet placed per card.
    pub stake: i64,

    /// Winner receives `stake * cards_held * payout_multiplier` on top of `win_coins`.
    pub payout_multiplier: i64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            win_coins: 50,
            win_xp: 25,
            stake: 0,
            payout_multiplier: 10,
        }
    }
}

impl RewardConfig {
    /// Set the per-card stake.
    #[must_use]
    pub fn with_stake(mut self, stake: i64) -> Self {
        self.stake = stake;
        self
    }

    /// Coins paid to a winner holding `cards_held` cards.
    #[must_use]
    pub fn winnings(&self, cards_held: usize) -> i64 {
        self.win_coins + self.stake * cards_held as i64 * self.payout_multiplier
    }
}

/// Complete round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Logical time units between calls.
    pub call_interval: u64,

    /// Default auto-mark setting for newly seated cards.
    pub auto_mark: bool,

    /// Only marks on called numbers count toward a manual claim.
    pub strict_claims: bool,

    /// Cards one participant may hold.
    pub max_cards_per_participant: usize,

    /// Lobby rules.
    pub lobby: LobbyConfig,

    /// Reward rules.
    pub rewards: RewardConfig,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            call_interval: 2_000,
            auto_mark: true,
            strict_claims: false,
            max_cards_per_participant: 6,
            lobby: LobbyConfig::default(),
            rewards: RewardConfig::default(),
        }
    }
}

impl RoundConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the call interval.
    #[must_use]
    pub fn with_call_interval(mut self, interval: u64) -> Self {
        self.call_interval = interval;
        self
    }

    /// Seat new cards with auto-mark off.
    #[must_use]
    pub fn without_auto_mark(mut self) -> Self {
        self.auto_mark = false;
        self
    }

    /// Validate manual claims against called numbers only.
    #[must_use]
    pub fn with_strict_claims(mut self) -> Self {
        self.strict_claims = true;
        self
    }

    /// Set the per-participant card limit.
    #[must_use]
    pub fn with_max_cards(mut self, max: usize) -> Self {
        self.max_cards_per_participant = max;
        self
    }

    /// Replace the lobby rules.
    #[must_use]
    pub fn with_lobby(mut self, lobby: LobbyConfig) -> Self {
        self.lobby = lobby;
        self
    }

    /// Replace the reward rules.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }

    /// Check internal consistency.
    ///
    /// Panics on a configuration no round could run with.
    pub fn validate(&self) {
        assert!(self.call_interval > 0, "Call interval must be positive");
        assert!(self.max_cards_per_participant > 0, "Participants must be allowed at least 1 card");
        assert!(self.lobby.max_participants > 0, "Lobby must admit at least 1 participant");
        assert!(
            self.lobby.min_participants <= self.lobby.max_participants,
            "Minimum participants exceeds lobby capacity"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.call_interval, 2_000);
        assert!(config.auto_mark);
        assert!(!config.strict_claims);
        assert_eq!(config.max_cards_per_participant, 6);
        assert_eq!(config.lobby.max_participants, 8);
        assert_eq!(config.lobby.countdown, 30_000);
        assert_eq!(config.rewards.win_coins, 50);
        assert_eq!(config.rewards.win_xp, 25);
        config.validate();
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::new()
            .with_call_interval(3_000)
            .without_auto_mark()
            .with_strict_claims()
            .with_max_cards(2)
            .with_lobby(LobbyConfig::default().with_min_participants(2).anyone_can_start());

        assert_eq!(config.call_interval, 3_000);
        assert!(!config.auto_mark);
        assert!(config.strict_claims);
        assert_eq!(config.max_cards_per_participant, 2);
        assert_eq!(config.lobby.min_participants, 2);
        assert!(!config.lobby.host_only_start);
    }

    #[test]
    fn test_winnings() {
        let rewards = RewardConfig::default();
        assert_eq!(rewards.winnings(3), 50);

        let staked = RewardConfig::default().with_stake(10);
        assert_eq!(staked.winnings(3), 50 + 10 * 3 * 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RoundConfig =
            serde_json::from_str(r#"{"call_interval": 3000, "lobby": {"max_participants": 4}}"#).unwrap();

        assert_eq!(config.call_interval, 3_000);
        assert_eq!(config.lobby.max_participants, 4);
        assert_eq!(config.lobby.countdown, 30_000);
        assert!(config.auto_mark);
    }

    #[test]
    #[should_panic(expected = "Call interval must be positive")]
    fn test_zero_interval_rejected() {
        RoundConfig::new().with_call_interval(0).validate();
    }
}
