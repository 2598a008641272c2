//! Participant profile statistics.
//!
//! The engine never stores profiles. It emits a `StatsDelta` per participant
//! when a round ends, and the persistence layer merges it with
//! [`ProfileStats::apply`].

use serde::{Deserialize, Serialize};

use crate::round::StatsDelta;

/// Coins a brand-new profile starts with.
pub const STARTING_COINS: i64 = 100;

/// Lifetime totals for one participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileStats {
    pub games_played: u32,
    pub games_won: u32,
    pub coins: i64,
    pub xp: u32,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            coins: STARTING_COINS,
            xp: 0,
        }
    }
}

impl ProfileStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one round's delta.
    pub fn apply(&mut self, delta: &StatsDelta) {
        self.games_played = self.games_played.saturating_add(delta.games_played);
        self.games_won = self.games_won.saturating_add(delta.games_won);
        self.coins = self.coins.saturating_add(delta.coins);
        self.xp = self.xp.saturating_add(delta.xp);
    }

    /// Wins as a percentage of games played, rounded to the nearest integer.
    ///
    /// Zero when no games were played.
    #[must_use]
    pub fn win_rate_percent(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        let won = u64::from(self.games_won);
        let played = u64::from(self.games_played);
        // Round half up in integer arithmetic.
        ((won * 200 + played) / (played * 2)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RewardConfig;

    #[test]
    fn test_new_profile() {
        let stats = ProfileStats::new();
        assert_eq!(stats.coins, 100);
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.win_rate_percent(), 0);
    }

    #[test]
    fn test_apply_deltas() {
        let mut stats = ProfileStats::new();
        stats.apply(&StatsDelta::won(&RewardConfig::default(), 1));
        stats.apply(&StatsDelta::played());
        stats.apply(&StatsDelta::played());

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.coins, 150);
        assert_eq!(stats.xp, 25);
        assert_eq!(stats.win_rate_percent(), 33);
    }

    #[test]
    fn test_win_rate_rounds_half_up() {
        let stats = ProfileStats {
            games_played: 8,
            games_won: 5,
            ..ProfileStats::default()
        };
        // 62.5%
        assert_eq!(stats.win_rate_percent(), 63);

        let stats = ProfileStats {
            games_played: 3,
            games_won: 2,
            ..ProfileStats::default()
        };
        assert_eq!(stats.win_rate_percent(), 67);
    }

    #[test]
    fn test_partial_json_keeps_starting_coins() {
        let stats: ProfileStats = serde_json::from_str(r#"{"games_played": 2}"#).unwrap();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.coins, 100);
    }
}
