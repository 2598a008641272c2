//! Fixed-cadence call scheduling on a logical clock.
//!
//! There is one clock, owned by whoever drives the controller. The scheduler
//! only remembers when the next call is due. Cancelling clears that, and a
//! cancelled scheduler never reports a due tick again until re-armed.

/// Next-tick bookkeeping for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallScheduler {
    interval: u64,
    next_due: Option<u64>,
}

impl CallScheduler {
    /// Create a disarmed scheduler.
    #[must_use]
    pub fn new(interval: u64) -> Self {
        assert!(interval > 0, "Call interval must be positive");
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arm: first call due one interval after `now`.
    pub fn start(&mut self, now: u64) {
        self.next_due = Some(now.saturating_add(self.interval));
    }

    /// Drop the pending tick.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.next_due
    }

    #[must_use]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Consume the pending tick if it is due at `now`, scheduling the
    /// following one. Returns the tick's due time.
    pub fn take_due(&mut self, now: u64) -> Option<u64> {
        let due = self.next_due.filter(|&d| d <= now)?;
        self.next_due = Some(due.saturating_add(self.interval));
        Some(due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disarmed() {
        let mut scheduler = CallScheduler::new(2_000);
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.take_due(u64::MAX), None);
    }

    #[test]
    fn test_ticks_at_fixed_cadence() {
        let mut scheduler = CallScheduler::new(2_000);
        scheduler.start(1_000);

        assert_eq!(scheduler.take_due(2_999), None);
        assert_eq!(scheduler.take_due(3_000), Some(3_000));
        assert_eq!(scheduler.take_due(3_000), None);
        assert_eq!(scheduler.next_due(), Some(5_000));
    }

    #[test]
    fn test_catches_up_one_tick_at_a_time() {
        let mut scheduler = CallScheduler::new(100);
        scheduler.start(0);

        let mut ticks = Vec::new();
        while let Some(t) = scheduler.take_due(350) {
            ticks.push(t);
        }
        assert_eq!(ticks, vec![100, 200, 300]);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut scheduler = CallScheduler::new(100);
        scheduler.start(0);
        scheduler.cancel();

        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.take_due(10_000), None);
    }
}
