use anchor_lang::prelude::*;

// 8 (last_timestamp) + 8 (interval)
pub const DRAW_CLOCK_SIZE: usize = 8 + 8;

/// Tracks when the last round closed and how long a round must stay open.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawClock {
    /// Unix timestamp of raffle creation or of the most recent payout
    pub last_timestamp: i64,
    /// Minimum number of seconds between two draws
    pub interval: i64,
}

impl DrawClock {
    pub fn new(now: i64, interval: i64) -> Self {
        Self {
            last_timestamp: now,
            interval,
        }
    }

    /// A clock that went backwards counts as no time elapsed.
    pub fn is_due(&self, now: i64) -> bool {
        now.saturating_sub(self.last_timestamp) >= self.interval
    }

    pub fn reset(&mut self, now: i64) {
        self.last_timestamp = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_exactly_at_interval() {
        let clock = DrawClock::new(1_000, 30);

        assert!(!clock.is_due(1_029));
        assert!(clock.is_due(1_030));
        assert!(clock.is_due(5_000));
    }

    #[test]
    fn not_due_when_time_goes_backwards() {
        let clock = DrawClock::new(1_000, 30);
        assert!(!clock.is_due(900));
    }

    #[test]
    fn reset_restarts_the_interval() {
        let mut clock = DrawClock::new(0, 30);
        clock.reset(100);

        assert_eq!(clock.last_timestamp, 100);
        assert!(!clock.is_due(129));
        assert!(clock.is_due(130));
    }
}
