use std::time::Duration;

pub const DEFAULT_TURN_SECS: u64 = 15;

/// Countdown for a single turn. The driver owns it and tells the game when it runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnTimer {
    budget: Duration,
    remaining: Duration,
}

impl TurnTimer {
    pub fn new(turn_secs: u64) -> Self {
        let budget = Duration::from_secs(turn_secs);
        Self {
            budget,
            remaining: budget,
        }
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    pub fn has_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn reset(&mut self) {
        self.remaining = self.budget;
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whole seconds left, rounded up so the display only shows 0 once expired
    pub fn seconds_left(&self) -> u64 {
        let secs = self.remaining.as_secs();
        if self.remaining.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_SECS)
    }
}
