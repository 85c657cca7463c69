use embassy_time::{Duration, Instant};

/// Default spacing between two accepted buzzes from one player
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(1);

/// Tracks time since a player's buzzer was last observed or accepted
///
/// The marker is moved both by accepted buzzes and by any press the game
/// ignores, so a held buzzer keeps its owner locked out.
#[derive(Debug, Clone, Copy)]
pub struct DebounceTimer {
    window: Duration,
    marker: Instant,
}

impl DebounceTimer {
    /// Start a timer whose window begins at `now`
    pub const fn new(window: Duration, now: Instant) -> Self {
        Self {
            window,
            marker: now,
        }
    }

    /// Restart the window at `now`
    pub fn reset(&mut self, now: Instant) {
        self.marker = now;
    }

    /// Time since the last reset
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.marker)
    }

    /// Check whether a full window has passed since the last reset
    pub fn is_ready(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.window
    }

    /// Accept a click if the window has passed, restarting it
    ///
    /// Returns `false` and leaves the timer alone otherwise.
    pub fn try_click(&mut self, now: Instant) -> bool {
        if !self.is_ready(now) {
            return false;
        }
        self.reset(now);
        true
    }
}
