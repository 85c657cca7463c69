use embassy_time::Instant;

use super::player::PlayerId;

/// Game state machine states
///
/// There is no terminal state. `Init` is entered once at power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Init,
    /// Waiting for a host button
    Selection,
    NavLeft,
    NavRight,
    NavUp,
    NavDown,
    /// Redraw the board and the nav prompt after the cursor or scores changed
    ReturnToSelection,
    /// Question is shown, buzzers are not armed yet
    HostReading { since: Instant },
    /// Buzz window open since `since`
    AwaitingBuzz { since: Instant },
    /// `winner` buzzed in, waiting for the host to accept or reject
    Answer { winner: PlayerId },
}

impl GameState {
    /// Check if asserted buzzers restart their owner's debounce window in
    /// this state
    ///
    /// Holds everywhere a buzz is ignored, so a press made while the host is
    /// reading or judging cannot be saved up for the next buzz window.
    /// `AwaitingBuzz` consumes buzzes itself and the remaining states only
    /// redraw or move the cursor.
    pub const fn holds_off_buzzers(self) -> bool {
        matches!(
            self,
            Self::Selection | Self::HostReading { .. } | Self::Answer { .. }
        )
    }
}
