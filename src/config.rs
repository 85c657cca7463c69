use embassy_time::Duration;

use crate::color::Palette;
use crate::debounce::DEFAULT_DEBOUNCE;

/// Default time the host gets to read a question aloud
pub const DEFAULT_READING_TIME: Duration = Duration::from_secs(5);

/// Default time players get to buzz before the question is forfeited
pub const DEFAULT_BUZZ_WINDOW: Duration = Duration::from_secs(5);

/// Default pause after every navigation redraw
pub const DEFAULT_REDRAW_PAUSE: Duration = Duration::from_millis(200);

/// Configuration for the game controller
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Buzzers are not armed until this long after a question is selected
    pub reading_time: Duration,
    /// How long players may buzz once armed (re-armed after each rejection)
    pub buzz_window: Duration,
    /// Minimum spacing between two buzzes from one player
    pub debounce: Duration,
    /// Pause after each navigation redraw, paces held host buttons
    pub redraw_pause: Duration,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reading_time: DEFAULT_READING_TIME,
            buzz_window: DEFAULT_BUZZ_WINDOW,
            debounce: DEFAULT_DEBOUNCE,
            redraw_pause: DEFAULT_REDRAW_PAUSE,
            palette: Palette::default(),
        }
    }
}
