use super::{BLACK, Rgb, add_colors, scale_color};

/// Colors used to draw the game board.
///
/// Levels are kept low to limit the current drawn by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background wash and unanswered questions
    pub neutral: Rgb,
    /// Questions that are already resolved
    pub answered: Rgb,
    /// Cursor block on a question cell
    pub cursor: Rgb,
    /// Unit hue for each player (one channel at 1)
    pub player_hues: [Rgb; 3],
    /// Scale applied to a player hue for the score indicators
    pub indicator_level: u8,
    /// Scale applied to the indicator of the player under the cursor
    pub selected_level: u8,
    /// Scale applied to the full-board flash when a player wins a buzz
    pub flash_level: u8,
}

impl Palette {
    /// Score indicator color for a player
    pub const fn indicator(&self, player: usize, selected: bool) -> Rgb {
        let level = if selected {
            self.selected_level
        } else {
            self.indicator_level
        };
        scale_color(self.player_hues[player], level)
    }

    /// Full-board flash color for a player who won the buzz
    pub const fn flash(&self, player: usize) -> Rgb {
        scale_color(self.player_hues[player], self.flash_level)
    }
}

impl Default for Palette {
    fn default() -> Self {
        let red = Rgb { r: 1, g: 0, b: 0 };
        let green = Rgb { r: 0, g: 1, b: 0 };
        let neutral = Rgb {
            r: 20,
            g: 20,
            b: 20,
        };
        Self {
            neutral,
            answered: BLACK,
            cursor: scale_color(add_colors(red, green), 20),
            player_hues: [red, green, Rgb { r: 0, g: 0, b: 1 }],
            indicator_level: 10,
            selected_level: 30,
            flash_level: 10,
        }
    }
}
