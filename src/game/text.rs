//! Two-line character display content

use core::fmt::Write;

use heapless::String;

/// Characters per display line
pub const LINE_WIDTH: usize = 16;

/// One display line
pub type Line = String<LINE_WIDTH>;

/// Character display the game writes prompts to
///
/// Write-only; the game never reads back what is shown.
pub trait TextDisplay {
    /// Blank the display
    fn clear(&mut self);

    /// Move the write position to `col`, `row`
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Write at the current position. Never longer than [`LINE_WIDTH`].
    fn write_text(&mut self, text: &str);
}

/// Copy `text` into a line, silently dropping whatever does not fit
pub fn line(text: &str) -> Line {
    let mut out = Line::new();
    push_truncated(&mut out, text);
    out
}

fn push_truncated(out: &mut Line, text: &str) {
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
}

/// Format into a line, truncating on overflow
pub(crate) fn format_line(args: core::fmt::Arguments<'_>) -> Line {
    let mut out = Truncating(Line::new());
    // Truncating never reports an error
    let _ = out.write_fmt(args);
    out.0
}

struct Truncating(Line);

impl Write for Truncating {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        push_truncated(&mut self.0, s);
        Ok(())
    }
}

/// Two lines of text shown together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub line1: Line,
    pub line2: Line,
}

impl Card {
    /// Build a card, truncating each line to [`LINE_WIDTH`]
    pub fn new(line1: &str, line2: &str) -> Self {
        Self {
            line1: line(line1),
            line2: line(line2),
        }
    }

    /// Replace the display contents with this card
    pub fn show<T: TextDisplay>(&self, display: &mut T) {
        display.clear();
        display.set_cursor(0, 0);
        display.write_text(&self.line1);
        display.set_cursor(0, 1);
        display.write_text(&self.line2);
    }
}
