#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::model::{GameModel, QUESTION_ROWS, ROW_POINTS, SCORE_ROW};
use super::text::{Card, format_line};

/// Text shown while the host navigates
///
/// Question rows show the topic and the prize, the score row shows the
/// player under the cursor and their score. Anything else is a logic error:
/// it is reported on the diagnostic output and `None` is returned so the
/// display keeps its last valid contents.
#[allow(clippy::cast_lossless)]
pub fn nav_prompt(model: &GameModel, row: u8, col: u8) -> Option<Card> {
    let card = if row < QUESTION_ROWS {
        model.topics.get(col as usize).map(|topic| Card {
            line1: topic.title.clone(),
            line2: format_line(format_args!("${}", ROW_POINTS * (row as i32 + 1))),
        })
    } else if row == SCORE_ROW {
        model.players.get(col as usize).map(|player| Card {
            line1: format_line(format_args!("Player {}", col + 1)),
            line2: format_line(format_args!("${}", player.score)),
        })
    } else {
        None
    };

    #[cfg(feature = "esp32-log")]
    if card.is_none() {
        println!("[nav_prompt] invalid cursor row {} col {}", row, col);
    }
    card
}
