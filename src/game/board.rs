//! Board layouts drawn by the game
//!
//! Question (`row`, `col`) owns the 2x2 block whose top-left cell is
//! (`2 * col + 1`, `2 * row`). The score row reuses the same layout for the
//! three player indicators.

use super::model::{COLUMNS, GameModel, QUESTION_ROWS, SCORE_ROW};
use super::player::PlayerId;
use crate::OutputDriver;
use crate::bounds::OutOfBounds;
use crate::color::Palette;
use crate::matrix::{HEIGHT, Matrix, WIDTH};

const BLOCK: u8 = 2;

const fn block_x(col: u8) -> u8 {
    col * BLOCK + 1
}

const fn block_y(row: u8) -> u8 {
    row * BLOCK
}

/// Navigation view: answered state of every question, the cursor and the
/// three score indicators
#[allow(clippy::cast_possible_truncation)]
pub fn draw_selection<O: OutputDriver>(
    matrix: &mut Matrix<O>,
    model: &GameModel,
    palette: &Palette,
) -> Result<(), OutOfBounds> {
    matrix.fill_region(palette.neutral, 0, 0, WIDTH as u8, HEIGHT as u8)?;

    for row in 0..QUESTION_ROWS {
        for col in 0..COLUMNS {
            let color = if model.is_unanswered(row, col) {
                palette.neutral
            } else {
                palette.answered
            };
            matrix.fill_region(color, block_x(col), block_y(row), BLOCK, BLOCK)?;
        }
    }

    let cursor = model.cursor;
    matrix.fill_region(
        palette.cursor,
        block_x(cursor.col()),
        block_y(cursor.row()),
        BLOCK,
        BLOCK,
    )?;

    // drawn last: on the score row they cover the cursor block
    for id in PlayerId::ALL {
        let col = id.index() as u8;
        let selected = cursor.row() == SCORE_ROW && cursor.col() == col;
        matrix.fill_region(
            palette.indicator(id.index(), selected),
            block_x(col),
            block_y(SCORE_ROW),
            BLOCK,
            BLOCK,
        )?;
    }

    Ok(())
}
