use embassy_time::{Duration, Instant};

use super::player::{Player, PlayerId, PlayerSet};
use super::text::{Card, Line, line};

/// Question rows per topic
pub const QUESTION_ROWS: u8 = 3;
/// Cursor row that selects a player score instead of a question
pub const SCORE_ROW: u8 = 3;
/// Topic columns
pub const COLUMNS: u8 = 3;
/// Points for a question in the first row; each row below adds as much again
pub const ROW_POINTS: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: Card,
    pub answer: Card,
    answered: bool,
}

impl Question {
    pub fn new(prompt: Card, answer: Card) -> Self {
        Self {
            prompt,
            answer,
            answered: false,
        }
    }

    pub const fn is_answered(&self) -> bool {
        self.answered
    }

    /// Retire the question for the rest of the game
    pub fn mark_answered(&mut self) {
        self.answered = true;
    }
}

/// A title and three questions, easiest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub title: Line,
    pub questions: [Question; 3],
}

impl Topic {
    pub fn new(title: &str, questions: [Question; 3]) -> Self {
        Self {
            title: line(title),
            questions,
        }
    }
}

/// Host selection on the 4x3 navigation grid
///
/// ```text
/// (0, 0) | (0, 1) | (0, 2)    questions
/// (1, 0) | (1, 1) | (1, 2)
/// (2, 0) | (2, 1) | (2, 2)
/// (3, 0) | (3, 1) | (3, 2)    player scores
/// ```
///
/// Moves clamp at the edges, they never wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    row: u8,
    col: u8,
}

impl Cursor {
    /// Start at the top-left question
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Place the cursor, clamping into range
    pub fn at(row: u8, col: u8) -> Self {
        Self {
            row: row.min(SCORE_ROW),
            col: col.min(COLUMNS - 1),
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub fn move_left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.col = (self.col + 1).min(COLUMNS - 1);
    }

    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.row = (self.row + 1).min(SCORE_ROW);
    }

    /// Check if the cursor points at a question rather than a score
    pub const fn is_on_question(self) -> bool {
        self.row < QUESTION_ROWS
    }

    /// Points at stake for the question in this row
    #[allow(clippy::cast_lossless)]
    pub const fn points(self) -> i32 {
        ROW_POINTS * (self.row as i32 + 1)
    }
}

/// Session data: content, players and the host cursor
#[derive(Debug, Clone)]
pub struct GameModel {
    pub topics: [Topic; 3],
    pub players: [Player; 3],
    pub cursor: Cursor,
    /// Players already rejected on the unresolved question
    pub blocked: PlayerSet,
}

impl GameModel {
    /// Start a game; every player's debounce window opens at `now`
    pub fn new(topics: [Topic; 3], debounce: Duration, now: Instant) -> Self {
        Self {
            topics,
            players: [Player::new(debounce, now); 3],
            cursor: Cursor::new(),
            blocked: PlayerSet::EMPTY,
        }
    }

    pub fn question(&self, row: u8, col: u8) -> Option<&Question> {
        self.topics
            .get(col as usize)?
            .questions
            .get(row as usize)
    }

    pub fn is_unanswered(&self, row: u8, col: u8) -> bool {
        self.question(row, col).is_some_and(|q| !q.is_answered())
    }

    /// Question under the cursor, `None` on the score row
    pub fn selected(&self) -> Option<&Question> {
        self.question(self.cursor.row, self.cursor.col)
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Restart the debounce window of every player in `pressed`
    pub fn hold_off(&mut self, pressed: PlayerSet, now: Instant) {
        for id in pressed.iter() {
            self.player_mut(id).debounce.reset(now);
        }
    }

    /// Close the question under the cursor and lift all blocks
    pub fn resolve_selected(&mut self) {
        let Cursor { row, col } = self.cursor;
        if let Some(question) = self
            .topics
            .get_mut(col as usize)
            .and_then(|t| t.questions.get_mut(row as usize))
        {
            question.mark_answered();
        }
        self.blocked.clear();
    }
}
