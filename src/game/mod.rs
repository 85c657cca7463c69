//! Trivia game: session data and the polling state machine

mod board;
pub mod content;
mod controller;
mod model;
mod player;
mod prompt;
mod state;
mod text;

pub use board::draw_selection;
pub use controller::{GameController, StepOutcome};
pub use model::{COLUMNS, Cursor, GameModel, QUESTION_ROWS, Question, ROW_POINTS, SCORE_ROW, Topic};
pub use player::{Player, PlayerId, PlayerSet};
pub use prompt::nav_prompt;
pub use state::GameState;
pub use text::{Card, LINE_WIDTH, Line, TextDisplay, line};
