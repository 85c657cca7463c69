use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::board::draw_selection;
use super::model::{GameModel, Topic};
use super::player::{PlayerId, PlayerSet};
use super::prompt::nav_prompt;
use super::state::GameState;
use super::text::TextDisplay;
use crate::OutputDriver;
use crate::color::BLACK;
use crate::config::GameConfig;
use crate::input::{InputSource, NavState};
use crate::matrix::Matrix;

/// Result of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// State the next iteration runs
    pub state: GameState,
    /// How long the caller has to wait before the next iteration
    pub pause: Duration,
}

/// Game controller - owns the session and every device it drives
pub struct GameController<O: OutputDriver, T: TextDisplay, I: InputSource> {
    config: GameConfig,
    matrix: Matrix<O>,
    text: T,
    inputs: I,
    model: GameModel,
    state: GameState,
}

impl<O: OutputDriver, T: TextDisplay, I: InputSource> GameController<O, T, I> {
    /// Create a controller in `Init`; debounce windows start at `now`
    pub fn new(
        config: GameConfig,
        output: O,
        text: T,
        inputs: I,
        topics: [Topic; 3],
        now: Instant,
    ) -> Self {
        Self {
            matrix: Matrix::new(output, config.palette.neutral),
            model: GameModel::new(topics, config.debounce, now),
            state: GameState::Init,
            config,
            text,
            inputs,
        }
    }

    /// Run the game forever
    ///
    /// `clock` supplies the current time for each iteration and `delay`
    /// performs the pause requested by [`GameController::step`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn run<C, D>(&mut self, mut clock: C, delay: &mut D) -> !
    where
        C: FnMut() -> Instant,
        D: DelayNs,
    {
        loop {
            let outcome = self.step(clock());
            let pause_ms = outcome.pause.as_millis();
            if pause_ms > 0 {
                delay.delay_ms(pause_ms as u32);
            }
        }
    }

    /// Run one iteration of the state machine at time `now`
    ///
    /// Samples the inputs once, evaluates the current state and returns the
    /// next one. The caller must wait `pause` before the next call.
    pub fn step(&mut self, now: Instant) -> StepOutcome {
        let input = self.inputs.sample();
        if self.state.holds_off_buzzers() {
            self.model.hold_off(input.buzzers, now);
        }

        let mut pause = Duration::from_millis(0);
        let next = match self.state {
            GameState::Init => {
                #[cfg(feature = "esp32-log")]
                println!("[GameController] init");
                GameState::ReturnToSelection
            }
            GameState::Selection => self.select(input.nav, now),
            GameState::NavLeft => {
                self.model.cursor.move_left();
                GameState::ReturnToSelection
            }
            GameState::NavRight => {
                self.model.cursor.move_right();
                GameState::ReturnToSelection
            }
            GameState::NavUp => {
                self.model.cursor.move_up();
                GameState::ReturnToSelection
            }
            GameState::NavDown => {
                self.model.cursor.move_down();
                GameState::ReturnToSelection
            }
            GameState::ReturnToSelection => {
                self.redraw();
                pause = self.config.redraw_pause;
                GameState::Selection
            }
            GameState::HostReading { since } => self.read(since, now),
            GameState::AwaitingBuzz { since } => self.await_buzz(since, input.buzzers, now),
            GameState::Answer { winner } => self.adjudicate(winner, input.nav, now),
        };

        self.state = next;
        StepOutcome { state: next, pause }
    }

    fn select(&mut self, nav: NavState, now: Instant) -> GameState {
        if nav.left {
            return GameState::NavLeft;
        }
        if nav.right {
            return GameState::NavRight;
        }
        if nav.up {
            return GameState::NavUp;
        }
        if nav.down {
            return GameState::NavDown;
        }
        if !nav.confirm || !self.model.cursor.is_on_question() {
            return GameState::Selection;
        }
        let Some(question) = self.model.selected().filter(|q| !q.is_answered()) else {
            return GameState::Selection;
        };

        #[cfg(feature = "esp32-log")]
        println!(
            "[GameController] selected row {} col {}: {} {}",
            self.model.cursor.row(),
            self.model.cursor.col(),
            question.prompt.line1,
            question.prompt.line2
        );
        question.prompt.show(&mut self.text);

        self.matrix.fill_all(BLACK);
        self.matrix.transmit();
        GameState::HostReading { since: now }
    }

    fn read(&mut self, since: Instant, now: Instant) -> GameState {
        if now.saturating_duration_since(since) < self.config.reading_time {
            return GameState::HostReading { since };
        }

        #[cfg(feature = "esp32-log")]
        if let Some(question) = self.model.selected() {
            println!(
                "[GameController] answer: {} {}",
                question.answer.line1, question.answer.line2
            );
        }

        self.matrix.fill_all(self.config.palette.neutral);
        self.matrix.transmit();
        GameState::AwaitingBuzz { since: now }
    }

    fn await_buzz(&mut self, since: Instant, buzzers: PlayerSet, now: Instant) -> GameState {
        for id in PlayerId::ALL {
            if !buzzers.contains(id) || self.model.blocked.contains(id) {
                continue;
            }
            if !self.model.player_mut(id).debounce.try_click(now) {
                continue;
            }

            #[cfg(feature = "esp32-log")]
            println!("[GameController] player {} buzzed", id.number());
            self.matrix.fill_all(self.config.palette.flash(id.index()));
            self.matrix.transmit();
            return GameState::Answer { winner: id };
        }

        let expired = now.saturating_duration_since(since) >= self.config.buzz_window;
        if expired || self.model.blocked.is_full() {
            #[cfg(feature = "esp32-log")]
            println!("[GameController] no answer, question closed");
            self.model.resolve_selected();
            return GameState::ReturnToSelection;
        }
        GameState::AwaitingBuzz { since }
    }

    fn adjudicate(&mut self, winner: PlayerId, nav: NavState, now: Instant) -> GameState {
        let points = self.model.cursor.points();
        if nav.right {
            self.model.player_mut(winner).score += points;
            self.model.resolve_selected();
            #[cfg(feature = "esp32-log")]
            println!("[GameController] player {} +{}", winner.number(), points);
            return GameState::ReturnToSelection;
        }
        if nav.left {
            self.model.player_mut(winner).score -= points;
            self.model.blocked.insert(winner);
            #[cfg(feature = "esp32-log")]
            println!("[GameController] player {} -{}", winner.number(), points);
            self.matrix.fill_all(self.config.palette.neutral);
            self.matrix.transmit();
            return GameState::AwaitingBuzz { since: now };
        }
        GameState::Answer { winner }
    }

    fn redraw(&mut self) {
        let cursor = self.model.cursor;
        #[cfg(feature = "esp32-log")]
        println!("[GameController] row {} col {}", cursor.row(), cursor.col());

        if let Some(card) = nav_prompt(&self.model, cursor.row(), cursor.col()) {
            card.show(&mut self.text);
        }

        // a failed draw keeps the cells written before the failing block
        if let Err(_err) = draw_selection(&mut self.matrix, &self.model, &self.config.palette) {
            #[cfg(feature = "esp32-log")]
            println!("[GameController] board layout out of bounds: {:?}", _err);
        }
        self.matrix.transmit();
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn model(&self) -> &GameModel {
        &self.model
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn matrix(&self) -> &Matrix<O> {
        &self.matrix
    }

    pub fn text(&self) -> &T {
        &self.text
    }
}
