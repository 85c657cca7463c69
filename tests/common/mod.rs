#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use buzzer_board::game::content::default_topics;
use buzzer_board::{
    GameConfig, GameController, InputSnapshot, InputSource, Instant, NavState, OutputDriver,
    PlayerSet, Rgb, StepOutcome, TextDisplay,
};

/// Keeps every frame handed to the board
#[derive(Default)]
pub struct RecordingOutput {
    pub frames: Vec<Vec<Rgb>>,
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// Two-line display model that remembers what is on screen
#[derive(Default)]
pub struct FakeLcd {
    pub lines: [String; 2],
    row: usize,
    pub clears: usize,
}

impl TextDisplay for FakeLcd {
    fn clear(&mut self) {
        self.lines = [String::new(), String::new()];
        self.clears += 1;
    }

    fn set_cursor(&mut self, _col: u8, row: u8) {
        self.row = row as usize;
    }

    fn write_text(&mut self, text: &str) {
        assert!(text.len() <= 16, "line too long: {text:?}");
        self.lines[self.row].push_str(text);
    }
}

/// Inputs held at whatever the test last set
#[derive(Default, Clone)]
pub struct HeldInputs(pub Rc<RefCell<InputSnapshot>>);

impl InputSource for HeldInputs {
    fn sample(&mut self) -> InputSnapshot {
        *self.0.borrow()
    }
}

pub type Game = GameController<RecordingOutput, FakeLcd, HeldInputs>;

pub fn new_game() -> (Game, HeldInputs) {
    new_game_with(GameConfig::default())
}

pub fn new_game_with(config: GameConfig) -> (Game, HeldInputs) {
    let inputs = HeldInputs::default();
    let game = GameController::new(
        config,
        RecordingOutput::default(),
        FakeLcd::default(),
        inputs.clone(),
        default_topics(),
        Instant::from_millis(0),
    );
    (game, inputs)
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

pub fn step(game: &mut Game, inputs: &HeldInputs, ms: u64, snapshot: InputSnapshot) -> StepOutcome {
    *inputs.0.borrow_mut() = snapshot;
    game.step(at(ms))
}

pub fn idle() -> InputSnapshot {
    InputSnapshot::default()
}

pub fn nav(f: impl FnOnce(&mut NavState)) -> InputSnapshot {
    let mut snapshot = InputSnapshot::default();
    f(&mut snapshot.nav);
    snapshot
}

/// Navigation press with buzzers held at the same time
pub fn nav_and_buzz(f: impl FnOnce(&mut NavState), bits: u8) -> InputSnapshot {
    InputSnapshot {
        buzzers: PlayerSet::from_bus(bits),
        ..nav(f)
    }
}

pub fn buzz(bits: u8) -> InputSnapshot {
    InputSnapshot {
        buzzers: PlayerSet::from_bus(bits),
        ..InputSnapshot::default()
    }
}

/// Step with idle inputs until the controller is back in `Selection`
pub fn settle(game: &mut Game, inputs: &HeldInputs, ms: u64) {
    for _ in 0..4 {
        let outcome = step(game, inputs, ms, idle());
        if outcome.state == buzzer_board::GameState::Selection {
            return;
        }
    }
    panic!("controller did not return to selection");
}

/// Press one navigation button from `Selection` and wait for the redraw
pub fn press(game: &mut Game, inputs: &HeldInputs, ms: u64, f: impl FnOnce(&mut NavState)) {
    step(game, inputs, ms, nav(f));
    settle(game, inputs, ms);
}
