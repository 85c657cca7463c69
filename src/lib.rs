#![no_std]

pub mod bounds;
pub mod color;
pub mod config;
pub mod debounce;
pub mod game;
pub mod input;
pub mod matrix;

pub use bounds::{OutOfBounds, Region};
pub use config::GameConfig;
pub use debounce::DebounceTimer;
pub use game::{GameController, GameState, PlayerId, PlayerSet, StepOutcome, TextDisplay};
pub use input::{InputSnapshot, InputSource, NavState, PinInputs};
pub use matrix::{
    CalibratedDelay, CellGrid, HalDelay, Matrix, PulseTiming, ScanOrder, SpinDelay, Ws2812Line,
};

pub use color::{Palette, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract board output trait
///
/// Implement this trait to support different hardware platforms.
/// The board driver is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the board, in row-major cell order
    fn write(&mut self, colors: &[Rgb]);
}
