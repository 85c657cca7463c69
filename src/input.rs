//! Level-sensed host buttons and buzzer bus

use embedded_hal::digital::InputPin;

use crate::game::PlayerSet;

/// Host navigation buttons pressed during one sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
}

/// Everything read from the inputs in one loop iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub nav: NavState,
    pub buzzers: PlayerSet,
}

/// Source of input snapshots
///
/// Called once per loop iteration. There is no queue: a press shorter than
/// one iteration may never be seen.
pub trait InputSource {
    fn sample(&mut self) -> InputSnapshot;
}

/// Inputs read straight from GPIO
///
/// Navigation lines are pulled up and read as pressed when low. Buzzer lines
/// are pulled up as well but wired active-high: a set bit is a pressed buzzer.
pub struct PinInputs<N, B> {
    left: N,
    right: N,
    up: N,
    down: N,
    confirm: N,
    buzzers: [B; 3],
}

impl<N: InputPin, B: InputPin> PinInputs<N, B> {
    pub const fn new(left: N, right: N, up: N, down: N, confirm: N, buzzers: [B; 3]) -> Self {
        Self {
            left,
            right,
            up,
            down,
            confirm,
            buzzers,
        }
    }
}

// A pin that fails to read counts as released
fn active_low<P: InputPin>(pin: &mut P) -> bool {
    matches!(pin.is_low(), Ok(true))
}

fn active_high<P: InputPin>(pin: &mut P) -> bool {
    matches!(pin.is_high(), Ok(true))
}

impl<N: InputPin, B: InputPin> InputSource for PinInputs<N, B> {
    fn sample(&mut self) -> InputSnapshot {
        let nav = NavState {
            left: active_low(&mut self.left),
            right: active_low(&mut self.right),
            up: active_low(&mut self.up),
            down: active_low(&mut self.down),
            confirm: active_low(&mut self.confirm),
        };
        let mut bus = 0u8;
        for (bit, pin) in self.buzzers.iter_mut().enumerate() {
            if active_high(pin) {
                bus |= 1 << bit;
            }
        }
        InputSnapshot {
            nav,
            buzzers: PlayerSet::from_bus(bus),
        }
    }
}
