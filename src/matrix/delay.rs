use embedded_hal::delay::DelayNs;

/// Busy-wait primitive the data line is timed with
///
/// One unit is whatever the target was calibrated to. The board tolerates
/// only a few hundred nanoseconds of error, so implementations must not
/// round up to a coarser tick (a millisecond sleep will not work).
pub trait CalibratedDelay {
    /// Spin for `units` calibrated timing units
    fn spin(&mut self, units: u32);

    /// Hold for at least `us` microseconds
    fn hold_us(&mut self, us: u32);
}

/// Calibration on top of an `embedded-hal` delay with nanosecond resolution
///
/// Suitable for cycle-counter backed delays (`DWT`, `mcycle`, `SysTick` at core
/// clock).
pub struct HalDelay<D> {
    delay: D,
    unit_ns: u32,
}

impl<D: DelayNs> HalDelay<D> {
    /// `unit_ns` is the length of one timing unit in nanoseconds
    pub const fn new(delay: D, unit_ns: u32) -> Self {
        Self { delay, unit_ns }
    }

    /// Release the wrapped delay
    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> CalibratedDelay for HalDelay<D> {
    fn spin(&mut self, units: u32) {
        self.delay.delay_ns(units.saturating_mul(self.unit_ns));
    }

    fn hold_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

/// Cycle-counted loop calibration
///
/// `loops_per_unit` and `loops_per_us` have to be measured per target and
/// core clock; they do not carry over between chips.
pub struct SpinDelay {
    loops_per_unit: u32,
    loops_per_us: u32,
}

impl SpinDelay {
    pub const fn new(loops_per_unit: u32, loops_per_us: u32) -> Self {
        Self {
            loops_per_unit,
            loops_per_us,
        }
    }

    #[inline(always)]
    fn spin_loops(loops: u32) {
        for _ in 0..loops {
            core::hint::spin_loop();
        }
    }
}

impl CalibratedDelay for SpinDelay {
    #[inline(always)]
    fn spin(&mut self, units: u32) {
        Self::spin_loops(units.saturating_mul(self.loops_per_unit));
    }

    fn hold_us(&mut self, us: u32) {
        Self::spin_loops(us.saturating_mul(self.loops_per_us));
    }
}
