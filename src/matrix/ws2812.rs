//! Self-clocked one-wire transmitter
//!
//! Each bit is a high pulse followed by a low pulse; the receiver tells the
//! symbols apart by the width of the high part. Bytes go out most
//! significant bit first, three per cell in green, red, blue order.

use embedded_hal::digital::OutputPin;

use super::delay::CalibratedDelay;
use crate::OutputDriver;
use crate::color::{Rgb, to_grb};

/// Pulse widths in calibrated units, plus the latch hold after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    pub zero_high: u32,
    pub zero_low: u32,
    pub one_high: u32,
    pub one_low: u32,
    /// Low hold after the last bit before the cells latch. At least 50µs.
    pub latch_us: u32,
}

impl PulseTiming {
    /// High and low widths for one bit
    pub const fn symbol(&self, bit: bool) -> (u32, u32) {
        if bit {
            (self.one_high, self.one_low)
        } else {
            (self.zero_high, self.zero_low)
        }
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            zero_high: 10,
            zero_low: 20,
            one_high: 86,
            one_low: 3,
            latch_us: 50,
        }
    }
}

/// Order in which cells are shifted out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Top-left cell first, row by row
    #[default]
    RowMajor,
    /// Bottom-right cell first, for boards fed from the far end
    Reversed,
}

/// Bytes placed on the wire for `colors`, in transmission order
pub fn wire_bytes(colors: &[Rgb], order: ScanOrder) -> impl Iterator<Item = u8> + '_ {
    let (forward, backward) = match order {
        ScanOrder::RowMajor => (Some(colors.iter()), None),
        ScanOrder::Reversed => (None, Some(colors.iter().rev())),
    };
    forward
        .into_iter()
        .flatten()
        .chain(backward.into_iter().flatten())
        .flat_map(|color| to_grb(*color))
}

/// Bit-banged data line for addressable RGB cells
pub struct Ws2812Line<P, D> {
    pin: P,
    delay: D,
    timing: PulseTiming,
    order: ScanOrder,
}

impl<P: OutputPin, D: CalibratedDelay> Ws2812Line<P, D> {
    pub fn new(pin: P, delay: D, timing: PulseTiming) -> Self {
        Self {
            pin,
            delay,
            timing,
            order: ScanOrder::RowMajor,
        }
    }

    /// Shift cells out in `order` instead of row-major
    #[must_use]
    pub fn with_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    #[inline(always)]
    fn send_byte(&mut self, byte: u8) {
        let mut mask = 0x80u8;
        while mask != 0 {
            let (high, low) = self.timing.symbol(byte & mask != 0);
            // GPIO writes are infallible on the supported targets
            let _ = self.pin.set_high();
            self.delay.spin(high);
            let _ = self.pin.set_low();
            self.delay.spin(low);
            mask >>= 1;
        }
    }
}

impl<P: OutputPin, D: CalibratedDelay> OutputDriver for Ws2812Line<P, D> {
    fn write(&mut self, colors: &[Rgb]) {
        for byte in wire_bytes(colors, self.order) {
            self.send_byte(byte);
        }
        let _ = self.pin.set_low();
        self.delay.hold_us(self.timing.latch_us);
    }
}
