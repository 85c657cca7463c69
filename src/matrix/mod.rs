//! 8x8 RGB board: cell storage and transmission
//!
//! The board has no addressing, so every transmission sends the full grid.

mod delay;
mod ws2812;

pub use delay::{CalibratedDelay, HalDelay, SpinDelay};
pub use ws2812::{PulseTiming, ScanOrder, Ws2812Line, wire_bytes};

use crate::OutputDriver;
use crate::bounds::{OutOfBounds, Region};
use crate::color::{Rgb, from_grb};

/// Number of columns on the board
pub const WIDTH: usize = 8;
/// Number of rows on the board
pub const HEIGHT: usize = 8;
/// Number of cells on the board
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Row-major grid of cell colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: [[Rgb; WIDTH]; HEIGHT],
}

impl CellGrid {
    /// Create a grid with every cell off
    pub const fn new() -> Self {
        Self {
            cells: [[Rgb { r: 0, g: 0, b: 0 }; WIDTH]; HEIGHT],
        }
    }

    /// Set every cell to `color`
    pub fn fill(&mut self, color: Rgb) {
        for row in &mut self.cells {
            row.fill(color);
        }
    }

    /// Overwrite the cells inside `region`, leaving the rest untouched
    pub fn fill_rect(&mut self, color: Rgb, region: Region) {
        let x = region.x() as usize;
        let width = region.width() as usize;
        for row in self
            .cells
            .iter_mut()
            .skip(region.y() as usize)
            .take(region.height() as usize)
        {
            if let Some(span) = row.get_mut(x..x + width) {
                span.fill(color);
            }
        }
    }

    /// Color of the cell at column `x`, row `y`
    pub fn cell(&self, x: usize, y: usize) -> Option<Rgb> {
        self.cells.get(y)?.get(x).copied()
    }

    /// All cells in row-major order
    pub fn as_slice(&self) -> &[Rgb] {
        self.cells.as_flattened()
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Board driver: owns the grid and the output that carries it
pub struct Matrix<O: OutputDriver> {
    grid: CellGrid,
    output: O,
}

impl<O: OutputDriver> Matrix<O> {
    /// Create a driver with every cell set to `initial`
    ///
    /// Nothing is sent until the first [`Matrix::transmit`].
    pub fn new(output: O, initial: Rgb) -> Self {
        let mut grid = CellGrid::new();
        grid.fill(initial);
        Self { grid, output }
    }

    /// Set all 64 cells to `color`
    pub fn fill_all(&mut self, color: Rgb) {
        self.grid.fill(color);
    }

    /// Set all cells, with channels given in wire order
    pub fn fill_uniform(&mut self, green: u8, red: u8, blue: u8) {
        self.grid.fill(from_grb(green, red, blue));
    }

    /// Overwrite a `width` x `height` rectangle whose top-left cell is (`x`, `y`)
    ///
    /// Fails without touching the grid if `x + width > 8` or `y + height > 8`.
    pub fn fill_region(
        &mut self,
        color: Rgb,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
    ) -> Result<(), OutOfBounds> {
        let region = Region::new(x, y, width, height)?;
        self.grid.fill_rect(color, region);
        Ok(())
    }

    /// Send the whole grid to the board
    pub fn transmit(&mut self) {
        self.output.write(self.grid.as_slice());
    }

    /// Last written grid contents
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
