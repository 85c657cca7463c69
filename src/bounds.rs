use crate::matrix::{HEIGHT, WIDTH};

/// Requested rectangle does not fit inside the 8x8 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds;

/// Rectangular area of the grid, validated against its size
///
/// Only [`Region::new`] builds one, so every region fits the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    x: u8,
    y: u8,
    width: u8,
    height: u8,
}

impl Region {
    /// Create a region, failing if it extends past the right or bottom edge
    pub const fn new(x: u8, y: u8, width: u8, height: u8) -> Result<Self, OutOfBounds> {
        if !fits(x, width, WIDTH) || !fits(y, height, HEIGHT) {
            return Err(OutOfBounds);
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    pub const fn width(self) -> u8 {
        self.width
    }

    pub const fn height(self) -> u8 {
        self.height
    }

    /// Number of cells covered
    pub const fn count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check whether the cell at (`x`, `y`) lies inside the region
    pub const fn contains(self, x: usize, y: usize) -> bool {
        x >= self.x as usize
            && x < self.x as usize + self.width as usize
            && y >= self.y as usize
            && y < self.y as usize + self.height as usize
    }
}

#[allow(clippy::cast_lossless)]
const fn fits(start: u8, len: u8, limit: usize) -> bool {
    // summed in u16 so 255 + 255 does not wrap into range
    start as u16 + len as u16 <= limit as u16
}
