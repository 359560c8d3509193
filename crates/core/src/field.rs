//! Field module - the persistent 10x20 grid of settled cells
//!
//! Flat array storage for cache locality, row-major order (y * WIDTH + x).
//! Cell values: `0` empty, `1..=7` settled cell colored by figure kind.
//! Coordinates: (x, y) with x in 0..9 left to right, y in 0..19 top to bottom.

use crate::generator::SimpleRng;
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH, FIGURE_KINDS};

const WIDTH: usize = FIELD_WIDTH as usize;
const HEIGHT: usize = FIELD_HEIGHT as usize;
const FIELD_SIZE: usize = WIDTH * HEIGHT;

/// The playing field - 10 columns x 20 rows of `u8` cell codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cells: [u8; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [0; FIELD_SIZE],
        }
    }

    /// Flat index for (x, y), `None` when out of bounds
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Cell code at (x, y), `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell code; returns false when out of bounds
    pub fn set(&mut self, x: i8, y: i8, code: u8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = code;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(0))
    }

    /// In bounds and holding a settled cell
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(code) if code != 0)
    }

    /// Every column of row `y` is non-zero
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|&c| c != 0)
    }

    /// Zero a single row
    pub fn clear_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(0);
    }

    /// Shift rows `(floor, y]` down by one and zero the vacated row `floor`
    ///
    /// `floor` tracks rows already consumed by earlier clears in the same
    /// pass, so a multi-line clear moves each surviving row exactly once.
    pub fn collapse_above(&mut self, y: usize, floor: usize) {
        if y >= HEIGHT || floor > y {
            return;
        }
        for row in ((floor + 1)..=y).rev() {
            let src = (row - 1) * WIDTH;
            let dst = row * WIDTH;
            self.cells.copy_within(src..src + WIDTH, dst);
        }
        let start = floor * WIDTH;
        self.cells[start..start + WIDTH].fill(0);
    }

    /// Clear every full row, collapsing the stack; returns the number cleared
    ///
    /// Scans bottom to top. After a clear the same index is examined again,
    /// because the collapse just shifted a new row into it.
    pub fn scan_and_clear(&mut self) -> usize {
        let mut cleared = 0usize;
        let mut floor = 0usize;
        let mut y = HEIGHT as isize - 1;
        while y >= floor as isize {
            if self.is_row_full(y as usize) {
                self.clear_row(y as usize);
                self.collapse_above(y as usize, floor);
                floor += 1;
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Rewrite the whole grid for a new game, seeding starting debris
    ///
    /// Rows with `HEIGHT - y < level` get roughly 50% occupancy, each
    /// occupied cell colored by a random kind; everything else is cleared.
    /// At level 1 the field comes out empty.
    pub fn seed_debris(&mut self, level: u32, rng: &mut SimpleRng) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let in_debris_zone = ((HEIGHT - y) as u32) < level;
                let code = if in_debris_zone && rng.next_range(2) == 1 {
                    rng.next_range(FIGURE_KINDS as u32) as u8 + 1
                } else {
                    0
                };
                self.cells[y * WIDTH + x] = code;
            }
        }
    }

    /// Copy the grid into a 2D array for snapshots
    pub fn write_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            row.copy_from_slice(&self.cells[start..start + WIDTH]);
        }
    }

    /// Number of non-empty cells on the whole field
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Zero the entire field
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
