//! In-memory character grid

use std::fmt;

use super::fill::flood_fill;
use super::shapes::Shape;
use super::Canvas;
use crate::errors::Result;

/// Glyph of an untouched cell (ASCII space)
pub const BLANK: u8 = b' ';

/// Glyph written by lines and rectangles (ASCII `x`)
pub const STROKE: u8 = b'x';

/// Largest accepted width or height
pub const MAX_DIMENSION: i64 = 10_000;

/// Row-major character buffer
///
/// An uncreated grid is zero-sized; `create` is the only way to change
/// its dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an uncreated (zero-sized) grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a blank grid with the given dimensions
    pub fn with_size(width: i64, height: i64) -> Self {
        let mut grid = Self::new();
        grid.create(width, height);
        grid
    }

    /// Glyph at 0-based `(row, col)`. Callers must pre-clip.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.width + col]
    }

    /// Write a glyph at 0-based `(row, col)`. Callers must pre-clip.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, glyph: u8) {
        self.cells[row * self.width + col] = glyph;
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.width.max(1))
    }
}

impl Canvas for Grid {
    fn create(&mut self, width: i64, height: i64) {
        // Non-positive sizes degrade to an empty buffer, oversized ones are capped
        self.width = width.clamp(0, MAX_DIMENSION) as usize;
        self.height = height.clamp(0, MAX_DIMENSION) as usize;
        self.cells = vec![BLANK; self.width * self.height];
        tracing::debug!(width = self.width, height = self.height, "grid allocated");
    }

    fn created(&self) -> bool {
        !self.cells.is_empty()
    }

    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn draw(&mut self, shape: &Shape) -> Result<()> {
        shape.rasterize(self)
    }

    fn fill(&mut self, x: i64, y: i64, color: u8) {
        flood_fill(self, x, y, color);
    }

    fn serialize(&self) -> String {
        self.to_string()
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bar = "-".repeat(self.width + 2);
        writeln!(f, "{bar}")?;
        for row in self.rows() {
            f.write_str("|")?;
            for &glyph in row {
                write!(f, "{}", glyph as char)?;
            }
            f.write_str("|\n")?;
        }
        f.write_str(&bar)
    }
}
