//! # Canvas - character grid drawing engine
//!
//! The grid is addressed with 1-based, inclusive coordinates over an
//! unbounded plane; anything outside `[1, width] x [1, height]` is clipped.
//!
//! ```text
//!     Shape::Line ──┐
//!                   ├──► rasterize ──┐
//!     Shape::Rect ──┘                │
//!                                    ▼
//!     fill(x, y, c) ───────────► ┌────────┐ ──► serialize ──► "-----\n|   |\n..."
//!                                │  Grid  │
//!                                └────────┘
//! ```

mod fill;
mod grid;
mod shapes;

pub use fill::flood_fill;
pub use grid::{Grid, BLANK, MAX_DIMENSION, STROKE};
pub use shapes::{Point, Shape};

use crate::errors::Result;

/// Capability interface of a drawable canvas.
///
/// Coordinates passed to `draw` and `fill` are 1-based.
pub trait Canvas {
    /// Allocate (or reallocate) a blank `width` x `height` grid
    fn create(&mut self, width: i64, height: i64);

    /// Whether `create` has produced a non-empty grid
    fn created(&self) -> bool;

    /// Reset every cell to blank, keeping the dimensions
    fn clear(&mut self);

    /// Rasterize a shape with the stroke glyph
    fn draw(&mut self, shape: &Shape) -> Result<()>;

    /// Bucket fill the region around `(x, y)` with `color`
    fn fill(&mut self, x: i64, y: i64, color: u8);

    /// Bordered text rendering of the grid
    fn serialize(&self) -> String;

    fn width(&self) -> usize;

    fn height(&self) -> usize;
}
