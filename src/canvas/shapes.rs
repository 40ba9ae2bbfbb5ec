//! Axis-aligned shapes and their rasterization onto a grid

use std::ops::Range;

use super::grid::{Grid, STROKE};
use super::Canvas;
use crate::errors::{CanvasError, Result};

/// Point in 1-based canvas coordinates. May lie off the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Drawable shape request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Horizontal or vertical segment, endpoints inclusive
    Line { start: Point, end: Point },
    /// Hollow rectangle outline
    Rect { top_left: Point, bottom_right: Point },
}

impl Shape {
    pub const fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self::Line {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    pub const fn rect(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self::Rect {
            top_left: Point::new(x1, y1),
            bottom_right: Point::new(x2, y2),
        }
    }

    /// Draw the shape onto the grid, clipping to its bounds
    pub fn rasterize(&self, grid: &mut Grid) -> Result<()> {
        match *self {
            Self::Line { start, end } => draw_line(grid, start, end),
            Self::Rect {
                top_left,
                bottom_right,
            } => draw_rect(grid, top_left, bottom_right),
        }
    }
}

/// Clip the 0-based half-open span `[start, end)` to `[0, limit)`.
///
/// Returns `None` when the span misses the visible range entirely.
fn clip(start: i64, end: i64, limit: i64) -> Option<Range<usize>> {
    if end < 0 || start >= limit {
        return None;
    }
    Some(start.max(0) as usize..end.min(limit) as usize)
}

fn draw_line(grid: &mut Grid, a: Point, b: Point) -> Result<()> {
    let horizontal = a.y == b.y;
    let vertical = a.x == b.x;
    if !horizontal && !vertical {
        return Err(CanvasError::InvalidShape(
            "Only horizontal or vertical lines are supported".to_string(),
        ));
    }

    let width = grid.width() as i64;
    let height = grid.height() as i64;

    // Row 0 and rows past the bottom edge are never drawable
    if horizontal && 0 < a.y && a.y <= height {
        let row = (a.y - 1) as usize;
        let Some(cols) = clip(a.x.min(b.x).saturating_sub(1), a.x.max(b.x), width) else {
            return Ok(());
        };
        for col in cols {
            grid.set(row, col, STROKE);
        }
    }

    if vertical && 0 < a.x && a.x <= width {
        let col = (a.x - 1) as usize;
        let Some(rows) = clip(a.y.min(b.y).saturating_sub(1), a.y.max(b.y), height) else {
            return Ok(());
        };
        for row in rows {
            grid.set(row, col, STROKE);
        }
    }

    Ok(())
}

fn draw_rect(grid: &mut Grid, top_left: Point, bottom_right: Point) -> Result<()> {
    let Point { x: x1, y: y1 } = top_left;
    let Point { x: x2, y: y2 } = bottom_right;

    if x1 > x2 || y1 > y2 {
        return Err(CanvasError::InvalidShape(
            "Rectangle must have a non-negative area".to_string(),
        ));
    }

    let width = grid.width() as i64;
    let height = grid.height() as i64;
    if x1 > width || x2 <= 0 || y1 > height || y2 <= 0 {
        return Ok(());
    }

    // top, right, bottom, left
    draw_line(grid, Point::new(x1, y1), Point::new(x2, y1))?;
    draw_line(grid, Point::new(x2, y1), Point::new(x2, y2))?;
    draw_line(grid, Point::new(x2, y2), Point::new(x1, y2))?;
    draw_line(grid, Point::new(x1, y2), Point::new(x1, y1))
}
