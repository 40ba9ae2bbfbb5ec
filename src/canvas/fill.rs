//! Bucket fill over 4-connected regions

use super::grid::Grid;
use super::Canvas;

/// Repaint the 4-connected region of the glyph found at `(x, y)` with `color`.
///
/// `(x, y)` is 1-based. Seeds outside the grid and seeds that already hold
/// `color` are silent no-ops. Cells holding either the seed's glyph or
/// `color` are traversable, so the fill flows through existing `color` cells. Traversal uses an explicit stack and a visited
/// bitmap, so work is bounded by `width * height` and the call depth is constant.
pub fn flood_fill(grid: &mut Grid, x: i64, y: i64, color: u8) {
    let width = grid.width();
    let height = grid.height();

    if !(0 < x && x <= width as i64 && 0 < y && y <= height as i64) {
        return;
    }

    let seed = ((y - 1) as usize, (x - 1) as usize);
    let original = grid.get(seed.0, seed.1);
    if original == color {
        return;
    }

    let mut visited = vec![false; width * height];
    let mut stack = vec![seed];
    visited[seed.0 * width + seed.1] = true;
    let mut painted = 0usize;

    while let Some((row, col)) = stack.pop() {
        grid.set(row, col, color);
        painted += 1;

        // left, up, right, down
        let neighbours = [
            (col > 0).then(|| (row, col - 1)),
            (row > 0).then(|| (row - 1, col)),
            (col + 1 < width).then(|| (row, col + 1)),
            (row + 1 < height).then(|| (row + 1, col)),
        ];

        for (r, c) in neighbours.into_iter().flatten() {
            let idx = r * width + c;
            let glyph = grid.get(r, c);
            if !visited[idx] && (glyph == original || glyph == color) {
                visited[idx] = true;
                stack.push((r, c));
            }
        }
    }

    tracing::debug!(x, y, color = %char::from(color), painted, "flood fill");
}
