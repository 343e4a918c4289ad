//! The push rule: each tick, every arrow tries to shove the contiguous run
//! of occupied cells ahead of it one step in its facing direction.
//!
//! The scan is row-major and mutates the grid in place, so a later-scanned
//! arrow observes the moves earlier arrows already made this tick. That
//! order dependence is part of the rule, not an artifact to buffer away.

use super::{Cell, CellKind, Grid};

/// Advance the simulation by one tick. Returns true if any cell moved.
///
/// For each arrow, walk the ray ahead of it collecting the contiguous
/// occupied run. If the walk reaches an in-bounds empty slot the run shifts
/// forward one step; if it falls off the edge first the arrow is blocked
/// and nothing moves.
pub fn step(grid: &mut Grid) -> bool {
    let (width, height) = grid.dimensions();
    let mut moved = false;

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let cell = grid.get(x, y);
            if cell.kind != CellKind::Arrow {
                continue;
            }
            let (dx, dy) = cell.facing.delta();

            // Walk the ray until an empty slot or the grid edge.
            let mut chain: Vec<(i32, i32)> = Vec::new();
            let (mut nx, mut ny) = (x + dx, y + dy);
            while grid.in_bounds(nx, ny) && grid.get(nx, ny).is_occupied() {
                chain.push((nx, ny));
                nx += dx;
                ny += dy;
            }

            // The walk stopped either on an empty in-bounds slot (push) or
            // past the edge (blocked).
            if !grid.in_bounds(nx, ny) {
                continue;
            }

            // Shift farthest-first so no slot is read after being
            // overwritten; the slot ahead of each element is free by then.
            for &(cx, cy) in chain.iter().rev() {
                let payload = grid.get(cx, cy);
                grid.set(cx + dx, cy + dy, payload);
            }
            grid.set(x + dx, y + dy, cell);
            grid.set(x, y, Cell::EMPTY);
            moved = true;
        }
    }

    moved
}
