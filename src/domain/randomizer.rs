//! Initial grid population from an injected random source.

use super::{Cell, CellKind, Grid};
use rand::Rng;

/// Overwrite every cell with a kind drawn uniformly from the three kinds.
/// All cells come out facing Up; orientation variety is not the
/// randomizer's job.
///
/// The source is passed in so a seeded [`rand::rngs::StdRng`] reproduces an
/// exact board under test.
pub fn randomize<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let (width, height) = grid.dimensions();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let kind = match rng.random_range(0..3) {
                0 => CellKind::Empty,
                1 => CellKind::Filler,
                _ => CellKind::Arrow,
            };
            grid.set(x, y, Cell::new(kind));
        }
    }
}
