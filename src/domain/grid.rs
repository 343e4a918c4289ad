use super::Cell;
use thiserror::Error;

/// Errors the grid can report. Out-of-bounds is only surfaced by the
/// checked accessors; the plain ones treat it as a programming error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("coordinate ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Grid owns the 2D cell array. Fixed dimensions, row-major storage,
/// (0,0) at the top-left. No behavior beyond access and mutation; the
/// push rule lives in [`crate::domain::engine`].
///
/// Coordinates are signed so ray arithmetic can step past an edge and be
/// caught by [`Grid::in_bounds`] instead of wrapping.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of all-empty cells. Dimensions are fixed for the
    /// lifetime of the grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether (x, y) lies inside the grid.
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Cell at (x, y). Panics on out-of-bounds: well-formed callers bound
    /// their walks first, so a bad coordinate here is a bug, not a condition
    /// to recover from.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        assert!(
            self.in_bounds(x, y),
            "grid read at ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        self.cells[self.index(x, y)]
    }

    /// Overwrite the cell at (x, y). Panics on out-of-bounds, same contract
    /// as [`Grid::get`].
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        assert!(
            self.in_bounds(x, y),
            "grid write at ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Checked read for callers holding unvalidated coordinates.
    pub fn try_get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        if self.in_bounds(x, y) {
            Ok(self.cells[self.index(x, y)])
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    /// Checked write for callers holding unvalidated coordinates.
    pub fn try_set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
            Ok(())
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    const fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::EMPTY);
    }

    /// Count of occupied cells. The update rule conserves this.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Iterate over all cells with their positions, row by row. This is the
    /// read-only snapshot view the renderer consumes.
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellKind, Facing};

    #[test]
    fn test_new_grid_is_all_empty() {
        let grid = Grid::new(8, 6).unwrap();
        assert_eq!(grid.dimensions(), (8, 6));
        assert_eq!(grid.occupied(), 0);
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::EMPTY));
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimension { width: 0, height: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            GridError::InvalidDimension { width: 5, height: 0 }
        );
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut grid = Grid::new(4, 4).unwrap();
        let cell = Cell::with_facing(CellKind::Arrow, Facing::Left);
        grid.set(2, 3, cell);
        assert_eq!(grid.get(2, 3), cell);
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn test_in_bounds_edges() {
        let grid = Grid::new(3, 2).unwrap();
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(2, 1));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(3, 0));
        assert!(!grid.in_bounds(0, 2));
    }

    #[test]
    fn test_checked_access_reports_out_of_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.try_get(3, 0).unwrap_err(),
            GridError::OutOfBounds { x: 3, y: 0, width: 3, height: 3 }
        );
        assert_eq!(
            grid.try_set(0, -1, Cell::new(CellKind::Filler)).unwrap_err(),
            GridError::OutOfBounds { x: 0, y: -1, width: 3, height: 3 }
        );
        assert!(grid.try_set(1, 1, Cell::new(CellKind::Filler)).is_ok());
        assert_eq!(grid.try_get(1, 1).unwrap().kind, CellKind::Filler);
    }

    #[test]
    #[should_panic(expected = "outside 3x3")]
    fn test_unchecked_read_panics_out_of_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        let _ = grid.get(3, 3);
    }

    #[test]
    fn test_clear_resets_occupancy() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 0, Cell::new(CellKind::Filler));
        grid.set(1, 2, Cell::new(CellKind::Arrow));
        grid.clear();
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        let coords: Vec<_> = grid.iter_cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
