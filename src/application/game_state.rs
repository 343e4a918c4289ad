use crate::domain::{Cell, CellKind, Grid, GridError, engine, randomizer};
use rand::rngs::StdRng;

/// The simulation steps once every this many rendered frames.
pub const TICK_INTERVAL: u64 = 10;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic: it owns the
/// grid, the seeded entropy source, and the frame-counting tick cadence.
pub struct GameState {
    pub grid: Grid,
    rng: StdRng,
    pub is_running: bool,
    pub generation: u64,
    pub frames: u64,
    /// Cell kind painted by the left mouse button.
    pub brush: CellKind,
    /// Whether the most recent engine step moved anything.
    pub last_step_moved: bool,
}

impl GameState {
    /// Create game state with a freshly randomized grid of the given
    /// dimensions. The RNG is owned from here on so re-randomizing stays
    /// reproducible from the original seed.
    pub fn new(width: usize, height: usize, mut rng: StdRng) -> Result<Self, GridError> {
        let mut grid = Grid::new(width, height)?;
        randomizer::randomize(&mut grid, &mut rng);
        Ok(Self {
            grid,
            rng,
            is_running: true,
            generation: 0,
            frames: 0,
            brush: CellKind::Filler,
            last_step_moved: false,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Re-randomize the grid and reset the generation counter
    pub fn randomize(mut self) -> Self {
        randomizer::randomize(&mut self.grid, &mut self.rng);
        self.generation = 0;
        self
    }

    /// Run a single tick while paused, for inspecting pushes frame by frame
    pub fn step_once(mut self) -> Self {
        if self.is_running {
            return self;
        }
        self.last_step_moved = engine::step(&mut self.grid);
        self.generation += 1;
        self
    }

    /// Switch the paint brush between filler and arrow
    pub fn cycle_brush(mut self) -> Self {
        self.brush = match self.brush {
            CellKind::Filler => CellKind::Arrow,
            _ => CellKind::Filler,
        };
        self
    }

    /// Paint a cell at unvalidated grid coordinates; off-grid strokes are
    /// ignored.
    pub fn paint(&mut self, x: i32, y: i32, cell: Cell) {
        let _ = self.grid.try_set(x, y, cell);
    }

    /// Advance by one rendered frame. The grid steps on every
    /// [`TICK_INTERVAL`]-th frame while running; rendering happens every
    /// frame regardless, so the cadence lives here, not in the engine.
    pub fn tick(mut self) -> Self {
        self.frames += 1;
        if self.is_running && self.frames % TICK_INTERVAL == 0 {
            self.last_step_moved = engine::step(&mut self.grid);
            self.generation += 1;
        }
        self
    }
}
