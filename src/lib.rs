// Domain layer - grid model, push rule, randomizer
pub mod domain;

// Application layer - driver state and tick cadence
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellKind, Facing, Grid, GridError};
pub use application::{GameState, TICK_INTERVAL};
