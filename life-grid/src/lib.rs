#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life on a fixed toroidal grid, with an edit mode for
//! drawing cells and a run mode for stepping generations.

mod config;
mod grid;
mod pattern;
mod simulation;
mod transition;

pub use config::{ConfigError, Seed, SimulationConfig};
pub use grid::{Grid, GridSize, Loc};
pub use pattern::{Pattern, Random};
pub use simulation::{Mode, Simulation, pixel_to_loc};
pub use transition::{Neighborhood, next_state, step};
