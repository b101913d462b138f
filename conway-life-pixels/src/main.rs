#![deny(clippy::all)]
#![forbid(unsafe_code)]

use life_grid::{GridSize, Seed, Simulation, SimulationConfig};
use pixels_main_support::animate;
use std::error::Error;
use std::time::Duration;

const GRID_WIDTH: u32 = 40;
const GRID_HEIGHT: u32 = 30;
const CELL_PIXEL_WIDTH: u32 = 20;
const TIME_STEP_MILLIS: u64 = 100;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = SimulationConfig::new(GridSize::new(GRID_WIDTH, GRID_HEIGHT), CELL_PIXEL_WIDTH)
        .with_time_step(Duration::from_millis(TIME_STEP_MILLIS))
        .with_seed(Seed::Empty);
    let simulation = Simulation::new(&config)?;
    animate(simulation)?;
    Ok(())
}
