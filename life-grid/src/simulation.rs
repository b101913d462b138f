use crate::config::{ConfigError, Seed, SimulationConfig};
use crate::grid::{Grid, GridSize, Loc};
use crate::pattern::{Pattern, Random};
use crate::transition;
use log::{debug, info, trace};
use std::mem;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Cells can be toggled and cleared; generations do not advance.
    #[default]
    Editing,
    /// Generations advance on every tick; edits are ignored.
    Running,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Editing => Mode::Running,
            Mode::Running => Mode::Editing,
        }
    }
}

/// Owns the two grid buffers and the edit/run mode.
///
/// `cells` is always the current generation. A tick writes the next
/// generation into `next_cells` and then swaps the two, so neither buffer is
/// ever reallocated.
#[derive(Debug)]
pub struct Simulation {
    cells: Grid,
    next_cells: Grid,
    mode: Mode,
    cell_pixel_width: u32,
    time_step: Duration,
    generation: u64,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut cells = Grid::new(config.grid_size);
        match config.seed {
            Seed::Empty => {}
            Seed::Glider => cells.stamp(&Pattern::glider(), Loc::new(0, 0)),
            Seed::Random { density } => cells.fill_random(density, &mut Random::new()),
        }
        info!(
            "{}x{} grid, {} live cells, {} px per cell",
            cells.width(),
            cells.height(),
            cells.live_count(),
            config.cell_pixel_width
        );
        Ok(Self {
            next_cells: Grid::new(config.grid_size),
            cells,
            mode: Mode::Editing,
            cell_pixel_width: config.cell_pixel_width,
            time_step: config.time_step,
            generation: 0,
        })
    }

    /// The current generation, for drawing.
    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    pub fn size(&self) -> GridSize {
        self.cells.size()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell_pixel_width(&self) -> u32 {
        self.cell_pixel_width
    }

    /// Delay between generations for the host loop. Never zero.
    pub fn time_step(&self) -> Duration {
        self.time_step
    }

    /// Width and height of the whole grid in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let size = self.size();
        (
            size.width * self.cell_pixel_width,
            size.height * self.cell_pixel_width,
        )
    }

    /// Toggles the cell under a pointer position. Returns whether a cell
    /// changed, which only happens while editing and inside the grid.
    pub fn toggle_cell(&mut self, pixel_x: i64, pixel_y: i64) -> bool {
        if self.is_running() {
            debug!("ignoring edit at ({pixel_x}, {pixel_y}) while running");
            return false;
        }
        match pixel_to_loc(pixel_x, pixel_y, self.cell_pixel_width, self.size()) {
            Some(loc) => {
                self.cells.toggle(loc);
                debug!("toggled {loc:?} to {}", self.cells[loc]);
                true
            }
            None => {
                debug!("ignoring edit at ({pixel_x}, {pixel_y}) outside the grid");
                false
            }
        }
    }

    /// Kills every cell. Returns whether the clear happened, which it only
    /// does while editing.
    pub fn clear(&mut self) -> bool {
        if self.is_running() {
            debug!("ignoring clear while running");
            return false;
        }
        self.cells.clear();
        info!("cleared grid");
        true
    }

    pub fn toggle_running(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        info!(
            "{:?} at generation {} with {} live cells",
            self.mode,
            self.generation,
            self.cells.live_count()
        );
        self.mode
    }

    /// Advances one generation while running. Returns whether it did.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        transition::step(&self.cells, &mut self.next_cells);
        mem::swap(&mut self.next_cells, &mut self.cells);
        self.generation += 1;
        trace!(
            "generation {}: {} live cells",
            self.generation,
            self.cells.live_count()
        );
        true
    }
}

/// Maps a pointer position in pixels to the cell under it, or `None` if it
/// falls outside the grid.
pub fn pixel_to_loc(
    pixel_x: i64,
    pixel_y: i64,
    cell_pixel_width: u32,
    size: GridSize,
) -> Option<Loc> {
    if pixel_x < 0 || pixel_y < 0 || cell_pixel_width == 0 {
        return None;
    }
    let x = pixel_x / cell_pixel_width as i64;
    let y = pixel_y / cell_pixel_width as i64;
    if x >= size.width as i64 || y >= size.height as i64 {
        return None;
    }
    Some(Loc::new(x as u32, y as u32))
}
