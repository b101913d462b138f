use crate::grid::GridSize;
use std::time::Duration;
use thiserror::Error;

/// Settings fixed when a [`Simulation`](crate::Simulation) is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub grid_size: GridSize,
    /// Side of one cell in pixels. Only used to map pointer positions to
    /// cells.
    pub cell_pixel_width: u32,
    /// Delay between generations. The core never sleeps; this belongs to
    /// whatever loop calls [`Simulation::tick`](crate::Simulation::tick).
    pub time_step: Duration,
    pub seed: Seed,
}

impl SimulationConfig {
    pub fn new(grid_size: GridSize, cell_pixel_width: u32) -> Self {
        Self {
            grid_size,
            cell_pixel_width,
            ..Self::default()
        }
    }

    pub fn with_time_step(mut self, time_step: Duration) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.grid_size.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.cell_pixel_width == 0 {
            return Err(ConfigError::ZeroCellPixelWidth);
        }
        if self.time_step.is_zero() {
            return Err(ConfigError::ZeroTimeStep);
        }
        if self.pixel_size().is_none() {
            return Err(ConfigError::TooLarge(self.grid_size, self.cell_pixel_width));
        }
        if let Seed::Random { density } = self.seed
            && !(0.0..=1.0).contains(&density)
        {
            return Err(ConfigError::DensityOutOfRange(density));
        }
        Ok(())
    }

    /// Width and height of the whole grid in pixels, if it fits in a `u32`.
    pub fn pixel_size(&self) -> Option<(u32, u32)> {
        let width = self.grid_size.width.checked_mul(self.cell_pixel_width)?;
        let height = self.grid_size.height.checked_mul(self.cell_pixel_width)?;
        Some((width, height))
    }
}

impl Default for SimulationConfig {
    /// 800x600 pixels of 20 pixel cells, stepping every 100 ms.
    fn default() -> Self {
        Self {
            grid_size: GridSize::new(40, 30),
            cell_pixel_width: 20,
            time_step: Duration::from_millis(100),
            seed: Seed::Empty,
        }
    }
}

/// What the grid holds before the first edit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Seed {
    #[default]
    Empty,
    /// One glider in the top-left corner.
    Glider,
    /// Each cell alive with probability `density`.
    Random { density: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid width must be positive")]
    ZeroWidth,
    #[error("grid height must be positive")]
    ZeroHeight,
    #[error("cell pixel width must be positive")]
    ZeroCellPixelWidth,
    #[error("time step must be positive")]
    ZeroTimeStep,
    #[error("grid of {0:?} cells at {1} pixels per cell is too large")]
    TooLarge(GridSize, u32),
    #[error("random seed density {0} is outside 0..=1")]
    DensityOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.pixel_size(), Some((800, 600)));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let zero_width = SimulationConfig::new(GridSize::new(0, 10), 4);
        assert_eq!(zero_width.validate(), Err(ConfigError::ZeroWidth));

        let zero_height = SimulationConfig::new(GridSize::new(10, 0), 4);
        assert_eq!(zero_height.validate(), Err(ConfigError::ZeroHeight));

        let zero_cell = SimulationConfig::new(GridSize::new(10, 10), 0);
        assert_eq!(zero_cell.validate(), Err(ConfigError::ZeroCellPixelWidth));
    }

    #[test]
    fn rejects_zero_time_step() {
        let config = SimulationConfig::default().with_time_step(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeStep));
    }

    #[test]
    fn rejects_overflowing_pixel_size() {
        let config = SimulationConfig::new(GridSize::new(u32::MAX, 2), 2);
        assert!(matches!(config.validate(), Err(ConfigError::TooLarge(..))));
    }

    #[test]
    fn rejects_bad_density() {
        for density in [-0.1, 1.5, f64::NAN] {
            let config = SimulationConfig::default().with_seed(Seed::Random { density });
            assert!(matches!(
                config.validate(),
                Err(ConfigError::DensityOutOfRange(_))
            ));
        }
        let config = SimulationConfig::default().with_seed(Seed::Random { density: 1.0 });
        assert_eq!(config.validate(), Ok(()));
    }
}
