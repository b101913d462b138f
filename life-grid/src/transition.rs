use crate::grid::{Grid, Loc};
use arrayvec::ArrayVec;

/// Computes the next generation of `current` into `next`.
///
/// Reads only `current` and writes every cell of `next`, so `next` may hold
/// anything beforehand.
pub fn step(current: &Grid, next: &mut Grid) {
    assert_eq!(current.size(), next.size());
    for loc in current.locs() {
        let live_neighbors = Neighborhood::new(current, loc).num_live_cells();
        next.set(loc, next_state(current[loc], live_neighbors));
    }
}

/// B3/S23.
pub fn next_state(alive: bool, live_neighbors: u32) -> bool {
    if alive {
        (2..=3).contains(&live_neighbors)
    } else {
        live_neighbors == 3
    }
}

/// The cells around a center cell on a torus.
///
/// On grids narrower than three cells some of the eight offsets land on the
/// same cell, or on the center itself. Each distinct neighbor appears once
/// and the center never does.
pub struct Neighborhood<'a> {
    grid: &'a Grid,
    locs: ArrayVec<Loc, 8>,
}

impl<'a> Neighborhood<'a> {
    pub fn new(grid: &'a Grid, center: Loc) -> Self {
        let mut locs = ArrayVec::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                let loc = center.wrapping_offset(dx, dy, grid.size());
                if loc != center && !locs.contains(&loc) {
                    locs.push(loc);
                }
            }
        }
        Self { grid, locs }
    }

    pub fn locs(&self) -> &[Loc] {
        &self.locs
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(bool),
    {
        for &loc in &self.locs {
            f(self.grid[loc]);
        }
    }

    pub fn num_live_cells(&self) -> u32 {
        let mut result = 0;
        self.for_neighbor_cells(|alive| {
            if alive {
                result += 1;
            }
        });
        result
    }
}
