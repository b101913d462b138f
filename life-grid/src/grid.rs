use crate::pattern::{Pattern, Random};
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, loc: Loc) -> bool {
        loc.x < self.width && loc.y < self.height
    }
}

/// A cell coordinate. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub x: u32,
    pub y: u32,
}

impl Loc {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn grid_index(&self, size: GridSize) -> Option<usize> {
        if size.contains(*self) {
            Some(self.y as usize * size.width as usize + self.x as usize)
        } else {
            None
        }
    }

    /// Offsets this location, wrapping around the edges of a grid of `size`.
    pub fn wrapping_offset(&self, dx: i64, dy: i64, size: GridSize) -> Loc {
        Loc::new(
            modulo(self.x as i64 + dx, size.width),
            modulo(self.y as i64 + dy, size.height),
        )
    }
}

fn modulo(val: i64, max: u32) -> u32 {
    val.rem_euclid(max as i64) as u32
}

/// Fixed-size field of cell liveness, stored row-major.
///
/// Indexing is not wrapped: a location outside the grid panics. Wrapping is
/// done by [`Loc::wrapping_offset`] where the topology calls for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(size: GridSize) -> Self {
        assert!(size.width > 0 && size.height > 0);
        Self {
            size,
            cells: vec![false; size.num_cells()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn locs(&self) -> impl Iterator<Item = Loc> + use<> {
        let size = self.size;
        (0..size.height).flat_map(move |y| (0..size.width).map(move |x| Loc::new(x, y)))
    }

    pub fn live_locs(&self) -> impl Iterator<Item = Loc> + '_ {
        self.locs().filter(|&loc| self[loc])
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn get(&self, loc: Loc) -> bool {
        self[loc]
    }

    pub fn set(&mut self, loc: Loc, alive: bool) {
        self[loc] = alive;
    }

    pub fn toggle(&mut self, loc: Loc) {
        self[loc] ^= true;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Writes `pattern` with its top-left corner at `origin`. Rows and
    /// columns that run past an edge continue on the opposite edge.
    pub fn stamp(&mut self, pattern: &Pattern, origin: Loc) {
        for (offset, alive) in pattern.cells() {
            let loc = origin.wrapping_offset(offset.x as i64, offset.y as i64, self.size);
            self[loc] = alive;
        }
    }

    pub fn fill_random(&mut self, density: f64, rand: &mut Random) {
        for cell in self.cells.iter_mut() {
            *cell = rand.next_bool(density);
        }
    }

    fn cell(&self, loc: Loc) -> Option<&bool> {
        loc.grid_index(self.size).map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut bool> {
        loc.grid_index(self.size).map(|index| &mut self.cells[index])
    }
}

impl Index<Loc> for Grid {
    type Output = bool;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.x, loc.y))
    }
}

impl IndexMut<Loc> for Grid {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.x, loc.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(GridSize::new(4, 3));
        assert_eq!(grid.num_cells(), 12);
        assert_eq!(grid.live_count(), 0);
        assert!(grid.locs().all(|loc| !grid.get(loc)));
    }

    #[test]
    fn grid_index_is_row_major() {
        let size = GridSize::new(4, 3);
        assert_eq!(Loc::new(0, 0).grid_index(size), Some(0));
        assert_eq!(Loc::new(3, 0).grid_index(size), Some(3));
        assert_eq!(Loc::new(0, 1).grid_index(size), Some(4));
        assert_eq!(Loc::new(3, 2).grid_index(size), Some(11));
        assert_eq!(Loc::new(4, 0).grid_index(size), None);
        assert_eq!(Loc::new(0, 3).grid_index(size), None);
    }

    #[test]
    fn toggle_flips_one_cell() {
        let mut grid = Grid::new(GridSize::new(3, 3));
        grid.toggle(Loc::new(2, 1));
        assert!(grid.get(Loc::new(2, 1)));
        assert_eq!(grid.live_count(), 1);
        grid.toggle(Loc::new(2, 1));
        assert!(!grid.get(Loc::new(2, 1)));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::new(GridSize::new(5, 5));
        grid.set(Loc::new(0, 0), true);
        grid.set(Loc::new(4, 4), true);
        grid.set(Loc::new(2, 3), true);
        grid.clear();
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.size(), GridSize::new(5, 5));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_panics() {
        let grid = Grid::new(GridSize::new(3, 3));
        grid.get(Loc::new(3, 0));
    }

    #[test]
    fn wrapping_offset_wraps_both_axes() {
        let size = GridSize::new(5, 4);
        let origin = Loc::new(0, 0);
        assert_eq!(origin.wrapping_offset(-1, -1, size), Loc::new(4, 3));
        assert_eq!(Loc::new(4, 3).wrapping_offset(1, 1, size), origin);
        assert_eq!(Loc::new(2, 2).wrapping_offset(7, -6, size), Loc::new(4, 0));
    }

    #[test]
    fn stamp_wraps_past_edges() {
        let mut grid = Grid::new(GridSize::new(4, 4));
        grid.stamp(&Pattern::block(), Loc::new(3, 3));
        let live: Vec<Loc> = grid.live_locs().collect();
        assert_eq!(
            live,
            vec![
                Loc::new(0, 0),
                Loc::new(3, 0),
                Loc::new(0, 3),
                Loc::new(3, 3)
            ]
        );
    }

    #[test]
    fn fill_random_respects_extreme_densities() {
        let mut grid = Grid::new(GridSize::new(6, 6));
        let mut rand = Random::from_seed(7);
        grid.fill_random(1.0, &mut rand);
        assert_eq!(grid.live_count(), 36);
        grid.fill_random(0.0, &mut rand);
        assert_eq!(grid.live_count(), 0);
    }
}
