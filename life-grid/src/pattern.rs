use crate::grid::Loc;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// A small rectangular stamp of live and dead cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Pattern {
    /// Builds a pattern from text rows, `#` or `O` for a live cell and
    /// anything else for a dead one. All rows must be the same length.
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(!rows.is_empty());
        let width = rows[0].chars().count();
        assert!(width > 0);
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            assert_eq!(row.chars().count(), width, "ragged pattern row {row:?}");
            cells.extend(row.chars().map(|c| c == '#' || c == 'O'));
        }
        Self {
            width: width as u32,
            height: rows.len() as u32,
            cells,
        }
    }

    pub fn glider() -> Self {
        Self::from_rows(&[".#.", "..#", "###"])
    }

    pub fn block() -> Self {
        Self::from_rows(&["##", "##"])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Every cell of the pattern with its offset from the top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (Loc, bool)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(index, &alive)| {
            let index = index as u32;
            (Loc::new(index % width, index / width), alive)
        })
    }
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider_rows() {
        let glider = Pattern::glider();
        assert_eq!((glider.width(), glider.height()), (3, 3));
        let live: Vec<Loc> = glider
            .cells()
            .filter(|&(_, alive)| alive)
            .map(|(loc, _)| loc)
            .collect();
        assert_eq!(
            live,
            vec![
                Loc::new(1, 0),
                Loc::new(2, 1),
                Loc::new(0, 2),
                Loc::new(1, 2),
                Loc::new(2, 2)
            ]
        );
    }

    #[test]
    fn accepts_o_for_live_cells() {
        assert_eq!(Pattern::from_rows(&["OO", "OO"]), Pattern::block());
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn rejects_ragged_rows() {
        Pattern::from_rows(&["##", "#"]);
    }

    #[test]
    fn seeded_random_is_repeatable() {
        let mut a = Random::from_seed(42);
        let mut b = Random::from_seed(42);
        for _ in 0..32 {
            assert_eq!(a.next_bool(0.5), b.next_bool(0.5));
        }
    }
}
