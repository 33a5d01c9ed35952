//! Grid - flat storage of packed cell words.
//!
//! One contiguous Vec of u32-sized cells, width * height, fixed for the
//! grid's lifetime. The grid is exclusively owned by the simulation session;
//! every mutation goes through the cell codec, never through raw bit fiddling
//! at call sites.

use crate::domain::cell::Cell;

mod accessors;
mod indexing;
mod unchecked;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            size,
            cells: vec![Cell::EMPTY; size],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::{compose_type, CLASS_GAS, BH_NONE};

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(8, 4);
        assert_eq!(grid.size(), 32);
        for y in 0..4 {
            for x in 0..8 {
                assert!(grid.is_empty(x, y));
                assert_eq!(grid.get(x, y), Cell::EMPTY);
            }
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut grid = Grid::new(8, 4);
        let gas = Cell::encode(compose_type(CLASS_GAS), BH_NONE, 0, 0, 120);
        grid.set(3, 2, gas);
        assert_eq!(grid.get(3, 2), gas);
        assert!(!grid.is_empty(3, 2));
        // Neighbors untouched
        assert!(grid.is_empty(2, 2));
        assert!(grid.is_empty(3, 1));
    }

    #[test]
    fn index_and_coords_are_inverse() {
        let grid = Grid::new(7, 5);
        for idx in 0..grid.size() {
            let (x, y) = grid.coords(idx);
            assert_eq!(grid.index(x, y), idx);
        }
    }

    #[test]
    fn clear_restores_empty_encoding() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, Cell::EMPTY.with_temperature(255));
        grid.clear();
        assert_eq!(grid.get(1, 1), Cell::EMPTY);
    }
}
