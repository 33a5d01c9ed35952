use super::*;

impl Grid {
    // === FAST ACCESS (bounds-checked in debug, raw in release) ===
    // ONLY use when coordinates are mathematically guaranteed valid,
    // e.g. inside a chunk sweep already clipped to the grid.

    /// Fast cell read.
    #[inline(always)]
    pub fn get_fast(&self, x: u32, y: u32) -> Cell {
        let idx = self.index_unchecked(x, y);
        *fast!(self.cells, [idx])
    }

    /// Fast cell write.
    #[inline(always)]
    pub fn set_fast(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = self.index_unchecked(x, y);
        fast!(self.cells, [idx] = cell);
    }

    /// Fast read by linear index.
    #[inline(always)]
    pub fn get_idx_fast(&self, idx: usize) -> Cell {
        *fast!(self.cells, [idx])
    }

    /// Fast write by linear index.
    #[inline(always)]
    pub fn set_idx_fast(&mut self, idx: usize, cell: Cell) {
        fast!(self.cells, [idx] = cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::{compose_type, BH_NONE, CLASS_FLUID};

    #[test]
    fn fast_accessors_match_safe_ones() {
        let mut grid = Grid::new(16, 16);
        let fluid = Cell::encode(compose_type(CLASS_FLUID), BH_NONE, 0, 3, 20);

        grid.set_fast(5, 9, fluid);
        assert_eq!(grid.get(5, 9), fluid);
        assert_eq!(grid.get_fast(5, 9), fluid);

        let idx = grid.index(5, 9);
        assert_eq!(grid.get_idx_fast(idx), fluid);

        grid.set_idx_fast(idx, Cell::EMPTY);
        assert!(grid.is_empty(5, 9));
    }
}
