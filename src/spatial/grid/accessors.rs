use super::*;

impl Grid {
    #[inline]
    pub fn is_empty(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)].is_empty()
    }

    #[inline]
    pub fn is_empty_idx(&self, idx: usize) -> bool {
        self.cells[idx].is_empty()
    }

    // === Whole-cell access ===

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Safe read with out-of-bounds fallback to the empty encoding,
    /// for neighborhood scans that walk off the edge.
    #[inline]
    pub fn get_clamped(&self, x: i32, y: i32) -> Cell {
        if !self.in_bounds(x, y) {
            return Cell::EMPTY;
        }
        self.cells[self.index(x as u32, y as u32)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    #[inline]
    pub fn set_idx(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
    }

    // === Field-level access (read-modify-write through the codec) ===

    #[inline]
    pub fn get_temperature(&self, x: u32, y: u32) -> u8 {
        self.get(x, y).temperature()
    }

    #[inline]
    pub fn set_temperature(&mut self, x: u32, y: u32, temperature: u8) {
        let idx = self.index(x, y);
        self.cells[idx] = self.cells[idx].with_temperature(temperature);
    }

    #[inline]
    pub fn get_type_class(&self, x: u32, y: u32) -> u8 {
        self.get(x, y).type_class()
    }

    #[inline]
    pub fn get_behavior(&self, x: u32, y: u32) -> u8 {
        self.get(x, y).behavior()
    }

    // === Bulk operations ===

    /// Reset every cell to the empty encoding.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Fill the whole grid with one cell value.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    // === Raw access for the renderer ABI ===

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Pointer to the packed words (for JS rendering).
    /// Cell is repr(transparent) over u32, so the cast is layout-safe.
    pub fn cells_ptr(&self) -> *const u32 {
        self.cells.as_ptr() as *const u32
    }
}
