use wasm_bindgen::prelude::*;

/// Per-step diagnostics snapshot, captured at end_step when perf is enabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) cells_written: u32,
    pub(super) dirty_chunks: u32,
    pub(super) total_chunks: u32,
    pub(super) cell_count: u32,
    pub(super) grid_size: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_written(&self) -> u32 { self.cells_written }
    #[wasm_bindgen(getter)]
    pub fn dirty_chunks(&self) -> u32 { self.dirty_chunks }
    #[wasm_bindgen(getter)]
    pub fn total_chunks(&self) -> u32 { self.total_chunks }
    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 { self.cell_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }

    /// Fraction of chunks touched this step (0.0 when perf disabled).
    #[wasm_bindgen(getter)]
    pub fn dirty_ratio(&self) -> f64 {
        if self.total_chunks == 0 {
            return 0.0;
        }
        self.dirty_chunks as f64 / self.total_chunks as f64
    }
}
