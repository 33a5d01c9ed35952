use wasm_bindgen::prelude::*;

use super::perf_stats::StepStats;
use super::SessionCore;

/// WASM-facing session handle.
#[wasm_bindgen]
pub struct Session {
    core: SessionCore,
}

#[wasm_bindgen]
impl Session {
    /// Create a new session with given grid dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SessionCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 { self.core.cell_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    // === Content ===

    #[wasm_bindgen(js_name = loadContentBundleJson)]
    pub fn load_content_bundle_json(&mut self, json: &str) -> Result<(), String> {
        self.core.load_content_bundle_json(json)
    }

    #[wasm_bindgen(js_name = getContentManifestJson)]
    pub fn get_content_manifest_json(&self) -> String {
        self.core.content_manifest_json()
    }

    /// Resolve a material key ("base:sand") to its id, or undefined.
    #[wasm_bindgen(js_name = materialId)]
    pub fn material_id(&self, key: &str) -> Option<u8> {
        self.core.content().id_by_key(key)
    }

    // === Settings ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_step_stats(&self) -> StepStats {
        self.core.get_step_stats()
    }

    pub fn set_ambient_temperature(&mut self, temperature: u8) {
        self.core.set_ambient_temperature(temperature);
    }

    pub fn get_ambient_temperature(&self) -> u8 {
        self.core.get_ambient_temperature()
    }

    // === Step boundary ===

    pub fn begin_step(&mut self) {
        self.core.begin_step();
    }

    pub fn end_step(&mut self) {
        self.core.end_step();
    }

    // === Commands ===

    /// Paint a material at position
    pub fn paint_material(&mut self, x: u32, y: u32, material: u8) -> bool {
        self.core.paint_material(x, y, material)
    }

    /// Paint a material in radius (brush)
    pub fn paint_radius(&mut self, cx: i32, cy: i32, radius: i32, material: u8) {
        self.core.paint_radius(cx, cy, radius, material);
    }

    /// Erase the cell at position
    pub fn erase(&mut self, x: u32, y: u32) -> bool {
        self.core.erase(x, y)
    }

    /// Erase cells in radius
    pub fn erase_radius(&mut self, cx: i32, cy: i32, radius: i32) {
        self.core.erase_radius(cx, cy, radius);
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === Diagnostics ===

    /// Raw packed word at position (for inspectors/overlays)
    pub fn cell_raw(&self, x: u32, y: u32) -> u32 {
        self.core.read_cell(x, y).raw()
    }

    // === Dirty set (read between steps) ===

    pub fn is_chunk_dirty(&self, chunk_id: u32) -> bool {
        self.core.is_chunk_dirty(chunk_id as usize)
    }

    pub fn dirty_chunk_count(&self) -> u32 {
        self.core.dirty_chunk_count() as u32
    }

    /// Fill the dirty-list transfer buffer; returns the entry count.
    pub fn collect_dirty_chunks(&mut self) -> u32 {
        self.core.collect_dirty_chunks() as u32
    }

    /// Force full invalidation (emergency recovery).
    pub fn mark_all_dirty(&mut self) {
        self.core.mark_all_dirty();
    }

    // === Chunk geometry (for JS coordinate calculation) ===

    pub fn chunks_x(&self) -> u32 {
        self.core.chunks_x()
    }

    pub fn chunks_y(&self) -> u32 {
        self.core.chunks_y()
    }

    pub fn total_chunks(&self) -> u32 {
        self.core.total_chunks() as u32
    }

    pub fn chunk_size(&self) -> u32 {
        self.core.chunk_size()
    }

    pub fn chunk_origin_x(&self, chunk_id: u32) -> u32 {
        self.core.chunk_origin(chunk_id as usize).0
    }

    pub fn chunk_origin_y(&self, chunk_id: u32) -> u32 {
        self.core.chunk_origin(chunk_id as usize).1
    }

    /// Clipped chunk width (edge chunks may be narrower than chunk_size)
    pub fn chunk_extent_w(&self, chunk_id: u32) -> u32 {
        self.core.chunk_extent(chunk_id as usize).0
    }

    /// Clipped chunk height
    pub fn chunk_extent_h(&self, chunk_id: u32) -> u32 {
        self.core.chunk_extent(chunk_id as usize).1
    }

    // === ABI pointers (for JS zero-copy reads) ===

    /// Get pointer to the packed cell words (for JS rendering)
    pub fn cells_ptr(&self) -> *const u32 {
        self.core.cells_ptr()
    }

    /// Get cell word count
    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    pub fn cells_byte_len(&self) -> usize {
        self.core.cells_len() * std::mem::size_of::<u32>()
    }

    pub fn dirty_list_ptr(&self) -> *const u32 {
        self.core.dirty_list_ptr()
    }

    pub fn dirty_list_len(&self) -> usize {
        self.core.dirty_list_len()
    }
}

impl Session {
    /// Native access to the core (rlib consumers, tests)
    pub fn core(&self) -> &SessionCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SessionCore {
        &mut self.core
    }
}
