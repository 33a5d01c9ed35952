//! Session - owns the grid and the chunk tracker, enforces the step boundary.
//!
//! One `SessionCore` per simulation. The external rule engine mutates cells
//! through it during a step; renderer/overlay/diagnostic consumers read the
//! dirty set between steps. Single writer per step by construction: the core
//! owns everything mutably and no read path marks chunks.
//!
//! Refactored for SOLID principles:
//! - Single Responsibility: the core only orchestrates, delegates to
//!   commands/step/render submodules
//! - Transition rules live outside this crate entirely

use std::sync::Arc;

use crate::domain::cell::Cell;
use crate::domain::content::{MaterialId, MaterialRegistry};
use crate::domain::heat::HeatProfileTable;
use crate::spatial::chunks::{ChunkIndex, DirtyChunkTracker};
use crate::spatial::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Session;
pub use perf_stats::StepStats;

use perf_timer::PerfTimer;

pub(crate) struct RenderBuffers {
    pub(crate) dirty_list: Vec<u32>,
}

/// The simulation session core
pub struct SessionCore {
    content: Arc<MaterialRegistry>,
    grid: Grid,
    dirty: DirtyChunkTracker,

    // Settings
    ambient_temperature: u8,

    // State
    cell_count: u32,
    frame: u64,
    cells_written_this_step: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: StepStats,
    step_timer: Option<PerfTimer>,

    render: RenderBuffers,
}

impl SessionCore {
    /// Create a new session with given grid dimensions
    pub fn new(width: u32, height: u32) -> Self {
        init::create_session_core(width, height)
    }

    pub fn load_content_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let registry = MaterialRegistry::from_bundle_json(json)?;
        self.content = Arc::new(registry);
        self.clear();
        Ok(())
    }

    pub fn content_manifest_json(&self) -> String {
        self.content.manifest_json()
    }

    pub fn content(&self) -> &MaterialRegistry {
        &self.content
    }

    /// Heat profile table for the rule engine's thermal lookups.
    pub fn heat_profiles(&self) -> &HeatProfileTable {
        self.content.heat_profiles()
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> u32 { self.cell_count }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn chunk_index(&self) -> &ChunkIndex {
        self.dirty.index()
    }

    // === Settings ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_step_stats(&self) -> StepStats {
        settings::get_step_stats(self)
    }

    pub fn set_ambient_temperature(&mut self, temperature: u8) {
        settings::set_ambient_temperature(self, temperature);
    }

    pub fn get_ambient_temperature(&self) -> u8 {
        settings::get_ambient_temperature(self)
    }

    // === Step boundary ===

    /// Open a simulation step: clears the dirty set, arms the step timer.
    /// Must be called before any writes of the step.
    pub fn begin_step(&mut self) {
        step::begin_step(self);
    }

    /// Close the step: captures stats and advances the frame counter.
    /// Consumers may read the dirty set from here until the next begin_step.
    pub fn end_step(&mut self) {
        step::end_step(self);
    }

    // === Cell access (rule engine path) ===

    /// Read one cell. Coordinates must be in bounds.
    #[inline]
    pub fn read_cell(&self, x: u32, y: u32) -> Cell {
        self.grid.get(x, y)
    }

    /// Write one cell and mark its chunk dirty. Coordinates must be in bounds.
    #[inline]
    pub fn write_cell(&mut self, x: u32, y: u32, cell: Cell) {
        let prev = self.grid.get(x, y);
        self.grid.set(x, y, cell);
        self.dirty.mark_dirty(x, y);
        self.cells_written_this_step = self.cells_written_this_step.wrapping_add(1);

        if prev.is_empty() && !cell.is_empty() {
            self.cell_count += 1;
        } else if !prev.is_empty() && cell.is_empty() && self.cell_count > 0 {
            self.cell_count -= 1;
        }
    }

    /// Mark a chunk dirty without writing (e.g. a neighbor wake).
    #[inline]
    pub fn mark_dirty(&mut self, x: u32, y: u32) {
        self.dirty.mark_dirty(x, y);
    }

    // === Commands (UI path, bounds-checked) ===

    /// Paint a material at position
    pub fn paint_material(&mut self, x: u32, y: u32, material: MaterialId) -> bool {
        commands::paint_material(self, x, y, material)
    }

    /// Paint a material in radius (brush)
    pub fn paint_radius(&mut self, cx: i32, cy: i32, radius: i32, material: MaterialId) {
        commands::paint_radius(self, cx, cy, radius, material)
    }

    /// Erase the cell at position
    pub fn erase(&mut self, x: u32, y: u32) -> bool {
        commands::erase(self, x, y)
    }

    /// Erase cells in radius
    pub fn erase_radius(&mut self, cx: i32, cy: i32, radius: i32) {
        commands::erase_radius(self, cx, cy, radius)
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === Dirty set queries (consumer path, between steps) ===

    pub fn is_chunk_dirty(&self, chunk_id: usize) -> bool {
        self.dirty.is_dirty(chunk_id)
    }

    pub fn dirty_chunk_count(&self) -> usize {
        self.dirty.dirty_chunk_count()
    }

    /// Iterate dirty chunk ids without copying.
    pub fn dirty_chunk_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty.dirty_chunk_ids()
    }

    /// Copy dirty chunk ids into the transfer buffer; returns the count.
    /// Does not clear any flags - reads never mutate the tracker.
    pub fn collect_dirty_chunks(&mut self) -> usize {
        render_extract::collect_dirty_chunks(self)
    }

    /// Force full invalidation (emergency recovery).
    pub fn mark_all_dirty(&mut self) {
        self.dirty.mark_all_dirty();
    }

    // === Chunk geometry for consumers ===

    pub fn chunks_x(&self) -> u32 {
        self.dirty.index().dimensions().0
    }

    pub fn chunks_y(&self) -> u32 {
        self.dirty.index().dimensions().1
    }

    pub fn total_chunks(&self) -> usize {
        self.dirty.total_chunks()
    }

    pub fn chunk_size(&self) -> u32 {
        self.dirty.index().chunk_size()
    }

    /// Grid coordinates of a chunk's top-left cell.
    pub fn chunk_origin(&self, chunk_id: usize) -> (u32, u32) {
        (
            render_extract::chunk_origin_x(self, chunk_id),
            render_extract::chunk_origin_y(self, chunk_id),
        )
    }

    /// Clipped in-grid extent of a chunk.
    pub fn chunk_extent(&self, chunk_id: usize) -> (u32, u32) {
        (
            render_extract::chunk_extent_w(self, chunk_id),
            render_extract::chunk_extent_h(self, chunk_id),
        )
    }

    // === ABI pointers (for JS rendering) ===

    /// Get pointer to the packed cell words
    pub fn cells_ptr(&self) -> *const u32 {
        self.grid.cells_ptr()
    }

    /// Get cell word count
    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }

    pub fn dirty_list_ptr(&self) -> *const u32 {
        self.render.dirty_list.as_ptr()
    }

    pub fn dirty_list_len(&self) -> usize {
        self.render.dirty_list.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
