use std::sync::Arc;

use crate::domain::cell::AMBIENT_TEMPERATURE;
use crate::domain::content::MaterialRegistry;
use crate::spatial::chunks::{ChunkIndex, DirtyChunkTracker};
use crate::spatial::grid::Grid;

use super::perf_stats::StepStats;
use super::{RenderBuffers, SessionCore};

pub(super) fn create_session_core(width: u32, height: u32) -> SessionCore {
    let index = ChunkIndex::new(width, height);
    let dirty_capacity = index.total_chunks();

    SessionCore {
        content: Arc::new(MaterialRegistry::from_builtin()),
        grid: Grid::new(width, height),
        dirty: DirtyChunkTracker::new(index),
        ambient_temperature: AMBIENT_TEMPERATURE,
        cell_count: 0,
        frame: 0,
        cells_written_this_step: 0,
        perf_enabled: false,
        perf_stats: StepStats::default(),
        step_timer: None,

        render: RenderBuffers {
            dirty_list: Vec::with_capacity(dirty_capacity),
        },
    }
}
