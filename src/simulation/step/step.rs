use super::perf_timer::PerfTimer;
use super::SessionCore;

pub(super) fn begin_step(core: &mut SessionCore) {
    if core.perf_enabled {
        core.step_timer = Some(PerfTimer::start());
    }

    // The dirty set is scoped to one step: cleared here, written by every
    // cell mutation until end_step, read by consumers afterwards.
    core.dirty.reset();
    core.cells_written_this_step = 0;
}

pub(super) fn end_step(core: &mut SessionCore) {
    if core.perf_enabled {
        core.perf_stats.step_ms = core
            .step_timer
            .take()
            .map(|t| t.elapsed_ms())
            .unwrap_or(0.0);
        core.perf_stats.cells_written = core.cells_written_this_step;
        core.perf_stats.dirty_chunks = core.dirty.dirty_chunk_count() as u32;
        core.perf_stats.total_chunks = core.dirty.total_chunks() as u32;
        core.perf_stats.cell_count = core.cell_count;
        core.perf_stats.grid_size = core.grid.size() as u32;
    }

    core.frame += 1;
}
