use super::SessionCore;

/// Copy the dirty chunk ids into the transfer buffer for zero-copy JS reads.
///
/// Flags are NOT cleared here: multiple consumers (renderer, overlays,
/// diagnostics) may read the same step's set. Clearing happens only in
/// begin_step.
pub(super) fn collect_dirty_chunks(core: &mut SessionCore) -> usize {
    core.render.dirty_list.clear();
    core.render
        .dirty_list
        .extend(core.dirty.dirty_chunk_ids().map(|id| id as u32));
    core.render.dirty_list.len()
}

pub(super) fn chunk_origin_x(core: &SessionCore, chunk_id: usize) -> u32 {
    core.dirty.index().chunk_origin(chunk_id).0
}

pub(super) fn chunk_origin_y(core: &SessionCore, chunk_id: usize) -> u32 {
    core.dirty.index().chunk_origin(chunk_id).1
}

pub(super) fn chunk_extent_w(core: &SessionCore, chunk_id: usize) -> u32 {
    core.dirty.index().chunk_extent(chunk_id).0
}

pub(super) fn chunk_extent_h(core: &SessionCore, chunk_id: usize) -> u32 {
    core.dirty.index().chunk_extent(chunk_id).1
}
