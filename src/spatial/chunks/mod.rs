//! Chunk System - fixed-size square partitioning of the grid.
//!
//! Geometry only: a `ChunkIndex` classifies coordinates into chunk ids and
//! never allocates per-chunk buffers, so partial edge chunks (grids whose
//! dimensions are not multiples of the chunk size) cost nothing.

mod dirty;
pub use dirty::DirtyChunkTracker;

/// Default chunk size in cells (32x32 is cache-friendly)
pub const CHUNK_SIZE: u32 = 32;

/// Maps grid coordinates to chunk ids. Pure function of the dimensions.
#[derive(Clone, Copy, Debug)]
pub struct ChunkIndex {
    width: u32,
    height: u32,
    chunk_size: u32,
    chunks_x: u32,
    chunks_y: u32,
    chunk_count: usize,
}

impl ChunkIndex {
    /// Chunk geometry for given grid dimensions at the default chunk size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_chunk_size(width, height, CHUNK_SIZE)
    }

    /// Chunk geometry with an explicit chunk size.
    pub fn with_chunk_size(width: u32, height: u32, chunk_size: u32) -> Self {
        debug_assert!(chunk_size > 0);
        let chunks_x = (width + chunk_size - 1) / chunk_size;
        let chunks_y = (height + chunk_size - 1) / chunk_size;
        let chunk_count = (chunks_x * chunks_y) as usize;

        Self {
            width,
            height,
            chunk_size,
            chunks_x,
            chunks_y,
            chunk_count,
        }
    }

    #[inline]
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Get chunk dimensions.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.chunks_x, self.chunks_y)
    }

    /// Get total chunk count.
    #[inline]
    pub fn total_chunks(&self) -> usize {
        self.chunk_count
    }

    /// Get chunk id from grid coordinates.
    /// Defined for all in-bounds coordinates; out-of-range input is a caller error.
    #[inline]
    pub fn chunk_id(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        let cx = x / self.chunk_size;
        let cy = y / self.chunk_size;
        (cy * self.chunks_x + cx) as usize
    }

    /// Get chunk coordinates from grid coordinates.
    #[inline]
    pub fn chunk_coords(&self, x: u32, y: u32) -> (u32, u32) {
        (x / self.chunk_size, y / self.chunk_size)
    }

    /// Get chunk id from chunk coordinates.
    #[inline]
    pub fn chunk_id_from_coords(&self, cx: u32, cy: u32) -> usize {
        (cy * self.chunks_x + cx) as usize
    }

    /// Grid coordinates of a chunk's top-left cell.
    #[inline]
    pub fn chunk_origin(&self, chunk_id: usize) -> (u32, u32) {
        let cx = (chunk_id as u32) % self.chunks_x;
        let cy = (chunk_id as u32) / self.chunks_x;
        (cx * self.chunk_size, cy * self.chunk_size)
    }

    /// In-grid extent of a chunk; edge chunks clip to the grid boundary.
    #[inline]
    pub fn chunk_extent(&self, chunk_id: usize) -> (u32, u32) {
        let (ox, oy) = self.chunk_origin(chunk_id);
        let w = (ox + self.chunk_size).min(self.width) - ox;
        let h = (oy + self.chunk_size).min(self.height) - oy;
        (w, h)
    }

    /// Check if chunk coordinates are valid.
    #[inline]
    pub fn chunk_in_bounds(&self, cx: i32, cy: i32) -> bool {
        cx >= 0 && cx < self.chunks_x as i32 && cy >= 0 && cy < self.chunks_y as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_rounds_partial_chunks_up() {
        let idx = ChunkIndex::new(100, 100);
        assert_eq!(idx.dimensions(), (4, 4));
        assert_eq!(idx.total_chunks(), 16);

        let idx = ChunkIndex::with_chunk_size(100, 100, 10);
        assert_eq!(idx.dimensions(), (10, 10));
        assert_eq!(idx.total_chunks(), 100);

        let idx = ChunkIndex::with_chunk_size(33, 65, 32);
        assert_eq!(idx.dimensions(), (2, 3));
        assert_eq!(idx.total_chunks(), 6);
    }

    #[test]
    fn scenario_coordinate_maps_to_chunk_74() {
        let idx = ChunkIndex::with_chunk_size(100, 100, 10);
        assert_eq!(idx.chunk_id(45, 72), 74);
        assert_eq!(idx.chunk_coords(45, 72), (4, 7));
    }

    #[test]
    fn every_coordinate_maps_to_exactly_one_reachable_chunk() {
        for (w, h, s) in [(100, 100, 10), (33, 65, 32), (7, 3, 4), (64, 64, 32)] {
            let idx = ChunkIndex::with_chunk_size(w, h, s);
            let total = idx.total_chunks();
            let mut hit = vec![false; total];

            for y in 0..h {
                for x in 0..w {
                    let id = idx.chunk_id(x, y);
                    assert!(id < total, "{w}x{h}/{s}: ({x},{y}) -> {id} out of range");
                    hit[id] = true;
                }
            }
            assert!(
                hit.iter().all(|&h| h),
                "{w}x{h}/{s}: some chunk id unreachable"
            );
        }
    }

    #[test]
    fn edge_chunk_extent_clips_to_grid() {
        let idx = ChunkIndex::with_chunk_size(33, 65, 32);
        // Interior chunk
        assert_eq!(idx.chunk_extent(0), (32, 32));
        // Right edge column is 1 cell wide
        assert_eq!(idx.chunk_extent(1), (1, 32));
        // Bottom edge row is 1 cell tall
        assert_eq!(idx.chunk_extent(4), (32, 1));
        assert_eq!(idx.chunk_extent(5), (1, 1));
    }

    #[test]
    fn origin_and_id_are_inverse() {
        let idx = ChunkIndex::with_chunk_size(100, 80, 16);
        for id in 0..idx.total_chunks() {
            let (ox, oy) = idx.chunk_origin(id);
            assert_eq!(idx.chunk_id(ox, oy), id);
        }
    }

    #[test]
    fn chunk_in_bounds_rejects_outside_coords() {
        let idx = ChunkIndex::with_chunk_size(64, 64, 32);
        assert!(idx.chunk_in_bounds(0, 0));
        assert!(idx.chunk_in_bounds(1, 1));
        assert!(!idx.chunk_in_bounds(-1, 0));
        assert!(!idx.chunk_in_bounds(2, 0));
        assert!(!idx.chunk_in_bounds(0, 2));
    }
}
