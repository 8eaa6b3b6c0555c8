//! Padded tile materialization.
//!
//! A work unit is scanned as a boolean grid extended by `min_dim - 1`
//! chunks on every side (clamped to the search region). The padding means
//! a rectangle straddling a tile border is seen whole by at least one of
//! the tiles touching it; the result set's identity absorbs the duplicate
//! finds from the overlap. No cross-tile reconciliation pass exists, and
//! none is needed.
//!
//! Grid filling streams coordinates row-major through the 16-lane batched
//! predicate, carrying a ragged tail that is flushed with discarded padding
//! lanes.

use crate::config::ChunkBounds;
use crate::queue::WorkUnit;
use crate::slime::is_slime_chunk_x16;

/// Dense boolean grid over a padded tile, row-major (`z` outer).
///
/// `true` cells satisfy the slime predicate. One flat allocation per tile;
/// grids are thread-local and never shared.
#[derive(Debug)]
pub struct TileGrid {
    cells: Vec<bool>,
    /// Grid width in chunks.
    pub width: i64,
    /// Grid height in chunks.
    pub height: i64,
    /// Chunk coordinate of cell `(0, 0)`.
    pub origin_x: i64,
    pub origin_z: i64,
}

impl TileGrid {
    #[inline]
    pub fn get(&self, x: i64, z: i64) -> bool {
        debug_assert!(x >= 0 && x < self.width && z >= 0 && z < self.height);
        self.cells[(z * self.width + x) as usize]
    }

    #[inline]
    fn set(&mut self, x: i64, z: i64, v: bool) {
        let w = self.width;
        self.cells[(z * w + x) as usize] = v;
    }

    /// Test-only constructor for synthetic grids.
    #[cfg(test)]
    pub(crate) fn from_raw(cells: Vec<bool>, width: i64, height: i64, origin_x: i64, origin_z: i64) -> Self {
        assert_eq!(cells.len() as i64, width * height);
        Self {
            cells,
            width,
            height,
            origin_x,
            origin_z,
        }
    }
}

/// Batch accumulator for the 16-lane predicate.
///
/// Remembers where each lane's result lands in the grid so a full batch can
/// be scattered back in one pass.
struct LaneBatch {
    chunk_x: [i64; 16],
    chunk_z: [i64; 16],
    grid_x: [i64; 16],
    grid_z: [i64; 16],
    len: usize,
}

impl LaneBatch {
    fn new() -> Self {
        Self {
            chunk_x: [0; 16],
            chunk_z: [0; 16],
            grid_x: [0; 16],
            grid_z: [0; 16],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, cx: i64, cz: i64, gx: i64, gz: i64) -> bool {
        let i = self.len;
        self.chunk_x[i] = cx;
        self.chunk_z[i] = cz;
        self.grid_x[i] = gx;
        self.grid_z[i] = gz;
        self.len += 1;
        self.len == 16
    }

    /// Evaluate the occupied lanes and scatter into `grid`. Unused lanes
    /// keep whatever coordinates they held; their outputs are dropped.
    fn flush(&mut self, world_seed: i64, grid: &mut TileGrid) {
        if self.len == 0 {
            return;
        }
        let mut results = [false; 16];
        is_slime_chunk_x16(&self.chunk_x, &self.chunk_z, world_seed, &mut results);
        for i in 0..self.len {
            grid.set(self.grid_x[i], self.grid_z[i], results[i]);
        }
        self.len = 0;
    }
}

/// Materialize the padded grid for `unit`.
///
/// Pads by `min_dim - 1` per side, clamps to `search`, and returns `None`
/// when the clamped grid cannot hold even one `min_dim`-sided rectangle
/// (no results are possible, so no scan happens; the caller still credits
/// the unpadded unit toward progress).
pub fn scan_tile(
    unit: &WorkUnit,
    search: &ChunkBounds,
    min_dim: i64,
    world_seed: i64,
) -> Option<TileGrid> {
    let pad = min_dim - 1;
    let min_x = (unit.min_cx - pad).max(search.min_cx);
    let max_x = (unit.max_cx + pad).min(search.max_cx);
    let min_z = (unit.min_cz - pad).max(search.min_cz);
    let max_z = (unit.max_cz + pad).min(search.max_cz);

    let width = max_x - min_x;
    let height = max_z - min_z;
    if width < min_dim || height < min_dim {
        return None;
    }

    let mut grid = TileGrid {
        cells: vec![false; (width * height) as usize],
        width,
        height,
        origin_x: min_x,
        origin_z: min_z,
    };

    let mut batch = LaneBatch::new();
    for gz in 0..height {
        for gx in 0..width {
            if batch.push(min_x + gx, min_z + gz, gx, gz) {
                batch.flush(world_seed, &mut grid);
            }
        }
    }
    batch.flush(world_seed, &mut grid);

    Some(grid)
}
