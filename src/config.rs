//! Search configuration.
//!
//! Plain data with a `validate()` gate, in the same shape as the scheduler
//! configs elsewhere in this codebase: construction never fails, validation
//! panics with a precise message before any thread is spawned.

use crate::rect::CHUNK_BLOCKS;

/// Half-open search region in block coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchBounds {
    pub min_bx: i64,
    pub max_bx: i64,
    pub min_bz: i64,
    pub max_bz: i64,
}

/// Half-open search region in chunk coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkBounds {
    pub min_cx: i64,
    pub max_cx: i64,
    pub min_cz: i64,
    pub max_cz: i64,
}

impl ChunkBounds {
    /// Total chunk count of the region (zero when empty or inverted).
    pub fn chunk_count(&self) -> i64 {
        let w = (self.max_cx - self.min_cx).max(0);
        let h = (self.max_cz - self.min_cz).max(0);
        w * h
    }

    pub fn is_empty(&self) -> bool {
        self.chunk_count() == 0
    }
}

/// Full configuration for one search run.
///
/// # Defaults
///
/// | Parameter | Default | Rationale |
/// |-----------|---------|-----------|
/// | `world_seed` | 413563856 | The world this tool was written for |
/// | `min_rect_dim` | 3 | Smallest farm footprint worth reporting |
/// | `work_unit_size` | 1024 | Tile side in chunks; amortizes claim overhead |
/// | `bounds` | ±30,000,000 blocks | The playable world border |
/// | `workers` | 0 (= detect) | One worker per logical core |
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// World seed the predicate derives per-chunk seeds from.
    pub world_seed: i64,

    /// Minimum width AND height for a reported rectangle. Also sets the
    /// tile padding (`min_rect_dim - 1` chunks per side).
    pub min_rect_dim: i64,

    /// Chunks per tile side. Tiles are claimed whole, so this is also the
    /// pause granularity.
    pub work_unit_size: i64,

    /// Search region in block coordinates, half-open.
    pub bounds: SearchBounds,

    /// Worker thread count. `0` means detect (one per logical core,
    /// falling back to 8 when detection fails).
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            world_seed: 413563856,
            min_rect_dim: 3,
            work_unit_size: 1024,
            bounds: SearchBounds {
                min_bx: -30_000_000,
                max_bx: 30_000_000,
                min_bz: -30_000_000,
                max_bz: 30_000_000,
            },
            workers: 0,
        }
    }
}

impl SearchConfig {
    /// Validate invariants that later stages assume.
    ///
    /// # Panics
    ///
    /// Panics if `min_rect_dim < 1` or `work_unit_size < 1`. An empty or
    /// inverted region is NOT an error; it yields an empty queue and a
    /// clean run.
    pub fn validate(&self) {
        assert!(self.min_rect_dim >= 1, "min_rect_dim must be >= 1");
        assert!(self.work_unit_size >= 1, "work_unit_size must be >= 1");
    }

    /// Block bounds converted to chunk bounds.
    ///
    /// Division truncates toward zero (plain `i64` division). Callers
    /// wanting an exactly symmetric region should pass block bounds that
    /// are multiples of 16.
    pub fn chunk_bounds(&self) -> ChunkBounds {
        ChunkBounds {
            min_cx: self.bounds.min_bx / CHUNK_BLOCKS,
            max_cx: self.bounds.max_bx / CHUNK_BLOCKS,
            min_cz: self.bounds.min_bz / CHUNK_BLOCKS,
            max_cz: self.bounds.max_bz / CHUNK_BLOCKS,
        }
    }

    /// Resolved worker count: explicit value, else detected cores, else 8.
    pub fn resolved_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        match num_cpus::get() {
            0 => 8,
            n => n,
        }
    }

    /// Convenience for tests: a config scoped to a chunk-coordinate region.
    pub fn with_chunk_region(mut self, min_cx: i64, max_cx: i64, min_cz: i64, max_cz: i64) -> Self {
        self.bounds = SearchBounds {
            min_bx: min_cx * CHUNK_BLOCKS,
            max_bx: max_cx * CHUNK_BLOCKS,
            min_bz: min_cz * CHUNK_BLOCKS,
            max_bz: max_cz * CHUNK_BLOCKS,
        };
        self
    }
}
