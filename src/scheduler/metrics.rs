//! Run-wide counters.
//!
//! Two tiers, following the crate's perf-stats convention:
//!
//! - **Core counters** (`chunks_processed`, `max_distance`) are always
//!   live. They drive the progress line and the stats file, so release
//!   builds must report non-zero values.
//! - **Perf counters** (tile outcomes) record only under
//!   `all(feature = "perf-stats", debug_assertions)`; otherwise their
//!   update paths compile to nothing and snapshots stay zeroed.
//!
//! All updates are relaxed: readers (the monitor, the final report) want a
//! monotonically non-decreasing approximation, not a linearizable view.
//! Cache-line padding keeps the two hot counters off each other's line.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use crossbeam_utils::CachePadded;

/// Shared counters for one search run.
#[derive(Debug, Default)]
pub struct SearchMetrics {
    /// Chunks scanned, counting only unpadded work-unit cells.
    chunks_processed: CachePadded<AtomicI64>,
    /// High-water mark of `floor(sqrt(cx² + cz²))` over completed unit
    /// centers, in chunk coordinates.
    max_distance: CachePadded<AtomicI64>,

    /// Tiles that produced a grid (perf-stats only).
    tiles_scanned: CachePadded<AtomicU64>,
    /// Tiles skipped because the clamped grid was degenerate (perf-stats only).
    tiles_skipped: CachePadded<AtomicU64>,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `count` scanned chunks.
    #[inline]
    pub fn add_chunks(&self, count: i64) {
        self.chunks_processed.fetch_add(count, Ordering::Relaxed);
    }

    /// Raise the max-distance high-water mark to `dist` if greater.
    ///
    /// Compare-exchange loop rather than an unconditional store so
    /// concurrent completions of out-of-order units can never regress the
    /// value.
    #[inline]
    pub fn raise_max_distance(&self, dist: i64) {
        let mut current = self.max_distance.load(Ordering::Relaxed);
        while dist > current {
            match self.max_distance.compare_exchange_weak(
                current,
                dist,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => current = observed,
            }
        }
    }

    #[inline(always)]
    pub fn record_tile_scanned(&self) {
        #[cfg(all(feature = "perf-stats", debug_assertions))]
        {
            self.tiles_scanned.fetch_add(1, Ordering::Relaxed);
        }
        #[cfg(not(all(feature = "perf-stats", debug_assertions)))]
        {
            let _ = self;
        }
    }

    #[inline(always)]
    pub fn record_tile_skipped(&self) {
        #[cfg(all(feature = "perf-stats", debug_assertions))]
        {
            self.tiles_skipped.fetch_add(1, Ordering::Relaxed);
        }
        #[cfg(not(all(feature = "perf-stats", debug_assertions)))]
        {
            let _ = self;
        }
    }

    /// Point-in-time copy for readers.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            chunks_processed: self.chunks_processed.load(Ordering::Relaxed),
            max_distance: self.max_distance.load(Ordering::Relaxed),
            tiles_scanned: self.tiles_scanned.load(Ordering::Relaxed),
            tiles_skipped: self.tiles_skipped.load(Ordering::Relaxed),
        }
    }
}

/// Copied counter values; what the monitor and final report consume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub chunks_processed: i64,
    pub max_distance: i64,
    pub tiles_scanned: u64,
    pub tiles_skipped: u64,
}
