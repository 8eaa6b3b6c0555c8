//! Distance-ordered work queue.
//!
//! Built once before workers start, immutable afterwards. Consumption is a
//! single relaxed fetch-add on the claim index: the cheapest possible
//! shared-queue discipline, and sufficient because units are coarse (a tile
//! is millions of predicate evaluations). Units are sorted nearest-first so
//! interesting finds (close to the origin) surface early in a run that may
//! never finish.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::ChunkBounds;

/// One claimable tile: a half-open chunk-coordinate rectangle, at most
/// `work_unit_size` on a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkUnit {
    pub min_cx: i64,
    pub max_cx: i64,
    pub min_cz: i64,
    pub max_cz: i64,
}

impl WorkUnit {
    /// Chunk count of the unpadded unit (progress accounting).
    pub fn chunk_count(&self) -> i64 {
        (self.max_cx - self.min_cx) * (self.max_cz - self.min_cz)
    }

    /// Center in chunk coordinates, truncating midpoint.
    pub fn center(&self) -> (i64, i64) {
        (
            (self.min_cx + self.max_cx) / 2,
            (self.min_cz + self.max_cz) / 2,
        )
    }

    fn center_distance_squared(&self) -> i64 {
        let (cx, cz) = self.center();
        cx * cx + cz * cz
    }
}

/// The immutable tile list plus its claim cursor.
#[derive(Debug)]
pub struct WorkQueue {
    units: Vec<WorkUnit>,
    next: AtomicUsize,
}

impl WorkQueue {
    /// Tile `bounds` into units of at most `unit_size` per side, sorted by
    /// squared center distance from the origin, ascending.
    ///
    /// An empty or inverted region yields an empty queue. Tie order among
    /// equidistant units is unspecified; the result set's own ordering is
    /// what users observe.
    pub fn build(bounds: &ChunkBounds, unit_size: i64) -> Self {
        debug_assert!(unit_size >= 1);
        let mut units = Vec::new();

        let mut x = bounds.min_cx;
        while x < bounds.max_cx {
            let mut z = bounds.min_cz;
            while z < bounds.max_cz {
                units.push(WorkUnit {
                    min_cx: x,
                    max_cx: (x + unit_size).min(bounds.max_cx),
                    min_cz: z,
                    max_cz: (z + unit_size).min(bounds.max_cz),
                });
                z += unit_size;
            }
            x += unit_size;
        }

        units.sort_unstable_by_key(WorkUnit::center_distance_squared);

        Self {
            units,
            next: AtomicUsize::new(0),
        }
    }

    /// Claim the next unprocessed unit, if any.
    ///
    /// Claims are totally ordered by the fetch-add; which worker gets which
    /// unit is not. Once `None` is returned the queue is drained for good.
    pub fn claim(&self) -> Option<&WorkUnit> {
        let idx = self.next.fetch_add(1, Ordering::Relaxed);
        self.units.get(idx)
    }

    /// Units handed out so far, clamped to the queue length.
    ///
    /// Overshoot happens when several workers race past the end; clamping
    /// keeps progress arithmetic honest.
    pub fn claimed(&self) -> usize {
        self.next.load(Ordering::Relaxed).min(self.units.len())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
