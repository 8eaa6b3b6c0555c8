//! Shared result set.
//!
//! The one structure mutated from every worker. A single mutex over an
//! ordered set keeps insertion atomic and deduplication free: tiles overlap
//! by design (padding), so the same rectangle routinely arrives from two
//! workers, and the set identity absorbs it.
//!
//! Workers batch their per-tile finds and take the lock once per tile, not
//! once per rectangle, the same "format locally, lock for the touch"
//! discipline the output sinks use.

use std::collections::BTreeSet;
use std::sync::Mutex;

use crate::rect::Rectangle;

/// Deduplicated, totally-ordered set of found rectangles.
///
/// Grows monotonically; there is no removal. Iteration order (via
/// [`snapshot`](Self::snapshot)) is the reporting order: area descending,
/// then center distance ascending, then coordinates.
#[derive(Debug, Default)]
pub struct ResultSet {
    inner: Mutex<BTreeSet<Rectangle>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one rectangle. Idempotent under the rectangle identity.
    pub fn insert(&self, rect: Rectangle) {
        self.inner
            .lock()
            .expect("result set mutex poisoned")
            .insert(rect);
    }

    /// Drain `batch` into the set under a single lock acquisition.
    pub fn insert_batch(&self, batch: &mut Vec<Rectangle>) {
        if batch.is_empty() {
            return;
        }
        let mut set = self.inner.lock().expect("result set mutex poisoned");
        for rect in batch.drain(..) {
            set.insert(rect);
        }
    }

    /// Ordered copy of the current contents.
    ///
    /// Safe to call while workers are inserting; the copy is a consistent
    /// point-in-time snapshot.
    pub fn snapshot(&self) -> Vec<Rectangle> {
        self.inner
            .lock()
            .expect("result set mutex poisoned")
            .iter()
            .copied()
            .collect()
    }

    /// Current number of distinct rectangles.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("result set mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
