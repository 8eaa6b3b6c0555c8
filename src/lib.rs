//! Parallel slime-chunk rectangle finder.
//!
//! Exhaustively searches a two-dimensional chunk lattice for axis-aligned
//! rectangles made entirely of slime chunks, for a fixed world seed.
//! Matches with both sides at least a configurable minimum are collected
//! into a deduplicated set ordered by area (descending), then center
//! distance from the origin (ascending).
//!
//! Pipeline, per worker:
//!
//! 1. Claim a tile from the distance-ordered [`queue`](crate::queue)
//!    (atomic fetch-add; nearest tiles first).
//! 2. Materialize a padded boolean grid via the batched
//!    [`slime`](crate::slime) predicate ([`tile`](crate::tile)).
//! 3. Enumerate qualifying rectangles with a histogram sweep
//!    ([`maxrect`](crate::maxrect)).
//! 4. Merge into the shared [`results`](crate::results) set under one
//!    mutex; padding overlap makes duplicates routine and the set identity
//!    absorbs them.
//!
//! A monitor thread prints a heartbeat and rewrites a stats snapshot file
//! every five seconds. Ctrl+C pauses: workers finish their current tile
//! and drain, leaving the snapshot file behind.
//!
//! The predicate is bit-exact against the legacy generator; see
//! [`slime`] for why every arithmetic width in it is load-bearing.

pub mod config;
pub mod maxrect;
pub mod queue;
pub mod rect;
pub mod results;
pub mod scheduler;
pub mod sink;
pub mod slime;
pub mod stats;
pub mod tile;

pub use config::{ChunkBounds, SearchBounds, SearchConfig};
pub use rect::Rectangle;
pub use results::ResultSet;
pub use scheduler::{run_search, MetricsSnapshot, MonitorConfig, SearchReport};
pub use slime::{is_slime_chunk, is_slime_chunk_x16};
