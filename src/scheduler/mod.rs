//! Search orchestration.
//!
//! ```text
//!                 ┌────────────────────────────┐
//!                 │         run_search()       │
//!                 └──────────────┬─────────────┘
//!                                │ builds
//!              ┌─────────────────┼──────────────────┐
//!              ▼                 ▼                  ▼
//!        ┌──────────┐     ┌───────────┐      ┌──────────┐
//!        │ WorkQueue│     │ ResultSet │      │ Metrics  │
//!        │ (FAA idx)│     │ (1 mutex) │      │ (relaxed)│
//!        └────┬─────┘     └─────▲─────┘      └────▲─────┘
//!             │ claim           │ insert_batch    │
//!        ┌────┴──────────────────┴─────────────────┴────┐
//!        │   N workers: claim → scan_tile → find_rects  │
//!        └──────────────────────────────────────────────┘
//!                                + one monitor thread (5 s ticks)
//! ```
//!
//! Workers are plain OS threads, one per logical core. The only shared
//! mutable structure is the result set; everything else is either immutable
//! after construction (the queue) or a relaxed counter. Pause is
//! cooperative at tile granularity: an in-flight tile always runs to
//! completion, which bounds the drain time by one tile per worker.

pub mod metrics;
pub mod monitor;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;

use crate::config::{ChunkBounds, SearchConfig};
use crate::maxrect::find_rectangles;
use crate::queue::WorkQueue;
use crate::rect::{isqrt, Rectangle};
use crate::results::ResultSet;
use crate::tile::scan_tile;

pub use metrics::{MetricsSnapshot, SearchMetrics};
pub use monitor::MonitorConfig;

/// Everything a worker or the monitor touches, behind one `Arc`.
pub struct SearchShared {
    pub world_seed: i64,
    pub min_rect_dim: i64,
    pub chunk_bounds: ChunkBounds,
    pub queue: WorkQueue,
    pub metrics: SearchMetrics,
    pub results: ResultSet,
    pub pause: Arc<AtomicBool>,
}

impl SearchShared {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        Self::with_pause(config, Arc::new(AtomicBool::new(false)))
    }

    pub(crate) fn with_pause(config: &SearchConfig, pause: Arc<AtomicBool>) -> Self {
        let chunk_bounds = config.chunk_bounds();
        Self {
            world_seed: config.world_seed,
            min_rect_dim: config.min_rect_dim,
            chunk_bounds,
            queue: WorkQueue::build(&chunk_bounds, config.work_unit_size),
            metrics: SearchMetrics::new(),
            results: ResultSet::new(),
            pause,
        }
    }
}

/// Outcome of one run: the full ordered result set plus counters.
#[derive(Debug)]
pub struct SearchReport {
    /// Ordered rectangle list (reporting order).
    pub rectangles: Vec<Rectangle>,
    pub metrics: MetricsSnapshot,
    pub units_total: usize,
    pub units_completed: usize,
    /// Whether the run ended because the pause flag was raised.
    pub paused: bool,
    pub elapsed: Duration,
}

/// Run a complete search to drain or pause.
///
/// Spawns the worker pool and (optionally) the monitor, blocks until the
/// queue drains or `pause` is observed, and returns the merged report. The
/// queue is immutable once built; the same configuration always yields the
/// same result set regardless of worker count or interleaving.
///
/// # Panics
///
/// Panics if the configuration is invalid (see [`SearchConfig::validate`])
/// or if a worker thread panics.
pub fn run_search(
    config: &SearchConfig,
    pause: Arc<AtomicBool>,
    monitor_config: Option<MonitorConfig>,
) -> SearchReport {
    config.validate();
    let started = Instant::now();

    let shared = Arc::new(SearchShared::with_pause(config, pause));
    let workers = config.resolved_workers();

    // Monitor first so a slow queue drain still gets heartbeats. The sender
    // side lives here; dropping it is the shutdown signal.
    let (monitor_tx, monitor_rx) = bounded::<()>(0);
    let monitor_handle =
        monitor_config.map(|cfg| monitor::spawn_monitor(Arc::clone(&shared), cfg, monitor_rx));

    let handles: Vec<_> = (0..workers)
        .map(|worker_id| {
            let shared = Arc::clone(&shared);
            thread::Builder::new()
                .name(format!("slime-worker-{worker_id}"))
                .spawn(move || worker_loop(&shared))
                .expect("failed to spawn worker thread")
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    // Drained (or paused). Raise the flag either way so the monitor's view
    // is consistent, then release it.
    let paused = shared.pause.swap(true, Ordering::SeqCst);
    drop(monitor_tx);
    if let Some(handle) = monitor_handle {
        handle.join().expect("monitor thread panicked");
    }

    SearchReport {
        rectangles: shared.results.snapshot(),
        metrics: shared.metrics.snapshot(),
        units_total: shared.queue.len(),
        units_completed: shared.queue.claimed(),
        paused,
        elapsed: started.elapsed(),
    }
}

/// One worker: claim → materialize → enumerate → merge, until drained or
/// paused. The pause check sits between tiles only.
fn worker_loop(shared: &SearchShared) {
    let mut finds: Vec<Rectangle> = Vec::new();

    loop {
        if shared.pause.load(Ordering::Relaxed) {
            return;
        }
        let Some(unit) = shared.queue.claim() else {
            return;
        };

        match scan_tile(unit, &shared.chunk_bounds, shared.min_rect_dim, shared.world_seed) {
            Some(grid) => {
                find_rectangles(&grid, shared.min_rect_dim, &mut finds);
                shared.results.insert_batch(&mut finds);
                shared.metrics.record_tile_scanned();
            }
            None => shared.metrics.record_tile_skipped(),
        }

        // Progress counts the unpadded unit whether or not a grid was built.
        shared.metrics.add_chunks(unit.chunk_count());

        let (cx, cz) = unit.center();
        shared.metrics.raise_max_distance(isqrt(cx * cx + cz * cz));
    }
}
