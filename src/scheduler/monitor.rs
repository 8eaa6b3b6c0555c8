//! Progress monitor.
//!
//! One thread, two outputs per tick: a single-line heartbeat on the
//! progress sink (carriage-return overwrite) and a full rewrite of the
//! stats snapshot file. The tick doubles as the shutdown wait: the
//! coordinator drops its end of the channel and the next `recv_timeout`
//! returns immediately instead of sleeping out the interval.
//!
//! Snapshot-file creation errors are dropped on purpose: the file is a
//! convenience view and an unwritable path must not take down a week-long
//! search. A tick that cannot open the file simply skips the rewrite.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::sink::{FileSink, OutputSink, StdoutSink};
use crate::stats::{format_progress, write_stats};

use super::SearchShared;

/// Monitor behavior for one run.
#[derive(Clone)]
pub struct MonitorConfig {
    /// Tick interval. 5 seconds in production; tests shrink it.
    pub interval: Duration,
    /// Snapshot file, rewritten (truncated) every tick. `None` disables it.
    pub stats_path: Option<PathBuf>,
    /// Where the heartbeat line goes.
    pub progress: Arc<dyn OutputSink>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            stats_path: Some(PathBuf::from("slimechunkfinder.txt")),
            progress: Arc::new(StdoutSink::new()),
        }
    }
}

/// Spawn the monitor thread. It exits when `shutdown` disconnects (or
/// receives), emitting nothing further.
pub(super) fn spawn_monitor(
    shared: Arc<SearchShared>,
    config: MonitorConfig,
    shutdown: Receiver<()>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("slime-monitor".into())
        .spawn(move || {
            let mut line_buf = Vec::with_capacity(128);
            let mut stats_buf = Vec::with_capacity(4096);
            loop {
                match shutdown.recv_timeout(config.interval) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                    Err(RecvTimeoutError::Timeout) => {}
                }

                let snap = shared.metrics.snapshot();
                let found = shared.results.len();
                format_progress(
                    &mut line_buf,
                    shared.queue.claimed(),
                    shared.queue.len(),
                    &snap,
                    found,
                );
                config.progress.write_all(&line_buf);
                config.progress.flush();

                if let Some(path) = &config.stats_path {
                    let rects = shared.results.snapshot();
                    stats_buf.clear();
                    write_stats(&mut stats_buf, &snap, &rects)
                        .expect("write to Vec<u8> cannot fail");
                    // A fresh sink per tick truncates the file; an
                    // unwritable path skips the rewrite.
                    if let Ok(sink) = FileSink::create(path) {
                        sink.write_all(&stats_buf);
                        sink.flush();
                    }
                }
            }
        })
        .expect("failed to spawn monitor thread")
}
