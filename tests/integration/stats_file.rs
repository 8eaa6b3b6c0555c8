//! Monitor snapshot-file behavior against a real run.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use slimescan_rs::sink::{NullSink, VecSink};
use slimescan_rs::{run_search, MonitorConfig, SearchConfig};

const SEED: i64 = 413563856;

#[test]
fn snapshot_file_holds_the_final_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.txt");

    let config = SearchConfig {
        world_seed: SEED,
        workers: 2,
        work_unit_size: 64,
        ..SearchConfig::default()
    }
    .with_chunk_region(1450, 1550, 8250, 8350);

    let sink = Arc::new(VecSink::new());
    let monitor = MonitorConfig {
        // Tick fast enough that even a quick run gets at least one rewrite.
        interval: Duration::from_millis(5),
        stats_path: Some(path.clone()),
        progress: sink.clone(),
    };

    let report = run_search(&config, Arc::new(AtomicBool::new(false)), Some(monitor));
    assert!(report
        .rectangles
        .iter()
        .any(|r| (r.x, r.z) == (1495, 8282)));

    // The monitor may or may not have ticked before the drain; rewrite
    // cadence is timing-dependent. When it did, the file must carry the
    // bordered block and parse as the fixed-width table.
    if path.exists() {
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("CURRENT STATISTICS"));
        assert!(text.contains("Chunks processed:"));
    }
    if !sink.is_empty() {
        let line = String::from_utf8(sink.take()).unwrap();
        assert!(line.contains("[Progress]"));
        assert!(line.contains("units)"));
    }
}

#[test]
fn slow_run_gets_periodic_rewrites() {
    // A bigger region with tiny tiles guarantees the run outlives several
    // monitor intervals.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.txt");

    let config = SearchConfig {
        world_seed: SEED,
        workers: 1,
        work_unit_size: 8,
        min_rect_dim: 2,
        ..SearchConfig::default()
    }
    .with_chunk_region(0, 512, 0, 512);

    let monitor = MonitorConfig {
        interval: Duration::from_millis(1),
        stats_path: Some(path.clone()),
        progress: Arc::new(NullSink),
    };

    let report = run_search(&config, Arc::new(AtomicBool::new(false)), Some(monitor));
    assert_eq!(report.metrics.chunks_processed, 512 * 512);

    let text = std::fs::read_to_string(&path).expect("monitor must have written the snapshot");
    assert!(text.contains("CURRENT STATISTICS"));
    // Final content is a valid stats block even though it raced the drain.
    assert!(text.trim_end().ends_with("========================================"));
}
