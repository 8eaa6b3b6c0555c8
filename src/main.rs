//! Command-line front end.
//!
//! Hand-rolled flag parsing (no clap dependency) to keep the binary small:
//! every flag is `--name=value`, unknown flags exit 2 with usage. SIGINT
//! raises the pause flag; workers drain at tile granularity and the final
//! stats block is printed on the way out.

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use slimescan_rs::sink::{OutputSink, StdoutSink};
use slimescan_rs::stats::write_stats;
use slimescan_rs::{run_search, slime, MonitorConfig, SearchBounds, SearchConfig};

/// The run's pause flag, published for the SIGINT handler.
static PAUSE_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

extern "C" fn on_sigint(_sig: libc::c_int) {
    // Only async-signal-safe work here: an atomic load and an atomic store.
    if let Some(flag) = PAUSE_FLAG.get() {
        flag.store(true, Ordering::SeqCst);
    }
}

fn print_usage(exe: &str) {
    eprintln!(
        "usage: {exe} [--seed=N] [--min-dim=N] [--unit-size=N] \
         [--bounds=MINX,MAXX,MINZ,MAXZ] [--workers=N] [--stats-file=PATH]"
    );
    eprintln!();
    eprintln!("  --seed=N          world seed (default 413563856)");
    eprintln!("  --min-dim=N       minimum rectangle width AND height (default 3)");
    eprintln!("  --unit-size=N     chunks per work-unit side (default 1024)");
    eprintln!("  --bounds=...      search bounds in blocks, half-open (default ±30000000)");
    eprintln!("  --workers=N       worker threads (default: one per logical core)");
    eprintln!("  --stats-file=PATH snapshot file (default slimechunkfinder.txt)");
}

fn parse_i64(flag: &str, value: &str) -> i64 {
    value.parse().unwrap_or_else(|_| {
        eprintln!("error: {flag} expects an integer, got '{value}'");
        process::exit(2);
    })
}

fn parse_args() -> (SearchConfig, PathBuf) {
    let mut args = std::env::args();
    let exe = args.next().unwrap_or_else(|| "slimescan-rs".into());

    let mut config = SearchConfig::default();
    let mut stats_path = PathBuf::from("slimechunkfinder.txt");

    for arg in args {
        if let Some(rest) = arg.strip_prefix("--seed=") {
            config.world_seed = parse_i64("--seed", rest);
        } else if let Some(rest) = arg.strip_prefix("--min-dim=") {
            config.min_rect_dim = parse_i64("--min-dim", rest);
            if config.min_rect_dim < 1 {
                eprintln!("error: --min-dim must be >= 1");
                process::exit(2);
            }
        } else if let Some(rest) = arg.strip_prefix("--unit-size=") {
            config.work_unit_size = parse_i64("--unit-size", rest);
            if config.work_unit_size < 1 {
                eprintln!("error: --unit-size must be >= 1");
                process::exit(2);
            }
        } else if let Some(rest) = arg.strip_prefix("--bounds=") {
            let parts: Vec<&str> = rest.split(',').collect();
            if parts.len() != 4 {
                eprintln!("error: --bounds expects MINX,MAXX,MINZ,MAXZ");
                process::exit(2);
            }
            config.bounds = SearchBounds {
                min_bx: parse_i64("--bounds", parts[0]),
                max_bx: parse_i64("--bounds", parts[1]),
                min_bz: parse_i64("--bounds", parts[2]),
                max_bz: parse_i64("--bounds", parts[3]),
            };
        } else if let Some(rest) = arg.strip_prefix("--workers=") {
            config.workers = parse_i64("--workers", rest).max(0) as usize;
        } else if let Some(rest) = arg.strip_prefix("--stats-file=") {
            stats_path = PathBuf::from(rest);
        } else if arg == "--help" || arg == "-h" {
            print_usage(&exe);
            process::exit(0);
        } else {
            eprintln!("unknown flag: {arg}");
            eprintln!();
            print_usage(&exe);
            process::exit(2);
        }
    }

    (config, stats_path)
}

fn main() {
    let (config, stats_path) = parse_args();
    config.validate();

    let pause = Arc::new(AtomicBool::new(false));
    PAUSE_FLAG
        .set(Arc::clone(&pause))
        .expect("pause flag published twice");
    // SAFETY: the handler only touches the published atomic.
    unsafe {
        libc::signal(libc::SIGINT, on_sigint as libc::sighandler_t);
    }

    let cb = config.chunk_bounds();
    println!("Slime Chunk Rectangle Finder");
    println!("============================");
    println!("World Seed: {}", config.world_seed);
    println!("Workers: {}", config.resolved_workers());
    println!(
        "Search Bounds (blocks): X[{} to {}] Z[{} to {}]",
        config.bounds.min_bx, config.bounds.max_bx, config.bounds.min_bz, config.bounds.max_bz
    );
    println!(
        "Search Bounds (chunks): X[{} to {}] Z[{} to {}]",
        cb.min_cx, cb.max_cx, cb.min_cz, cb.max_cz
    );
    println!("Work Unit Size: {} chunks", config.work_unit_size);
    println!(
        "Min Rectangle Dimension: {}x{}",
        config.min_rect_dim, config.min_rect_dim
    );
    println!("Predicate backend: {}", slime::batch_backend());
    println!("Press Ctrl+C to pause and view stats");
    println!();

    let monitor = MonitorConfig {
        interval: Duration::from_secs(5),
        stats_path: Some(stats_path),
        progress: Arc::new(StdoutSink::new()),
    };

    let report = run_search(&config, pause, Some(monitor));

    // Final stats block on stdout, after the heartbeat line.
    let mut out = Vec::with_capacity(4096);
    write_stats(&mut out, &report.metrics, &report.rectangles)
        .expect("write to Vec<u8> cannot fail");
    let sink = StdoutSink::new();
    sink.write_all(&out);
    sink.flush();

    let secs = report.elapsed.as_secs_f64();
    if report.paused {
        println!(
            "Paused after {}/{} units.",
            report.units_completed, report.units_total
        );
    }
    println!("Total time: {:.3} seconds", secs);
    if secs > 0.0 {
        println!(
            "Throughput: {:.0} chunks/sec",
            report.metrics.chunks_processed as f64 / secs
        );
    }
}
