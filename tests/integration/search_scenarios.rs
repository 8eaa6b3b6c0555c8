//! Known-world scenarios: fixed seed, fixed regions, pinned expectations.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use slimescan_rs::{run_search, SearchConfig, SearchReport};

const SEED: i64 = 413563856;

fn run(config: &SearchConfig) -> SearchReport {
    run_search(config, Arc::new(AtomicBool::new(false)), None)
}

fn config(min_cx: i64, max_cx: i64, min_cz: i64, max_cz: i64) -> SearchConfig {
    SearchConfig {
        world_seed: SEED,
        workers: 4,
        ..SearchConfig::default()
    }
    .with_chunk_region(min_cx, max_cx, min_cz, max_cz)
}

#[test]
fn finds_the_known_3x3_block() {
    // Chunk region [1200,1600) x [8100,8500): exactly one qualifying
    // rectangle exists, the 3x3 at (1495, 8282).
    let report = run(&SearchConfig {
        work_unit_size: 256,
        ..config(1200, 1600, 8100, 8500)
    });

    assert_eq!(report.rectangles.len(), 1);
    let r = report.rectangles[0];
    assert_eq!((r.x, r.z, r.width, r.height), (1495, 8282, 3, 3));
    assert_eq!(r.area, 9);
    assert_eq!(report.metrics.chunks_processed, 400 * 400);
}

#[test]
fn single_chunk_region_min_dim_one() {
    let report = run(&SearchConfig {
        min_rect_dim: 1,
        ..config(1495, 1496, 8282, 8283)
    });
    assert_eq!(report.rectangles.len(), 1);
    assert_eq!(report.rectangles[0].area, 1);
}

#[test]
fn non_slime_region_is_empty_but_fully_counted() {
    // (0, 0) is not a slime chunk for this seed; the region still counts
    // toward progress.
    let report = run(&config(0, 1, 0, 1));
    assert!(report.rectangles.is_empty());
    assert_eq!(report.metrics.chunks_processed, 1);
    assert_eq!(report.units_completed, report.units_total);
    assert!(!report.paused);
}

#[test]
fn tile_size_does_not_change_the_result_set() {
    // The known 3x3 straddles a tile border when the unit size is 3
    // (borders fall at 1490+3k, cutting 1495..=1497 at 1496), so this also
    // exercises padding across borders.
    let base = config(1490, 1520, 8270, 8300);
    let mut reports = Vec::new();
    for unit_size in [1, 3, 16, 256, 1024] {
        let report = run(&SearchConfig {
            work_unit_size: unit_size,
            ..base
        });
        assert_eq!(
            report.metrics.chunks_processed,
            30 * 30,
            "unit size {unit_size} must still count each chunk once"
        );
        reports.push((unit_size, report));
    }

    let (_, first) = &reports[0];
    assert_eq!(first.rectangles.len(), 1);
    assert_eq!(
        (first.rectangles[0].x, first.rectangles[0].z),
        (1495, 8282)
    );
    for (unit_size, report) in &reports[1..] {
        assert_eq!(
            report.rectangles, first.rectangles,
            "unit size {unit_size} diverged"
        );
    }
}

#[test]
fn known_window_with_five_2x2_blocks() {
    // [0,256)^2 holds exactly five 2x2 all-slime blocks for this seed, in
    // this reporting order (equal areas, distance ascending).
    let report = run(&SearchConfig {
        min_rect_dim: 2,
        work_unit_size: 64,
        ..config(0, 256, 0, 256)
    });

    let corners: Vec<(i64, i64)> = report.rectangles.iter().map(|r| (r.x, r.z)).collect();
    assert_eq!(
        corners,
        vec![(82, 100), (169, 49), (32, 188), (150, 177), (252, 153)]
    );
    assert!(report.rectangles.iter().all(|r| r.area == 4));
}

#[test]
fn lowering_min_dim_yields_a_superset() {
    let strict = run(&SearchConfig {
        min_rect_dim: 3,
        ..config(1450, 1550, 8250, 8350)
    });
    let loose = run(&SearchConfig {
        min_rect_dim: 2,
        ..config(1450, 1550, 8250, 8350)
    });

    assert!(loose.rectangles.len() >= strict.rectangles.len());
    for r in &strict.rectangles {
        assert!(
            loose.rectangles.contains(r),
            "rect {r:?} lost when loosening min-dim"
        );
    }
}

#[test]
fn growing_bounds_yields_a_superset() {
    let small = run(&SearchConfig {
        min_rect_dim: 2,
        ..config(0, 128, 0, 128)
    });
    let large = run(&SearchConfig {
        min_rect_dim: 2,
        ..config(-64, 256, -64, 256)
    });

    for r in &small.rectangles {
        assert!(
            large.rectangles.contains(r),
            "rect {r:?} lost when growing bounds"
        );
    }
}

#[test]
fn every_reported_cell_satisfies_the_predicate() {
    let report = run(&SearchConfig {
        min_rect_dim: 2,
        ..config(0, 256, 0, 256)
    });
    assert!(!report.rectangles.is_empty());
    for r in &report.rectangles {
        for cx in r.x..r.x + r.width {
            for cz in r.z..r.z + r.height {
                assert!(
                    slimescan_rs::is_slime_chunk(cx, cz, SEED),
                    "non-slime cell ({cx}, {cz}) inside {r:?}"
                );
            }
        }
    }
}

#[test]
fn block_bounds_truncate_toward_zero() {
    // Blocks 19200..25600 x 129600..136000 == chunks 1200..1600 x 8100..8500.
    let by_blocks = SearchConfig {
        world_seed: SEED,
        workers: 4,
        work_unit_size: 256,
        bounds: slimescan_rs::SearchBounds {
            min_bx: 19200,
            max_bx: 25600,
            min_bz: 129600,
            max_bz: 136000,
        },
        ..SearchConfig::default()
    };
    let report = run(&by_blocks);
    assert_eq!(report.rectangles.len(), 1);
    assert_eq!((report.rectangles[0].x, report.rectangles[0].z), (1495, 8282));
}
