//! Tiling must be unobservable: any tile size produces the same result set
//! as scanning the region as one tile, because padding lets every rectangle
//! be seen whole by some tile and the set identity collapses duplicates.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use proptest::prelude::*;

use slimescan_rs::{run_search, Rectangle, SearchConfig};

const SEED: i64 = 413563856;

fn run(region: (i64, i64, i64, i64), min_dim: i64, unit_size: i64) -> Vec<Rectangle> {
    let config = SearchConfig {
        world_seed: SEED,
        min_rect_dim: min_dim,
        work_unit_size: unit_size,
        workers: 2,
        ..SearchConfig::default()
    }
    .with_chunk_region(region.0, region.1, region.2, region.3);
    run_search(&config, Arc::new(AtomicBool::new(false)), None).rectangles
}

proptest! {
    // Each case runs several full searches; keep the case count modest.
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn any_tile_size_matches_the_single_tile_run(
        origin_x in -200i64..200,
        origin_z in -200i64..200,
        width in 4i64..40,
        height in 4i64..40,
        min_dim in 1i64..4,
        unit_size in 1i64..24,
    ) {
        let region = (origin_x, origin_x + width, origin_z, origin_z + height);
        let tiled = run(region, min_dim, unit_size);
        let whole = run(region, min_dim, 1024);
        prop_assert_eq!(tiled, whole, "unit size {} diverged", unit_size);
    }

    #[test]
    fn shrinking_min_dim_never_loses_rectangles(
        origin_x in -200i64..200,
        origin_z in -200i64..200,
        side in 8i64..48,
        min_dim in 2i64..5,
    ) {
        let region = (origin_x, origin_x + side, origin_z, origin_z + side);
        let strict = run(region, min_dim, 16);
        let loose = run(region, min_dim - 1, 16);
        for r in &strict {
            prop_assert!(loose.contains(r), "lost {:?} when shrinking min_dim", r);
        }
    }
}
