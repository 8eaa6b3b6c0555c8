//! Rectangle enumeration over a boolean tile.
//!
//! Histogram-per-row sweep: for each row, each column carries the count of
//! consecutive `true` cells ending at that row; every run of positive
//! columns is swept left-to-right while tracking the running minimum
//! height. Each `(width, running-min)` pair meeting the minimum dimension
//! is reported with its bottom edge on the current row.
//!
//! This deliberately emits more than the strictly maximal rectangles:
//! every qualifying sub-rectangle encountered along a sweep is reported.
//! Overlapping padded tiles re-discover the same rectangles; both forms of
//! redundancy collapse in the result set because the rectangle identity is
//! canonical (absolute corner + extent, never tile-local).
//!
//! Worst case O(H·W²) per tile, which is fine at tile granularity; the
//! grids are small and almost always sparse.

use crate::rect::Rectangle;
use crate::tile::TileGrid;

/// Enumerate qualifying rectangles in `grid` into `out`.
///
/// `out` is appended to, not cleared; callers reuse one vector per worker
/// and drain it into the result set after each tile.
pub fn find_rectangles(grid: &TileGrid, min_dim: i64, out: &mut Vec<Rectangle>) {
    let w = grid.width as usize;
    if w == 0 || grid.height == 0 {
        return;
    }

    // Column histogram, rolled forward one row at a time; only the current
    // row's values are ever needed.
    let mut heights = vec![0i64; w];

    for i in 0..grid.height {
        for (j, h) in heights.iter_mut().enumerate() {
            *h = if grid.get(j as i64, i) { *h + 1 } else { 0 };
        }

        for j0 in 0..w {
            if heights[j0] == 0 {
                continue;
            }
            let mut min_h = heights[j0];

            for (j, &h) in heights.iter().enumerate().skip(j0) {
                if h == 0 {
                    break;
                }
                min_h = min_h.min(h);
                let width = (j - j0 + 1) as i64;
                if width >= min_dim && min_h >= min_dim {
                    out.push(Rectangle::new(
                        grid.origin_x + j0 as i64,
                        grid.origin_z + i - min_h + 1,
                        width,
                        min_h,
                    ));
                }
            }
        }
    }
}
