//! Stats report formatting.
//!
//! One fixed-width text layout shared by the periodic snapshot file and
//! the final stdout report, so the two stay trivially diffable.

use std::io::{self, Write};

use crate::rect::Rectangle;
use crate::scheduler::metrics::MetricsSnapshot;

const RULE: &str = "========================================";

/// Write the full stats block: counters plus the sorted rectangle table.
///
/// `rects` must already be in reporting order (a `ResultSet::snapshot()` is).
pub fn write_stats(
    w: &mut dyn Write,
    snap: &MetricsSnapshot,
    rects: &[Rectangle],
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{RULE}")?;
    writeln!(w, "CURRENT STATISTICS")?;
    writeln!(w, "{RULE}")?;
    writeln!(w, "Chunks processed: {}", snap.chunks_processed)?;
    writeln!(w, "Max distance: {} chunks", snap.max_distance)?;
    writeln!(w, "Rectangles found: {}", rects.len())?;
    writeln!(w)?;

    if !rects.is_empty() {
        writeln!(w, "All rectangles (sorted by size, then distance from spawn):")?;
        writeln!(
            w,
            "{:>12}{:>10}{:>10}{:>12}{:>12}{:>14}{:>14}",
            "Area", "Width", "Height", "Block X", "Block Z", "Euclidean", "Manhattan"
        )?;
        writeln!(w, "{}", "-".repeat(84))?;

        for rect in rects {
            let (bx, bz) = rect.block_corner();
            writeln!(
                w,
                "{:>12}{:>10}{:>10}{:>12}{:>12}{:>14}{:>14}",
                rect.area,
                rect.width,
                rect.height,
                bx,
                bz,
                rect.euclidean_blocks(),
                rect.manhattan_blocks()
            )?;
        }
    }
    writeln!(w, "{RULE}")?;
    writeln!(w)?;
    Ok(())
}

/// Format the one-line progress heartbeat into `buf` (cleared first).
///
/// Carriage-return terminated with trailing pad so a shrinking line never
/// leaves stale characters on screen.
pub fn format_progress(buf: &mut Vec<u8>, completed: usize, total: usize, snap: &MetricsSnapshot, found: usize) {
    buf.clear();
    let percentage = if total > 0 {
        100.0 * completed as f64 / total as f64
    } else {
        0.0
    };
    write!(
        buf,
        "[Progress] {percentage:.2}% ({completed}/{total} units) | Chunks: {} | Distance: {} | Found: {found}    \r",
        snap.chunks_processed, snap.max_distance
    )
    .expect("write to Vec<u8> cannot fail");
}
