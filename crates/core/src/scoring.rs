//! Scoring module - classic line-clear rules and gravity pacing
//!
//! Points for simultaneous clears follow the classic table
//! `[0, 40, 100, 300, 1200]` scaled by `level + 1`, so scoring is monotonic
//! in both rows-cleared-at-once and level. Level advances every ten cleared
//! lines, and the gravity interval shrinks with level down to a fixed floor.
//! The constants live in `blockfall-types`; the session treats this module
//! as the policy table.

use blockfall_types::{DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows at once at the given level.
/// Zero for no clear; a 4-cell piece cannot clear more than 4 rows.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * (level + 1)
}

/// Points for dropped cells: soft drop +1 per cell, hard drop +2 per cell
pub fn drop_points(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * 2
    } else {
        cells
    }
}

/// Level for a total cleared-line count
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level (milliseconds per forced row)
pub fn gravity_interval_ms(level: u32) -> u32 {
    DROP_INTERVALS
        .get(level as usize)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}
