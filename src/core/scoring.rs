//! Scoring module - line-clear points, level progression, gravity speed
//!
//! The rules are intentionally small: every cleared line is worth
//! `100 * level` points, the level is derived from total score (one level per
//! 1000 points), and gravity speeds up 100ms per level down to a 100ms floor.
//! There is no cap on score or level.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_STEP_PER_LEVEL_MS, POINTS_PER_LINE, SCORE_PER_LEVEL,
};

/// Points for clearing `lines` rows at once at the given level
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(level)
}

/// Level for a total score. Starts at 1 and never decreases within a game
/// because score is monotone.
pub fn level_for_score(score: u32) -> u32 {
    score / SCORE_PER_LEVEL + 1
}

/// Gravity interval for a level (milliseconds), floored at 100ms
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_PER_LEVEL_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_FLOOR_MS)
}
