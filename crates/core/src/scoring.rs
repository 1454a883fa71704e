//! Scoring module - line clear points, level progression and gravity speed
//!
//! - Each cleared line is worth 100 points times the level in effect when the
//!   piece locked.
//! - Level starts at 1 and rises by one every 10 lines.
//! - Gravity starts at 1000ms per row and speeds up by 100ms per level, never
//!   faster than 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_BASE,
};

/// Points for clearing `lines` rows at `level`
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines.saturating_mul(LINE_CLEAR_BASE).saturating_mul(level)
}

/// Level for a running line total (1-based)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Get drop interval for a level (in milliseconds)
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(4, 1), 400);
        assert_eq!(line_clear_score(2, 3), 600);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn test_drop_interval_by_level() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(5), 600);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(500), 100);
    }

    #[test]
    fn test_drop_interval_level_zero_is_base() {
        assert_eq!(drop_interval_ms(0), BASE_DROP_MS);
    }

    #[test]
    fn test_drop_interval_is_monotonic() {
        let mut prev = u32::MAX;
        for level in 1..40 {
            let cur = drop_interval_ms(level);
            assert!(cur <= prev);
            prev = cur;
        }
    }
}
