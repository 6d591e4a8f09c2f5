//! Formatting utilities for leaderboard time display.

use chrono::{FixedOffset, NaiveDate, TimeZone};

use super::constants::{BEST_TIME_MARKER, EVENT_MONTH, MAX_GAP_MINUTES};
use super::types::{BestTimes, Slot};

/// Seconds between a completion and the best completion of its slot.
///
/// Returns `None` when the slot has no best time.
pub fn compute_gap(star_ts: i64, slot: Slot, best: &BestTimes) -> Option<i64> {
    best.get(&slot).map(|&best_ts| star_ts - best_ts)
}

/// Format a gap in seconds as `+SSs` or `+MMm`.
///
/// The best-time holder (gap <= 0) gets `width` marker characters. A missing
/// gap, or one longer than 99 minutes, becomes `width` spaces.
pub fn format_gap(gap: Option<i64>, width: usize) -> String {
    let Some(secs) = gap else {
        return " ".repeat(width);
    };
    if secs <= 0 {
        return BEST_TIME_MARKER.to_string().repeat(width);
    }
    if secs < 60 {
        return format!("+{:02}s", secs);
    }
    let mins = secs / 60;
    if mins <= MAX_GAP_MINUTES {
        return format!("+{:02}m", mins);
    }
    " ".repeat(width)
}

/// Epoch seconds of local midnight starting an event day.
///
/// `utc_offset_hours` is the fixed offset of the event's time zone.
/// Returns `None` for dates or offsets that do not exist.
pub fn day_start(year: i32, day: u32, utc_offset_hours: i32) -> Option<i64> {
    let offset = FixedOffset::east_opt(utc_offset_hours.checked_mul(3600)?)?;
    let midnight = NaiveDate::from_ymd_opt(year, EVENT_MONTH, day)?.and_hms_opt(0, 0, 0)?;
    let local = offset.from_local_datetime(&midnight).single()?;
    Some(local.timestamp())
}

/// Format a best time as `M:SS` elapsed since the day started.
pub fn format_best_time(best_ts: i64, day_start: i64) -> String {
    let elapsed = best_ts - day_start;
    format!("{}:{:02}", elapsed / 60, elapsed % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Level;

    #[test]
    fn test_compute_gap() {
        let slot = Slot::new(4, Level::Two);
        let best: BestTimes = [(slot, 1000)].into_iter().collect();
        assert_eq!(compute_gap(1000, slot, &best), Some(0));
        assert_eq!(compute_gap(1045, slot, &best), Some(45));
        assert_eq!(compute_gap(1045, Slot::new(4, Level::One), &best), None);
    }

    #[test]
    fn test_format_gap_best_holder() {
        assert_eq!(format_gap(Some(0), 4), "****");
        assert_eq!(format_gap(Some(0), 0), "");
    }

    #[test]
    fn test_format_gap_seconds() {
        assert_eq!(format_gap(Some(45), 4), "+45s");
        assert_eq!(format_gap(Some(1), 4), "+01s");
        assert_eq!(format_gap(Some(59), 4), "+59s");
    }

    #[test]
    fn test_format_gap_minutes() {
        assert_eq!(format_gap(Some(60), 4), "+01m");
        assert_eq!(format_gap(Some(125), 4), "+02m");
        assert_eq!(format_gap(Some(99 * 60 + 59), 4), "+99m");
    }

    #[test]
    fn test_format_gap_beyond_minutes_is_blank() {
        assert_eq!(format_gap(Some(100 * 60), 4), "    ");
        assert_eq!(format_gap(Some(7200), 4), "    ");
    }

    #[test]
    fn test_format_gap_missing() {
        assert_eq!(format_gap(None, 4), "    ");
        assert_eq!(format_gap(None, 0), "");
    }

    #[test]
    fn test_format_gap_negative() {
        // Edge case: negative gap (shouldn't normally happen)
        assert_eq!(format_gap(Some(-5), 3), "***");
    }

    #[test]
    fn test_day_start_eastern_midnight() {
        // 2024-12-01 00:00 at UTC-5 is 05:00 UTC
        assert_eq!(day_start(2024, 1, -5), Some(1_733_029_200));
        assert_eq!(day_start(2024, 2, -5), Some(1_733_029_200 + 86_400));
    }

    #[test]
    fn test_day_start_invalid() {
        assert_eq!(day_start(2024, 32, -5), None);
        assert_eq!(day_start(2024, 1, 30), None);
    }

    #[test]
    fn test_format_best_time() {
        let start = 1_733_029_200;
        assert_eq!(format_best_time(start + 125, start), "2:05");
        assert_eq!(format_best_time(start + 3 * 3600 + 7, start), "180:07");
        assert_eq!(format_best_time(start, start), "0:00");
    }
}
