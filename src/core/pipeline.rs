//! Report pipeline - aggregate, rank, score
//!
//! Derived fields are never updated incrementally: every run first resets
//! them, then ranks and scores each slot of the day range in order. Running
//! the pipeline twice over the same registry yields the same result.

use tracing::debug;

use super::aggregate::merge_snapshots;
use super::constants::DEFAULT_UTC_OFFSET_HOURS;
use super::days::DayRange;
use super::ranking::{rank_slot, reset_derived};
use super::scoring::score_slot;
use super::types::{BestTimes, Level, Registry, Slot, Snapshot};

/// Settings the report is computed and rendered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Days to compute the report for
    pub days: DayRange,
    /// Event year, for day midnights
    pub year: i32,
    /// Fixed offset of the event's time zone
    pub utc_offset_hours: i32,
    /// Emit terminal escape sequences
    pub color: bool,
}

impl ReportOptions {
    pub fn new(year: i32) -> Self {
        Self {
            days: DayRange::full(),
            year,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            color: true,
        }
    }
}

/// Ranked and scored members with the best time of every slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Days the report was computed for, and the only ones rendered
    pub days: DayRange,
    pub members: Registry,
    pub best: BestTimes,
}

/// Reset, rank and score every slot of `days`.
pub fn compute(registry: &mut Registry, days: DayRange) -> BestTimes {
    reset_derived(registry);

    let mut best = BestTimes::new();
    for day in days.days() {
        for level in Level::ALL {
            let slot = Slot::new(day, level);
            if let Some(ts) = rank_slot(registry, slot) {
                best.insert(slot, ts);
            }
            score_slot(registry, slot);
        }
    }

    debug!(
        members = registry.len(),
        slots = best.len(),
        days = %days,
        "[pipeline] Scores computed"
    );
    best
}

/// Merge snapshots and compute the report for `days`.
pub fn build_report<I>(snapshots: I, days: DayRange) -> Report
where
    I: IntoIterator<Item = Snapshot>,
{
    let mut members = merge_snapshots(snapshots);
    let best = compute(&mut members, days);
    Report {
        days,
        members,
        best,
    }
}
