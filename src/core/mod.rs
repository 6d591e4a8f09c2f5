//! Core module - snapshot model and the report pipeline
//!
//! Nothing in here touches the filesystem or global state; everything
//! is driven by decoded snapshots and an explicit [`ReportOptions`].

pub mod aggregate;
pub mod constants;
pub mod days;
pub mod format;
pub mod names;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod style;
pub mod table;
pub mod types;

pub use days::{DayRange, DayRangeError};
pub use format::{compute_gap, format_gap};
pub use names::display_name;
pub use pipeline::{build_report, compute, Report, ReportOptions};
pub use table::render;
pub use types::{BestTimes, Completion, Level, Member, Registry, Slot, Snapshot};
