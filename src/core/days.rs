//! Day range - the inclusive set of event days covered by a report

use std::fmt;
use std::str::FromStr;

use super::constants::{FIRST_DAY, LAST_DAY};

/// Inclusive, validated range of event days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    first: u32,
    last: u32,
}

/// Reasons a day range is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayRangeError {
    /// Not of the form `a..b` or `a`
    Syntax(String),
    /// Bounds outside the event calendar or reversed
    OutOfBounds { first: u32, last: u32 },
}

impl fmt::Display for DayRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayRangeError::Syntax(s) => {
                write!(f, "invalid day range {:?}, expected \"first..last\" or \"day\"", s)
            }
            DayRangeError::OutOfBounds { first, last } => write!(
                f,
                "day range {}..{} must satisfy {} <= first <= last <= {}",
                first, last, FIRST_DAY, LAST_DAY
            ),
        }
    }
}

impl std::error::Error for DayRangeError {}

impl DayRange {
    pub fn new(first: u32, last: u32) -> Result<Self, DayRangeError> {
        if first < FIRST_DAY || last > LAST_DAY || first > last {
            return Err(DayRangeError::OutOfBounds { first, last });
        }
        Ok(Self { first, last })
    }

    /// The whole event
    pub fn full() -> Self {
        Self {
            first: FIRST_DAY,
            last: LAST_DAY,
        }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn days(&self) -> impl Iterator<Item = u32> + Clone {
        self.first..=self.last
    }
}

impl Default for DayRange {
    fn default() -> Self {
        Self::full()
    }
}

impl FromStr for DayRange {
    type Err = DayRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || DayRangeError::Syntax(s.to_string());
        let parse = |part: &str| part.trim().parse::<u32>().map_err(|_| syntax());

        match s.split_once("..") {
            Some((first, last)) => Self::new(parse(first)?, parse(last)?),
            None => {
                let day = parse(s)?;
                Self::new(day, day)
            }
        }
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.first, self.last)
    }
}
