//! Core types - decoded snapshots and the member registry
//!
//! These types mirror the leaderboard JSON document. The nested
//! `completion_day_level` map is validated while decoding and turned into
//! a map keyed by [`Slot`], so nothing downstream does string lookups.

use std::collections::BTreeMap;
use std::fmt;

use num_enum::TryFromPrimitive;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::constants::EVENT_DAYS;

// =============================================================================
// SLOT
// =============================================================================

/// Puzzle level within a day
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive)]
pub enum Level {
    One = 1,
    Two = 2,
}

impl Level {
    /// Both levels, in display order
    pub const ALL: [Level; 2] = [Level::One, Level::Two];

    /// Parse a level key such as `"1"`
    pub fn parse_key(key: &str) -> Option<Self> {
        let raw = key.parse::<u8>().ok()?;
        Self::try_from(raw).ok()
    }
}

/// A (day, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub day: u32,
    pub level: Level,
}

impl Slot {
    pub fn new(day: u32, level: Level) -> Self {
        Self { day, level }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} level {}", self.day, self.level as u8)
    }
}

// =============================================================================
// SNAPSHOT RECORDS
// =============================================================================

/// One solved puzzle level
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Completion {
    #[serde(rename = "get_star_ts")]
    pub star_ts: i64,
    pub star_index: u64,
    /// Competition-style place within the slot, set by the ranker
    #[serde(skip)]
    pub place: Option<u32>,
}

impl Completion {
    pub fn new(star_ts: i64, star_index: u64) -> Self {
        Self {
            star_ts,
            star_index,
            place: None,
        }
    }
}

/// A leaderboard member as found in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    /// Recomputed on every run; the decoded value is discarded
    pub local_score: u32,
    pub global_score: u32,
    pub stars: u32,
    pub last_star_ts: i64,
    #[serde(
        rename = "completion_day_level",
        deserialize_with = "deserialize_completions"
    )]
    pub completions: BTreeMap<Slot, Completion>,
}

impl Member {
    /// Completion for a slot, if the member solved it
    pub fn completion(&self, slot: Slot) -> Option<&Completion> {
        self.completions.get(&slot)
    }

    pub fn has_completions(&self) -> bool {
        !self.completions.is_empty()
    }
}

/// One decoded leaderboard capture
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Snapshot {
    pub members: BTreeMap<u64, Member>,
    pub owner_id: u64,
    pub event: String,
    #[serde(default)]
    pub day1_ts: Option<i64>,
}

/// Members merged from every snapshot, keyed by member id
pub type Registry = BTreeMap<u64, Member>;

/// Fastest completion timestamp per slot
pub type BestTimes = BTreeMap<Slot, i64>;

// =============================================================================
// COMPLETION MAP DECODING
// =============================================================================

fn deserialize_completions<'de, D>(deserializer: D) -> Result<BTreeMap<Slot, Completion>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, BTreeMap<String, Completion>> = BTreeMap::deserialize(deserializer)?;

    let mut completions = BTreeMap::new();
    for (day_key, levels) in raw {
        let day = day_key
            .parse::<u32>()
            .ok()
            .filter(|day| EVENT_DAYS.contains(day))
            .ok_or_else(|| D::Error::custom(format!("invalid day key {day_key:?}")))?;
        for (level_key, completion) in levels {
            let level = Level::parse_key(&level_key)
                .ok_or_else(|| D::Error::custom(format!("invalid level key {level_key:?}")))?;
            completions.insert(Slot::new(day, level), completion);
        }
    }
    Ok(completions)
}
