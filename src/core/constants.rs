//! Event constants - day bounds, scoring cap, display markers
//!
//! All fixed numbers of the puzzle event that the report relies on.

use std::ops::RangeInclusive;

// =============================================================================
// EVENT CALENDAR
// =============================================================================

/// First day of the event
pub const FIRST_DAY: u32 = 1;

/// Last possible day of the event
pub const LAST_DAY: u32 = 25;

/// Every day a snapshot may contain
pub const EVENT_DAYS: RangeInclusive<u32> = FIRST_DAY..=LAST_DAY;

/// Calendar month the event runs in
pub const EVENT_MONTH: u32 = 12;

/// Offset of the event's reference time zone (UTC-5) in hours
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -5;

// =============================================================================
// SCORING
// =============================================================================

/// Only the first this-many finishers of a slot earn points
pub const SCORING_CAP: usize = 100;

// =============================================================================
// DISPLAY
// =============================================================================

/// Places at or below this value are emphasized
pub const HIGHLIGHT_PLACE_MAX: u32 = 10;

/// Gaps at or below this many seconds are emphasized
pub const HIGHLIGHT_GAP_MAX_SECS: i64 = 60;

/// Fills the gap column of the member holding the best time
pub const BEST_TIME_MARKER: char = '*';

/// Largest gap (in minutes) that still gets a token
pub const MAX_GAP_MINUTES: i64 = 99;

// =============================================================================
// NAME SANITIZING
// =============================================================================

/// NEGATIVE SQUARED LATIN CAPITAL LETTER A..Z
pub const NEGATIVE_SQUARED_LETTERS: RangeInclusive<u32> = 0x1F170..=0x1F189;

/// ZERO WIDTH JOINER
pub const ZERO_WIDTH_JOINER: u32 = 0x200D;

/// Symbol and emoji blocks dropped from display names
pub const DROPPED_SYMBOL_BLOCKS: [RangeInclusive<u32>; 5] = [
    // Arrows
    0x2190..=0x21FF,
    // Miscellaneous Symbols, Dingbats
    0x2600..=0x27BF,
    // CJK Symbols and Punctuation
    0x3000..=0x303F,
    // Miscellaneous Symbols and Pictographs, Emoticons
    0x1F300..=0x1F64F,
    // Transport and Map Symbols
    0x1F680..=0x1F6FF,
];
