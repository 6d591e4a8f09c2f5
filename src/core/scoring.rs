//! Local score calculation
//!
//! Each ranked completion is worth `min(N, 100) - place + 1` points, floored
//! at zero, where N is the number of members in the registry.

use super::constants::SCORING_CAP;
use super::types::{Registry, Slot};

/// Points earned by a completion at `place` among `member_count` members.
pub fn contribution(place: u32, member_count: usize) -> u32 {
    let cap = member_count.min(SCORING_CAP) as u32;
    (cap + 1).saturating_sub(place)
}

/// Add the points of one ranked slot to every member's local score.
///
/// Completions without a place are skipped.
pub fn score_slot(registry: &mut Registry, slot: Slot) {
    let member_count = registry.len();
    for member in registry.values_mut() {
        if let Some(place) = member.completion(slot).and_then(|c| c.place) {
            member.local_score += contribution(place, member_count);
        }
    }
}
