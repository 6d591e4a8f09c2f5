//! Completion ranking - competition-style places per slot
//!
//! Completions of a slot are ordered by timestamp. Members sharing an
//! identical timestamp all get the place of the first member of that
//! group ("1, 2, 2, 4"), not dense places ("1, 2, 2, 3").

use super::types::{Registry, Slot};

/// Clear every derived field so a run always starts from zero.
pub fn reset_derived(registry: &mut Registry) {
    for member in registry.values_mut() {
        member.local_score = 0;
        for completion in member.completions.values_mut() {
            completion.place = None;
        }
    }
}

/// Competition places for timestamps already sorted ascending.
pub fn competition_places(sorted_ts: &[i64]) -> Vec<u32> {
    let mut last_ts = 0;
    let mut place = 0;
    sorted_ts
        .iter()
        .zip(1u32..)
        .map(|(&ts, position)| {
            if ts > last_ts {
                last_ts = ts;
                place = position;
            }
            place
        })
        .collect()
}

/// Assign places for one slot and return its best (minimum) timestamp.
///
/// Returns `None` when nobody completed the slot.
pub fn rank_slot(registry: &mut Registry, slot: Slot) -> Option<i64> {
    let mut order: Vec<(u64, i64)> = registry
        .iter()
        .filter_map(|(&id, member)| member.completion(slot).map(|c| (id, c.star_ts)))
        .collect();
    // Stable: exact ties keep registry order
    order.sort_by_key(|&(_, ts)| ts);

    let timestamps: Vec<i64> = order.iter().map(|&(_, ts)| ts).collect();
    let places = competition_places(&timestamps);

    for (&(id, _), place) in order.iter().zip(places) {
        if let Some(completion) = registry
            .get_mut(&id)
            .and_then(|member| member.completions.get_mut(&slot))
        {
            completion.place = Some(place);
        }
    }

    timestamps.first().copied()
}
