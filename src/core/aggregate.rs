//! Member aggregation - merges snapshots into one registry

use tracing::debug;

use super::types::{Registry, Snapshot};

/// Merge snapshots into a single registry.
///
/// Members without any completion are left out. When the same id appears
/// in several snapshots, the record from the later snapshot replaces the
/// earlier one entirely.
pub fn merge_snapshots<I>(snapshots: I) -> Registry
where
    I: IntoIterator<Item = Snapshot>,
{
    let mut registry = Registry::new();
    for snapshot in snapshots {
        let before = registry.len();
        let total = snapshot.members.len();
        registry.extend(
            snapshot
                .members
                .into_iter()
                .filter(|(_, member)| member.has_completions()),
        );
        debug!(
            event = %snapshot.event,
            owner_id = snapshot.owner_id,
            members = total,
            added = registry.len() - before,
            "[aggregate] Merged snapshot"
        );
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Completion, Level, Member, Slot};
    use std::collections::BTreeMap;

    fn member(id: u64, name: &str, global_score: u32, solved: &[(u32, Level, i64)]) -> Member {
        Member {
            id,
            name: Some(name.to_string()),
            local_score: 0,
            global_score,
            stars: solved.len() as u32,
            last_star_ts: solved.iter().map(|&(_, _, ts)| ts).max().unwrap_or(0),
            completions: solved
                .iter()
                .map(|&(day, level, ts)| (Slot::new(day, level), Completion::new(ts, 0)))
                .collect(),
        }
    }

    fn snapshot(members: Vec<Member>) -> Snapshot {
        Snapshot {
            members: members.into_iter().map(|m| (m.id, m)).collect(),
            owner_id: 1,
            event: "2024".to_string(),
            day1_ts: None,
        }
    }

    #[test]
    fn test_merge_skips_members_without_completions() {
        let registry = merge_snapshots([snapshot(vec![
            member(1, "solver", 0, &[(1, Level::One, 100)]),
            member(2, "idle", 0, &[]),
        ])]);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains_key(&1));
    }

    #[test]
    fn test_merge_later_snapshot_replaces_whole_record() {
        let first = member(1, "old name", 12, &[(1, Level::One, 100), (1, Level::Two, 200)]);
        let second = member(1, "new name", 0, &[(2, Level::One, 300)]);

        let registry = merge_snapshots([snapshot(vec![first]), snapshot(vec![second.clone()])]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry[&1], second);
        // No field union: day 1 completions from the first snapshot are gone
        assert!(registry[&1].completion(Slot::new(1, Level::One)).is_none());
    }

    #[test]
    fn test_merge_union_of_distinct_members() {
        let registry = merge_snapshots([
            snapshot(vec![member(1, "a", 0, &[(1, Level::One, 100)])]),
            snapshot(vec![member(2, "b", 0, &[(1, Level::One, 110)])]),
        ]);
        assert_eq!(registry.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_merge_empty_input() {
        let registry = merge_snapshots(Vec::new());
        assert!(registry.is_empty());
        assert_eq!(registry, BTreeMap::new());
    }
}
