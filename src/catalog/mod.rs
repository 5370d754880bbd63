use crate::models::{Entry, EntryDraft, DAYS};
use std::collections::BTreeSet;

/// One door on the grid. `entry` is `None` when no entry binds to the day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DoorSlot {
    pub day: i64,
    pub entry: Option<Entry>,
}

impl DoorSlot {
    pub fn is_open(&self) -> bool {
        self.entry.is_some()
    }
}

/// Built-in entries merged with user entries.
///
/// Binding rule for a day: the first user entry with that id, otherwise the
/// first built-in entry with that id. Colliding entries are all kept in
/// [`Catalog::merged`]; precedence only decides what a door shows.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Catalog<'a> {
    builtin: &'a [Entry],
    user: &'a [Entry],
}

impl<'a> Catalog<'a> {
    pub fn new(builtin: &'a [Entry], user: &'a [Entry]) -> Self {
        Self { builtin, user }
    }

    /// Built-in entries first, then user entries, in list order.
    pub fn merged(&self) -> Vec<Entry> {
        self.builtin.iter().chain(self.user.iter()).cloned().collect()
    }

    pub fn entry_for_day(&self, day: i64) -> Option<&'a Entry> {
        if !(1..=DAYS).contains(&day) {
            return None;
        }

        self.user
            .iter()
            .find(|e| e.id == day)
            .or_else(|| self.builtin.iter().find(|e| e.id == day))
    }

    pub fn slots(&self) -> Vec<DoorSlot> {
        (1..=DAYS)
            .map(|day| DoorSlot {
                day,
                entry: self.entry_for_day(day).cloned(),
            })
            .collect()
    }

    pub fn occupied_days(&self) -> BTreeSet<i64> {
        self.builtin
            .iter()
            .chain(self.user.iter())
            .filter(|e| e.is_slot_day())
            .map(|e| e.id)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_days().len() as i64 >= DAYS
    }

    /// Id for a newly submitted entry: the lowest free day, or `overflow_id`
    /// once every door is taken.
    ///
    /// `overflow_id` is expected to be a millisecond timestamp; anything that
    /// would land on a door is pushed past the grid instead.
    pub fn next_id(&self, overflow_id: i64) -> i64 {
        let occupied = self.occupied_days();
        if let Some(day) = (1..=DAYS).find(|d| !occupied.contains(d)) {
            return day;
        }
        overflow_id.max(DAYS + 1)
    }

    /// Entries that can never show on the grid (overflow or out-of-range ids).
    pub fn unplaced_count(&self) -> usize {
        self.builtin
            .iter()
            .chain(self.user.iter())
            .filter(|e| !e.is_slot_day())
            .count()
    }
}

/// Assign an id to `draft` against the current catalog and append it to the
/// user list. Returns the stored entry.
pub(crate) fn append_user_entry(
    builtin: &[Entry],
    user: &mut Vec<Entry>,
    draft: EntryDraft,
    overflow_id: i64,
) -> Entry {
    let id = Catalog::new(builtin, user).next_id(overflow_id);
    let entry = draft.into_entry(id);
    user.push(entry.clone());
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, title: &str) -> Entry {
        Entry {
            id,
            title_translated: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_slots_cover_thirty_days() {
        let builtin = vec![entry(1, "The Bee"), entry(5, "Iron")];
        let catalog = Catalog::new(&builtin, &[]);
        let slots = catalog.slots();

        assert_eq!(slots.len(), 30);
        assert_eq!(slots[0].day, 1);
        assert_eq!(slots[29].day, 30);
        assert!(slots[0].is_open());
        assert!(!slots[1].is_open());
        assert_eq!(
            slots[4].entry.as_ref().map(|e| e.title_translated.as_str()),
            Some("Iron")
        );
    }

    #[test]
    fn test_empty_catalog_disables_every_door() {
        let catalog = Catalog::new(&[], &[]);
        assert!(catalog.slots().iter().all(|s| !s.is_open()));
    }

    #[test]
    fn test_slot_binding_is_deterministic() {
        let builtin = vec![entry(2, "a"), entry(2, "b"), entry(9, "c")];
        let user = vec![entry(9, "d"), entry(11, "e")];
        let catalog = Catalog::new(&builtin, &user);
        assert_eq!(catalog.slots(), catalog.slots());
    }

    #[test]
    fn test_user_entry_overrides_builtin_on_collision() {
        let builtin = vec![entry(4, "builtin")];
        let user = vec![entry(4, "mine")];
        let catalog = Catalog::new(&builtin, &user);

        assert_eq!(
            catalog.entry_for_day(4).map(|e| e.title_translated.as_str()),
            Some("mine")
        );
        // Both stay in the merged set.
        assert_eq!(catalog.merged().len(), 2);
    }

    #[test]
    fn test_first_match_wins_within_a_list() {
        let builtin = vec![entry(3, "first"), entry(3, "second")];
        let catalog = Catalog::new(&builtin, &[]);
        assert_eq!(
            catalog.entry_for_day(3).map(|e| e.title_translated.as_str()),
            Some("first")
        );
    }

    #[test]
    fn test_out_of_range_ids_never_bind() {
        let builtin = vec![entry(0, "zero"), entry(31, "over"), entry(-2, "neg")];
        let catalog = Catalog::new(&builtin, &[]);
        assert!(catalog.slots().iter().all(|s| !s.is_open()));
        assert!(catalog.entry_for_day(31).is_none());
        assert_eq!(catalog.unplaced_count(), 3);
    }

    #[test]
    fn test_merged_keeps_builtin_first() {
        let builtin = vec![entry(1, "b1")];
        let user = vec![entry(2, "u1")];
        let merged = Catalog::new(&builtin, &user).merged();
        assert_eq!(merged[0].title_translated, "b1");
        assert_eq!(merged[1].title_translated, "u1");
    }

    #[test]
    fn test_next_id_picks_lowest_free_day() {
        let builtin = vec![entry(1, "The Bee")];
        assert_eq!(Catalog::new(&builtin, &[]).next_id(1_700_000_000_000), 2);

        let builtin = vec![entry(1, ""), entry(2, ""), entry(4, "")];
        let user = vec![entry(3, "")];
        assert_eq!(Catalog::new(&builtin, &user).next_id(1_700_000_000_000), 5);

        assert_eq!(Catalog::new(&[], &[]).next_id(1_700_000_000_000), 1);
    }

    #[test]
    fn test_next_id_ignores_overflow_entries_when_finding_gaps() {
        let builtin = vec![entry(1_700_000_000_000, "overflow")];
        assert_eq!(Catalog::new(&builtin, &[]).next_id(42), 1);
    }

    #[test]
    fn test_next_id_overflows_past_grid_when_full() {
        let builtin: Vec<Entry> = (1..=30).map(|d| entry(d, "")).collect();
        let catalog = Catalog::new(&builtin, &[]);

        assert!(catalog.is_full());
        let id = catalog.next_id(1_700_000_000_000);
        assert_eq!(id, 1_700_000_000_000);
        assert!(id > 30);

        // A bogus clock still never lands on a door.
        assert_eq!(catalog.next_id(5), 31);
    }

    #[test]
    fn test_submit_scenario_binds_day_two() {
        let builtin = vec![entry(1, "The Bee")];
        let mut user: Vec<Entry> = Vec::new();

        let draft = EntryDraft {
            title_translated: "Mine".to_string(),
            verse_translated: "A verse".to_string(),
            reference: "1:1".to_string(),
            ..Default::default()
        };
        let stored = append_user_entry(&builtin, &mut user, draft, 1_700_000_000_000);
        assert_eq!(stored.id, 2);
        assert_eq!(user, vec![stored.clone()]);

        let catalog = Catalog::new(&builtin, &user);
        let slot = &catalog.slots()[1];
        assert!(slot.is_open());
        let bound = slot.entry.as_ref().expect("day 2 should be bound");
        assert_eq!(bound, &stored);
        assert_eq!(bound.verse_with_reference(), "A verse (1:1)");
        assert_eq!(bound.day_label(), "Day 2");
    }

    #[test]
    fn test_repeated_submits_fill_consecutive_gaps() {
        let builtin = vec![entry(1, ""), entry(3, "")];
        let mut user = Vec::new();
        let ids: Vec<i64> = (0..3)
            .map(|_| append_user_entry(&builtin, &mut user, EntryDraft::default(), 1_700_000_000_000).id)
            .collect();
        assert_eq!(ids, vec![2, 4, 5]);
    }
}
