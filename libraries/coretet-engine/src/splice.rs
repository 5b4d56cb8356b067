//! Manual-order merging.
//!
//! Three orderings live here: strict manual ordering, strict ordering by an
//! external id list, and the hybrid positional splice that overlays manual
//! positions on top of a column sort.

use coretet_core::types::{ManualPositions, Track, TrackId};
use std::collections::HashMap;

/// Order strictly by manual position, ascending.
///
/// Tracks absent from the map sort after all mapped ones, keeping their
/// input order as a stable tiebreak.
pub(crate) fn order_by_manual(mut tracks: Vec<Track>, positions: &ManualPositions) -> Vec<Track> {
    let keys: HashMap<TrackId, (u8, u32, usize)> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let key = match positions.get(&track.id) {
                Some(position) => (0, *position, index),
                None => (1, 0, index),
            };
            (track.id.clone(), key)
        })
        .collect();

    tracks.sort_by_key(|track| keys[&track.id]);
    tracks
}

/// Order strictly by position in an external id list.
///
/// Ids not present in the list sort after all present ones, input order
/// preserved.
pub(crate) fn order_by_id_list(mut tracks: Vec<Track>, order: &[TrackId]) -> Vec<Track> {
    let list_index: HashMap<&TrackId, usize> = order
        .iter()
        .enumerate()
        .map(|(index, id)| (id, index))
        .collect();

    let keys: HashMap<TrackId, (u8, usize, usize)> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let key = match list_index.get(&track.id) {
                Some(position) => (0, *position, index),
                None => (1, 0, index),
            };
            (track.id.clone(), key)
        })
        .collect();

    tracks.sort_by_key(|track| keys[&track.id]);
    tracks
}

/// Hybrid positional splice.
///
/// Tracks present in the map are pulled out of the auto-sorted sequence and
/// placed at their manual position, treated as an absolute index in the final
/// array; the remaining tracks fill the free slots in their auto-sorted
/// order.
///
/// Tie-breaks: positions past the end clamp to the last index; when several
/// tracks claim the same slot they are placed in (position, auto-order)
/// order, later claimants taking the next free slot toward the end and
/// wrapping to the front once the tail is full.
pub(crate) fn splice_manual(auto_sorted: Vec<Track>, positions: &ManualPositions) -> Vec<Track> {
    let total = auto_sorted.len();
    if total == 0 {
        return auto_sorted;
    }

    let mut pinned: Vec<(u32, Track)> = Vec::new();
    let mut rest: Vec<Track> = Vec::with_capacity(total);
    for track in auto_sorted {
        match positions.get(&track.id) {
            Some(position) => pinned.push((*position, track)),
            None => rest.push(track),
        }
    }
    // Stable: equal positions keep their auto-sorted relative order
    pinned.sort_by_key(|(position, _)| *position);

    let mut slots: Vec<Option<Track>> = (0..total).map(|_| None).collect();
    for (position, track) in pinned {
        let target = (position as usize).min(total - 1);
        let slot = (target..total)
            .chain(0..target)
            .find(|&index| slots[index].is_none());
        if let Some(index) = slot {
            slots[index] = Some(track);
        }
    }

    let mut rest = rest.into_iter();
    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| rest.next()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        let mut track = Track::new(id.to_uppercase());
        track.id = TrackId::new(id);
        track
    }

    fn ids(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn manual_order_puts_unmapped_last_in_input_order() {
        let tracks = vec![track("c"), track("x"), track("a"), track("y"), track("b")];
        let mut positions = ManualPositions::new();
        positions.insert(TrackId::new("a"), 0);
        positions.insert(TrackId::new("b"), 1);
        positions.insert(TrackId::new("c"), 2);

        let ordered = order_by_manual(tracks, &positions);
        assert_eq!(ids(&ordered), vec!["a", "b", "c", "x", "y"]);
    }

    #[test]
    fn id_list_order_puts_missing_last() {
        let tracks = vec![track("a"), track("b"), track("c")];
        let order = vec![TrackId::new("c"), TrackId::new("a")];

        let ordered = order_by_id_list(tracks, &order);
        assert_eq!(ids(&ordered), vec!["c", "a", "b"]);
    }

    #[test]
    fn splice_places_pinned_at_absolute_index() {
        let auto = vec![track("apple"), track("banana"), track("cherry")];
        let mut positions = ManualPositions::new();
        positions.insert(TrackId::new("cherry"), 0);

        let spliced = splice_manual(auto, &positions);
        assert_eq!(ids(&spliced), vec!["cherry", "apple", "banana"]);
    }

    #[test]
    fn splice_clamps_out_of_range_positions() {
        let auto = vec![track("a"), track("b"), track("c")];
        let mut positions = ManualPositions::new();
        positions.insert(TrackId::new("a"), 99);

        let spliced = splice_manual(auto, &positions);
        assert_eq!(ids(&spliced), vec!["b", "c", "a"]);
    }

    #[test]
    fn splice_resolves_duplicate_positions_in_auto_order() {
        let auto = vec![track("a"), track("b"), track("c"), track("d")];
        let mut positions = ManualPositions::new();
        positions.insert(TrackId::new("b"), 1);
        positions.insert(TrackId::new("c"), 1);

        // b precedes c in auto order, so b takes slot 1 and c shifts to 2
        let spliced = splice_manual(auto, &positions);
        assert_eq!(ids(&spliced), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn splice_wraps_when_tail_is_full() {
        let auto = vec![track("a"), track("b"), track("c")];
        let mut positions = ManualPositions::new();
        positions.insert(TrackId::new("a"), 2);
        positions.insert(TrackId::new("b"), 2);

        // a claims the last slot; b wraps to the first free slot from the top
        let spliced = splice_manual(auto, &positions);
        assert_eq!(ids(&spliced), vec!["b", "c", "a"]);
    }

    #[test]
    fn splice_with_empty_map_is_identity() {
        let auto = vec![track("a"), track("b")];
        let spliced = splice_manual(auto, &ManualPositions::new());
        assert_eq!(ids(&spliced), vec!["a", "b"]);
    }
}
