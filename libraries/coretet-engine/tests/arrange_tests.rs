//! Integration tests for the sort/filter engine
//!
//! Covers the observable contract end to end:
//! - filter idempotence and conjunction
//! - manual ordering round-trips
//! - hybrid splice, including duplicate and out-of-range positions
//! - BPM and primary-only edge cases
//! - collection-order handling for "added" sort

use chrono::{DateTime, Duration, TimeZone, Utc};
use coretet_core::types::{
    BpmRange, FilterState, Lineage, ManualPositions, PreferenceUpdate, SortColumn, SortDirection,
    Track, TrackId, ViewContext, ViewPreference,
};
use coretet_engine::{arrange, filter_tracks};

fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn track(id: &str, title: &str) -> Track {
    let mut track = Track::new(title);
    track.id = TrackId::new(id);
    track.created_at = frozen_now() - Duration::days(1);
    track.updated_at = track.created_at;
    track
}

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

fn column_pref(sort_by: SortColumn, sort_direction: SortDirection) -> ViewPreference {
    let mut pref = ViewPreference::default_for(&ViewContext::default_all());
    pref.merge(PreferenceUpdate::sort(sort_by, sort_direction));
    pref
}

#[test]
fn filtering_is_idempotent() {
    let mut a = track("a", "A");
    a.bpm = Some(120.0);
    let mut b = track("b", "B");
    b.bpm = Some(90.0);
    let c = track("c", "C");

    let mut filter = FilterState::any();
    filter.bpm = BpmRange {
        min: Some(100.0),
        max: None,
    };

    let now = frozen_now();
    let once = filter_tracks(&[a, b, c], &filter, now);
    let twice = filter_tracks(&once, &filter, now);
    assert_eq!(once, twice);
    assert_eq!(ids(&once), vec!["a"]);
}

#[test]
fn filter_conjunction_equals_sequential_application() {
    let mut a = track("a", "A");
    a.bpm = Some(120.0);
    a.tags = vec!["ambient".to_string()];
    let mut b = track("b", "B");
    b.bpm = Some(120.0);
    let mut c = track("c", "C");
    c.tags = vec!["ambient".to_string()];
    let tracks = vec![a, b, c];

    let mut bpm_only = FilterState::any();
    bpm_only.bpm = BpmRange {
        min: Some(100.0),
        max: Some(140.0),
    };

    let mut tags_only = FilterState::any();
    tags_only.tags = vec!["ambient".to_string()];

    let mut combined = bpm_only.clone();
    combined.tags = tags_only.tags.clone();

    let now = frozen_now();
    let sequential = filter_tracks(&filter_tracks(&tracks, &bpm_only, now), &tags_only, now);
    let conjoined = filter_tracks(&tracks, &combined, now);
    assert_eq!(sequential, conjoined);
    assert_eq!(ids(&conjoined), vec!["a"]);
}

#[test]
fn manual_mode_round_trip() {
    let tracks = vec![track("c", "C"), track("a", "A"), track("b", "B")];

    let mut positions = ManualPositions::new();
    positions.insert(TrackId::new("a"), 0);
    positions.insert(TrackId::new("b"), 1);
    positions.insert(TrackId::new("c"), 2);

    let mut pref = column_pref(SortColumn::Manual, SortDirection::Asc);
    pref.manual_positions = Some(positions);

    let ordered = arrange(&tracks, &FilterState::any(), &pref, None, frozen_now());
    assert_eq!(ids(&ordered), vec!["a", "b", "c"]);
}

#[test]
fn manual_mode_with_empty_map_falls_back_to_newest_first() {
    let mut old = track("old", "Old");
    old.created_at = frozen_now() - Duration::days(10);
    let mut new = track("new", "New");
    new.created_at = frozen_now() - Duration::hours(1);

    let pref = column_pref(SortColumn::Manual, SortDirection::Asc);

    let ordered = arrange(
        &[old, new],
        &FilterState::any(),
        &pref,
        None,
        frozen_now(),
    );
    assert_eq!(ids(&ordered), vec!["new", "old"]);
}

#[test]
fn hybrid_splice_pins_track_at_absolute_index() {
    let tracks = vec![
        track("banana", "Banana"),
        track("apple", "Apple"),
        track("cherry", "Cherry"),
    ];

    let mut pref = column_pref(SortColumn::Title, SortDirection::Asc);
    let mut positions = ManualPositions::new();
    positions.insert(TrackId::new("cherry"), 0);
    pref.manual_positions = Some(positions);

    let ordered = arrange(&tracks, &FilterState::any(), &pref, None, frozen_now());
    assert_eq!(ids(&ordered), vec!["cherry", "apple", "banana"]);
}

#[test]
fn hybrid_splice_clamps_and_resolves_duplicates() {
    let tracks = vec![
        track("a", "A"),
        track("b", "B"),
        track("c", "C"),
        track("d", "D"),
    ];

    // Out-of-range position clamps to the end
    let mut pref = column_pref(SortColumn::Title, SortDirection::Asc);
    let mut positions = ManualPositions::new();
    positions.insert(TrackId::new("a"), 99);
    pref.manual_positions = Some(positions);

    let ordered = arrange(&tracks, &FilterState::any(), &pref, None, frozen_now());
    assert_eq!(ids(&ordered), vec!["b", "c", "d", "a"]);

    // Duplicate positions keep auto-sorted relative order
    let mut positions = ManualPositions::new();
    positions.insert(TrackId::new("c"), 0);
    positions.insert(TrackId::new("d"), 0);
    pref.manual_positions = Some(positions);

    let ordered = arrange(&tracks, &FilterState::any(), &pref, None, frozen_now());
    assert_eq!(ids(&ordered), vec!["c", "d", "a", "b"]);
}

#[test]
fn added_sort_honors_collection_order() {
    let tracks = vec![track("a", "A"), track("b", "B"), track("c", "C")];
    let order = vec![TrackId::new("b"), TrackId::new("c"), TrackId::new("a")];

    let pref = column_pref(SortColumn::Added, SortDirection::Asc);
    let ordered = arrange(
        &tracks,
        &FilterState::any(),
        &pref,
        Some(&order),
        frozen_now(),
    );
    assert_eq!(ids(&ordered), vec!["b", "c", "a"]);
}

#[test]
fn added_sort_puts_ids_missing_from_collection_order_last() {
    let tracks = vec![track("x", "X"), track("a", "A"), track("y", "Y")];
    let order = vec![TrackId::new("a")];

    let pref = column_pref(SortColumn::Added, SortDirection::Asc);
    let ordered = arrange(
        &tracks,
        &FilterState::any(),
        &pref,
        Some(&order),
        frozen_now(),
    );
    assert_eq!(ids(&ordered), vec!["a", "x", "y"]);
}

#[test]
fn missing_bpm_is_excluded_by_any_bounded_range() {
    let no_bpm = track("silent", "Silent");
    let mut with_bpm = track("steady", "Steady");
    with_bpm.bpm = Some(120.0);

    let mut filter = FilterState::any();
    filter.bpm = BpmRange {
        min: Some(0.0),
        max: Some(999.0),
    };

    let pref = column_pref(SortColumn::Title, SortDirection::Asc);
    let ordered = arrange(
        &[no_bpm, with_bpm],
        &filter,
        &pref,
        None,
        frozen_now(),
    );
    assert_eq!(ids(&ordered), vec!["steady"]);
}

#[test]
fn primary_only_retains_primaries_and_drops_variations() {
    let primary = track("y", "Y");
    let mut variation = track("x", "X");
    variation.lineage = Lineage::VariantOf(TrackId::new("y"));

    let mut filter = FilterState::any();
    filter.primary_only = true;

    let pref = column_pref(SortColumn::Title, SortDirection::Asc);
    let ordered = arrange(
        &[variation, primary],
        &filter,
        &pref,
        None,
        frozen_now(),
    );
    assert_eq!(ids(&ordered), vec!["y"]);
}

#[test]
fn title_sort_scenario_flips_with_direction() {
    let mut zed = track("1", "Zed");
    zed.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut ann = track("2", "Ann");
    ann.created_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let tracks = vec![zed, ann];

    let asc = column_pref(SortColumn::Title, SortDirection::Asc);
    let ordered = arrange(&tracks, &FilterState::any(), &asc, None, frozen_now());
    assert_eq!(
        ordered.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
        vec!["Ann", "Zed"]
    );

    let desc = column_pref(SortColumn::Title, SortDirection::Desc);
    let ordered = arrange(&tracks, &FilterState::any(), &desc, None, frozen_now());
    assert_eq!(
        ordered.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
        vec!["Zed", "Ann"]
    );
}

#[test]
fn empty_result_for_all_excluding_filter() {
    let tracks = vec![track("a", "A")];
    let mut filter = FilterState::any();
    filter.artist = Some("Nobody".to_string());

    let pref = column_pref(SortColumn::Title, SortDirection::Asc);
    assert!(arrange(&tracks, &filter, &pref, None, frozen_now()).is_empty());
}
