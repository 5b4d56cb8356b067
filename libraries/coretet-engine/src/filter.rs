//! Filter predicates.
//!
//! All predicates are combined as a conjunction; a predicate at its
//! "all"/unset value passes everything. The evaluation clock is an explicit
//! argument so relative date presets are deterministic under test.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use coretet_core::types::{DateFilter, FilterState, RatingFilter, Track};

/// True when the track satisfies every active predicate of the filter.
pub fn matches(track: &Track, filter: &FilterState, now: DateTime<Utc>) -> bool {
    matches_context_rating(track, filter)
        && matches_bpm(track, filter)
        && matches_key(track, filter)
        && matches_date(track, filter, now)
        && matches_tags(track, &filter.tags)
        && matches_category(track, filter)
        && matches_advanced_rating(track, filter)
        && matches_collection(track, filter)
        && matches_artist(track, filter)
        && matches_primary_only(track, filter)
        && matches_tags(track, &filter.sidebar_tags)
        && matches_dropdown_tag(track, filter)
}

fn matches_context_rating(track: &Track, filter: &FilterState) -> bool {
    match filter.context_rating {
        None => true,
        Some(rating) => track.has_rating(rating),
    }
}

fn matches_advanced_rating(track: &Track, filter: &FilterState) -> bool {
    match filter.rating {
        RatingFilter::All => true,
        RatingFilter::Only(rating) => track.has_rating(rating),
    }
}

/// A track with no parsed tempo fails whenever either bound is set, even if
/// the range is wide. Absence of a tempo is not a wildcard.
fn matches_bpm(track: &Track, filter: &FilterState) -> bool {
    if filter.bpm.is_unset() {
        return true;
    }
    let Some(bpm) = track.bpm else {
        return false;
    };
    filter.bpm.min.map_or(true, |min| bpm >= min) && filter.bpm.max.map_or(true, |max| bpm <= max)
}

fn matches_key(track: &Track, filter: &FilterState) -> bool {
    match &filter.key {
        None => true,
        Some(key) => track.key.as_deref() == Some(key.as_str()),
    }
}

fn matches_date(track: &Track, filter: &FilterState, now: DateTime<Utc>) -> bool {
    match filter.date {
        DateFilter::All => true,
        DateFilter::Custom => {
            filter.date_from.map_or(true, |from| track.created_at >= from)
                && filter.date_to.map_or(true, |to| track.created_at <= to)
        }
        preset => match preset_cutoff(preset, now) {
            Some(cutoff) => track.created_at >= cutoff,
            None => true,
        },
    }
}

/// Lower bound for a relative preset, computed against the supplied clock.
fn preset_cutoff(preset: DateFilter, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match preset {
        DateFilter::Today => Some(now.date_naive().and_time(NaiveTime::MIN).and_utc()),
        DateFilter::Week => Some(now - Duration::days(7)),
        DateFilter::Month => NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
            .map(|day| day.and_time(NaiveTime::MIN).and_utc()),
        DateFilter::Year => NaiveDate::from_ymd_opt(now.year(), 1, 1)
            .map(|day| day.and_time(NaiveTime::MIN).and_utc()),
        DateFilter::Last30 => Some(now - Duration::days(30)),
        DateFilter::Last90 => Some(now - Duration::days(90)),
        DateFilter::All | DateFilter::Custom => None,
    }
}

/// Match-any over a tag selection; an empty selection passes everything.
fn matches_tags(track: &Track, selection: &[String]) -> bool {
    selection.is_empty() || selection.iter().any(|tag| track.tags.contains(tag))
}

fn matches_dropdown_tag(track: &Track, filter: &FilterState) -> bool {
    match &filter.dropdown_tag {
        None => true,
        Some(tag) => track.tags.contains(tag),
    }
}

fn matches_category(track: &Track, filter: &FilterState) -> bool {
    match &filter.category {
        None => true,
        Some(category) => track.category.as_deref() == Some(category.as_str()),
    }
}

fn matches_collection(track: &Track, filter: &FilterState) -> bool {
    match &filter.collection {
        None => true,
        Some(collection) => track.collection.as_deref() == Some(collection.as_str()),
    }
}

fn matches_artist(track: &Track, filter: &FilterState) -> bool {
    match &filter.artist {
        None => true,
        Some(artist) => track.artist.as_deref() == Some(artist.as_str()),
    }
}

fn matches_primary_only(track: &Track, filter: &FilterState) -> bool {
    !filter.primary_only || track.lineage.is_primary()
}
