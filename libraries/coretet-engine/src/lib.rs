//! Coretet Sort/Filter Engine
//!
//! The one pure boundary of the application: given a track snapshot, the
//! active filter, and the view preference, produce the filtered, ordered
//! sequence the UI renders. No I/O, no side effects; the evaluation clock is
//! an explicit argument so relative date filters are deterministic.
//!
//! # Ordering rules
//!
//! - **manual** sort orders by the preference's manual position map; with an
//!   empty map it falls back to upload order, newest first.
//! - **added** sort honors an externally supplied collection order when one
//!   is given.
//! - any other column is a total, stable comparator sort; when a manual
//!   position map is present its entries are spliced back in at their
//!   absolute positions.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use coretet_core::types::{FilterState, SortColumn, SortDirection, Track, ViewContext,
//!     PreferenceUpdate, ViewPreference};
//! use coretet_engine::arrange;
//!
//! let tracks = vec![Track::new("Zed"), Track::new("Ann")];
//! let mut preference = ViewPreference::default_for(&ViewContext::default_all());
//! preference.merge(PreferenceUpdate::sort(SortColumn::Title, SortDirection::Asc));
//!
//! let ordered = arrange(&tracks, &FilterState::any(), &preference, None, Utc::now());
//! assert_eq!(ordered[0].title, "Ann");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filter;
mod sort;
mod splice;

pub use filter::matches;
pub use sort::compare;

use chrono::{DateTime, Utc};
use coretet_core::types::{FilterState, SortColumn, Track, TrackId, ViewPreference};

/// Filter a snapshot, keeping input order.
pub fn filter_tracks(tracks: &[Track], filter: &FilterState, now: DateTime<Utc>) -> Vec<Track> {
    tracks
        .iter()
        .filter(|track| matches(track, filter, now))
        .cloned()
        .collect()
}

/// Produce the filtered, ordered sequence for a view.
///
/// `collection_order` is the canonical id sequence of the active collection,
/// honored only for "added" sort. The result is always a permutation of the
/// filtered input; an empty input or an all-excluding filter yields an empty
/// sequence.
pub fn arrange(
    tracks: &[Track],
    filter: &FilterState,
    preference: &ViewPreference,
    collection_order: Option<&[TrackId]>,
    now: DateTime<Utc>,
) -> Vec<Track> {
    let filtered = filter_tracks(tracks, filter, now);
    sort_tracks(filtered, preference, collection_order)
}

/// Order an already-filtered sequence per the view preference.
pub fn sort_tracks(
    mut tracks: Vec<Track>,
    preference: &ViewPreference,
    collection_order: Option<&[TrackId]>,
) -> Vec<Track> {
    if preference.sort_by == SortColumn::Manual {
        return match &preference.manual_positions {
            Some(positions) if !positions.is_empty() => splice::order_by_manual(tracks, positions),
            // First time manual mode is selected: upload order, newest first
            _ => {
                tracks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                tracks
            }
        };
    }

    if preference.sort_by == SortColumn::Added {
        if let Some(order) = collection_order.filter(|order| !order.is_empty()) {
            return splice::order_by_id_list(tracks, order);
        }
    }

    tracks.sort_by(|a, b| sort::compare(a, b, preference.sort_by, preference.sort_direction));
    match &preference.manual_positions {
        Some(positions) if !positions.is_empty() => splice::splice_manual(tracks, positions),
        _ => tracks,
    }
}
