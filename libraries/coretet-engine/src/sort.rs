//! Column comparators.
//!
//! Text columns compare case-insensitively (Unicode lowercase) with the raw
//! string as a tiebreak, so equal-ignoring-case titles still order totally.
//! Missing text compares as the empty string, missing duration as zero.

use coretet_core::types::{SortColumn, SortDirection, Track};
use std::cmp::Ordering;

/// Compare two tracks by a column, direction applied.
pub fn compare(a: &Track, b: &Track, column: SortColumn, direction: SortDirection) -> Ordering {
    let ordering = compare_asc(a, b, column);
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn compare_asc(a: &Track, b: &Track, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Title => cmp_text(&a.title, &b.title),
        SortColumn::Artist => cmp_opt_text(a.artist.as_deref(), b.artist.as_deref()),
        SortColumn::Album => cmp_opt_text(a.collection.as_deref(), b.collection.as_deref()),
        SortColumn::Category => cmp_opt_text(a.category.as_deref(), b.category.as_deref()),
        SortColumn::Duration => {
            let a_secs = a.duration_secs.unwrap_or(0.0);
            let b_secs = b.duration_secs.unwrap_or(0.0);
            a_secs.total_cmp(&b_secs)
        }
        SortColumn::Date => a.updated_at.cmp(&b.updated_at),
        // Manual never reaches a comparator; treated as upload order here
        // so the function stays total.
        SortColumn::Added | SortColumn::Manual => a.created_at.cmp(&b.created_at),
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn cmp_opt_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    cmp_text(a.unwrap_or(""), b.unwrap_or(""))
}
