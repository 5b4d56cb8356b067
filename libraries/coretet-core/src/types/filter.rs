/// Filter state types
use crate::types::Rating;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive BPM bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BpmRange {
    /// Lower bound, inclusive
    pub min: Option<f64>,
    /// Upper bound, inclusive
    pub max: Option<f64>,
}

impl BpmRange {
    /// True when neither bound is set
    pub fn is_unset(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Date filter presets.
///
/// Presets are evaluated relative to a caller-supplied "now"; `Custom` uses
/// the explicit bounds carried alongside on [`FilterState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    /// No date constraint
    #[default]
    All,
    /// Uploaded today
    Today,
    /// Uploaded within the last 7 days
    Week,
    /// Uploaded this calendar month
    Month,
    /// Uploaded this calendar year
    Year,
    /// Uploaded within the last 30 days
    Last30,
    /// Uploaded within the last 90 days
    Last90,
    /// Explicit from/to bounds
    Custom,
}

impl DateFilter {
    /// Convert to string for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
            DateFilter::Year => "year",
            DateFilter::Last30 => "last30",
            DateFilter::Last90 => "last90",
            DateFilter::Custom => "custom",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(DateFilter::All),
            "today" => Some(DateFilter::Today),
            "week" => Some(DateFilter::Week),
            "month" => Some(DateFilter::Month),
            "year" => Some(DateFilter::Year),
            "last30" => Some(DateFilter::Last30),
            "last90" => Some(DateFilter::Last90),
            "custom" => Some(DateFilter::Custom),
            _ => None,
        }
    }
}

/// Rating constraint from the advanced filter panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingFilter {
    /// No rating constraint
    #[default]
    All,
    /// Only tracks with the given rating flag set
    Only(Rating),
}

/// Snapshot of user-selected constraints.
///
/// Every field at its default ("all"/unset) value is a no-op predicate.
/// `context_rating` is the rating implied by the active view context (a
/// rating view); the caller derives it before invoking the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// BPM bounds, inclusive
    pub bpm: BpmRange,

    /// Exact key match; `None` means all
    pub key: Option<String>,

    /// Date preset
    pub date: DateFilter,

    /// Custom range lower bound, only meaningful when `date` is `Custom`
    pub date_from: Option<DateTime<Utc>>,

    /// Custom range upper bound, only meaningful when `date` is `Custom`
    pub date_to: Option<DateTime<Utc>>,

    /// Tag set, match-any; empty means all
    pub tags: Vec<String>,

    /// Rating implied by a rating view context
    pub context_rating: Option<Rating>,

    /// Rating from the advanced filter panel
    pub rating: RatingFilter,

    /// Exact category ("type") match; `None` means all
    pub category: Option<String>,

    /// Exact collection match; `None` means all
    pub collection: Option<String>,

    /// Exact artist match; `None` means all
    pub artist: Option<String>,

    /// When true, exclude every track that has a primary reference
    pub primary_only: bool,

    /// Sidebar tag selection, match-any; empty means all
    pub sidebar_tags: Vec<String>,

    /// Dropdown single-tag selection; `None` means all
    pub dropdown_tag: Option<String>,
}

impl FilterState {
    /// A filter that passes everything
    pub fn any() -> Self {
        Self::default()
    }
}
