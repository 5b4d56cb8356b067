/// View context and view preference types
use crate::types::{PlaylistId, Rating, TrackId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity of the currently displayed list.
///
/// Exactly one context is active at a time; [`ViewContext::resolve`] applies
/// the selector precedence playlist > collection > rating > tags > category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum ViewContext {
    /// A category view, identified by category name ("all" for the default)
    Category(String),
    /// A playlist view
    Playlist(PlaylistId),
    /// A collection view, identified by collection name
    Collection(String),
    /// A rating view
    Rating(Rating),
    /// A tag-combination view
    Tags(Vec<String>),
}

impl ViewContext {
    /// The default context when no selector is active
    pub fn default_all() -> Self {
        ViewContext::Category("all".to_string())
    }

    /// Resolve the active context from the current selectors.
    ///
    /// Precedence: playlist > collection > rating > tags > category, falling
    /// back to the default "all" category.
    pub fn resolve(
        playlist: Option<PlaylistId>,
        collection: Option<String>,
        rating: Option<Rating>,
        tags: &[String],
        category: Option<String>,
    ) -> Self {
        if let Some(id) = playlist {
            ViewContext::Playlist(id)
        } else if let Some(name) = collection {
            ViewContext::Collection(name)
        } else if let Some(rating) = rating {
            ViewContext::Rating(rating)
        } else if !tags.is_empty() {
            ViewContext::Tags(tags.to_vec())
        } else if let Some(name) = category {
            ViewContext::Category(name)
        } else {
            Self::default_all()
        }
    }

    /// Context type discriminator used as the persistence key prefix
    pub fn view_type(&self) -> &'static str {
        match self {
            ViewContext::Category(_) => "category",
            ViewContext::Playlist(_) => "playlist",
            ViewContext::Collection(_) => "collection",
            ViewContext::Rating(_) => "rating",
            ViewContext::Tags(_) => "tags",
        }
    }

    /// Context identifier used as the persistence key suffix.
    ///
    /// Tag combinations canonicalize to the sorted, comma-joined tag list so
    /// the same selection always maps to the same key.
    pub fn view_id(&self) -> String {
        match self {
            ViewContext::Category(name) | ViewContext::Collection(name) => name.clone(),
            ViewContext::Playlist(id) => id.to_string(),
            ViewContext::Rating(rating) => rating.as_str().to_string(),
            ViewContext::Tags(tags) => {
                let mut sorted = tags.clone();
                sorted.sort();
                sorted.join(",")
            }
        }
    }

    /// Key used by the local fallback store
    pub fn storage_key(&self) -> String {
        format!("coretet_view_{}_{}", self.view_type(), self.view_id())
    }

    /// True for contexts that default to manual ordering
    pub fn defaults_to_manual(&self) -> bool {
        matches!(self, ViewContext::Playlist(_) | ViewContext::Collection(_))
    }
}

/// Sort column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    /// Upload order
    #[default]
    Added,
    /// Track title
    Title,
    /// Category ("type" column)
    #[serde(rename = "type")]
    Category,
    /// Artist name
    Artist,
    /// Collection (album) name
    Album,
    /// Duration in seconds
    Duration,
    /// Last-updated timestamp
    Date,
    /// User-defined drag order
    Manual,
}

impl SortColumn {
    /// Convert to string for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Added => "added",
            SortColumn::Title => "title",
            SortColumn::Category => "type",
            SortColumn::Artist => "artist",
            SortColumn::Album => "album",
            SortColumn::Duration => "duration",
            SortColumn::Date => "date",
            SortColumn::Manual => "manual",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "added" => Some(SortColumn::Added),
            "title" => Some(SortColumn::Title),
            "type" => Some(SortColumn::Category),
            "artist" => Some(SortColumn::Artist),
            "album" => Some(SortColumn::Album),
            "duration" => Some(SortColumn::Duration),
            "date" => Some(SortColumn::Date),
            "manual" => Some(SortColumn::Manual),
            _ => None,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending
    #[default]
    Desc,
}

impl SortDirection {
    /// Convert to string for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// View mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// List rendering
    #[default]
    List,
    /// Grid rendering
    Grid,
}

impl ViewMode {
    /// Convert to string for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "list" => Some(ViewMode::List),
            "grid" => Some(ViewMode::Grid),
            _ => None,
        }
    }
}

/// Manual drag-order override: track id to target index in the final array
pub type ManualPositions = BTreeMap<TrackId, u32>;

/// Persisted sort/view settings for one view context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPreference {
    /// Sort column
    pub sort_by: SortColumn,

    /// Sort direction
    pub sort_direction: SortDirection,

    /// View mode
    pub view_mode: ViewMode,

    /// Manual position overrides, used when `sort_by` is manual and spliced
    /// into column sorts otherwise
    #[serde(default)]
    pub manual_positions: Option<ManualPositions>,
}

impl ViewPreference {
    /// The default preference for a context.
    ///
    /// Playlist and collection contexts default to manual ordering; every
    /// other context defaults to upload order, newest first.
    pub fn default_for(context: &ViewContext) -> Self {
        if context.defaults_to_manual() {
            Self {
                sort_by: SortColumn::Manual,
                sort_direction: SortDirection::Asc,
                view_mode: ViewMode::List,
                manual_positions: None,
            }
        } else {
            Self {
                sort_by: SortColumn::Added,
                sort_direction: SortDirection::Desc,
                view_mode: ViewMode::List,
                manual_positions: None,
            }
        }
    }

    /// Manual positions, treating an absent map as empty
    pub fn has_manual_positions(&self) -> bool {
        self.manual_positions
            .as_ref()
            .is_some_and(|map| !map.is_empty())
    }

    /// Merge a partial update into this preference
    pub fn merge(&mut self, update: PreferenceUpdate) {
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(direction) = update.sort_direction {
            self.sort_direction = direction;
        }
        if let Some(mode) = update.view_mode {
            self.view_mode = mode;
        }
        if let Some(positions) = update.manual_positions {
            self.manual_positions = Some(positions);
        }
    }
}

/// Partial preference update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceUpdate {
    /// New sort column
    pub sort_by: Option<SortColumn>,
    /// New sort direction
    pub sort_direction: Option<SortDirection>,
    /// New view mode
    pub view_mode: Option<ViewMode>,
    /// Replacement manual position map
    pub manual_positions: Option<ManualPositions>,
}

impl PreferenceUpdate {
    /// An update that changes only the sort configuration
    pub fn sort(sort_by: SortColumn, sort_direction: SortDirection) -> Self {
        Self {
            sort_by: Some(sort_by),
            sort_direction: Some(sort_direction),
            ..Self::default()
        }
    }
}
