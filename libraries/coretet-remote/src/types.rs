//! Wire types for the backend's REST surface.

use coretet_core::types::{
    ManualPositions, SortColumn, SortDirection, TrackId, TrackRecord, ViewMode, ViewPreference,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Connection settings for the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL, e.g. `https://project.example.co`
    pub url: String,
    /// Project API key sent with every request
    pub api_key: Option<String>,
    /// User access token, when a user session exists
    pub access_token: Option<String>,
}

impl ServerConfig {
    /// Create a config with just a base URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            access_token: None,
        }
    }
}

/// A `view_preferences` row on the wire.
///
/// Sort and view fields travel as their persisted strings; unknown values
/// fall back to the row defaults on ingress rather than failing the fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceRow {
    /// Context type discriminator
    pub view_type: String,
    /// Context identifier
    pub view_id: String,
    /// Sort column as a string
    pub sort_by: String,
    /// Sort direction as a string
    pub sort_direction: String,
    /// View mode as a string
    pub view_mode: String,
    /// Manual position overrides, keyed by track id
    #[serde(default)]
    pub manual_positions: Option<BTreeMap<String, u32>>,
}

impl PreferenceRow {
    /// Build a wire row from a typed preference
    pub fn from_preference(
        view_type: &str,
        view_id: &str,
        preference: &ViewPreference,
    ) -> Self {
        Self {
            view_type: view_type.to_string(),
            view_id: view_id.to_string(),
            sort_by: preference.sort_by.as_str().to_string(),
            sort_direction: preference.sort_direction.as_str().to_string(),
            view_mode: preference.view_mode.as_str().to_string(),
            manual_positions: preference.manual_positions.as_ref().map(|positions| {
                positions
                    .iter()
                    .map(|(id, position)| (id.to_string(), *position))
                    .collect()
            }),
        }
    }

    /// Coerce a wire row into a typed preference
    pub fn into_preference(self) -> ViewPreference {
        ViewPreference {
            sort_by: SortColumn::parse(&self.sort_by).unwrap_or_default(),
            sort_direction: SortDirection::parse(&self.sort_direction).unwrap_or_default(),
            view_mode: ViewMode::parse(&self.view_mode).unwrap_or_default(),
            manual_positions: self.manual_positions.map(|positions| {
                positions
                    .into_iter()
                    .map(|(id, position)| (TrackId::new(id), position))
                    .collect::<ManualPositions>()
            }),
        }
    }
}

/// A `playlist_tracks` join row: playlist position plus the embedded track.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackRow {
    /// Position within the playlist
    #[serde(default)]
    pub position: Option<u32>,
    /// The joined track row
    pub track: TrackRecord,
}

/// A `collection_orders` row.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionOrderRow {
    /// Canonical id sequence for the collection
    #[serde(default)]
    pub track_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use coretet_core::types::{ViewContext, ViewPreference};

    #[test]
    fn preference_row_round_trips() {
        let context = ViewContext::Category("songs".to_string());
        let mut preference = ViewPreference::default_for(&context);
        let mut positions = ManualPositions::new();
        positions.insert(TrackId::new("t1"), 3);
        preference.manual_positions = Some(positions);

        let row = PreferenceRow::from_preference("category", "songs", &preference);
        assert_eq!(row.sort_by, "added");
        assert_eq!(row.sort_direction, "desc");
        assert_eq!(row.into_preference(), preference);
    }

    #[test]
    fn unknown_enum_strings_fall_back_to_defaults() {
        let row = PreferenceRow {
            view_type: "category".to_string(),
            view_id: "songs".to_string(),
            sort_by: "shuffle".to_string(),
            sort_direction: "sideways".to_string(),
            view_mode: "carousel".to_string(),
            manual_positions: None,
        };
        let preference = row.into_preference();
        assert_eq!(preference.sort_by, SortColumn::Added);
        assert_eq!(preference.sort_direction, SortDirection::Desc);
        assert_eq!(preference.view_mode, ViewMode::List);
    }

    #[test]
    fn playlist_track_row_parses_embedded_track() {
        let json = r#"{"position": 2, "track": {"id": "t9", "name": "Sketch", "tempo": "oops"}}"#;
        let row: PlaylistTrackRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.position, Some(2));
        assert_eq!(row.track.id, "t9");
        assert_eq!(row.track.tempo.as_deref(), Some("oops"));
    }
}
