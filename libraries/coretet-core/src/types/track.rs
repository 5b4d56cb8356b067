/// Track domain types
use crate::error::{CoreError, Result};
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rating a user can assign to a track.
///
/// The three flags are independent booleans in storage; this enum names the
/// single rating a user action assigns at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Track has been listened to
    Listened,
    /// Track is liked
    Liked,
    /// Track is loved
    Loved,
}

impl Rating {
    /// Convert rating to string for storage keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Listened => "listened",
            Rating::Liked => "liked",
            Rating::Loved => "loved",
        }
    }

    /// Parse rating from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "listened" => Some(Rating::Listened),
            "liked" => Some(Rating::Liked),
            "loved" => Some(Rating::Loved),
            _ => None,
        }
    }
}

/// Variation linkage for a track.
///
/// Grouping is two-level: a primary track and the variations that reference
/// it. A variation must reference a track that is itself primary; chains are
/// flagged by [`validate_lineage`], not repaired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "primary_track_id", rename_all = "snake_case")]
pub enum Lineage {
    /// The track is itself a primary
    Primary,
    /// The track is a variation of the referenced primary
    VariantOf(TrackId),
}

impl Lineage {
    /// True when the track has no primary reference
    pub fn is_primary(&self) -> bool {
        matches!(self, Lineage::Primary)
    }

    /// The referenced primary id, if any
    pub fn primary_id(&self) -> Option<&TrackId> {
        match self {
            Lineage::Primary => None,
            Lineage::VariantOf(id) => Some(id),
        }
    }
}

/// Audio track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: Option<String>,

    /// Collection (album) name
    pub collection: Option<String>,

    /// Category ("type" column: song, demo, idea, ...)
    pub category: Option<String>,

    /// Genre
    pub genre: Option<String>,

    /// Mood
    pub mood: Option<String>,

    /// Musical key
    pub key: Option<String>,

    /// Parsed tempo in beats per minute
    pub bpm: Option<f64>,

    /// Tags, display order preserved
    pub tags: Vec<String>,

    /// Duration in seconds
    pub duration_secs: Option<f64>,

    /// Listened rating flag
    pub listened: bool,

    /// Liked rating flag
    pub liked: bool,

    /// Loved rating flag
    pub loved: bool,

    /// Variation linkage
    pub lineage: Lineage,

    /// When the track was uploaded
    pub created_at: DateTime<Utc>,

    /// When the track was last updated
    pub updated_at: DateTime<Utc>,
}

impl Track {
    /// Create a new primary track with minimal metadata
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: None,
            collection: None,
            category: None,
            genre: None,
            mood: None,
            key: None,
            bpm: None,
            tags: Vec::new(),
            duration_secs: None,
            listened: false,
            liked: false,
            loved: false,
            lineage: Lineage::Primary,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a rating with single-select semantics.
    ///
    /// Setting one rating clears the other two. This is a client convention,
    /// not a storage constraint; records read from the remote store may still
    /// carry several flags at once.
    pub fn apply_rating(&mut self, rating: Rating) {
        self.listened = rating == Rating::Listened;
        self.liked = rating == Rating::Liked;
        self.loved = rating == Rating::Loved;
    }

    /// True when the given rating flag is set on this track
    pub fn has_rating(&self, rating: Rating) -> bool {
        match rating {
            Rating::Listened => self.listened,
            Rating::Liked => self.liked,
            Rating::Loved => self.loved,
        }
    }

    /// Build a track from a loose remote row.
    ///
    /// This is the ingress boundary: free-form fields are coerced here so the
    /// engine only ever sees well-typed values. An unparsable tempo becomes
    /// `bpm = None` (which makes the track fail any bounded BPM filter).
    ///
    /// # Errors
    ///
    /// Returns an error if the row has an empty id.
    pub fn from_record(record: TrackRecord) -> Result<Self> {
        if record.id.is_empty() {
            return Err(CoreError::invalid_input("track record has empty id"));
        }

        let bpm = record
            .tempo
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|bpm| bpm.is_finite() && *bpm > 0.0);

        let lineage = match record.primary_track_id {
            Some(id) if !id.is_empty() => Lineage::VariantOf(TrackId::new(id)),
            _ => Lineage::Primary,
        };

        let created_at = record.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        Ok(Self {
            id: TrackId::new(record.id),
            title: record.name.unwrap_or_default(),
            artist: record.artist,
            collection: record.collection,
            category: record.category,
            genre: record.genre,
            mood: record.mood,
            key: record.key,
            bpm,
            tags: record.tags.unwrap_or_default(),
            duration_secs: record.duration,
            listened: record.listened,
            liked: record.liked,
            loved: record.loved,
            lineage,
            created_at,
            updated_at: record.updated_at.unwrap_or(created_at),
        })
    }
}

/// Loose track row as returned by the remote store.
///
/// Everything but the id is nullable and the tempo is a free-form string;
/// [`Track::from_record`] coerces rows into the typed domain model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Row id
    pub id: String,
    /// Track name
    #[serde(default)]
    pub name: Option<String>,
    /// Artist
    #[serde(default)]
    pub artist: Option<String>,
    /// Collection (album)
    #[serde(default)]
    pub collection: Option<String>,
    /// Category
    #[serde(default)]
    pub category: Option<String>,
    /// Genre
    #[serde(default)]
    pub genre: Option<String>,
    /// Mood
    #[serde(default)]
    pub mood: Option<String>,
    /// Musical key
    #[serde(default)]
    pub key: Option<String>,
    /// Free-form tempo, may be unparsable
    #[serde(default)]
    pub tempo: Option<String>,
    /// Tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// Listened flag
    #[serde(default)]
    pub listened: bool,
    /// Liked flag
    #[serde(default)]
    pub liked: bool,
    /// Loved flag
    #[serde(default)]
    pub loved: bool,
    /// Primary track reference for variations
    #[serde(default)]
    pub primary_track_id: Option<String>,
    /// Upload timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Check the two-level variation invariant over a snapshot.
///
/// Returns the ids of tracks whose `VariantOf` target is itself a variation
/// (a chain). References to tracks absent from the snapshot are not flagged;
/// the snapshot may legitimately be filtered.
pub fn validate_lineage(tracks: &[Track]) -> Vec<TrackId> {
    use std::collections::HashMap;

    let by_id: HashMap<&TrackId, &Track> = tracks.iter().map(|t| (&t.id, t)).collect();

    tracks
        .iter()
        .filter_map(|track| {
            let primary_id = track.lineage.primary_id()?;
            let target = by_id.get(primary_id)?;
            if target.lineage.is_primary() {
                None
            } else {
                Some(track.id.clone())
            }
        })
        .collect()
}
