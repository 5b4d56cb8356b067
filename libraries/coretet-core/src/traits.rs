/// Collaborator traits for the ordering core
///
/// The engine and preference store consume these contracts; the surrounding
/// application (or `coretet-remote`) provides the implementations.
use crate::error::{PreferenceStoreError, Result};
use crate::types::{PlaylistId, Track, TrackId, ViewPreference};
use async_trait::async_trait;

#[cfg(feature = "mocks")]
use mockall::automock;

/// Result type for preference-store collaborators
pub type PreferenceResult<T> = std::result::Result<T, PreferenceStoreError>;

/// Source of track snapshots.
///
/// Returned lists are complete snapshots; the core does not paginate.
#[cfg_attr(feature = "mocks", automock)]
#[async_trait]
pub trait TrackSource: Send + Sync {
    /// List every track in the library
    async fn list_tracks(&self) -> Result<Vec<Track>>;

    /// List the tracks of a playlist.
    ///
    /// When `preserve_order` is set the playlist's own positions are kept;
    /// otherwise tracks come back in upload order.
    async fn list_tracks_for_playlist(
        &self,
        playlist_id: &PlaylistId,
        preserve_order: bool,
    ) -> Result<Vec<Track>>;
}

/// Source of canonical collection orderings, used by "added" sort within a
/// collection view.
#[cfg_attr(feature = "mocks", automock)]
#[async_trait]
pub trait CollectionOrderSource: Send + Sync {
    /// Get the canonical id sequence for a collection
    async fn get_order(&self, collection: &str) -> Result<Vec<TrackId>>;
}

/// Remote view-preference store.
///
/// `upsert_preference` must fail with [`PreferenceStoreError::Unsupported`]
/// when the backing operation is not provisioned, so the caller can redirect
/// the write to the local fallback.
#[cfg_attr(feature = "mocks", automock)]
#[async_trait]
pub trait RemotePreferenceStore: Send + Sync {
    /// Fetch the preference for a (view type, view id) pair
    async fn get_preference(
        &self,
        view_type: &str,
        view_id: &str,
    ) -> PreferenceResult<Option<ViewPreference>>;

    /// Create or replace the preference for a (view type, view id) pair
    async fn upsert_preference(
        &self,
        view_type: &str,
        view_id: &str,
        preference: &ViewPreference,
    ) -> PreferenceResult<()>;
}

/// Local key-value fallback store for preferences.
///
/// Keys have the form `coretet_view_<type>_<id>`; see
/// [`crate::types::ViewContext::storage_key`].
#[cfg_attr(feature = "mocks", automock)]
#[async_trait]
pub trait LocalFallbackStore: Send + Sync {
    /// Read the preference stored under a key
    async fn get(&self, key: &str) -> PreferenceResult<Option<ViewPreference>>;

    /// Store a preference under a key
    async fn set(&self, key: &str, value: &ViewPreference) -> PreferenceResult<()>;

    /// Delete the entry under a key
    async fn delete(&self, key: &str) -> PreferenceResult<()>;
}
