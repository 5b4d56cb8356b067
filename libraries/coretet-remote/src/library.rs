//! `TrackSource` and `CollectionOrderSource` over the backend's REST surface.
//!
//! Loose rows are coerced through `Track::from_record` at this boundary;
//! rows that fail coercion are logged and skipped rather than failing the
//! whole snapshot. The client's feature toggles apply here too: with
//! variation grouping disabled every track is flattened to a primary, and
//! with collection ordering disabled no order is fetched.

use crate::client::RemoteClient;
use crate::error::{RemoteClientError, Result};
use crate::types::{CollectionOrderRow, PlaylistTrackRow};
use async_trait::async_trait;
use coretet_core::traits::{CollectionOrderSource, TrackSource};
use coretet_core::types::{Lineage, PlaylistId, Track, TrackId, TrackRecord};
use reqwest::Method;
use tracing::{debug, warn};

fn coerce_tracks(records: Vec<TrackRecord>, variation_grouping: bool) -> Vec<Track> {
    records
        .into_iter()
        .filter_map(|record| match Track::from_record(record) {
            Ok(mut track) => {
                if !variation_grouping {
                    track.lineage = Lineage::Primary;
                }
                Some(track)
            }
            Err(error) => {
                warn!(error = %error, "skipping malformed track row");
                None
            }
        })
        .collect()
}

impl RemoteClient {
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| RemoteClientError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl TrackSource for RemoteClient {
    async fn list_tracks(&self) -> coretet_core::Result<Vec<Track>> {
        let records: Vec<TrackRecord> = self
            .fetch_json("/rest/v1/tracks", &[("select", "*".to_string())])
            .await?;

        let tracks = coerce_tracks(records, self.features().variation_grouping);
        debug!(count = tracks.len(), "fetched track snapshot");
        Ok(tracks)
    }

    async fn list_tracks_for_playlist(
        &self,
        playlist_id: &PlaylistId,
        preserve_order: bool,
    ) -> coretet_core::Result<Vec<Track>> {
        let order = if preserve_order {
            "position.asc"
        } else {
            "track(created_at).desc"
        };
        let rows: Vec<PlaylistTrackRow> = self
            .fetch_json(
                "/rest/v1/playlist_tracks",
                &[
                    ("select", "position,track:tracks(*)".to_string()),
                    ("playlist_id", format!("eq.{playlist_id}")),
                    ("order", order.to_string()),
                ],
            )
            .await?;

        let tracks = coerce_tracks(
            rows.into_iter().map(|row| row.track).collect(),
            self.features().variation_grouping,
        );
        debug!(
            playlist_id = %playlist_id,
            count = tracks.len(),
            preserve_order,
            "fetched playlist tracks"
        );
        Ok(tracks)
    }
}

#[async_trait]
impl CollectionOrderSource for RemoteClient {
    async fn get_order(&self, collection: &str) -> coretet_core::Result<Vec<TrackId>> {
        if !self.features().collection_ordering {
            debug!(collection, "collection ordering disabled, returning empty order");
            return Ok(Vec::new());
        }

        let mut rows: Vec<CollectionOrderRow> = self
            .fetch_json(
                "/rest/v1/collection_orders",
                &[
                    ("select", "track_ids".to_string()),
                    ("collection", format!("eq.{collection}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;

        Ok(rows
            .pop()
            .map(|row| row.track_ids.into_iter().map(TrackId::new).collect())
            .unwrap_or_default())
    }
}
