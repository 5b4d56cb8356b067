//! `RemotePreferenceStore` over the backend's REST surface.

use crate::client::RemoteClient;
use crate::error::Result;
use crate::types::PreferenceRow;
use async_trait::async_trait;
use coretet_core::traits::{PreferenceResult, RemotePreferenceStore};
use coretet_core::types::ViewPreference;
use reqwest::Method;
use tracing::debug;

const PREFERENCES_PATH: &str = "/rest/v1/view_preferences";

impl RemoteClient {
    async fn fetch_preference(
        &self,
        view_type: &str,
        view_id: &str,
    ) -> Result<Option<ViewPreference>> {
        let response = self
            .request(Method::GET, PREFERENCES_PATH)
            .query(&[
                ("view_type", format!("eq.{view_type}")),
                ("view_id", format!("eq.{view_id}")),
                ("limit", "1".to_string()),
            ])
            .send()
            .await?;
        let response = Self::check(response).await?;

        let mut rows: Vec<PreferenceRow> = response
            .json()
            .await
            .map_err(|e| crate::error::RemoteClientError::ParseError(e.to_string()))?;

        Ok(rows.pop().map(PreferenceRow::into_preference))
    }

    async fn push_preference(
        &self,
        view_type: &str,
        view_id: &str,
        preference: &ViewPreference,
    ) -> Result<()> {
        let row = PreferenceRow::from_preference(view_type, view_id, preference);
        let response = self
            .request(Method::POST, PREFERENCES_PATH)
            .query(&[("on_conflict", "view_type,view_id")])
            .header("Prefer", "resolution=merge-duplicates")
            .json(&row)
            .send()
            .await?;
        Self::check(response).await?;

        debug!(view_type, view_id, "persisted view preference");
        Ok(())
    }
}

#[async_trait]
impl RemotePreferenceStore for RemoteClient {
    async fn get_preference(
        &self,
        view_type: &str,
        view_id: &str,
    ) -> PreferenceResult<Option<ViewPreference>> {
        self.fetch_preference(view_type, view_id)
            .await
            .map_err(Into::into)
    }

    async fn upsert_preference(
        &self,
        view_type: &str,
        view_id: &str,
        preference: &ViewPreference,
    ) -> PreferenceResult<()> {
        self.push_preference(view_type, view_id, preference)
            .await
            .map_err(Into::into)
    }
}
