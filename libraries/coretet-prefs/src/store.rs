//! View-preference store.
//!
//! Read path: remote, then local fallback (with migration-on-read), then the
//! context default. Write path: merge into the in-memory state first, then
//! persist from a detached task — the merged state is authoritative for
//! rendering whether or not the persist lands.

use coretet_core::config::Features;
use coretet_core::traits::{LocalFallbackStore, RemotePreferenceStore};
use coretet_core::types::{PreferenceUpdate, TrackId, ViewContext, ViewPreference};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::events::{PersistEvent, PersistOutcome};

/// Per-user store of view preferences, one record per view context.
///
/// Mutations return as soon as the in-memory merge is done; the persist runs
/// on a spawned task and reports its outcome on the event channel. Writes
/// from rapid successive user actions are not sequenced against each other;
/// a later write can resolve before an earlier one. The in-memory state
/// always reflects the last user intent, so rendering stays correct even
/// when the persisted order briefly lags. Cross-tab and cross-device races
/// are last-write-wins.
pub struct ViewPreferenceStore<R, L> {
    remote: Arc<R>,
    local: Arc<L>,
    features: Features,
    cache: Mutex<HashMap<String, ViewPreference>>,
    events: Mutex<Option<UnboundedSender<PersistEvent>>>,
}

impl<R, L> ViewPreferenceStore<R, L>
where
    R: RemotePreferenceStore + 'static,
    L: LocalFallbackStore + 'static,
{
    /// Create a store over the given collaborators
    pub fn new(remote: Arc<R>, local: Arc<L>, features: Features) -> Self {
        Self {
            remote,
            local,
            features,
            cache: Mutex::new(HashMap::new()),
            events: Mutex::new(None),
        }
    }

    /// Subscribe to persist outcomes.
    ///
    /// Replaces any previous subscriber. Sends are best-effort; dropping the
    /// receiver does not affect the store.
    pub async fn subscribe(&self) -> UnboundedReceiver<PersistEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        *self.events.lock().await = Some(sender);
        receiver
    }

    /// Get the preference for a context, resolving through the fallback
    /// chain on a cache miss. Concurrent first reads may each run the
    /// resolution; the last one to finish populates the cache. Never fails:
    /// every failure degrades to the next source and ultimately to the
    /// context default.
    pub async fn get(&self, context: &ViewContext) -> ViewPreference {
        let key = context.storage_key();
        if let Some(preference) = self.cache.lock().await.get(&key) {
            return preference.clone();
        }

        let preference = self.load(context, &key).await;
        self.cache
            .lock()
            .await
            .insert(key, preference.clone());
        preference
    }

    /// Merge a partial update and persist best-effort
    pub async fn update_preferences(
        &self,
        context: &ViewContext,
        update: PreferenceUpdate,
    ) -> ViewPreference {
        self.mutate(context, |preference| preference.merge(update))
            .await
    }

    /// Set the manual position of one track and persist best-effort
    pub async fn update_manual_position(
        &self,
        context: &ViewContext,
        track_id: TrackId,
        position: u32,
    ) -> ViewPreference {
        self.mutate(context, |preference| {
            preference
                .manual_positions
                .get_or_insert_with(Default::default)
                .insert(track_id, position);
        })
        .await
    }

    /// Remove one track's manual position and persist best-effort
    pub async fn remove_manual_position(
        &self,
        context: &ViewContext,
        track_id: &TrackId,
    ) -> ViewPreference {
        self.mutate(context, |preference| {
            if let Some(positions) = preference.manual_positions.as_mut() {
                positions.remove(track_id);
            }
        })
        .await
    }

    /// Drop every manual position and persist best-effort
    pub async fn clear_manual_positions(&self, context: &ViewContext) -> ViewPreference {
        self.mutate(context, |preference| {
            preference.manual_positions = None;
        })
        .await
    }

    async fn load(&self, context: &ViewContext, key: &str) -> ViewPreference {
        if self.features.remote_preferences {
            match self
                .remote
                .get_preference(context.view_type(), &context.view_id())
                .await
            {
                Ok(Some(preference)) => {
                    debug!(key, "adopted remote preference");
                    return preference;
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(key, error = %error, "remote preference read failed, treating as not found");
                }
            }
        }

        match self.local.get(key).await {
            Ok(Some(preference)) => {
                if self.features.remote_preferences {
                    self.migrate(context, key, &preference).await;
                }
                return preference;
            }
            Ok(None) => {}
            Err(error) => {
                warn!(key, error = %error, "local fallback read failed");
            }
        }

        ViewPreference::default_for(context)
    }

    /// Migration-on-read: push a legacy local record to the remote store,
    /// deleting the local entry only once the write has succeeded.
    async fn migrate(&self, context: &ViewContext, key: &str, preference: &ViewPreference) {
        match self
            .remote
            .upsert_preference(context.view_type(), &context.view_id(), preference)
            .await
        {
            Ok(()) => match self.local.delete(key).await {
                Ok(()) => debug!(key, "migrated local preference to remote"),
                Err(error) => {
                    warn!(key, error = %error, "failed to delete migrated local preference");
                }
            },
            Err(error) => {
                debug!(key, error = %error, "migration write failed, keeping local entry");
            }
        }
    }

    /// Merge an update into the current record and hand the result to a
    /// detached persist task. On a cache miss the current record is resolved
    /// through the read path first, so a write issued before any read merges
    /// into persisted state rather than a fresh default.
    async fn mutate<F>(&self, context: &ViewContext, apply: F) -> ViewPreference
    where
        F: FnOnce(&mut ViewPreference),
    {
        let key = context.storage_key();
        let current = self.get(context).await;
        let merged = {
            let mut cache = self.cache.lock().await;
            let preference = cache.entry(key.clone()).or_insert(current);
            apply(preference);
            preference.clone()
        };

        self.spawn_persist(context, key, merged.clone()).await;
        merged
    }

    /// Fire-and-forget persist: the caller is not blocked on the remote
    /// round-trip, and the outcome goes to the event channel.
    async fn spawn_persist(&self, context: &ViewContext, key: String, preference: ViewPreference) {
        let remote = Arc::clone(&self.remote);
        let local = Arc::clone(&self.local);
        let remote_enabled = self.features.remote_preferences;
        let sender = self.events.lock().await.clone();
        let view_type = context.view_type();
        let view_id = context.view_id();

        tokio::spawn(async move {
            let outcome = persist(
                remote.as_ref(),
                local.as_ref(),
                remote_enabled,
                view_type,
                &view_id,
                &key,
                &preference,
            )
            .await;
            if let Some(sender) = sender {
                // Receiver may be gone; that is fine for a telemetry channel
                let _ = sender.send(PersistEvent { key, outcome });
            }
        });
    }
}

async fn persist<R, L>(
    remote: &R,
    local: &L,
    remote_enabled: bool,
    view_type: &str,
    view_id: &str,
    key: &str,
    preference: &ViewPreference,
) -> PersistOutcome
where
    R: RemotePreferenceStore,
    L: LocalFallbackStore,
{
    if !remote_enabled {
        return match local.set(key, preference).await {
            Ok(()) => PersistOutcome::LocalOnly,
            Err(error) => {
                warn!(key, error = %error, "local preference persist failed");
                PersistOutcome::Failed(error.to_string())
            }
        };
    }

    match remote.upsert_preference(view_type, view_id, preference).await {
        Ok(()) => PersistOutcome::Remote,
        Err(error) if error.is_unsupported() => {
            debug!(key, "remote preference operation not provisioned, using local fallback");
            match local.set(key, preference).await {
                Ok(()) => PersistOutcome::LocalFallback,
                Err(error) => {
                    warn!(key, error = %error, "local fallback persist failed");
                    PersistOutcome::Failed(error.to_string())
                }
            }
        }
        Err(error) => {
            warn!(key, error = %error, "remote preference persist failed");
            PersistOutcome::Failed(error.to_string())
        }
    }
}
