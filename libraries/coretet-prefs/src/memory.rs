//! In-process fallback store.
//!
//! The production fallback on the web build is browser local storage; this
//! in-memory equivalent backs native builds and tests.

use async_trait::async_trait;
use coretet_core::traits::{LocalFallbackStore, PreferenceResult};
use coretet_core::types::ViewPreference;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// A `LocalFallbackStore` over an in-process map
#[derive(Debug, Default)]
pub struct MemoryFallbackStore {
    entries: Mutex<HashMap<String, ViewPreference>>,
}

impl MemoryFallbackStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// True when no entries are stored
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl LocalFallbackStore for MemoryFallbackStore {
    async fn get(&self, key: &str) -> PreferenceResult<Option<ViewPreference>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &ViewPreference) -> PreferenceResult<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> PreferenceResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coretet_core::types::ViewContext;

    #[tokio::test]
    async fn set_get_delete_round_trip() {
        let store = MemoryFallbackStore::new();
        let preference = ViewPreference::default_for(&ViewContext::default_all());

        assert!(store.get("coretet_view_category_all").await.unwrap().is_none());

        store
            .set("coretet_view_category_all", &preference)
            .await
            .unwrap();
        assert_eq!(
            store.get("coretet_view_category_all").await.unwrap(),
            Some(preference)
        );
        assert_eq!(store.len().await, 1);

        store.delete("coretet_view_category_all").await.unwrap();
        assert!(store.is_empty().await);
    }
}
