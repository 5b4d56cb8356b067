/// Deployment feature toggles.
///
/// Constructed once at application start (from environment, hostname, or a
/// config file) and passed down explicitly; nothing in the core reads ambient
/// global state.
use serde::{Deserialize, Serialize};

/// Feature toggles for the ordering core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Persist view preferences to the remote store.
    ///
    /// When disabled the preference store skips the remote entirely and works
    /// against the local fallback alone.
    pub remote_preferences: bool,

    /// Honor externally supplied collection orderings for "added" sort
    pub collection_ordering: bool,

    /// Expose primary/variation grouping (the primary-only filter)
    pub variation_grouping: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            remote_preferences: true,
            collection_ordering: true,
            variation_grouping: true,
        }
    }
}

impl Features {
    /// All toggles off, useful for minimal deployments and tests
    pub fn none() -> Self {
        Self {
            remote_preferences: false,
            collection_ordering: false,
            variation_grouping: false,
        }
    }
}
