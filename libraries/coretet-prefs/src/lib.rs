//! Coretet View-Preference Store
//!
//! Per-context persistence for sort column, direction, view mode, and manual
//! drag order, with a remote store as the source of truth and a local
//! fallback for legacy data and unprovisioned deployments.
//!
//! Reads resolve remote → local fallback → context default and never fail;
//! a local hit is migrated to the remote store on read. Writes merge into
//! in-memory state first and persist best-effort from a detached task;
//! failures are logged and reported on an optional event channel, never
//! surfaced to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use coretet_core::{Features, types::{PreferenceUpdate, SortColumn, SortDirection, ViewContext}};
//! use coretet_prefs::{MemoryFallbackStore, ViewPreferenceStore};
//! # async fn example(remote: Arc<impl coretet_core::RemotePreferenceStore + 'static>) {
//! let store = ViewPreferenceStore::new(remote, Arc::new(MemoryFallbackStore::new()), Features::default());
//!
//! let context = ViewContext::Category("songs".to_string());
//! let preference = store.get(&context).await;
//!
//! store
//!     .update_preferences(&context, PreferenceUpdate::sort(SortColumn::Title, SortDirection::Asc))
//!     .await;
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod events;
mod memory;
mod store;

pub use events::{PersistEvent, PersistOutcome};
pub use memory::MemoryFallbackStore;
pub use store::ViewPreferenceStore;
