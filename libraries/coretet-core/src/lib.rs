//! Coretet Core
//!
//! Domain types, collaborator traits, and error handling for the Coretet
//! ordering core.
//!
//! This crate is the foundation shared by the sort/filter engine
//! (`coretet-engine`), the view-preference store (`coretet-prefs`), and the
//! remote client (`coretet-remote`).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `FilterState`, `ViewContext`, `ViewPreference`
//! - **Collaborator Traits**: `TrackSource`, `CollectionOrderSource`,
//!   `RemotePreferenceStore`, `LocalFallbackStore`
//! - **Ingress Boundary**: `TrackRecord` rows coerced into typed `Track`s
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use coretet_core::types::{Track, ViewContext, ViewPreference};
//!
//! let track = Track::new("My Favorite Song");
//!
//! let context = ViewContext::Category("songs".to_string());
//! let preference = ViewPreference::default_for(&context);
//! assert_eq!(context.storage_key(), "coretet_view_category_songs");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::Features;
pub use error::{CoreError, PreferenceStoreError, Result};
pub use traits::{
    CollectionOrderSource, LocalFallbackStore, PreferenceResult, RemotePreferenceStore,
    TrackSource,
};

// Export all types
pub use types::{
    validate_lineage, BpmRange, DateFilter, FilterState, Lineage, ManualPositions, PlaylistId,
    PreferenceUpdate, Rating, RatingFilter, SortColumn, SortDirection, Track, TrackId,
    TrackRecord, ViewContext, ViewMode, ViewPreference,
};
