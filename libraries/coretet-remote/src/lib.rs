//! Coretet Remote Client
//!
//! HTTP implementation of the core's collaborator contracts against the
//! hosted backend's REST surface:
//!
//! - `RemotePreferenceStore` for view preferences
//! - `TrackSource` for library and playlist snapshots
//! - `CollectionOrderSource` for canonical collection orderings
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use coretet_core::Features;
//! use coretet_prefs::{MemoryFallbackStore, ViewPreferenceStore};
//! use coretet_remote::{RemoteClient, ServerConfig};
//!
//! let mut config = ServerConfig::new("https://project.example.co");
//! config.api_key = Some("anon-key".to_string());
//! let client = Arc::new(RemoteClient::new(config)?);
//!
//! let prefs = ViewPreferenceStore::new(
//!     client.clone(),
//!     Arc::new(MemoryFallbackStore::new()),
//!     Features::default(),
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod error;
mod library;
mod preferences;
mod types;

pub use client::RemoteClient;
pub use error::{RemoteClientError, Result};
pub use types::{CollectionOrderRow, PlaylistTrackRow, PreferenceRow, ServerConfig};
