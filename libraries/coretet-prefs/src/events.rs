//! Persist-outcome events.
//!
//! Persistence is fire-and-forget toward the caller; these events are the
//! documented failure channel for anyone who wants to observe it (telemetry,
//! tests). Dropping the receiver is fine — sends are best-effort.

/// Outcome of one persist attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Written to the remote store
    Remote,
    /// Remote operation unsupported; written to the local fallback instead
    LocalFallback,
    /// Remote disabled by configuration; written to the local fallback
    LocalOnly,
    /// The write was lost; carries the failure description
    Failed(String),
}

/// One persist attempt for one view context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistEvent {
    /// Storage key of the context (`coretet_view_<type>_<id>`)
    pub key: String,
    /// What happened to the write
    pub outcome: PersistOutcome,
}
