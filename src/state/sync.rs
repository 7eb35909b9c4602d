//! Sync-trigger busy flag.
//!
//! Kept separate from inventory and prediction state: a sync in flight never
//! blocks predict requests or a list render, and vice versa.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

/// Whether a `POST /trigger-sync` request is currently in flight.
///
/// Set when the request is issued and cleared when it settles, success or
/// failure. There is no timeout: a hung request leaves the flag set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncState {
    pub syncing: bool,
}
