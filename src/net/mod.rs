//! Networking modules for the backend REST interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the three REST calls (list, predict, trigger-sync) and
//! `types` defines the wire schema those calls deserialize into.

pub mod api;
pub mod types;
