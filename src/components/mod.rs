//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render table rows and chrome while the page owns fetch
//! orchestration and state updates.

pub mod vehicle_row;
