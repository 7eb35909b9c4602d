//! View-state modules shared across the dashboard UI.
//!
//! DESIGN
//! ======
//! Three independent pieces of state back the page: the inventory list (with
//! its loading flag), the prediction map, and the sync busy flag. They are
//! provided as separate context signals and never coordinate with each other,
//! so each module stays a plain data struct with no cross-dependencies.

pub mod inventory;
pub mod predictions;
pub mod sync;
