//! Utility helpers shared across dashboard modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting logic lives here so page and component code stays thin
//! and the number/label rendering is testable off the browser.

pub mod format;
