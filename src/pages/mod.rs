//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app is a single screen; `dashboard` owns fetch orchestration and
//! delegates row rendering to `components`.

pub mod dashboard;
