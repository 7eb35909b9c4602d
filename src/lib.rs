//! # inventory-dashboard
//!
//! Leptos + WASM single-page dashboard for a scraped vehicle inventory.
//! Renders the inventory table, requests per-vehicle price predictions,
//! and triggers the backend sync job.
//!
//! The backend (scraper, prediction model, sync orchestration) is an
//! external REST service; this crate is the presentational client only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// mount the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
