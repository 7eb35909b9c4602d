//! REST helpers for the inventory backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Native builds:
//! stubs returning errors, so pure logic stays testable off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics; transport
//! errors and non-success statuses both surface as human-readable strings
//! the page can log or alert without crashing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Prediction, Vehicle};

/// Backend base address. Fixed in this version, not configurable at runtime.
pub const API_BASE: &str = "http://localhost:8000";

#[cfg(any(test, feature = "csr"))]
fn vehicles_endpoint() -> String {
    format!("{API_BASE}/vehicles")
}

#[cfg(any(test, feature = "csr"))]
fn predict_endpoint(vehicle_id: i64) -> String {
    format!("{API_BASE}/vehicles/{vehicle_id}/predict")
}

#[cfg(any(test, feature = "csr"))]
fn trigger_sync_endpoint() -> String {
    format!("{API_BASE}/trigger-sync")
}

#[cfg(any(test, feature = "csr"))]
fn vehicles_failed_message(status: u16) -> String {
    format!("vehicle list request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn predict_failed_message(status: u16) -> String {
    format!("prediction request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn sync_failed_message(status: u16) -> String {
    format!("sync trigger failed: {status}")
}

/// Fetch the full vehicle collection from `GET /vehicles`.
///
/// # Errors
///
/// Returns an error string if the request fails in transport, the server
/// responds with a non-success status, or the body does not parse.
pub async fn fetch_vehicles() -> Result<Vec<Vehicle>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&vehicles_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(vehicles_failed_message(resp.status()));
        }
        resp.json::<Vec<Vehicle>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Request a price prediction for one vehicle from
/// `GET /vehicles/{id}/predict`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-success status, or an
/// unparseable body.
pub async fn fetch_prediction(vehicle_id: i64) -> Result<Prediction, String> {
    #[cfg(feature = "csr")]
    {
        let url = predict_endpoint(vehicle_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(predict_failed_message(resp.status()));
        }
        resp.json::<Prediction>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = vehicle_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Kick off the backend scrape job via `POST /trigger-sync`.
///
/// Fire-and-acknowledge: a success only means the job was started, never
/// that it finished. The response body is ignored.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn trigger_sync() -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&trigger_sync_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sync_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
