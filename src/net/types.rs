//! Wire DTOs for the inventory backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response schema exactly so serde
//! round-trips stay lossless. Every vehicle field except `id` is nullable at
//! the source (scraped data is patchy), so the render layer treats missing
//! fields as placeholders rather than defaults.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One inventory listing as returned by `GET /vehicles`.
///
/// Immutable once received; the dashboard replaces the whole list on each
/// fetch and never edits a record in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Backend row identifier.
    pub id: i64,
    /// Listing title, e.g. `"2021 Audi Q5 Progressiv"`.
    #[serde(default)]
    pub title: Option<String>,
    /// Vehicle identification number.
    #[serde(default)]
    pub vin: Option<String>,
    /// Asking price in dollars.
    #[serde(default)]
    pub price: Option<f64>,
    /// Odometer reading in kilometres.
    #[serde(default)]
    pub mileage: Option<f64>,
    /// Model year. The backend serves this as a float.
    #[serde(default)]
    pub year: Option<f64>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    /// Dealer listing page.
    #[serde(default)]
    pub listing_url: Option<String>,
    /// Manufacturer site page.
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub exterior_color: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    /// Trim level, e.g. `"Progressiv"`.
    #[serde(default)]
    pub trim: Option<String>,
    /// When the scraper captured this record (ISO-8601 string).
    #[serde(default)]
    pub scraped_at: Option<String>,
}

/// Price estimate for one vehicle, from `GET /vehicles/{id}/predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The vehicle this estimate belongs to.
    pub vehicle_id: i64,
    /// Model-predicted price in dollars.
    pub predicted_price: f64,
    /// Listed price at prediction time, if the listing had one.
    #[serde(default)]
    pub actual_price: Option<f64>,
    /// Signed `predicted_price - actual_price`; absent when the listing had
    /// no price.
    #[serde(default)]
    pub difference: Option<f64>,
}
