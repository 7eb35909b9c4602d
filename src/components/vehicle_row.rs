//! One inventory table row, with its formatted cell model.
//!
//! DESIGN
//! ======
//! Cell formatting is split into a pure `row_model` builder so the
//! missing-field fallbacks and prediction styling stay unit-testable; the
//! component itself only lays the model out.

#[cfg(test)]
#[path = "vehicle_row_test.rs"]
mod vehicle_row_test;

use leptos::prelude::*;

use crate::net::types::{Prediction, Vehicle};
use crate::util::format::{
    MISSING, format_km, format_signed_usd, format_usd, format_usd_optional, format_year,
};

/// Style class for a prediction above the listed price.
pub const DIFF_OVER_CLASS: &str = "vehicle-row__diff--over";
/// Style class for a prediction at or below the listed price.
pub const DIFF_UNDER_CLASS: &str = "vehicle-row__diff--under";

/// Formatted prediction cell contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionCell {
    /// Predicted price, e.g. `$47,000`.
    pub predicted: String,
    /// Signed delta against the listed price, e.g. `-$3,000 vs Actual`.
    /// Absent when the listing carried no price to compare against.
    pub difference: Option<String>,
    /// `DIFF_OVER_CLASS` when the model predicts above the listed price,
    /// `DIFF_UNDER_CLASS` otherwise.
    pub class: &'static str,
}

/// Formatted cell strings for one table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowModel {
    pub title: String,
    pub vin: String,
    pub year: String,
    pub mileage: String,
    pub trim: String,
    pub price: String,
    pub prediction: Option<PredictionCell>,
}

/// Build the formatted cell model for a vehicle and its prediction, if one
/// has settled. Missing scraped fields fall back to the placeholder dash.
pub fn row_model(vehicle: &Vehicle, prediction: Option<&Prediction>) -> RowModel {
    RowModel {
        title: vehicle.title.clone().unwrap_or_else(|| MISSING.to_owned()),
        vin: vehicle.vin.clone().unwrap_or_else(|| MISSING.to_owned()),
        year: format_year(vehicle.year),
        mileage: format_km(vehicle.mileage),
        trim: vehicle.trim.clone().unwrap_or_else(|| MISSING.to_owned()),
        price: format_usd_optional(vehicle.price),
        prediction: prediction.map(prediction_cell),
    }
}

fn prediction_cell(prediction: &Prediction) -> PredictionCell {
    let over = prediction.difference.is_some_and(|d| d > 0.0);
    PredictionCell {
        predicted: format_usd(prediction.predicted_price),
        difference: prediction
            .difference
            .map(|d| format!("{} vs Actual", format_signed_usd(d))),
        class: if over { DIFF_OVER_CLASS } else { DIFF_UNDER_CLASS },
    }
}

/// One `<tr>` in the inventory table.
///
/// Receives plain props; the page rebuilds rows inside a reactive closure
/// whenever the inventory list or the prediction map changes.
#[component]
pub fn VehicleRow(
    vehicle: Vehicle,
    prediction: Option<Prediction>,
    on_predict: Callback<i64>,
) -> impl IntoView {
    let id = vehicle.id;
    let model = row_model(&vehicle, prediction.as_ref());

    view! {
        <tr class="vehicle-row">
            <td class="vehicle-row__vehicle">
                <span class="vehicle-row__title">{model.title}</span>
                <span class="vehicle-row__vin">{model.vin}</span>
            </td>
            <td class="vehicle-row__specs">
                <span class="vehicle-row__year">{model.year}</span>
                <span class="vehicle-row__mileage">{model.mileage}</span>
                <span class="vehicle-row__trim">{model.trim}</span>
            </td>
            <td class="vehicle-row__price">{model.price}</td>
            <td class="vehicle-row__prediction">
                {match model.prediction {
                    Some(PredictionCell { predicted, difference, class }) => {
                        view! {
                            <span class="vehicle-row__predicted">{predicted}</span>
                            {difference.map(|label| view! { <span class=class>{label}</span> })}
                        }
                            .into_any()
                    }
                    None => view! { <span class="vehicle-row__no-prediction">"No prediction"</span> }.into_any(),
                }}
            </td>
            <td class="vehicle-row__actions">
                <button class="btn vehicle-row__predict" on:click=move |_| on_predict.run(id)>
                    "Predict Price"
                </button>
            </td>
        </tr>
    }
}
