//! Per-vehicle prediction results, keyed by vehicle id.
//!
//! DESIGN
//! ======
//! Entries are added lazily as the user requests predictions and live for the
//! page session; refreshing the vehicle list never invalidates them. There is
//! no request sequencing: when several predict requests for the same vehicle
//! are in flight, the last response to settle wins, even if it was issued
//! first. That race is accepted — triggering is manual and infrequent.

#[cfg(test)]
#[path = "predictions_test.rs"]
mod predictions_test;

use std::collections::HashMap;

use crate::net::types::Prediction;

/// Map of vehicle id to its most recently settled prediction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionsState {
    by_vehicle: HashMap<i64, Prediction>,
}

impl PredictionsState {
    /// Store a settled prediction, overwriting any prior entry for the same
    /// vehicle. Other entries are untouched.
    pub fn apply(&mut self, prediction: Prediction) {
        self.by_vehicle.insert(prediction.vehicle_id, prediction);
    }

    /// Look up the prediction for a vehicle, if one has settled.
    pub fn get(&self, vehicle_id: i64) -> Option<&Prediction> {
        self.by_vehicle.get(&vehicle_id)
    }

    /// Number of vehicles with a stored prediction.
    pub fn len(&self) -> usize {
        self.by_vehicle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_vehicle.is_empty()
    }
}
