use super::*;

fn prediction(vehicle_id: i64, predicted: f64) -> Prediction {
    Prediction {
        vehicle_id,
        predicted_price: predicted,
        actual_price: Some(50_000.0),
        difference: Some(predicted - 50_000.0),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_map_is_empty() {
    let state = PredictionsState::default();
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
    assert_eq!(state.get(1), None);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_stores_prediction_under_its_vehicle_id() {
    let mut state = PredictionsState::default();
    state.apply(prediction(1, 47_000.0));
    let stored = state.get(1).expect("entry for vehicle 1");
    assert_eq!(stored.predicted_price, 47_000.0);
    assert_eq!(state.len(), 1);
}

#[test]
fn apply_leaves_other_vehicles_untouched() {
    let mut state = PredictionsState::default();
    state.apply(prediction(1, 47_000.0));
    state.apply(prediction(2, 61_500.0));
    assert_eq!(state.get(1).map(|p| p.predicted_price), Some(47_000.0));
    assert_eq!(state.get(2).map(|p| p.predicted_price), Some(61_500.0));
}

// The last response to settle wins, even when it belongs to an earlier
// request. There is no sequencing token to discard stale responses.
#[test]
fn later_settling_response_overwrites_prior_entry() {
    let mut state = PredictionsState::default();
    state.apply(prediction(1, 48_000.0));
    state.apply(prediction(1, 45_000.0));
    assert_eq!(state.get(1).map(|p| p.predicted_price), Some(45_000.0));
    assert_eq!(state.len(), 1);
}
