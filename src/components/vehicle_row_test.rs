use super::*;

fn vehicle() -> Vehicle {
    Vehicle {
        id: 1,
        title: Some("2021 Audi Q5 Progressiv".to_owned()),
        vin: Some("WA1BAAFY5M2000000".to_owned()),
        price: Some(50_000.0),
        mileage: Some(42_315.0),
        year: Some(2021.0),
        fuel_type: Some("Gasoline".to_owned()),
        transmission: Some("Automatic".to_owned()),
        listing_url: None,
        website_url: None,
        exterior_color: Some("Navarra Blue".to_owned()),
        engine: Some("2.0L TFSI".to_owned()),
        trim: Some("Progressiv".to_owned()),
        scraped_at: Some("2026-08-01T12:00:00Z".to_owned()),
    }
}

// =============================================================
// row_model without a prediction
// =============================================================

#[test]
fn row_formats_core_cells() {
    let model = row_model(&vehicle(), None);
    assert_eq!(model.title, "2021 Audi Q5 Progressiv");
    assert_eq!(model.year, "2021");
    assert_eq!(model.mileage, "42,315 km");
    assert_eq!(model.price, "$50,000");
    assert_eq!(model.prediction, None);
}

#[test]
fn sparse_record_falls_back_to_placeholders() {
    let sparse = Vehicle {
        id: 2,
        title: None,
        vin: None,
        price: None,
        mileage: None,
        year: None,
        fuel_type: None,
        transmission: None,
        listing_url: None,
        website_url: None,
        exterior_color: None,
        engine: None,
        trim: None,
        scraped_at: None,
    };
    let model = row_model(&sparse, None);
    assert_eq!(model.title, crate::util::format::MISSING);
    assert_eq!(model.price, crate::util::format::MISSING);
    assert_eq!(model.mileage, crate::util::format::MISSING);
}

// =============================================================
// Prediction cell
// =============================================================

// The worked example from the product contract: $50,000 listing, $47,000
// prediction, -$3,000 difference styled as "under".
#[test]
fn under_prediction_shows_negative_framing() {
    let prediction = Prediction {
        vehicle_id: 1,
        predicted_price: 47_000.0,
        actual_price: Some(50_000.0),
        difference: Some(-3_000.0),
    };
    let cell = row_model(&vehicle(), Some(&prediction))
        .prediction
        .expect("prediction cell");
    assert_eq!(cell.predicted, "$47,000");
    assert_eq!(cell.difference.as_deref(), Some("-$3,000 vs Actual"));
    assert_eq!(cell.class, DIFF_UNDER_CLASS);
}

#[test]
fn over_prediction_takes_over_class() {
    let prediction = Prediction {
        vehicle_id: 1,
        predicted_price: 52_500.0,
        actual_price: Some(50_000.0),
        difference: Some(2_500.0),
    };
    let cell = row_model(&vehicle(), Some(&prediction))
        .prediction
        .expect("prediction cell");
    assert_eq!(cell.difference.as_deref(), Some("+$2,500 vs Actual"));
    assert_eq!(cell.class, DIFF_OVER_CLASS);
}

#[test]
fn zero_difference_is_styled_under() {
    let prediction = Prediction {
        vehicle_id: 1,
        predicted_price: 50_000.0,
        actual_price: Some(50_000.0),
        difference: Some(0.0),
    };
    let cell = row_model(&vehicle(), Some(&prediction))
        .prediction
        .expect("prediction cell");
    assert_eq!(cell.class, DIFF_UNDER_CLASS);
}

// Unpriced listings predict fine but have nothing to compare against.
#[test]
fn missing_difference_omits_comparison_line() {
    let prediction = Prediction {
        vehicle_id: 1,
        predicted_price: 39_500.0,
        actual_price: None,
        difference: None,
    };
    let cell = row_model(&vehicle(), Some(&prediction))
        .prediction
        .expect("prediction cell");
    assert_eq!(cell.predicted, "$39,500");
    assert_eq!(cell.difference, None);
    assert_eq!(cell.class, DIFF_UNDER_CLASS);
}
