//! Display formatting for prices, mileage, and prediction differences.
//!
//! The backend serves numeric fields as nullable floats; everything here
//! rounds to whole units with comma grouping for display. Missing values
//! render as an em-dash placeholder, never as zero.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder shown for fields the scraper did not capture.
pub const MISSING: &str = "—";

/// Group a non-negative integer with comma thousands separators.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round a float to whole units and split off its sign.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rounded_magnitude(value: f64) -> (bool, u64) {
    let rounded = value.round();
    (rounded < 0.0, rounded.abs() as u64)
}

/// Format a dollar amount as `$47,000` (or `-$3,000` when negative).
pub fn format_usd(amount: f64) -> String {
    let (negative, magnitude) = rounded_magnitude(amount);
    let grouped = group_thousands(magnitude);
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format an optional dollar amount, falling back to the placeholder.
pub fn format_usd_optional(amount: Option<f64>) -> String {
    amount.map_or_else(|| MISSING.to_owned(), format_usd)
}

/// Format a signed difference with an explicit `+` on positive values,
/// e.g. `+$2,500` or `-$3,000`. Zero carries no sign.
pub fn format_signed_usd(amount: f64) -> String {
    let formatted = format_usd(amount);
    let (negative, magnitude) = rounded_magnitude(amount);
    if negative || magnitude == 0 {
        formatted
    } else {
        format!("+{formatted}")
    }
}

/// Format an odometer reading as `12,345 km`, placeholder when absent.
pub fn format_km(mileage: Option<f64>) -> String {
    match mileage {
        Some(value) => {
            let (_, magnitude) = rounded_magnitude(value);
            format!("{} km", group_thousands(magnitude))
        }
        None => MISSING.to_owned(),
    }
}

/// Format a model year, placeholder when absent. The backend serves years
/// as floats (`2021.0`).
pub fn format_year(year: Option<f64>) -> String {
    match year {
        Some(value) => {
            let (_, magnitude) = rounded_magnitude(value);
            magnitude.to_string()
        }
        None => MISSING.to_owned(),
    }
}
