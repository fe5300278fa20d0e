//! Imperial to metric conversions

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.205;

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds / LB_PER_KG
}

/// Above this magnitude an f64 has no fractional digits left to cut
const NO_FRACTION: f64 = 1e15;

/// Cut a value to two decimal places (toward zero) and format it
///
/// Values too large to carry a fraction are formatted unchanged. A
/// conversion that overflowed f64 prints as `inf`. Negative zero prints as
/// `0.00`.
pub fn two_places(value: f64) -> String {
    if !value.is_finite() || value.abs() >= NO_FRACTION {
        return format!("{:.2}", value);
    }

    // nudge past binary representation error, e.g. 165.1 * 100 = 16509.999...
    let cut = (value * 100.0 + value.signum() * 1e-7).trunc() / 100.0;
    let cut = if cut == 0.0 { 0.0 } else { cut };
    format!("{:.2}", cut)
}
