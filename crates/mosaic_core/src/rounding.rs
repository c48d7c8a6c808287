//! Rounding policy shared by every reported figure.
//!
//! All values are rounded half away from zero (`f64::round`), so `2.345`
//! becomes `2.35` and `-2.345` becomes `-2.35` modulo binary representation.

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
