//! Angle utilities shared by every other module.

/// Normalize an angle in degrees to [0, 360). Negative-safe.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Round to `precision` fractional digits, half away from zero.
///
/// Precision is clamped to [1, 6] at the input boundary, not here.
pub fn round_to_precision(value: f64, precision: u8) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    (value * factor).round() / factor
}
