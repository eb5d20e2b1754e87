//! Greenwich Mean Sidereal Time and mean obliquity of the ecliptic.
//!
//! GMST is the cubic polynomial in Julian centuries seeded by the linear
//! term `280.46061837 + 360.98564736629 * D`; local sidereal time adds the
//! observer's east longitude. Both are expressed in degrees, normalized to
//! [0, 360), matching the ascendant formula's inputs.

use crate::julian::{days_since_j2000, julian_centuries};

/// Greenwich Mean Sidereal Time in degrees, normalized to [0, 360).
pub fn gmst_degrees(jd: f64) -> f64 {
    let d = days_since_j2000(jd);
    let t = julian_centuries(jd);
    let gmst =
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t - t * t * t / 38_710_000.0;
    gmst.rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and observer east longitude, in degrees.
pub fn local_sidereal_degrees(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}

/// Mean obliquity of the ecliptic in degrees: `23.4393 - 0.0130 * T`.
pub fn mean_obliquity_degrees(jd: f64) -> f64 {
    23.4393 - 0.0130 * julian_centuries(jd)
}
