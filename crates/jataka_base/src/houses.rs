//! Equal-house cusps and house containment.
//!
//! The 12 cusps sit at exact 30-degree increments from the ascendant
//! (equal-house system; no Placidus/Koch support). House membership is
//! wrap-aware half-open arc containment, so the arc crossing 0/360 deg is
//! handled like any other.

use serde::Serialize;

use crate::sign::{Sign, degree_in_sign};
use crate::util::{normalize_360, round_to_precision};

/// One of the 12 house cusps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusp {
    /// House number, 1-12.
    #[serde(rename = "cusp_number")]
    pub number: u8,
    #[serde(rename = "cusp_longitude")]
    pub longitude: f64,
    #[serde(rename = "zodiac_sign")]
    pub sign: Sign,
    pub degree_in_sign: f64,
}

/// Place the 12 equal-house cusps from an ascendant longitude.
pub fn house_cusps(asc_longitude: f64, precision: u8) -> [HouseCusp; 12] {
    std::array::from_fn(|i| {
        let lon = normalize_360(asc_longitude + i as f64 * 30.0);
        HouseCusp {
            number: i as u8 + 1,
            longitude: round_to_precision(lon, precision),
            sign: Sign::from_longitude(lon),
            degree_in_sign: round_to_precision(degree_in_sign(lon), precision),
        }
    })
}

/// Half-open arc containment on the circle: is `lon` in [start, end)?
fn arc_contains(lon: f64, start: f64, end: f64) -> bool {
    let lon = normalize_360(lon);
    let start = normalize_360(start);
    let end = normalize_360(end);
    if start <= end {
        lon >= start && lon < end
    } else {
        // Arc crosses 0/360.
        lon >= start || lon < end
    }
}

/// House containing a longitude.
///
/// Falls back to house 12 if no arc matches; unreachable while the 12
/// cusps tile the full circle, kept so a display question can never abort
/// a chart.
pub fn house_number(longitude: f64, cusps: &[HouseCusp; 12]) -> u8 {
    for i in 0..12 {
        let start = cusps[i].longitude;
        let end = cusps[(i + 1) % 12].longitude;
        if arc_contains(longitude, start, end) {
            return cusps[i].number;
        }
    }
    12
}
