//! Mean ecliptic longitudes for the 9 chart bodies.
//!
//! Sun through Saturn use first-order mean elements: longitude =
//! `constant + rate * D` with D = days since J2000.0. There is no
//! eccentricity or perturbation correction; positions are mean-longitude
//! approximations, not ephemeris-grade. Rahu is the retrograde mean lunar
//! node `125.04 - 1934.136 * T` (T in Julian centuries) and Ketu sits
//! exactly 180 deg opposite.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use jataka_time::{days_since_j2000, julian_centuries};

use crate::body::{ALL_BODIES, Body};
use crate::error::ChartError;
use crate::sign::{Sign, degree_in_sign};
use crate::util::{normalize_360, round_to_precision};

/// Mean elements for the 7 classical bodies: (longitude at J2000 in deg,
/// rate in deg/day), in ALL_BODIES order Sun..Saturn.
const MEAN_ELEMENTS: [(f64, f64); 7] = [
    (280.460, 0.985_647_4),   // Sun
    (218.316, 13.176_396),    // Moon
    (60.750, 4.092_338_8),    // Mercury
    (88.307, 1.602_130_5),    // Venus
    (18.602, 0.524_020_75),   // Mars
    (19.895, 0.083_085_29),   // Jupiter
    (316.967, 0.033_444_14),  // Saturn
];

/// Rate of the mean lunar node in deg per Julian century (retrograde).
const NODE_RATE_PER_CENTURY: f64 = 1_934.136;

/// Mean longitude of the node at J2000 in degrees.
const NODE_AT_J2000: f64 = 125.04;

/// Unrounded mean ecliptic longitude of a body, normalized to [0, 360).
pub fn mean_longitude_deg(body: Body, jd: f64) -> f64 {
    let lon = match body {
        Body::Rahu => NODE_AT_J2000 - NODE_RATE_PER_CENTURY * julian_centuries(jd),
        Body::Ketu => mean_longitude_deg(Body::Rahu, jd) + 180.0,
        classical => {
            let (constant, rate) = MEAN_ELEMENTS[classical.index() as usize];
            constant + rate * days_since_j2000(jd)
        }
    };
    normalize_360(lon)
}

/// A body's position decomposed for chart consumers.
///
/// `longitude` and `normalized_longitude` carry the same rounded value;
/// both names are kept because downstream consumers read either.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryPosition {
    #[serde(skip)]
    pub body: Body,
    pub longitude: f64,
    pub normalized_longitude: f64,
    #[serde(rename = "zodiac_sign")]
    pub sign: Sign,
    pub degree_in_sign: f64,
}

/// Positions of all 9 bodies at one moment, in canonical body order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPositions {
    positions: [PlanetaryPosition; 9],
}

impl PlanetPositions {
    /// Position of a single body.
    pub fn get(&self, body: Body) -> &PlanetaryPosition {
        &self.positions[body.index() as usize]
    }

    /// All positions in canonical body order.
    pub fn iter(&self) -> impl Iterator<Item = &PlanetaryPosition> {
        self.positions.iter()
    }
}

impl Serialize for PlanetPositions {
    /// Serializes as a map keyed by body name, in canonical order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for pos in &self.positions {
            map.serialize_entry(pos.body.name(), pos)?;
        }
        map.end()
    }
}

/// Compute all 9 planetary positions at a Julian Day.
///
/// Pure closed-form computation; the only failure mode is a non-finite
/// `jd`.
pub fn planet_positions(jd: f64, precision: u8) -> Result<PlanetPositions, ChartError> {
    if !jd.is_finite() {
        return Err(ChartError::non_finite("julian day", jd));
    }

    let positions = ALL_BODIES.map(|body| {
        let lon = mean_longitude_deg(body, jd);
        let rounded = round_to_precision(lon, precision);
        PlanetaryPosition {
            body,
            longitude: rounded,
            normalized_longitude: rounded,
            sign: Sign::from_longitude(lon),
            degree_in_sign: round_to_precision(degree_in_sign(lon), precision),
        }
    });

    Ok(PlanetPositions { positions })
}
