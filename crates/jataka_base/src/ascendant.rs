//! Ascendant computation via the equatorial-to-ecliptic transform.
//!
//! The ascendant is the ecliptic point rising on the eastern horizon:
//! `atan2(sin LST, cos LST * cos eps - tan lat * sin eps)`, with LST the
//! local sidereal time and eps the mean obliquity. `atan2` (never `atan`)
//! keeps the quadrant correct across all latitude/LST combinations.
//! Near-polar latitudes are a documented precision-degradation zone as
//! `tan(lat)` grows; exactly +/-90 deg is rejected because the tangent is
//! undefined there.

use serde::Serialize;

use jataka_time::{gmst_degrees, local_sidereal_degrees, mean_obliquity_degrees};

use crate::error::ChartError;
use crate::sign::{Sign, degree_in_sign};
use crate::util::{normalize_360, round_to_precision};

/// The rising point plus the sidereal times it was derived from.
///
/// Sidereal fields are degrees-equivalent in [0, 360) and deliberately
/// unrounded; they serialize under the short wire names `lst`/`gmst`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ascendant {
    pub longitude: f64,
    #[serde(rename = "zodiac_sign")]
    pub sign: Sign,
    pub degree_in_sign: f64,
    #[serde(rename = "lst")]
    pub local_sidereal_time: f64,
    #[serde(rename = "gmst")]
    pub greenwich_sidereal_time: f64,
}

/// Compute the ascendant for a Julian Day and geographic location.
///
/// `longitude_deg` is east-positive decimal degrees. Latitude exactly
/// +/-90 and any non-finite input fail with `Computation`.
pub fn ascendant(
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    precision: u8,
) -> Result<Ascendant, ChartError> {
    if !jd.is_finite() {
        return Err(ChartError::non_finite("julian day", jd));
    }
    if !latitude_deg.is_finite() {
        return Err(ChartError::non_finite("latitude", latitude_deg));
    }
    if !longitude_deg.is_finite() {
        return Err(ChartError::non_finite("longitude", longitude_deg));
    }
    if latitude_deg.abs() == 90.0 {
        return Err(ChartError::Computation(
            "ascendant is undefined at latitude +/-90 deg".into(),
        ));
    }

    let gmst = gmst_degrees(jd);
    let lst = local_sidereal_degrees(gmst, longitude_deg);

    let eps = mean_obliquity_degrees(jd).to_radians();
    let lat = latitude_deg.to_radians();
    let lst_rad = lst.to_radians();

    let raw = f64::atan2(
        lst_rad.sin(),
        lst_rad.cos() * eps.cos() - lat.tan() * eps.sin(),
    );
    let lon = normalize_360(raw.to_degrees());

    Ok(Ascendant {
        longitude: round_to_precision(lon, precision),
        sign: Sign::from_longitude(lon),
        degree_in_sign: round_to_precision(degree_in_sign(lon), precision),
        local_sidereal_time: lst,
        greenwich_sidereal_time: gmst,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_time::J2000_JD;

    #[test]
    fn equator_ascendant_tracks_lst_quadrant() {
        // On the equator tan(lat) = 0 and the formula reduces to the
        // projection of LST alone, so the ascendant shares its quadrant.
        let asc = ascendant(J2000_JD, 0.0, 0.0, 4).unwrap();
        let quadrant = (asc.local_sidereal_time / 90.0).floor();
        assert_eq!((asc.longitude / 90.0).floor(), quadrant);
    }

    #[test]
    fn sidereal_fields_are_normalized() {
        let asc = ascendant(2_460_000.5, 28.61, 77.2, 4).unwrap();
        assert!((0.0..360.0).contains(&asc.greenwich_sidereal_time));
        assert!((0.0..360.0).contains(&asc.local_sidereal_time));
        let expected_lst =
            (asc.greenwich_sidereal_time + 77.2).rem_euclid(360.0);
        assert!((asc.local_sidereal_time - expected_lst).abs() < 1e-9);
    }

    #[test]
    fn poles_rejected() {
        assert!(ascendant(J2000_JD, 90.0, 0.0, 4).is_err());
        assert!(ascendant(J2000_JD, -90.0, 10.0, 4).is_err());
        // Just inside the pole still computes (degraded precision zone).
        assert!(ascendant(J2000_JD, 89.9, 0.0, 4).is_ok());
    }

    #[test]
    fn non_finite_inputs_rejected() {
        assert!(ascendant(f64::NAN, 0.0, 0.0, 4).is_err());
        assert!(ascendant(J2000_JD, f64::INFINITY, 0.0, 4).is_err());
        assert!(ascendant(J2000_JD, 0.0, f64::NAN, 4).is_err());
    }

    #[test]
    fn southern_latitude_differs_from_northern() {
        let north = ascendant(2_460_000.5, 40.0, 0.0, 6).unwrap();
        let south = ascendant(2_460_000.5, -40.0, 0.0, 6).unwrap();
        assert_ne!(north.longitude, south.longitude);
        // Same instant and meridian: sidereal times agree.
        assert_eq!(north.local_sidereal_time, south.local_sidereal_time);
    }
}
