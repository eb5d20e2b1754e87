//! Golden tests for planetary positions and the ascendant.
//!
//! Pure-math tests, no fixture files needed.

use jataka_base::{Body, Sign, ascendant, mean_longitude_deg, normalize_360, planet_positions};
use jataka_time::{CivilMoment, J2000_JD};

// ---------------------------------------------------------------------------
// Planetary positions
// ---------------------------------------------------------------------------

#[test]
fn sun_and_moon_at_j2000_noon() {
    let sun = mean_longitude_deg(Body::Sun, J2000_JD);
    assert!((sun - 280.46).abs() < 0.01, "Sun = {sun}, expected ~280.46");
    let moon = mean_longitude_deg(Body::Moon, J2000_JD);
    assert!(
        (moon - 218.316).abs() < 0.001,
        "Moon = {moon}, expected ~218.316"
    );
}

#[test]
fn node_antipodal_across_a_century() {
    // Rahu/Ketu stay exactly 180 deg apart at any epoch.
    for k in 0..100 {
        let jd = 2_433_282.5 + k as f64 * 365.25;
        let rahu = mean_longitude_deg(Body::Rahu, jd);
        let ketu = mean_longitude_deg(Body::Ketu, jd);
        let gap = normalize_360(ketu - rahu);
        assert!((gap - 180.0).abs() < 1e-9, "jd {jd}: gap {gap}");
    }
}

#[test]
fn moon_outpaces_saturn() {
    // Daily motion ordering: Moon ~13.18 deg/day, Saturn ~0.033 deg/day.
    let jd = 2_460_000.5;
    let moon_step = normalize_360(
        mean_longitude_deg(Body::Moon, jd + 1.0) - mean_longitude_deg(Body::Moon, jd),
    );
    let saturn_step = normalize_360(
        mean_longitude_deg(Body::Saturn, jd + 1.0) - mean_longitude_deg(Body::Saturn, jd),
    );
    assert!((moon_step - 13.176).abs() < 0.001);
    assert!((saturn_step - 0.0334).abs() < 0.001);
}

#[test]
fn all_positions_normalized_and_signed() {
    let positions = planet_positions(2_466_520.75, 4).unwrap();
    for pos in positions.iter() {
        assert!(
            (0.0..360.0).contains(&pos.longitude),
            "{}: {}",
            pos.body,
            pos.longitude
        );
        assert!((0.0..30.0).contains(&pos.degree_in_sign), "{}", pos.body);
        assert_eq!(pos.sign, Sign::from_longitude(pos.longitude), "{}", pos.body);
    }
}

#[test]
fn precision_controls_rounding() {
    let coarse = planet_positions(2_460_000.123_456, 1).unwrap();
    let fine = planet_positions(2_460_000.123_456, 6).unwrap();
    for (c, f) in coarse.iter().zip(fine.iter()) {
        assert!((c.longitude - f.longitude).abs() <= 0.05 + 1e-9, "{}", c.body);
        // One fractional digit: value times 10 is integral.
        let scaled = c.longitude * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9, "{}", c.body);
    }
}

// ---------------------------------------------------------------------------
// Ascendant
// ---------------------------------------------------------------------------

#[test]
fn ascendant_for_known_moment() {
    // 1990-05-15 14:30 IST, New Delhi. The exact value is pinned by the
    // formula; check the derived fields agree with the longitude.
    let m = CivilMoment::new(1990, 5, 15, 14, 30, 0, 330);
    let asc = ascendant(m.to_julian_day(), 28.6139, 77.2090, 4).unwrap();
    assert_eq!(asc.sign, Sign::from_longitude(asc.longitude));
    assert!((asc.degree_in_sign - asc.longitude % 30.0).abs() < 1e-4);
    assert!((0.0..360.0).contains(&asc.longitude));
}

#[test]
fn ascendant_advances_with_time() {
    // Over ~2 hours the ascendant moves roughly a sign.
    let base = CivilMoment::new(2024, 3, 20, 6, 0, 0, 0).to_julian_day();
    let asc1 = ascendant(base, 51.5, 0.0, 6).unwrap();
    let asc2 = ascendant(base + 2.0 / 24.0, 51.5, 0.0, 6).unwrap();
    let moved = normalize_360(asc2.longitude - asc1.longitude);
    assert!(
        (10.0..60.0).contains(&moved),
        "ascendant moved {moved} deg in 2 h"
    );
}

#[test]
fn gmst_seed_at_j2000() {
    let asc = ascendant(J2000_JD, 10.0, 0.0, 4).unwrap();
    assert!(
        (asc.greenwich_sidereal_time - 280.4606).abs() < 0.001,
        "gmst = {}",
        asc.greenwich_sidereal_time
    );
    assert_eq!(asc.local_sidereal_time, asc.greenwich_sidereal_time);
}
