//! Integration tests for the convenience facade.

use jataka_rs::*;

#[test]
fn natal_chart_one_call() {
    let chart = natal_chart("1990-05-15", "14:30", 330, 28.6139, 77.2090, None).unwrap();
    assert_eq!(chart.kp_table.len(), 21);
    assert_eq!(chart.vimshottari.sequence.len(), 9);
    assert_eq!(chart.meta.moment.to_string(), "1990-05-15T14:30:00+05:30");
}

#[test]
fn julian_day_matches_reference() {
    let jd = julian_day("2000-01-01", "12:00", 0).unwrap();
    assert_eq!(jd, J2000_JD);
}

#[test]
fn moon_dasha_matches_full_chart() {
    let dasha = moon_dasha("1990-05-15", "14:30", 330, None).unwrap();
    let chart = natal_chart("1990-05-15", "14:30", 330, 28.6139, 77.2090, None).unwrap();
    assert_eq!(dasha, chart.vimshottari);
}

#[test]
fn facade_exposes_component_functions() {
    // Partial recomputation through the re-exported surface.
    let jd = julian_day("2024-03-20", "12:00:00", 0).unwrap();
    let positions = planet_positions(jd, 4).unwrap();
    let moon = positions.get(Body::Moon);
    let info = nakshatra_at(moon.longitude);
    assert!(info.pada >= 1 && info.pada <= 4);
    assert_eq!(info.lord, LORD_CYCLE[info.nakshatra_index as usize % 9]);
}

#[test]
fn errors_propagate_through_facade() {
    let err = natal_chart("bad", "14:30", 0, 0.0, 0.0, None).unwrap_err();
    assert!(matches!(err, ChartError::Validation { .. }));
    let err = natal_chart("2024-03-20", "12:00", 0, 90.0, 0.0, None).unwrap_err();
    assert!(matches!(err, ChartError::Computation(_)));
}
