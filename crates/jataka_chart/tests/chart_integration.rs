//! End-to-end chart computation tests.

use jataka_base::{Body, normalize_360};
use jataka_chart::{ChartRequest, compute_chart};

fn delhi_chart() -> jataka_chart::ChartResult {
    let req = ChartRequest::parse("1990-05-15", "14:30", 330, 28.6139, 77.2090, None).unwrap();
    compute_chart(&req).unwrap()
}

#[test]
fn equal_house_invariant() {
    let chart = delhi_chart();
    for i in 0..11 {
        let gap = normalize_360(chart.cusps[i + 1].longitude - chart.cusps[i].longitude);
        assert!((gap - 30.0).abs() < 1e-4, "gap after cusp {}: {gap}", i + 1);
    }
    let last = normalize_360(chart.cusps[11].longitude - chart.ascendant.longitude);
    assert!((last - 330.0).abs() < 1e-4);
}

#[test]
fn every_body_has_a_kp_row_and_house() {
    let chart = delhi_chart();
    for pos in chart.planets.iter() {
        let row = chart
            .kp_table
            .iter()
            .find(|r| r.point == jataka_chart::KpPoint::Planet(pos.body))
            .unwrap_or_else(|| panic!("{} missing from KP table", pos.body));
        assert!((1..=12).contains(&row.house_number), "{}", pos.body);
        assert!(
            chart.houses.occupants(row.house_number).contains(&pos.body),
            "{} not in house {}",
            pos.body,
            row.house_number
        );
    }
}

#[test]
fn dasha_anchored_to_moon() {
    let chart = delhi_chart();
    let moon = chart.planets.get(Body::Moon).longitude;
    let expected_lord = jataka_base::nakshatra_at(moon).lord;
    assert_eq!(chart.vimshottari.current.lord, expected_lord);
    assert!(chart.vimshottari.current.balance_years.is_some());

    let jd = chart.meta.julian_day;
    let cur = &chart.vimshottari.current;
    assert!(cur.start_jd <= jd && jd <= cur.end_jd);
}

#[test]
fn different_offsets_shift_the_chart() {
    let utc = ChartRequest::parse("2000-01-01", "12:00", 0, 28.6139, 77.2090, None).unwrap();
    let ist = ChartRequest::parse("2000-01-01", "12:00", 330, 28.6139, 77.2090, None).unwrap();
    let a = compute_chart(&utc).unwrap();
    let b = compute_chart(&ist).unwrap();
    assert_eq!(a.meta.julian_day, 2_451_545.0);
    assert!(
        (a.meta.julian_day - b.meta.julian_day - 330.0 / 1440.0).abs() < 1e-9,
        "offset not applied"
    );
    assert_ne!(a.ascendant.longitude, b.ascendant.longitude);
}

#[test]
fn precision_flows_through_the_aggregate() {
    let req = ChartRequest::parse("1990-05-15", "14:30", 330, 28.6139, 77.2090, Some(2)).unwrap();
    let chart = compute_chart(&req).unwrap();
    for pos in chart.planets.iter() {
        let scaled = pos.longitude * 100.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "{} not rounded to 2 digits: {}",
            pos.body,
            pos.longitude
        );
    }
}

#[test]
fn validation_errors_surface_before_computation() {
    assert!(ChartRequest::parse("15-05-1990", "14:30", 330, 28.6, 77.2, None).is_err());
    assert!(ChartRequest::parse("1990-05-15", "2pm", 330, 28.6, 77.2, None).is_err());
}
