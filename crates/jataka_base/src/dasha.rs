//! Vimshottari dasha: the 120-year, 9-lord planetary period cycle.
//!
//! The Moon's nakshatra lord opens the sequence, and the fraction of the
//! nakshatra the Moon has already traversed is the fraction of that
//! opening period already elapsed. The timeline start is back-computed
//! from that balance, then the 9 periods are laid out contiguously in the
//! fixed rotation of [`LORD_CYCLE`].
//!
//! Period lengths use a flat 365.25-day year: the dasha is a
//! civil-calendar proration of the nakshatra fraction, not a sidereal-
//! year computation, so the constant must stay 365.25 to agree with
//! conventional tables.

use serde::Serialize;

use jataka_time::CivilMoment;

use crate::body::Body;
use crate::error::ChartError;
use crate::nakshatra::{LORD_CYCLE, NAKSHATRA_SPAN, nakshatra_at};
use crate::util::{normalize_360, round_to_precision};

/// Year length for dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Total length of one full cycle in years.
pub const TOTAL_CYCLE_YEARS: f64 = 120.0;

/// Period length in years per lord, parallel to [`LORD_CYCLE`].
/// Ketu 7, Venus 20, Sun 6, Moon 10, Mars 7, Rahu 18, Jupiter 16,
/// Saturn 19, Mercury 17; sums to 120.
pub const DASHA_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Full-cycle period length in years for a lord.
pub fn dasha_years(lord: Body) -> f64 {
    // LORD_CYCLE covers all 9 bodies exactly once.
    let idx = LORD_CYCLE.iter().position(|&b| b == lord).unwrap_or(0);
    DASHA_YEARS[idx]
}

/// One period of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Body,
    pub duration_years: f64,
    pub start_jd: f64,
    pub end_jd: f64,
    /// Civil UTC reconstruction of `start_jd`.
    #[serde(rename = "start_date")]
    pub start: CivilMoment,
    /// Civil UTC reconstruction of `end_jd`.
    #[serde(rename = "end_date")]
    pub end: CivilMoment,
    /// Years remaining, present only on the currently running period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_years: Option<f64>,
}

/// The current period plus the full 9-period sequence.
///
/// `current` mirrors `sequence[0]`, including its balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VimshottariDasha {
    pub current: DashaPeriod,
    pub sequence: Vec<DashaPeriod>,
}

/// Build the Vimshottari timeline from the Moon's longitude at a moment.
///
/// JD values are rounded to 6 digits and durations to 4 (fixed wire
/// precision); only the balance honors the caller's precision.
pub fn vimshottari_dasha(
    moon_longitude: f64,
    jd: f64,
    precision: u8,
) -> Result<VimshottariDasha, ChartError> {
    if !moon_longitude.is_finite() {
        return Err(ChartError::non_finite("moon longitude", moon_longitude));
    }
    if !jd.is_finite() {
        return Err(ChartError::non_finite("julian day", jd));
    }

    let nak = nakshatra_at(moon_longitude);
    let fraction = (normalize_360(moon_longitude) % NAKSHATRA_SPAN) / NAKSHATRA_SPAN;
    let opening_duration = dasha_years(nak.lord);
    let balance_years = (1.0 - fraction) * opening_duration;

    let start_index = LORD_CYCLE
        .iter()
        .position(|&b| b == nak.lord)
        .unwrap_or(0);
    let mut cursor = jd - (opening_duration - balance_years) * DAYS_PER_YEAR;

    let mut sequence = Vec::with_capacity(9);
    for i in 0..9 {
        let idx = (start_index + i) % 9;
        let duration_years = DASHA_YEARS[idx];
        let start_jd = cursor;
        let end_jd = cursor + duration_years * DAYS_PER_YEAR;
        sequence.push(DashaPeriod {
            lord: LORD_CYCLE[idx],
            duration_years: round_to_precision(duration_years, 4),
            start_jd: round_to_precision(start_jd, 6),
            end_jd: round_to_precision(end_jd, 6),
            start: CivilMoment::from_julian_day(start_jd),
            end: CivilMoment::from_julian_day(end_jd),
            balance_years: None,
        });
        cursor = end_jd;
    }

    sequence[0].balance_years = Some(round_to_precision(balance_years, precision));
    let current = sequence[0];

    Ok(VimshottariDasha { current, sequence })
}
