//! One-call helpers over the chart engine.

use jataka_base::{Body, ChartError, VimshottariDasha, planet_positions, vimshottari_dasha};
use jataka_chart::{ChartRequest, ChartResult, clamp_precision, compute_chart};

/// Compute a full natal chart from raw request strings.
///
/// `date` is `YYYY-MM-DD`, `time` is `HH:MM` or `HH:MM:SS`, the offset is
/// signed minutes east of UTC, and `precision` (fractional digits,
/// clamped to 1-6) defaults to 4 when `None`.
pub fn natal_chart(
    date: &str,
    time: &str,
    utc_offset_minutes: i32,
    latitude: f64,
    longitude: f64,
    precision: Option<i64>,
) -> Result<ChartResult, ChartError> {
    let request = ChartRequest::parse(date, time, utc_offset_minutes, latitude, longitude, precision)?;
    compute_chart(&request)
}

/// Julian Day for raw date/time strings and a UTC offset.
pub fn julian_day(date: &str, time: &str, utc_offset_minutes: i32) -> Result<f64, ChartError> {
    let (year, month, day) = jataka_chart::parse_civil_date(date)?;
    let (hour, minute, second) = jataka_chart::parse_civil_time(time)?;
    let moment = jataka_time::CivilMoment::new(
        year,
        month,
        day,
        hour,
        minute,
        second,
        utc_offset_minutes,
    );
    Ok(moment.to_julian_day())
}

/// Vimshottari timeline for a birth moment, without assembling the full
/// chart: computes the Moon's longitude and hands it to the dasha
/// generator.
pub fn moon_dasha(
    date: &str,
    time: &str,
    utc_offset_minutes: i32,
    precision: Option<i64>,
) -> Result<VimshottariDasha, ChartError> {
    let precision = clamp_precision(precision);
    let jd = julian_day(date, time, utc_offset_minutes)?;
    let moon = planet_positions(jd, precision)?.get(Body::Moon).longitude;
    vimshottari_dasha(moon, jd, precision)
}
