//! The validation boundary for chart requests.
//!
//! Civil date and time arrive as strings and are checked for shape here:
//! strict field widths and all-digit segments. Calendar legality is NOT
//! revalidated (a Feb 30 yields an undefined but non-crashing numeric
//! result downstream), and geographic coordinates are taken as already
//! resolved by the caller's geocoder.

use jataka_base::{ChartError, round_to_precision};
use jataka_time::CivilMoment;

/// Default rounding precision when the caller supplies none.
pub const DEFAULT_PRECISION: u8 = 4;

/// Check that a segment has exactly `width` ASCII digits.
fn digits(segment: &str, width: usize) -> Option<u32> {
    if segment.len() != width || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_civil_date(date: &str) -> Result<(i32, u32, u32), ChartError> {
    if date.is_empty() {
        return Err(ChartError::Validation {
            message: "Missing required field: birth_date".into(),
            hint: "Provide birth_date in YYYY-MM-DD",
        });
    }
    let invalid = || ChartError::Validation {
        message: format!("Invalid date format: {date:?}"),
        hint: "Use YYYY-MM-DD",
    };
    let mut parts = date.split('-');
    let year = parts.next().and_then(|s| digits(s, 4)).ok_or_else(invalid)?;
    let month = parts.next().and_then(|s| digits(s, 2)).ok_or_else(invalid)?;
    let day = parts.next().and_then(|s| digits(s, 2)).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((year as i32, month, day))
}

/// Parse a `HH:MM` or `HH:MM:SS` time string. Seconds default to 0.
pub fn parse_civil_time(time: &str) -> Result<(u32, u32, u32), ChartError> {
    if time.is_empty() {
        return Err(ChartError::Validation {
            message: "Missing required field: birth_time".into(),
            hint: "Provide birth_time in HH:MM or HH:MM:SS",
        });
    }
    let invalid = || ChartError::Validation {
        message: format!("Invalid time format: {time:?}"),
        hint: "Use HH:MM or HH:MM:SS",
    };
    let mut parts = time.split(':');
    let hour = parts.next().and_then(|s| digits(s, 2)).ok_or_else(invalid)?;
    let minute = parts.next().and_then(|s| digits(s, 2)).ok_or_else(invalid)?;
    let second = match parts.next() {
        Some(s) => digits(s, 2).ok_or_else(invalid)?,
        None => 0,
    };
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((hour, minute, second))
}

/// Clamp a requested precision to [1, 6]; `None` means the default.
pub fn clamp_precision(requested: Option<i64>) -> u8 {
    match requested {
        Some(p) => p.clamp(1, 6) as u8,
        None => DEFAULT_PRECISION,
    }
}

/// A validated chart request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRequest {
    pub moment: CivilMoment,
    /// Decimal degrees, north positive.
    pub latitude: f64,
    /// Decimal degrees, east positive.
    pub longitude: f64,
    pub precision: u8,
}

impl ChartRequest {
    /// Parse and validate the raw request fields.
    pub fn parse(
        date: &str,
        time: &str,
        utc_offset_minutes: i32,
        latitude: f64,
        longitude: f64,
        precision: Option<i64>,
    ) -> Result<Self, ChartError> {
        let (year, month, day) = parse_civil_date(date)?;
        let (hour, minute, second) = parse_civil_time(time)?;
        Ok(Self {
            moment: CivilMoment::new(year, month, day, hour, minute, second, utc_offset_minutes),
            latitude,
            longitude,
            precision: clamp_precision(precision),
        })
    }

    /// Round a value at this request's precision.
    pub fn round(&self, value: f64) -> f64 {
        round_to_precision(value, self.precision)
    }
}
