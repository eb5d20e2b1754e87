//! Civil calendar date/time and Julian Day conversion.
//!
//! Forward conversion follows the standard civil-to-Julian convention:
//! January and February are treated as months 13 and 14 of the prior year,
//! the UTC offset is subtracted from the minutes-of-day with a floored-
//! division day rollover, and the Gregorian correction `B = 2 - A + A/4`
//! is applied unconditionally (proleptic Gregorian calendar).
//!
//! The inverse is a Fliegel-Van-Flandern-style decomposition, also
//! unconditionally Gregorian, with the day fraction snapped to the nearest
//! whole second before the calendar arithmetic so a `:60` seconds field
//! can never appear and the round-trip error stays under one second.

use serde::{Serialize, Serializer};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Minutes per civil day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Days elapsed since J2000.0 (D), the argument of the mean-longitude
/// formulas.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

/// Julian centuries elapsed since J2000.0 (T).
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// A civil calendar moment with a resolved UTC offset.
///
/// Field ranges are the caller's responsibility (the parsing boundary
/// range-checks digits, not calendar legality); an impossible date like
/// Feb 30 yields a well-defined but meaningless Julian Day rather than an
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Signed offset from UTC in minutes (east positive).
    pub utc_offset_minutes: i32,
}

impl CivilMoment {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_minutes: i32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_minutes,
        }
    }

    /// Convert to a Julian Day, correcting for the UTC offset.
    pub fn to_julian_day(&self) -> f64 {
        let mut y = self.year as f64;
        let mut m = self.month as f64;
        if m <= 2.0 {
            y -= 1.0;
            m += 12.0;
        }

        let raw_minutes =
            self.hour as f64 * 60.0 + self.minute as f64 + self.second as f64 / 60.0;
        let corrected_minutes = raw_minutes - self.utc_offset_minutes as f64;
        // Floored division carries the day rollover when the offset pushes
        // the time across midnight in either direction.
        let day_shift = (corrected_minutes / MINUTES_PER_DAY).floor();
        let normalized_minutes = corrected_minutes - day_shift * MINUTES_PER_DAY;
        let day_value = self.day as f64 + day_shift + normalized_minutes / MINUTES_PER_DAY;

        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_value + b - 1524.5
    }

    /// Reconstruct a UTC civil moment (offset 0) from a Julian Day.
    ///
    /// Seconds are rounded to the nearest integer before the calendar
    /// decomposition, so a rounding carry propagates cleanly through
    /// minute, hour, and date.
    pub fn from_julian_day(jd: f64) -> Self {
        let j = jd + 0.5;
        let mut z = j.floor();
        let f = j - z;

        // Snap the day fraction to a whole second; a 86400 result rolls
        // into the next day.
        let mut total_seconds = (f * 86_400.0).round();
        if total_seconds >= 86_400.0 {
            total_seconds -= 86_400.0;
            z += 1.0;
        }

        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        let a = z + 1.0 + alpha - (alpha / 4.0).floor();
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = (b - d - (30.6001 * e).floor()) as u32;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = (total_seconds % 60.0) as u32;

        Self {
            year: year as i32,
            month: month as u32,
            day,
            hour,
            minute,
            second,
            utc_offset_minutes: 0,
        }
    }
}

impl std::fmt::Display for CivilMoment {
    /// ISO-8601: `Z` suffix for offset 0, `+hh:mm`/`-hh:mm` otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.utc_offset_minutes == 0 {
            write!(f, "Z")
        } else {
            let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
            let abs = self.utc_offset_minutes.unsigned_abs();
            write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
        }
    }
}

impl Serialize for CivilMoment {
    /// Serializes as its ISO-8601 rendering (the wire carries timestamps
    /// as strings).
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
