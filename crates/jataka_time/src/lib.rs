//! Time axis for the jataka chart engine.
//!
//! Converts civil date/time with a UTC offset to the Julian Day count all
//! astronomy is computed on, and back. Also provides Greenwich/local
//! sidereal time and the mean obliquity of the ecliptic, the inputs for
//! the ascendant computation in `jataka_base`.
//!
//! The calendar is proleptic Gregorian throughout: the Gregorian leap-year
//! correction is applied unconditionally in both directions, so the
//! round-trip `CivilMoment` → JD → `CivilMoment` holds for any 4-digit
//! year. No leap seconds; UTC offsets are plain minute counts supplied by
//! the caller.

pub mod julian;
pub mod sidereal;

pub use julian::{
    CivilMoment, DAYS_PER_CENTURY, J2000_JD, MINUTES_PER_DAY, days_since_j2000, julian_centuries,
};
pub use sidereal::{gmst_degrees, local_sidereal_degrees, mean_obliquity_degrees};
