//! Convenience wrapper for the jataka natal chart engine.
//!
//! Re-exports the full public surface so callers only need
//! `use jataka_rs::*`, plus string-in helpers for the common one-call
//! flows.
//!
//! # Quick start
//!
//! ```rust
//! use jataka_rs::*;
//!
//! let chart = natal_chart("1990-05-15", "14:30", 330, 28.6139, 77.2090, None).unwrap();
//! println!("Ascendant: {:.4} deg in {}", chart.ascendant.longitude, chart.ascendant.sign);
//! ```

pub mod convenience;

pub use convenience::{julian_day, moon_dasha, natal_chart};

// Re-export the component crates' surfaces so callers don't need to
// depend on them directly.
pub use jataka_base::{
    ALL_BODIES, ALL_NAKSHATRAS, ALL_SIGNS, Ascendant, Body, ChartError, DASHA_YEARS,
    DAYS_PER_YEAR, DashaPeriod, HouseCusp, LORD_CYCLE, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo,
    PADA_SPAN, PlanetPositions, PlanetaryPosition, Sign, TOTAL_CYCLE_YEARS, VimshottariDasha,
    ascendant, dasha_years, degree_in_sign, house_cusps, house_number, mean_longitude_deg,
    nakshatra_at, normalize_360, planet_positions, round_to_precision, sub_lord, vimshottari_dasha,
};
pub use jataka_chart::{
    ChartMeta, ChartRequest, ChartResult, DEFAULT_PRECISION, DrawInstruction, HouseOccupancy,
    KpPoint, KpRow, Wheel, WheelOptions, WheelPoint, build_kp_table, clamp_precision,
    compute_chart, organize_houses, parse_civil_date, parse_civil_time, render_wheel,
};
pub use jataka_time::{
    CivilMoment, DAYS_PER_CENTURY, J2000_JD, MINUTES_PER_DAY, days_since_j2000, gmst_degrees,
    julian_centuries, local_sidereal_degrees, mean_obliquity_degrees,
};
