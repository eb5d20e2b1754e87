//! Natal-chart astronomy: planetary longitudes, ascendant and equal
//! houses, nakshatra/sub-lord classification, and the Vimshottari dasha.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! mutable state, no process-wide lifecycle. Concurrent chart
//! computations for independent requests need no locking.
//!
//! Positions are first-order mean longitudes on the tropical zodiac (no
//! perturbation theory, no ayanamsha); see `jataka_time` for the Julian
//! Day axis they are computed on.

pub mod ascendant;
pub mod body;
pub mod dasha;
pub mod error;
pub mod houses;
pub mod nakshatra;
pub mod planets;
pub mod sign;
pub mod util;

pub use ascendant::{Ascendant, ascendant};
pub use body::{ALL_BODIES, Body};
pub use dasha::{
    DASHA_YEARS, DAYS_PER_YEAR, DashaPeriod, TOTAL_CYCLE_YEARS, VimshottariDasha, dasha_years,
    vimshottari_dasha,
};
pub use error::ChartError;
pub use houses::{HouseCusp, house_cusps, house_number};
pub use nakshatra::{
    ALL_NAKSHATRAS, LORD_CYCLE, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_at,
    sub_lord,
};
pub use planets::{PlanetPositions, PlanetaryPosition, mean_longitude_deg, planet_positions};
pub use sign::{ALL_SIGNS, Sign, degree_in_sign};
pub use util::{normalize_360, round_to_precision};
