//! Chart assembly: the single composed entry point.

use serde::Serialize;

use jataka_base::{
    Ascendant, Body, ChartError, HouseCusp, PlanetPositions, VimshottariDasha, ascendant,
    house_cusps, planet_positions, vimshottari_dasha,
};
use jataka_time::CivilMoment;

use crate::input::ChartRequest;
use crate::kp::{HouseOccupancy, KpRow, build_kp_table, organize_houses};
use crate::wheel::{Wheel, WheelOptions, render_wheel};

/// Echo of the inputs a chart was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartMeta {
    pub moment: CivilMoment,
    pub julian_day: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub precision: u8,
}

/// The immutable chart aggregate.
///
/// Built once per request and never mutated; a recomputation is a new
/// aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    pub planets: PlanetPositions,
    pub ascendant: Ascendant,
    pub cusps: [HouseCusp; 12],
    pub houses: HouseOccupancy,
    pub kp_table: Vec<KpRow>,
    pub vimshottari: VimshottariDasha,
    pub wheel: Wheel,
}

/// Compute a full natal chart from a validated request.
///
/// Chains time conversion, planetary positions, ascendant and houses,
/// nakshatra/KP classification, the dasha timeline, and rendering. Either
/// the whole aggregate is produced or the first failure surfaces
/// unchanged.
pub fn compute_chart(request: &ChartRequest) -> Result<ChartResult, ChartError> {
    let jd = request.moment.to_julian_day();
    let precision = request.precision;

    let planets = planet_positions(jd, precision)?;
    let asc = ascendant(jd, request.latitude, request.longitude, precision)?;
    let cusps = house_cusps(asc.longitude, precision);
    let houses = organize_houses(&planets, &cusps);
    let kp_table = build_kp_table(&planets, &cusps, precision);
    let moon = planets.get(Body::Moon).longitude;
    let vimshottari = vimshottari_dasha(moon, jd, precision)?;
    let wheel = render_wheel(&asc, &planets, &cusps, &WheelOptions::default());

    Ok(ChartResult {
        meta: ChartMeta {
            moment: request.moment,
            julian_day: jd,
            latitude: request.latitude,
            longitude: request.longitude,
            precision,
        },
        planets,
        ascendant: asc,
        cusps,
        houses,
        kp_table,
        vimshottari,
        wheel,
    })
}
