//! House occupancy and the flattened KP reading table.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use jataka_base::{
    Body, HouseCusp, Nakshatra, PlanetPositions, Sign, degree_in_sign, house_number, nakshatra_at,
    round_to_precision, sub_lord,
};

/// Mapping from house number (1-12) to its occupants, in canonical body
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HouseOccupancy {
    houses: [Vec<Body>; 12],
}

impl HouseOccupancy {
    /// Occupants of a house (1-12), in insertion order.
    pub fn occupants(&self, house: u8) -> &[Body] {
        &self.houses[(house.clamp(1, 12) as usize) - 1]
    }

    /// Total bodies across all houses; always 9 for a full chart.
    pub fn total_occupants(&self) -> usize {
        self.houses.iter().map(Vec::len).sum()
    }
}

impl Serialize for HouseOccupancy {
    /// Serializes as a map keyed `"1"` through `"12"`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(12))?;
        for (i, occupants) in self.houses.iter().enumerate() {
            map.serialize_entry(&(i + 1).to_string(), occupants)?;
        }
        map.end()
    }
}

/// Resolve each body's occupied house.
pub fn organize_houses(positions: &PlanetPositions, cusps: &[HouseCusp; 12]) -> HouseOccupancy {
    let mut occupancy = HouseOccupancy::default();
    for pos in positions.iter() {
        let house = house_number(pos.longitude, cusps);
        occupancy.houses[(house as usize - 1).min(11)].push(pos.body);
    }
    occupancy
}

/// What a KP-table row describes: a planet or a house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KpPoint {
    Planet(Body),
    Cusp(u8),
}

impl std::fmt::Display for KpPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planet(body) => f.write_str(body.name()),
            Self::Cusp(n) => write!(f, "Cusp {n}"),
        }
    }
}

impl Serialize for KpPoint {
    /// Serializes as its display string (`"Sun"`, `"Cusp 5"`).
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the KP table: the flattened view astrologers read from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpRow {
    #[serde(rename = "body")]
    pub point: KpPoint,
    pub longitude: f64,
    #[serde(rename = "zodiac_sign")]
    pub sign: Sign,
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub nakshatra_lord: Body,
    pub sub_lord: Body,
    pub house_number: u8,
}

fn kp_row(point: KpPoint, longitude: f64, sign: Sign, house: u8, precision: u8) -> KpRow {
    let nak = nakshatra_at(longitude);
    KpRow {
        point,
        longitude,
        sign,
        degree_in_sign: round_to_precision(degree_in_sign(longitude), precision),
        nakshatra: nak.nakshatra,
        pada: nak.pada,
        nakshatra_lord: nak.lord,
        sub_lord: sub_lord(longitude),
        house_number: house,
    }
}

/// Build the KP table: one row per planet, then one per cusp (a cusp's
/// resident house is its own number).
pub fn build_kp_table(
    positions: &PlanetPositions,
    cusps: &[HouseCusp; 12],
    precision: u8,
) -> Vec<KpRow> {
    let mut rows = Vec::with_capacity(21);
    for pos in positions.iter() {
        rows.push(kp_row(
            KpPoint::Planet(pos.body),
            pos.longitude,
            pos.sign,
            house_number(pos.longitude, cusps),
            precision,
        ));
    }
    for cusp in cusps {
        rows.push(kp_row(
            KpPoint::Cusp(cusp.number),
            cusp.longitude,
            cusp.sign,
            cusp.number,
            precision,
        ));
    }
    rows
}
