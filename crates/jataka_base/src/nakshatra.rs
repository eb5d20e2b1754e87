//! Nakshatra (lunar mansion), pada, and KP sub-lord classification.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of
//! 3 deg 20' and a ruling lord drawn from the fixed 9-lord cycle starting
//! at Ketu; the lord repeats every 9 nakshatras (`index mod 9`).
//!
//! The KP sub-lord further divides each nakshatra into 9 equal ninths,
//! indexed into the same lord cycle. (Traditional KP sub-divisions are
//! proportional to dasha years; this engine uses the equal-ninth scheme.)

use serde::{Serialize, Serializer};

use crate::body::Body;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Ruling-lord cycle, repeated three times across the 27 nakshatras.
/// Also the fixed rotation order of the Vimshottari dasha.
pub const LORD_CYCLE: [Body; 9] = [
    Body::Ketu,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Rahu,
    Body::Jupiter,
    Body::Saturn,
    Body::Mercury,
];

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling lord: `LORD_CYCLE[index mod 9]`.
    pub const fn lord(self) -> Body {
        LORD_CYCLE[self.index() as usize % 9]
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Nakshatra {
    /// Serializes as its name.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Result of nakshatra lookup for one longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Ruling lord of the nakshatra.
    pub lord: Body,
    /// Decimal degrees within the nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Classify an ecliptic longitude into nakshatra, pada, and lord.
///
/// Invariant under full turns: `nakshatra_at(lon + 360)` is identical.
pub fn nakshatra_at(lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    let degrees_in_nakshatra = lon - idx as f64 * NAKSHATRA_SPAN;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    let nakshatra = ALL_NAKSHATRAS[idx];

    NakshatraInfo {
        nakshatra,
        nakshatra_index: idx as u8,
        pada,
        lord: nakshatra.lord(),
        degrees_in_nakshatra,
    }
}

/// KP sub-lord: the equal ninth of the nakshatra the longitude falls in,
/// indexed into the lord cycle.
pub fn sub_lord(lon_deg: f64) -> Body {
    let fraction = nakshatra_at(lon_deg).degrees_in_nakshatra / NAKSHATRA_SPAN;
    let idx = ((fraction * 9.0).floor() as usize).min(8);
    LORD_CYCLE[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_ashwini_pada_1() {
        let info = nakshatra_at(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.nakshatra_index, 0);
        assert_eq!(info.pada, 1);
        assert_eq!(info.lord, Body::Ketu);
    }

    #[test]
    fn fifteen_degrees_is_bharani() {
        let info = nakshatra_at(15.0);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert_eq!(info.nakshatra_index, 1);
        assert_eq!(info.lord, Body::Venus);
    }

    #[test]
    fn partition_matches_floor_division() {
        for tenth in 0..3600 {
            let lon = tenth as f64 / 10.0;
            let expected = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
            assert_eq!(nakshatra_at(lon).nakshatra_index, expected, "lon {lon}");
        }
    }

    #[test]
    fn invariant_under_full_turns() {
        for &lon in &[0.0, 15.0, 123.4, 289.7, 359.99] {
            assert_eq!(nakshatra_at(lon), nakshatra_at(lon + 360.0));
            assert_eq!(nakshatra_at(lon), nakshatra_at(lon - 720.0));
        }
    }

    #[test]
    fn pada_boundaries() {
        // Within Ashwini: padas flip at 3.333..., 6.666..., 10 deg.
        assert_eq!(nakshatra_at(PADA_SPAN - 0.001).pada, 1);
        assert_eq!(nakshatra_at(PADA_SPAN).pada, 2);
        assert_eq!(nakshatra_at(2.0 * PADA_SPAN).pada, 3);
        assert_eq!(nakshatra_at(3.0 * PADA_SPAN).pada, 4);
        assert_eq!(nakshatra_at(NAKSHATRA_SPAN - 0.001).pada, 4);
    }

    #[test]
    fn lord_cycle_repeats_every_9() {
        for nak in ALL_NAKSHATRAS {
            let expected = LORD_CYCLE[nak.index() as usize % 9];
            assert_eq!(nak.lord(), expected, "{nak}");
        }
        // Moon's own nakshatra Rohini is ruled by the Moon.
        assert_eq!(Nakshatra::Rohini.lord(), Body::Moon);
    }

    #[test]
    fn sub_lord_sweeps_all_nine() {
        // Equal ninths of Ashwini hit every lord in cycle order.
        for (i, lord) in LORD_CYCLE.iter().enumerate() {
            let lon = (i as f64 + 0.5) * NAKSHATRA_SPAN / 9.0;
            assert_eq!(sub_lord(lon), *lord, "ninth {i}");
        }
    }

    #[test]
    fn sub_lord_at_nakshatra_start_is_ketu() {
        assert_eq!(sub_lord(0.0), Body::Ketu);
        assert_eq!(sub_lord(NAKSHATRA_SPAN), Body::Ketu);
        assert_eq!(sub_lord(26.0 * NAKSHATRA_SPAN), Body::Ketu);
    }
}
