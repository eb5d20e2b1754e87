//! The closed set of chart bodies.
//!
//! Exactly 9 bodies participate in the chart: Sun through Saturn plus the
//! lunar-node pair Rahu/Ketu. Keeping this a closed enum (rather than
//! string labels) means a typo can never silently produce an empty house
//! bucket. The "Ascendant" pseudo-point used by the wheel renderer lives
//! in the rendering layer, not here.

use serde::{Serialize, Serializer};

/// The 9 chart bodies in canonical iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 bodies in canonical order (Sun=0 .. Ketu=8).
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter abbreviation used on the wheel diagram.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sun => "Su",
            Self::Moon => "Mo",
            Self::Mercury => "Me",
            Self::Venus => "Ve",
            Self::Mars => "Ma",
            Self::Jupiter => "Ju",
            Self::Saturn => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// 0-based index into ALL_BODIES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Body {
    /// Serializes as its English name.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
