//! Radial wheel rendering.
//!
//! Maps every cusp and planet longitude to Cartesian coordinates with a
//! polar transform measured clockwise from the top of the wheel
//! (`longitude - 90` in math convention). Produces both an SVG markup
//! string and a parallel list of structured drawing instructions so
//! non-vector consumers can redraw the identical chart.
//!
//! Rendering is a presentation derivation only: it never fails, and a
//! point with no dedicated abbreviation degrades to a generic two-letter
//! label rather than aborting the chart.

use serde::Serialize;

use jataka_base::{Ascendant, Body, HouseCusp, PlanetPositions};

/// Stroke and label color of the wheel.
const INK: &str = "#0a2540";

/// Accent fill for the highlighted markers (Moon, the nodes, and the
/// ascendant).
const ACCENT: &str = "#FFAFCC";

/// A point drawn on the planet ring: a body or the ascendant pseudo-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelPoint {
    Body(Body),
    Ascendant,
}

impl WheelPoint {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Body(body) => body.name(),
            Self::Ascendant => "Ascendant",
        }
    }

    /// Two-letter marker label; the ascendant uses the generic fallback
    /// "As".
    pub const fn label(self) -> &'static str {
        match self {
            Self::Body(body) => body.label(),
            Self::Ascendant => "As",
        }
    }

    /// Markers drawn with the accent fill.
    const fn highlighted(self) -> bool {
        matches!(
            self,
            Self::Ascendant | Self::Body(Body::Moon) | Self::Body(Body::Rahu) | Self::Body(Body::Ketu)
        )
    }
}

impl Serialize for WheelPoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One drawing primitive, carrying unrounded coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawInstruction {
    Circle { cx: f64, cy: f64, r: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Planet { body: WheelPoint, x: f64, y: f64, label: &'static str },
}

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelOptions {
    /// Width and height of the square viewport in user units.
    pub size: f64,
}

impl Default for WheelOptions {
    fn default() -> Self {
        Self { size: 420.0 }
    }
}

/// The rendered wheel: markup plus the equivalent instruction list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wheel {
    pub svg: String,
    #[serde(rename = "canvas_instructions")]
    pub instructions: Vec<DrawInstruction>,
}

/// Polar transform: angle measured clockwise from the top of the wheel.
fn polar_point(angle_deg: f64, radius: f64, center: f64) -> (f64, f64) {
    let angle = (angle_deg - 90.0).to_radians();
    (center + radius * angle.cos(), center + radius * angle.sin())
}

/// Render the chart wheel.
pub fn render_wheel(
    ascendant: &Ascendant,
    positions: &PlanetPositions,
    cusps: &[HouseCusp; 12],
    options: &WheelOptions,
) -> Wheel {
    let size = options.size;
    let center = size / 2.0;
    let outer = center - 20.0;
    let inner = outer * 0.65;
    let planet_ring = outer - 30.0;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
         viewBox=\"0 0 {size} {size}\" role=\"img\" aria-label=\"Astrology wheel\">"
    );
    svg += &format!(
        "<circle cx=\"{center}\" cy=\"{center}\" r=\"{outer}\" fill=\"none\" stroke=\"{INK}\" stroke-width=\"2\" />"
    );
    svg += &format!(
        "<circle cx=\"{center}\" cy=\"{center}\" r=\"{inner}\" fill=\"none\" stroke=\"{INK}\" stroke-width=\"1\" />"
    );

    let mut instructions = vec![
        DrawInstruction::Circle { cx: center, cy: center, r: outer },
        DrawInstruction::Circle { cx: center, cy: center, r: inner },
    ];

    // House spokes plus a 3-letter sign label in the middle of each band.
    for cusp in cusps {
        let (x, y) = polar_point(cusp.longitude, outer, center);
        svg += &format!(
            "<line x1=\"{center}\" y1=\"{center}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{INK}\" stroke-width=\"1\" />",
            x, y
        );
        instructions.push(DrawInstruction::Line { x1: center, y1: center, x2: x, y2: y });

        let (lx, ly) = polar_point(cusp.longitude + 15.0, (outer + inner) / 2.0, center);
        let sign_name = cusp.sign.name();
        svg += &format!(
            "<text x=\"{lx:.2}\" y=\"{ly:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
             font-size=\"12\" fill=\"{INK}\">{}</text>",
            &sign_name[..3]
        );
    }

    // Planet markers, then the ascendant on the same ring.
    let points = positions
        .iter()
        .map(|pos| (WheelPoint::Body(pos.body), pos.longitude))
        .chain(std::iter::once((WheelPoint::Ascendant, ascendant.longitude)));
    for (point, longitude) in points {
        let (x, y) = polar_point(longitude, planet_ring, center);
        let fill = if point.highlighted() { ACCENT } else { INK };
        svg += &format!(
            "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"6\" fill=\"{fill}\" opacity=\"0.85\" />"
        );
        svg += &format!(
            "<text x=\"{x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"10\" fill=\"{INK}\">{}</text>",
            y + 3.0,
            point.label()
        );
        instructions.push(DrawInstruction::Planet { body: point, x, y, label: point.label() });
    }

    // Ascendant caption just inside the rim.
    let (ax, ay) = polar_point(ascendant.longitude, outer - 10.0, center);
    svg += &format!(
        "<text x=\"{ax:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{INK}\">Asc</text>",
        ay - 8.0
    );

    svg += "</svg>";
    Wheel { svg, instructions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_base::{ascendant, house_cusps, planet_positions};
    use jataka_time::J2000_JD;

    fn fixture() -> Wheel {
        let asc = ascendant(J2000_JD, 28.61, 77.2, 4).unwrap();
        let positions = planet_positions(J2000_JD, 4).unwrap();
        let cusps = house_cusps(asc.longitude, 4);
        render_wheel(&asc, &positions, &cusps, &WheelOptions::default())
    }

    #[test]
    fn instruction_census() {
        let wheel = fixture();
        let circles = wheel
            .instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::Circle { .. }))
            .count();
        let lines = wheel
            .instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::Line { .. }))
            .count();
        let planets = wheel
            .instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::Planet { .. }))
            .count();
        assert_eq!((circles, lines, planets), (2, 12, 10));
    }

    #[test]
    fn longitude_zero_sits_at_top() {
        let (x, y) = polar_point(0.0, 100.0, 210.0);
        assert!((x - 210.0).abs() < 1e-9);
        assert!((y - 110.0).abs() < 1e-9);
    }

    #[test]
    fn quarter_turns_go_clockwise() {
        let center = 210.0;
        let (x90, y90) = polar_point(90.0, 100.0, center);
        assert!((x90 - 310.0).abs() < 1e-9 && (y90 - center).abs() < 1e-9, "90 deg is right");
        let (x180, y180) = polar_point(180.0, 100.0, center);
        assert!((x180 - center).abs() < 1e-9 && (y180 - 310.0).abs() < 1e-9, "180 deg is bottom");
    }

    #[test]
    fn svg_shape() {
        let wheel = fixture();
        assert!(wheel.svg.starts_with("<svg "));
        assert!(wheel.svg.ends_with("</svg>"));
        assert!(wheel.svg.contains("aria-label=\"Astrology wheel\""));
        assert!(wheel.svg.contains(">Asc</text>"));
        // One marker per body plus the ascendant.
        assert_eq!(wheel.svg.matches(">Su<").count(), 1);
        assert_eq!(wheel.svg.matches(">As<").count(), 1);
    }

    #[test]
    fn highlighted_markers_use_accent() {
        let wheel = fixture();
        assert_eq!(wheel.svg.matches(ACCENT).count(), 4, "Moon, Rahu, Ketu, Asc");
    }

    #[test]
    fn ascendant_serializes_by_name() {
        let wheel = fixture();
        let json = serde_json::to_string(&wheel.instructions).unwrap();
        assert!(json.contains("\"body\":\"Ascendant\""));
        assert!(json.contains("\"label\":\"As\""));
        assert!(json.contains("\"type\":\"circle\""));
    }
}
