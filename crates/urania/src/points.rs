//! Chart point catalogue.
//!
//! The catalogue fixes the identity and order of every point a chart holds.
//! Algorithms iterate over whatever the catalogue contains and never assume
//! its length.

use crate::zodiac::classify;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
    Midheaven,
    NorthNode,
    Fortune,
}

/// How a point enters the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    /// Body longitude reported by the ephemeris provider
    Planet,
    /// Chart angle reported with the house cusps
    Angle,
    /// Lunar node reported by the ephemeris provider
    Node,
    /// Derived from other point longitudes
    Lot,
}

#[derive(Debug, Clone, Copy)]
pub struct PointDef {
    pub id: PointId,
    pub key: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
    pub kind: PointKind,
    /// House the point is pinned to instead of the arc test
    pub fixed_house: Option<usize>,
}

/// Reference catalogue in chart order
pub const CATALOGUE: &[PointDef] = &[
    PointDef { id: PointId::Sun, key: "sun", name: "Sun", glyph: "☉", color: "#FF9800", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Moon, key: "moon", name: "Moon", glyph: "☽", color: "#9E9E9E", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Mercury, key: "mercury", name: "Mercury", glyph: "☿", color: "#4CAF50", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Venus, key: "venus", name: "Venus", glyph: "♀", color: "#E91E63", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Mars, key: "mars", name: "Mars", glyph: "♂", color: "#F44336", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Jupiter, key: "jupiter", name: "Jupiter", glyph: "♃", color: "#90A4AE", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Saturn, key: "saturn", name: "Saturn", glyph: "♄", color: "#673AB7", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Uranus, key: "uranus", name: "Uranus", glyph: "♅", color: "#00A0B0", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Neptune, key: "neptune", name: "Neptune", glyph: "♆", color: "#1565C0", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Pluto, key: "pluto", name: "Pluto", glyph: "♇", color: "#3E2723", kind: PointKind::Planet, fixed_house: None },
    PointDef { id: PointId::Ascendant, key: "asc", name: "Ascendant", glyph: "ASC", color: "#FF5722", kind: PointKind::Angle, fixed_house: Some(0) },
    PointDef { id: PointId::Midheaven, key: "mc", name: "Midheaven", glyph: "MC", color: "#795548", kind: PointKind::Angle, fixed_house: Some(9) },
    PointDef { id: PointId::NorthNode, key: "north_node", name: "North Node", glyph: "☊", color: "#607D8B", kind: PointKind::Node, fixed_house: None },
    PointDef { id: PointId::Fortune, key: "fortune", name: "Part of Fortune", glyph: "POF", color: "#FFC107", kind: PointKind::Lot, fixed_house: None },
];

impl PointId {
    /// Position of this point in the reference catalogue.
    pub fn index(self) -> usize {
        CATALOGUE
            .iter()
            .position(|def| def.id == self)
            .unwrap_or(CATALOGUE.len())
    }

    pub fn def(self) -> &'static PointDef {
        &CATALOGUE[self.index()]
    }

    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn is_planet(self) -> bool {
        self.def().kind == PointKind::Planet
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        CATALOGUE
            .iter()
            .find(|def| def.key == lower)
            .map(|def| def.id)
            .ok_or_else(|| format!("unknown chart point: {}", s))
    }
}

/// Points of the given kind, in catalogue order.
pub fn of_kind(kind: PointKind) -> impl Iterator<Item = &'static PointDef> {
    CATALOGUE.iter().filter(move |def| def.kind == kind)
}

/// A body, angle or derived point placed in a chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Catalogue position, stable across charts
    pub index: usize,
    pub id: PointId,
    /// Ecliptic longitude, 0 <= longitude < 360
    pub longitude: f64,
    /// Speed in longitude (degrees per day), when the provider reports it
    pub speed: Option<f64>,
    pub sign: usize,
    pub sign_offset: f64,
    /// 0-based house index
    pub house: usize,
}

impl ChartPoint {
    pub fn new(id: PointId, longitude: f64, speed: Option<f64>, house: usize) -> Self {
        let position = classify(longitude);
        Self {
            index: id.index(),
            id,
            longitude,
            speed,
            sign: position.sign,
            sign_offset: position.offset,
            house,
        }
    }

    pub fn def(&self) -> &'static PointDef {
        self.id.def()
    }

    pub fn retrograde(&self) -> bool {
        self.speed.map_or(false, |s| s < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_resolves_to_its_own_entry() {
        for (i, def) in CATALOGUE.iter().enumerate() {
            assert_eq!(def.id.index(), i);
            assert_eq!(def.id.def().key, def.key);
        }
    }

    #[test]
    fn reference_catalogue_shape() {
        assert_eq!(CATALOGUE.len(), 14);
        assert_eq!(of_kind(PointKind::Planet).count(), 10);
        assert_eq!(PointId::Ascendant.def().fixed_house, Some(0));
        assert_eq!(PointId::Midheaven.def().fixed_house, Some(9));
    }

    #[test]
    fn parse_point_keys() {
        assert_eq!("sun".parse::<PointId>(), Ok(PointId::Sun));
        assert_eq!("North_Node".parse::<PointId>(), Ok(PointId::NorthNode));
        assert!("chiron".parse::<PointId>().is_err());
    }
}
