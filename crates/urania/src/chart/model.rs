use crate::aspects::{Aspect, AspectKind, AspectTable};
use crate::ephemeris::{BirthData, EphemerisError};
use crate::houses::House;
use crate::layout::Placement;
use crate::points::{ChartPoint, PointId};
use serde::Serialize;
use thiserror::Error;

/// Errors that abort a chart computation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}

/// A fully derived natal chart.
///
/// Built once by the assembler and read-only afterwards. `placements[i]` is
/// the display position of `points[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct NatalChart {
    #[serde(skip_serializing_if = "Option::is_none")]
    birth: Option<BirthData>,
    points: Vec<ChartPoint>,
    houses: Vec<House>,
    aspects: Vec<Aspect>,
    placements: Vec<Placement>,
    aspect_table: AspectTable,
}

impl NatalChart {
    pub(crate) fn new(
        points: Vec<ChartPoint>,
        houses: Vec<House>,
        aspects: Vec<Aspect>,
        placements: Vec<Placement>,
        aspect_table: AspectTable,
    ) -> Self {
        Self {
            birth: None,
            points,
            houses,
            aspects,
            placements,
            aspect_table,
        }
    }

    pub(crate) fn with_birth(mut self, birth: BirthData) -> Self {
        self.birth = Some(birth);
        self
    }

    /// Birth data, when the chart was computed from a provider call
    pub fn birth(&self) -> Option<&BirthData> {
        self.birth.as_ref()
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn aspect_table(&self) -> &AspectTable {
        &self.aspect_table
    }

    pub fn point(&self, id: PointId) -> Option<&ChartPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Point and placement for a catalogue index
    pub fn placed(&self, index: usize) -> Option<(&ChartPoint, &Placement)> {
        let pos = self.points.iter().position(|p| p.index == index)?;
        Some((&self.points[pos], self.placements.get(pos)?))
    }

    pub fn aspect_kind(&self, aspect: &Aspect) -> Option<&AspectKind> {
        self.aspect_table.get(aspect.aspect_type)
    }

    /// The aspect recorded for a pair of catalogue indices, in either order.
    pub fn aspect_between(&self, a: usize, b: usize) -> Option<&Aspect> {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.aspects
            .iter()
            .find(|asp| asp.point1 == lo && asp.point2 == hi)
    }
}
