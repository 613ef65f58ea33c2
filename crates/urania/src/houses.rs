//! House model and house assignment.
//!
//! Cusps come from the ephemeris provider in house order. The arc from
//! `cusps[h]` forward to `cusps[h + 1]` belongs to house `h`; arcs are not
//! assumed to be 30° wide.

use crate::angles::{forward_arc, in_arc, normalize_degrees, FULL_CIRCLE};
use crate::points::PointId;
use crate::rulers::classical_ruler;
use crate::zodiac::classify;
use serde::{Deserialize, Serialize};

pub const HOUSE_COUNT: usize = 12;

/// Traditional house topics, house 1 first
pub const HOUSE_TOPICS: [&str; HOUSE_COUNT] = [
    "Self",
    "Resources",
    "Communication",
    "Home",
    "Creativity",
    "Service",
    "Partnership",
    "Transformation",
    "Travel",
    "Career",
    "Community",
    "Seclusion",
];

/// One of the twelve houses of a chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    /// 0-based house index (0 = first house)
    pub index: usize,
    pub cusp_longitude: f64,
    pub sign: usize,
    pub sign_offset: f64,
    /// Classical ruler of the cusp sign
    pub ruler: Option<PointId>,
}

impl House {
    pub fn new(index: usize, cusp_longitude: f64) -> Self {
        let position = classify(cusp_longitude);
        Self {
            index,
            cusp_longitude,
            sign: position.sign,
            sign_offset: position.offset,
            ruler: classical_ruler(position.sign),
        }
    }

    /// Human-readable label, e.g. "House 10 (Career)".
    pub fn label(&self) -> String {
        house_label(self.index)
    }
}

pub fn house_label(index: usize) -> String {
    format!(
        "House {} ({})",
        index + 1,
        HOUSE_TOPICS[index % HOUSE_COUNT]
    )
}

/// Build the house table from provider cusps.
pub fn build_houses(cusps: &[f64]) -> Vec<House> {
    cusps
        .iter()
        .enumerate()
        .map(|(index, cusp)| House::new(index, *cusp))
        .collect()
}

/// Get house index from a point longitude.
///
/// Tests every arc in house order and returns the first that contains the
/// point. Falls back to house 0 when no arc matches, which only happens for
/// cusp sets that do not partition the circle.
pub fn assign_house(longitude: f64, cusps: &[f64]) -> usize {
    let count = cusps.len();
    for h in 0..count {
        let next = (h + 1) % count;
        if in_arc(longitude, cusps[h], cusps[next]) {
            return h;
        }
    }
    0
}

/// Total forward arc width of the cusp cycle minus a full circle.
///
/// Zero (within rounding) for a proper partition; any multiple of 360
/// signals cusps out of order.
pub fn partition_gap(cusps: &[f64]) -> f64 {
    let count = cusps.len();
    if count == 0 {
        return -FULL_CIRCLE;
    }
    let total: f64 = (0..count)
        .map(|h| forward_arc(cusps[h], cusps[(h + 1) % count]))
        .sum();
    total - FULL_CIRCLE
}

/// Whether the cusps split the circle into consecutive non-overlapping arcs.
pub fn is_partition(cusps: &[f64]) -> bool {
    cusps.len() == HOUSE_COUNT && partition_gap(cusps).abs() < 1e-6
}

/// Longitude halfway along the forward arc of house `h`.
pub fn house_midpoint(cusps: &[f64], h: usize) -> f64 {
    let count = cusps.len();
    let start = cusps[h % count];
    let end = cusps[(h + 1) % count];
    normalize_degrees(start + forward_arc(start, end) / 2.0)
}
