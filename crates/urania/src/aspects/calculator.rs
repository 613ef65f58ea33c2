use crate::angles::angular_distance;
use crate::aspects::policy::{ApplyingMode, ApplyingPolicy};
use crate::aspects::types::{Aspect, AspectTable};
use crate::points::ChartPoint;

/// Aspect calculator
pub struct AspectCalculator {
    table: AspectTable,
    policy: Box<dyn ApplyingPolicy>,
}

impl AspectCalculator {
    pub fn new(table: AspectTable, policy: Box<dyn ApplyingPolicy>) -> Self {
        Self { table, policy }
    }

    pub fn with_mode(table: AspectTable, mode: ApplyingMode) -> Self {
        Self::new(table, mode.policy())
    }

    pub fn table(&self) -> &AspectTable {
        &self.table
    }

    /// Find aspects between every unordered pair of points.
    ///
    /// Each pair yields at most one aspect: the first table entry whose orb
    /// window holds the separation.
    pub fn compute_aspects(&self, points: &[ChartPoint]) -> Vec<Aspect> {
        let aspects = detect_aspects(points, &self.table, self.policy.as_ref());
        log::debug!(
            "found {} aspects among {} points",
            aspects.len(),
            points.len()
        );
        aspects
    }

    /// Calculate the aspect between two points, if any.
    pub fn calculate_aspect(&self, a: &ChartPoint, b: &ChartPoint) -> Option<Aspect> {
        pair_aspect(a, b, &self.table, self.policy.as_ref())
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::with_mode(AspectTable::reference(), ApplyingMode::Positional)
    }
}

/// Detect aspects with an explicit table and applying rule.
pub fn detect_aspects(
    points: &[ChartPoint],
    table: &AspectTable,
    policy: &dyn ApplyingPolicy,
) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if let Some(aspect) = pair_aspect(&points[i], &points[j], table, policy) {
                aspects.push(aspect);
            }
        }
    }
    aspects
}

/// The pair is put in catalogue order first, so the result does not depend
/// on argument order.
fn pair_aspect(
    a: &ChartPoint,
    b: &ChartPoint,
    table: &AspectTable,
    policy: &dyn ApplyingPolicy,
) -> Option<Aspect> {
    if a.index == b.index {
        return None;
    }
    let (first, second) = if a.index < b.index { (a, b) } else { (b, a) };

    let separation = angular_distance(first.longitude, second.longitude);
    let (aspect_type, orb) = table.match_separation(separation)?;
    let kind = &table.kinds()[aspect_type];
    let applying = policy.is_applying(first, second, separation, kind);

    log::trace!(
        "{} {} {}: orb {:.2}, {}",
        first.id,
        kind.name,
        second.id,
        orb,
        if applying { "applying" } else { "separating" }
    );

    Some(Aspect {
        point1: first.index,
        point2: second.index,
        aspect_type,
        orb,
        applying,
    })
}
