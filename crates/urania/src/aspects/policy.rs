use crate::angles::{FULL_CIRCLE, HALF_CIRCLE};
use crate::aspects::types::AspectKind;
use crate::points::ChartPoint;
use serde::{Deserialize, Serialize};

/// Decides whether a detected aspect is applying or separating.
///
/// `first` always carries the lower catalogue index of the pair.
pub trait ApplyingPolicy: Send + Sync {
    fn is_applying(
        &self,
        first: &ChartPoint,
        second: &ChartPoint,
        separation: f64,
        kind: &AspectKind,
    ) -> bool;
}

/// Longitude-order rule: applying when the first point sits behind the
/// second inside the short arc. Ignores speeds entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalPolicy;

impl ApplyingPolicy for PositionalPolicy {
    fn is_applying(
        &self,
        first: &ChartPoint,
        second: &ChartPoint,
        separation: f64,
        _kind: &AspectKind,
    ) -> bool {
        let (a, b) = (first.longitude, second.longitude);
        (a < b && separation < HALF_CIRCLE) || (a > b && separation > HALF_CIRCLE)
    }
}

/// Speed-projection rule: step both points forward in time and check
/// whether the separation moves toward the exact angle.
///
/// Falls back to [`PositionalPolicy`] when either point has no speed.
#[derive(Debug, Clone, Copy)]
pub struct MotionPolicy {
    /// Projection step in days
    pub time_step: f64,
    /// Relative speeds below this are treated as stationary
    pub min_relative_speed: f64,
}

impl Default for MotionPolicy {
    fn default() -> Self {
        Self {
            time_step: 0.1,
            min_relative_speed: 0.01,
        }
    }
}

fn wrap_signed(mut diff: f64) -> f64 {
    if diff > HALF_CIRCLE {
        diff -= FULL_CIRCLE;
    } else if diff < -HALF_CIRCLE {
        diff += FULL_CIRCLE;
    }
    diff
}

impl ApplyingPolicy for MotionPolicy {
    fn is_applying(
        &self,
        first: &ChartPoint,
        second: &ChartPoint,
        separation: f64,
        kind: &AspectKind,
    ) -> bool {
        let (speed1, speed2) = match (first.speed, second.speed) {
            (Some(s1), Some(s2)) => (s1, s2),
            _ => return PositionalPolicy.is_applying(first, second, separation, kind),
        };

        let relative_speed = speed1 - speed2;
        if relative_speed.abs() < self.min_relative_speed {
            return separation < kind.angle + 0.5;
        }

        let signed_diff = wrap_signed(first.longitude - second.longitude);
        let current_distance = (separation - kind.angle).abs();

        let future_diff = wrap_signed(signed_diff + relative_speed * self.time_step);
        let future_distance = (future_diff.abs() - kind.angle).abs();

        future_distance < current_distance
    }
}

/// Selects the applying rule from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyingMode {
    #[default]
    Positional,
    Motion,
}

impl ApplyingMode {
    pub fn policy(self) -> Box<dyn ApplyingPolicy> {
        match self {
            ApplyingMode::Positional => Box::new(PositionalPolicy),
            ApplyingMode::Motion => Box::new(MotionPolicy::default()),
        }
    }
}
