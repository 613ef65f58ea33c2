use crate::angles::{angular_distance, normalize_degrees};
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Tuning for the greedy de-collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Points closer than this (degrees) are pushed apart
    pub proximity_threshold: f64,
    /// Starting radius as a fraction of the inner radius
    pub start_ratio: f64,
    /// Radius factor for the later point of a close pair
    pub shrink: f64,
    /// Radius factor for the earlier point of a close pair
    pub grow: f64,
    /// Angular nudge in degrees applied to both points of a close pair
    pub nudge: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            proximity_threshold: 8.0,
            start_ratio: 0.75,
            shrink: 0.85,
            grow: 1.15,
            nudge: 2.0,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.proximity_threshold,
            self.start_ratio,
            self.shrink,
            self.grow,
            self.nudge,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::InvalidLayout(
                "layout values must be finite".to_string(),
            ));
        }
        if self.proximity_threshold < 0.0 || self.nudge < 0.0 {
            return Err(ConfigError::InvalidLayout(
                "proximity_threshold and nudge must not be negative".to_string(),
            ));
        }
        if self.start_ratio <= 0.0 || self.shrink <= 0.0 || self.grow <= 0.0 {
            return Err(ConfigError::InvalidLayout(
                "start_ratio, shrink and grow must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Display position of one chart point on the wheel.
///
/// Layout only: the point's true longitude is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Degrees, 0 at the top of the wheel, clockwise
    pub display_angle: f64,
    pub display_radius: f64,
}

impl Placement {
    pub fn to_cartesian(&self, cx: f64, cy: f64) -> (f64, f64) {
        polar_to_cartesian(cx, cy, self.display_radius, self.display_angle)
    }
}

/// Project polar wheel coordinates to canvas coordinates.
///
/// 0° sits at the top and angles grow clockwise; canvas y grows downward.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + radius * rad.sin(), cy - radius * rad.cos())
}

/// Single-pass greedy de-collision of point glyphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadialLayout {
    settings: LayoutSettings,
}

impl RadialLayout {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Place points given their longitudes, in input order.
    ///
    /// Each point is compared with every earlier point once, using the
    /// already adjusted angles. Dense clusters can keep residual overlaps.
    pub fn place(&self, longitudes: &[f64], inner_radius: f64) -> Vec<Placement> {
        let s = &self.settings;
        let mut placements: Vec<Placement> = longitudes
            .iter()
            .map(|lon| Placement {
                display_angle: *lon,
                display_radius: inner_radius * s.start_ratio,
            })
            .collect();

        let mut nudged = 0usize;
        for i in 0..placements.len() {
            for j in 0..i {
                let dist = angular_distance(placements[i].display_angle, placements[j].display_angle);
                if dist < s.proximity_threshold {
                    placements[i].display_radius *= s.shrink;
                    placements[j].display_radius *= s.grow;
                    placements[i].display_angle =
                        normalize_degrees(placements[i].display_angle + s.nudge);
                    placements[j].display_angle =
                        normalize_degrees(placements[j].display_angle - s.nudge);
                    nudged += 1;
                }
            }
        }

        log::debug!(
            "placed {} points, {} close pairs adjusted",
            placements.len(),
            nudged
        );
        placements
    }
}
