use crate::config::{validate_color, ConfigError};
use serde::{Deserialize, Serialize};

/// One named angular relationship with its orb tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectKind {
    /// Aspect name: "conjunction", "trine", etc.
    pub name: String,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub angle: f64,
    /// Maximum deviation from the exact angle, in degrees
    pub orb: f64,
    #[serde(default)]
    pub symbol: String,
    #[serde(default = "default_aspect_color")]
    pub color: String,
    /// Drawn as a dashed line on the wheel
    #[serde(default)]
    pub dashed: bool,
}

fn default_aspect_color() -> String {
    "#888888".to_string()
}

impl AspectKind {
    pub fn new(name: &str, angle: f64, orb: f64) -> Self {
        Self {
            name: name.to_string(),
            angle,
            orb,
            symbol: String::new(),
            color: default_aspect_color(),
            dashed: false,
        }
    }

    fn styled(mut self, symbol: &str, color: &str, dashed: bool) -> Self {
        self.symbol = symbol.to_string();
        self.color = color.to_string();
        self.dashed = dashed;
        self
    }

    /// Deviation of `separation` from the exact angle if it lies inside the orb.
    pub fn orb_for(&self, separation: f64) -> Option<f64> {
        let orb = (separation - self.angle).abs();
        (orb <= self.orb).then_some(orb)
    }
}

/// Ordered, validated aspect table. Table order decides which type wins
/// when orb windows overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AspectKind>", into = "Vec<AspectKind>")]
pub struct AspectTable {
    kinds: Vec<AspectKind>,
}

impl AspectTable {
    pub fn new(kinds: Vec<AspectKind>) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::EmptyAspectTable);
        }
        for kind in &kinds {
            if !kind.orb.is_finite() || kind.orb < 0.0 {
                return Err(ConfigError::InvalidOrb {
                    aspect: kind.name.clone(),
                    orb: kind.orb,
                });
            }
            if !(0.0..=180.0).contains(&kind.angle) {
                return Err(ConfigError::InvalidAngle {
                    aspect: kind.name.clone(),
                    angle: kind.angle,
                });
            }
            validate_color(&kind.color)?;
        }

        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                if (a.angle - b.angle).abs() <= a.orb + b.orb {
                    log::warn!(
                        "aspect windows overlap: {} ({}±{}) and {} ({}±{}); the earlier entry wins",
                        a.name,
                        a.angle,
                        a.orb,
                        b.name,
                        b.angle,
                        b.orb
                    );
                }
            }
        }

        Ok(Self { kinds })
    }

    /// Build a table from parallel name, angle and orb columns.
    pub fn from_columns(names: &[&str], angles: &[f64], orbs: &[f64]) -> Result<Self, ConfigError> {
        if names.len() != angles.len() || angles.len() != orbs.len() {
            return Err(ConfigError::TableLengthMismatch {
                names: names.len(),
                angles: angles.len(),
                orbs: orbs.len(),
            });
        }
        let kinds = names
            .iter()
            .zip(angles)
            .zip(orbs)
            .map(|((name, angle), orb)| AspectKind::new(name, *angle, *orb))
            .collect();
        Self::new(kinds)
    }

    /// The five major aspects in reference order.
    pub fn reference() -> Self {
        Self {
            kinds: vec![
                AspectKind::new("conjunction", 0.0, 8.0).styled("☌", "#F44336", false),
                AspectKind::new("trine", 120.0, 8.0).styled("△", "#4CAF50", true),
                AspectKind::new("sextile", 60.0, 6.0).styled("⚹", "#2196F3", true),
                AspectKind::new("opposition", 180.0, 8.0).styled("☍", "#FF5722", false),
                AspectKind::new("square", 90.0, 6.0).styled("□", "#9C27B0", true),
            ],
        }
    }

    pub fn kinds(&self) -> &[AspectKind] {
        &self.kinds
    }

    pub fn get(&self, index: usize) -> Option<&AspectKind> {
        self.kinds.get(index)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// First aspect type (in table order) whose orb window holds `separation`.
    pub fn match_separation(&self, separation: f64) -> Option<(usize, f64)> {
        self.kinds
            .iter()
            .enumerate()
            .find_map(|(k, kind)| kind.orb_for(separation).map(|orb| (k, orb)))
    }
}

impl Default for AspectTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<AspectKind>> for AspectTable {
    type Error = ConfigError;

    fn try_from(kinds: Vec<AspectKind>) -> Result<Self, Self::Error> {
        Self::new(kinds)
    }
}

impl From<AspectTable> for Vec<AspectKind> {
    fn from(table: AspectTable) -> Self {
        table.kinds
    }
}

/// A detected aspect between two chart points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// Catalogue index of the first point, always below `point2`
    pub point1: usize,
    pub point2: usize,
    /// Index into the aspect table
    pub aspect_type: usize,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Whether the aspect is applying (approaching exact)
    pub applying: bool,
}

impl Aspect {
    /// Within 0.1 degrees of exact
    pub fn is_exact(&self) -> bool {
        self.orb < 0.1
    }
}
