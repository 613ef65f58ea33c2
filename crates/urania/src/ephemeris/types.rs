use crate::angles::normalize_degrees;
use crate::ephemeris::error::EphemerisError;
use crate::houses::HOUSE_COUNT;
use crate::points::{of_kind, PointId, PointKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    /// East-positive longitude
    pub lon: f64,
}

/// Body position reported by a provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Longitude in degrees
    pub lon: f64,
    /// Speed in longitude (degrees per day)
    #[serde(default)]
    pub speed_lon: Option<f64>,
}

/// Everything one chart needs from the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPositions {
    /// Point key ("sun", "moon", ..., "north_node") -> position
    pub bodies: HashMap<String, BodyPosition>,
    /// House cusps in house order, house 1 first
    pub cusps: Vec<f64>,
    pub ascendant: f64,
    pub midheaven: f64,
}

impl RawPositions {
    pub fn body(&self, id: PointId) -> Result<&BodyPosition, EphemerisError> {
        self.bodies
            .get(id.key())
            .ok_or_else(|| EphemerisError::MissingBody(id.key().to_string()))
    }

    /// Check the data matches the catalogue shape: every planet and node
    /// present, twelve cusps, all values finite.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if self.cusps.len() != HOUSE_COUNT {
            return Err(EphemerisError::InvalidCusps {
                expected: HOUSE_COUNT,
                found: self.cusps.len(),
            });
        }
        for def in of_kind(PointKind::Planet).chain(of_kind(PointKind::Node)) {
            let body = self.body(def.id)?;
            if !body.lon.is_finite() {
                return Err(EphemerisError::CalculationFailed {
                    body: def.key.to_string(),
                    message: format!("non-finite longitude {}", body.lon),
                });
            }
        }
        let angles = [self.ascendant, self.midheaven];
        if self.cusps.iter().chain(angles.iter()).any(|v| !v.is_finite()) {
            return Err(EphemerisError::CalculationFailed {
                body: "houses".to_string(),
                message: "non-finite cusp or angle".to_string(),
            });
        }
        Ok(())
    }

    /// Copy with every longitude brought into [0, 360).
    pub fn normalized(&self) -> Self {
        Self {
            bodies: self
                .bodies
                .iter()
                .map(|(key, body)| {
                    (
                        key.clone(),
                        BodyPosition {
                            lon: normalize_degrees(body.lon),
                            speed_lon: body.speed_lon,
                        },
                    )
                })
                .collect(),
            cusps: self.cusps.iter().map(|c| normalize_degrees(*c)).collect(),
            ascendant: normalize_degrees(self.ascendant),
            midheaven: normalize_degrees(self.midheaven),
        }
    }
}

/// Input to a provider call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisRequest {
    pub datetime: DateTime<Utc>,
    pub location: GeoLocation,
    /// House system label, e.g. "placidus"
    pub house_system: String,
}
