use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::types::{EphemerisRequest, RawPositions};
use std::fs;
use std::path::Path;

/// Source of body positions and house cusps for a moment and place.
pub trait EphemerisProvider {
    /// Short name used in log messages
    fn name(&self) -> &str;

    fn positions(&mut self, request: &EphemerisRequest) -> Result<RawPositions, EphemerisError>;
}

/// Serves positions loaded from a TOML or JSON document.
///
/// The same positions are returned for every request; the request only
/// shows up in the log.
#[derive(Debug, Clone)]
pub struct StaticEphemeris {
    positions: RawPositions,
    source: String,
}

impl StaticEphemeris {
    pub fn new(positions: RawPositions) -> Self {
        Self {
            positions,
            source: "inline".to_string(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, EphemerisError> {
        let positions: RawPositions =
            toml::from_str(text).map_err(|e| EphemerisError::Parse(e.to_string()))?;
        Ok(Self::new(positions))
    }

    pub fn from_json_str(text: &str) -> Result<Self, EphemerisError> {
        let positions: RawPositions =
            serde_json::from_str(text).map_err(|e| EphemerisError::Parse(e.to_string()))?;
        Ok(Self::new(positions))
    }

    /// Load a positions file; `.json` files are read as JSON, anything else
    /// as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EphemerisError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        let mut provider = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        provider.source = path.display().to_string();
        Ok(provider)
    }

    pub fn raw(&self) -> &RawPositions {
        &self.positions
    }
}

impl EphemerisProvider for StaticEphemeris {
    fn name(&self) -> &str {
        &self.source
    }

    fn positions(&mut self, request: &EphemerisRequest) -> Result<RawPositions, EphemerisError> {
        log::debug!(
            "serving static positions from {} for {} at {:.2},{:.2} ({})",
            self.source,
            request.datetime,
            request.location.lon,
            request.location.lat,
            request.house_system
        );
        self.positions.validate()?;
        Ok(self.positions.normalized())
    }
}

/// Tries the primary provider and falls back to a lower-fidelity one on
/// failure. The fallback's error propagates when both fail.
pub struct FallbackEphemeris<P, F> {
    primary: P,
    fallback: F,
}

impl<P: EphemerisProvider, F: EphemerisProvider> FallbackEphemeris<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: EphemerisProvider, F: EphemerisProvider> EphemerisProvider for FallbackEphemeris<P, F> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn positions(&mut self, request: &EphemerisRequest) -> Result<RawPositions, EphemerisError> {
        match self.primary.positions(request) {
            Ok(positions) => Ok(positions),
            Err(e) => {
                log::warn!(
                    "{} failed ({}), retrying with {}",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );
                self.fallback.positions(request)
            }
        }
    }
}
