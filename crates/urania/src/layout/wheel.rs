use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Canvas size and concentric radii of the chart wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelGeometry {
    pub width: f64,
    pub height: f64,
    /// Outer rim; house numbers sit just inside it
    pub outer_radius: f64,
    /// Outer edge of the zodiac band
    pub zodiac_outer_radius: f64,
    /// Inner edge of the zodiac band
    pub zodiac_inner_radius: f64,
    /// Circle that bounds the aspect lines
    pub inner_radius: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            outer_radius: 270.0,
            zodiac_outer_radius: 240.0,
            zodiac_inner_radius: 210.0,
            inner_radius: 170.0,
        }
    }
}

impl WheelGeometry {
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Radius at the middle of the zodiac band
    pub fn zodiac_mid_radius(&self) -> f64 {
        (self.zodiac_outer_radius + self.zodiac_inner_radius) / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidLayout(format!(
                "canvas must have a positive size, got {}x{}",
                self.width, self.height
            )));
        }
        let radii = [
            self.outer_radius,
            self.zodiac_outer_radius,
            self.zodiac_inner_radius,
            self.inner_radius,
        ];
        if radii.iter().any(|r| !(r.is_finite() && *r > 0.0)) {
            return Err(ConfigError::InvalidLayout(
                "wheel radii must be positive".to_string(),
            ));
        }
        if radii.windows(2).any(|w| w[0] <= w[1]) {
            return Err(ConfigError::InvalidLayout(
                "wheel radii must decrease from the outer rim inward".to_string(),
            ));
        }
        if self.outer_radius * 2.0 > self.width.min(self.height) {
            return Err(ConfigError::InvalidLayout(format!(
                "outer radius {} does not fit a {}x{} canvas",
                self.outer_radius, self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wheel_is_valid() {
        let wheel = WheelGeometry::default();
        assert!(wheel.validate().is_ok());
        assert_eq!(wheel.center(), (300.0, 300.0));
        assert_eq!(wheel.zodiac_mid_radius(), 225.0);
    }

    #[test]
    fn radii_must_shrink_inward() {
        let wheel = WheelGeometry {
            inner_radius: 220.0,
            ..WheelGeometry::default()
        };
        assert!(wheel.validate().is_err());
    }
}
