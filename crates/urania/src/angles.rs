//! Circular arithmetic on ecliptic longitudes.
//!
//! All longitudes are degrees. Functions here assume finite input; callers
//! normalise provider data once on ingest.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const FULL_CIRCLE: f64 = 360.0;
pub const HALF_CIRCLE: f64 = 180.0;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg % FULL_CIRCLE;
    let r = if r < 0.0 { r + FULL_CIRCLE } else { r };
    // -1e-17 + 360.0 rounds to 360.0
    if r >= FULL_CIRCLE {
        0.0
    } else {
        r
    }
}

/// Shortest separation between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let raw_diff = (a - b).abs();
    if raw_diff > HALF_CIRCLE {
        FULL_CIRCLE - raw_diff
    } else {
        raw_diff
    }
}

/// Whether `point` lies in the forward arc `[start, end)`.
///
/// When `start > end` the arc wraps through 0°. `start == end` is empty.
pub fn in_arc(point: f64, start: f64, end: f64) -> bool {
    if start <= end {
        point >= start && point < end
    } else {
        point >= start || point < end
    }
}

/// Forward arc width from `start` to `end`, wrapping through 0°.
pub fn forward_arc(start: f64, end: f64) -> f64 {
    if end >= start {
        end - start
    } else {
        end + FULL_CIRCLE - start
    }
}

/// Degrees, minutes and seconds of a fractional-degree value.
///
/// Every component is truncated, never rounded, so 29.999° reads 29°59'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl Dms {
    pub fn from_degrees(value: f64) -> Self {
        let degrees = value.floor();
        let minutes_raw = (value - degrees) * 60.0;
        let minutes = minutes_raw.floor();
        let seconds = ((minutes_raw - minutes) * 60.0).floor();

        Self {
            degrees: degrees as i32,
            minutes: minutes as i32,
            seconds: seconds as i32,
        }
    }

    /// `DD°MM'` rendering used by the report tables.
    pub fn short(&self) -> String {
        format!("{:02}°{:02}'", self.degrees, self.minutes)
    }

    /// `DD°MM'SS"` rendering.
    pub fn long(&self) -> String {
        format!("{:02}°{:02}'{:02}\"", self.degrees, self.minutes, self.seconds)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.long())
        } else {
            f.write_str(&self.short())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert!((normalize_degrees(0.0) - 0.0).abs() < 1e-15);
        assert!((normalize_degrees(360.0) - 0.0).abs() < 1e-15);
        assert!((normalize_degrees(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_degrees(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_degrees(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let v = normalize_degrees(-1e-20);
        assert!(v >= 0.0 && v < 360.0);
    }

    #[test]
    fn angular_distance_takes_short_way_round() {
        assert_eq!(angular_distance(10.0, 130.0), 120.0);
        assert_eq!(angular_distance(350.0, 10.0), 20.0);
        assert_eq!(angular_distance(0.0, 180.0), 180.0);
        assert_eq!(angular_distance(90.0, 90.0), 0.0);
    }

    #[test]
    fn in_arc_is_half_open() {
        assert!(in_arc(10.0, 10.0, 40.0));
        assert!(!in_arc(40.0, 10.0, 40.0));
        assert!(in_arc(359.0, 350.0, 20.0));
        assert!(in_arc(0.0, 350.0, 20.0));
        assert!(!in_arc(20.0, 350.0, 20.0));
        assert!(!in_arc(25.0, 25.0, 25.0));
    }

    #[test]
    fn forward_arc_wraps() {
        assert_eq!(forward_arc(10.0, 40.0), 30.0);
        assert_eq!(forward_arc(350.0, 20.0), 30.0);
    }

    #[test]
    fn dms_truncates() {
        let dms = Dms::from_degrees(29.999);
        assert_eq!(dms.degrees, 29);
        assert_eq!(dms.minutes, 59);
        assert_eq!(dms.short(), "29°59'");

        // 5 + 33/64, exact in binary
        let dms = Dms::from_degrees(5.515625);
        assert_eq!((dms.degrees, dms.minutes, dms.seconds), (5, 30, 56));
        assert_eq!(format!("{:#}", dms), "05°30'56\"");
    }
}
