#![allow(dead_code)]

use std::collections::HashMap;
use urania::ephemeris::{BodyPosition, RawPositions};

pub fn equal_cusps(start: f64) -> Vec<f64> {
    (0..12).map(|h| (start + h as f64 * 30.0) % 360.0).collect()
}

pub fn raw_positions(bodies: &[(&str, f64)], cusps: Vec<f64>, ascendant: f64, midheaven: f64) -> RawPositions {
    RawPositions {
        bodies: bodies
            .iter()
            .map(|(key, lon)| {
                (
                    key.to_string(),
                    BodyPosition {
                        lon: *lon,
                        speed_lon: None,
                    },
                )
            })
            .collect::<HashMap<_, _>>(),
        cusps,
        ascendant,
        midheaven,
    }
}

/// Sun 0°, Moon 90°, equal houses from an ascendant at 15°.
pub fn reference_raw() -> RawPositions {
    raw_positions(
        &[
            ("sun", 0.0),
            ("moon", 90.0),
            ("mercury", 200.0),
            ("venus", 203.0),
            ("mars", 250.0),
            ("jupiter", 163.0),
            ("saturn", 310.0),
            ("uranus", 47.0),
            ("neptune", 336.0),
            ("pluto", 137.5),
            ("north_node", 225.0),
        ],
        equal_cusps(15.0),
        15.0,
        285.0,
    )
}
