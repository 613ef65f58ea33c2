//! Birth moment handling: local clock time to UT, Julian Day and sidereal
//! time.

use crate::ephemeris::types::{EphemerisRequest, GeoLocation};
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Julian Day of J2000.0 (2000-01-01 12:00 TT)
pub const J2000_JD: f64 = 2_451_545.0;

/// Zone offset in whole hours guessed from longitude (15° per hour).
pub fn estimate_timezone(longitude: f64) -> i32 {
    (longitude / 15.0).round() as i32
}

/// Local birth date and time at a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub local: NaiveDateTime,
    pub location: GeoLocation,
    /// Explicit UTC offset in hours; estimated from longitude when absent
    #[serde(default)]
    pub utc_offset_hours: Option<i32>,
}

impl BirthData {
    pub fn new(local: NaiveDateTime, location: GeoLocation) -> Self {
        Self {
            local,
            location,
            utc_offset_hours: None,
        }
    }

    pub fn with_utc_offset(mut self, hours: i32) -> Self {
        self.utc_offset_hours = Some(hours);
        self
    }

    pub fn utc_offset(&self) -> i32 {
        self.utc_offset_hours
            .unwrap_or_else(|| estimate_timezone(self.location.lon))
    }

    /// The birth moment in UT. The date rolls over when the offset crosses
    /// midnight.
    pub fn to_utc(&self) -> DateTime<Utc> {
        let naive = self.local - Duration::hours(i64::from(self.utc_offset()));
        Utc.from_utc_datetime(&naive)
    }

    pub fn request(&self, house_system: &str) -> EphemerisRequest {
        EphemerisRequest {
            datetime: self.to_utc(),
            location: self.location,
            house_system: house_system.to_string(),
        }
    }
}

/// Gregorian calendar date and fractional hour to Julian Day (Meeus, ch. 7).
pub fn calendar_to_jd(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor()
        + (30.6001 * (f64::from(m) + 1.0)).floor()
        + f64::from(day)
        + hour / 24.0
        + b
        - 1524.5
}

/// Julian Day for a UTC instant
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal = f64::from(dt.hour())
        + f64::from(dt.minute()) / 60.0
        + f64::from(dt.second()) / 3600.0;
    calendar_to_jd(dt.year(), dt.month(), dt.day(), hour_decimal)
}

/// Greenwich mean sidereal time in hours, [0, 24).
///
/// Uses the Earth rotation angle plus the precession polynomial; UT is
/// taken as UT1.
pub fn gmst_hours(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let era_deg = 360.0 * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    let t = du / 36525.0;
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t * t;
    let gmst_deg = era_deg + poly_arcsec / 3600.0;
    (gmst_deg / 15.0).rem_euclid(24.0)
}

/// Local sidereal time in hours for an east-positive longitude.
pub fn local_sidereal_hours(jd_ut: f64, longitude: f64) -> f64 {
    (gmst_hours(jd_ut) + longitude / 15.0).rem_euclid(24.0)
}
