pub mod error;
pub mod provider;
pub mod time;
pub mod types;

pub use error::EphemerisError;
pub use provider::{EphemerisProvider, FallbackEphemeris, StaticEphemeris};
pub use time::{estimate_timezone, julian_day, BirthData};
pub use types::{BodyPosition, EphemerisRequest, GeoLocation, RawPositions};
