//! Natal chart derivation and radial wheel layout.
//!
//! Positions come from an [`ephemeris::EphemerisProvider`]; the
//! [`chart::ChartAssembler`] turns them into an immutable
//! [`chart::NatalChart`] with houses, derived points, aspects and display
//! placements. Presentation writers (`report`, `rendering`) only read the
//! finished chart.

pub mod angles;
pub mod aspects;
pub mod chart;
pub mod config;
pub mod derived;
pub mod ephemeris;
pub mod houses;
pub mod layout;
pub mod points;
pub mod rendering;
pub mod report;
pub mod rulers;
pub mod zodiac;

pub use aspects::{Aspect, AspectTable};
pub use chart::{ChartAssembler, ChartError, NatalChart};
pub use config::{ChartSettings, ConfigError};
pub use ephemeris::{BirthData, EphemerisError, EphemerisProvider, GeoLocation, RawPositions};
pub use points::{ChartPoint, PointId};
pub use report::ChartReport;
