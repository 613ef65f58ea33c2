pub mod radial;
pub mod wheel;

pub use radial::{polar_to_cartesian, LayoutSettings, Placement, RadialLayout};
pub use wheel::WheelGeometry;
