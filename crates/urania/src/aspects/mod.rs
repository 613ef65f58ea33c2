pub mod calculator;
pub mod policy;
pub mod types;

pub use calculator::{detect_aspects, AspectCalculator};
pub use policy::{ApplyingMode, ApplyingPolicy, MotionPolicy, PositionalPolicy};
pub use types::{Aspect, AspectKind, AspectTable};
