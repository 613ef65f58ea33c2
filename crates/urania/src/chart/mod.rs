pub mod assembler;
pub mod model;

pub use assembler::ChartAssembler;
pub use model::{ChartError, NatalChart};
