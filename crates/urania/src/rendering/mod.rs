pub mod generator;
pub mod html;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::ChartSpecGenerator;
pub use html::render_html;
pub use primitives::{Color, LineStyle, Point, Shape, Stroke, TextAnchor};
pub use spec::{ChartMetadata, ChartSpec};
pub use svg::render_svg;
pub use visual_config::VisualConfig;
