use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// Chart metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    /// e.g. "1990-01-01 03:30"
    pub title: Option<String>,
    pub point_count: usize,
    pub aspect_count: usize,
}

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            background_color: Color::WHITE,
            shapes: Vec::new(),
            metadata: ChartMetadata::default(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
