use crate::rendering::primitives::Color;

/// Visual styling for the fixed parts of the wheel.
///
/// Point, sign and aspect colours come from their catalogues; this covers
/// the rings, ticks and labels around them.
#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub background_color: Color,
    pub rim_stroke: Color,
    pub ring_stroke: Color,
    pub tick_stroke: Color,
    pub tick_width: f64,
    pub cusp_stroke: Color,
    pub label_color: Color,
    pub house_label_size: f64,
    /// Inset of house numbers from the outer rim
    pub house_label_inset: f64,
    pub sign_glyph_size: f64,
    pub point_glyph_size: f64,
    pub point_disc_radius: f64,
    pub aspect_width: f64,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            rim_stroke: Color::rgb(0xAA, 0xAA, 0xAA),
            ring_stroke: Color::rgb(0x88, 0x88, 0x88),
            tick_stroke: Color::rgb(0xCC, 0xCC, 0xCC),
            tick_width: 0.5,
            cusp_stroke: Color::rgb(0x66, 0x66, 0x66),
            label_color: Color::rgb(0x33, 0x33, 0x33),
            house_label_size: 12.0,
            house_label_inset: 15.0,
            sign_glyph_size: 26.0,
            point_glyph_size: 20.0,
            point_disc_radius: 16.0,
            aspect_width: 1.5,
        }
    }
}

/// Length of the degree tick drawn at `degree` (a multiple of 5).
pub fn tick_length(degree: u32) -> f64 {
    if degree % 30 == 0 {
        15.0
    } else if degree % 10 == 0 {
        10.0
    } else {
        5.0
    }
}
