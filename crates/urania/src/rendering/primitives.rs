use serde::{Deserialize, Serialize};

/// Point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Create color from hex string (e.g., "#FF0000" or "#FF0000FF")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    /// Like [`Color::from_hex`], black for unparseable input
    pub fn from_hex_or_black(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Color::BLACK)
    }

    /// `#RRGGBB`, alpha dropped
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to CSS string
    pub fn to_css_string(&self) -> String {
        if self.a == 255 {
            self.to_hex()
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Stroke style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub dash_array: Option<Vec<f64>>,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash_array: None,
        }
    }

    pub fn dashed(color: Color, width: f64, dash: f64, gap: f64) -> Self {
        Self {
            color,
            width,
            dash_array: Some(vec![dash, gap]),
        }
    }
}

/// Text anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Shape primitives for chart rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        position: Point,
        content: String,
        size: f64,
        color: Color,
        anchor: TextAnchor,
        bold: bool,
    },
    /// Glyph on a filled disc, outlined in the point colour
    PointGlyph {
        center: Point,
        point_id: String,
        glyph: String,
        radius: f64,
        size: f64,
        color: Color,
        retrograde: bool,
    },
    AspectLine {
        from: Point,
        to: Point,
        aspect_type: String, // "conjunction", "trine", etc.
        color: Color,
        width: f64,
        style: LineStyle,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#F44336"), Some(Color::rgb(0xF4, 0x43, 0x36)));
        assert_eq!(Color::from_hex("#F4433680").map(|c| c.a), Some(0x80));
        assert_eq!(Color::from_hex("#F443"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
        assert_eq!(Color::from_hex("♈♈"), None);
    }

    #[test]
    fn css_output() {
        assert_eq!(Color::rgb(0xF4, 0x43, 0x36).to_css_string(), "#F44336");
        let translucent = Color { a: 0, ..Color::WHITE };
        assert_eq!(translucent.to_css_string(), "rgba(255, 255, 255, 0)");
    }
}
