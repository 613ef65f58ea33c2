use crate::chart::NatalChart;
use crate::houses::house_midpoint;
use crate::layout::{polar_to_cartesian, WheelGeometry};
use crate::points::PointKind;
use crate::rendering::primitives::{Color, LineStyle, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartMetadata, ChartSpec};
use crate::rendering::visual_config::{tick_length, VisualConfig};
use crate::zodiac::{SIGNS, SIGN_SPAN};

/// ChartSpec generator - converts a natal chart to drawing primitives
pub struct ChartSpecGenerator {
    wheel: WheelGeometry,
    visual_config: VisualConfig,
}

impl ChartSpecGenerator {
    pub fn new(wheel: WheelGeometry) -> Self {
        Self {
            wheel,
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(wheel: WheelGeometry, visual_config: VisualConfig) -> Self {
        Self {
            wheel,
            visual_config,
        }
    }

    /// Generate the wheel, back to front: rings, ticks, cusps, signs,
    /// inner circle, points, aspect lines.
    pub fn generate(&self, chart: &NatalChart) -> ChartSpec {
        let mut spec = ChartSpec::new(self.wheel.width, self.wheel.height);
        spec.background_color = self.visual_config.background_color;

        self.push_rings(&mut spec);
        self.push_degree_ticks(&mut spec);
        self.push_house_cusps(&mut spec, chart);
        self.push_signs(&mut spec);
        spec.push(self.circle(self.wheel.inner_radius, self.visual_config.rim_stroke));
        self.push_points(&mut spec, chart);
        let aspect_lines = self.push_aspect_lines(&mut spec, chart);

        spec.metadata = ChartMetadata {
            title: chart
                .birth()
                .map(|b| b.local.format("%Y-%m-%d %H:%M").to_string()),
            point_count: chart.points().len(),
            aspect_count: aspect_lines,
        };

        log::debug!("generated {} shapes", spec.shapes.len());
        spec
    }

    fn at(&self, radius: f64, angle: f64) -> Point {
        let (cx, cy) = self.wheel.center();
        polar_to_cartesian(cx, cy, radius, angle).into()
    }

    fn circle(&self, radius: f64, stroke: Color) -> Shape {
        let (cx, cy) = self.wheel.center();
        Shape::Circle {
            center: Point { x: cx, y: cy },
            radius,
            fill: Some(Color::WHITE),
            stroke: Some(Stroke::solid(stroke, 1.0)),
        }
    }

    fn push_rings(&self, spec: &mut ChartSpec) {
        let vc = &self.visual_config;
        spec.push(self.circle(self.wheel.outer_radius, vc.rim_stroke));
        spec.push(self.circle(self.wheel.zodiac_outer_radius, vc.ring_stroke));
        spec.push(self.circle(self.wheel.zodiac_inner_radius, vc.ring_stroke));
    }

    fn push_degree_ticks(&self, spec: &mut ChartSpec) {
        let r = self.wheel.zodiac_outer_radius;
        for degree in (0..360u32).step_by(5) {
            let angle = f64::from(degree);
            spec.push(Shape::Line {
                from: self.at(r, angle),
                to: self.at(r - tick_length(degree), angle),
                stroke: Stroke::solid(self.visual_config.tick_stroke, self.visual_config.tick_width),
            });
        }
    }

    fn push_house_cusps(&self, spec: &mut ChartSpec, chart: &NatalChart) {
        let vc = &self.visual_config;
        let cusps: Vec<f64> = chart.houses().iter().map(|h| h.cusp_longitude).collect();
        for house in chart.houses() {
            let angle = house.cusp_longitude;
            spec.push(Shape::Line {
                from: self.at(self.wheel.zodiac_inner_radius, angle),
                to: self.at(self.wheel.inner_radius, angle),
                stroke: Stroke::dashed(vc.cusp_stroke, 1.0, 4.0, 4.0),
            });

            let mid = house_midpoint(&cusps, house.index);
            spec.push(Shape::Text {
                position: self.at(self.wheel.outer_radius - vc.house_label_inset, mid),
                content: (house.index + 1).to_string(),
                size: vc.house_label_size,
                color: vc.label_color,
                anchor: TextAnchor::Middle,
                bold: false,
            });
        }
    }

    fn push_signs(&self, spec: &mut ChartSpec) {
        let mid_r = self.wheel.zodiac_mid_radius();
        for (i, sign) in SIGNS.iter().enumerate() {
            let start = i as f64 * SIGN_SPAN;
            spec.push(Shape::Text {
                position: self.at(mid_r, start + SIGN_SPAN / 2.0),
                content: sign.glyph.to_string(),
                size: self.visual_config.sign_glyph_size,
                color: Color::from_hex_or_black(sign.color),
                anchor: TextAnchor::Middle,
                bold: true,
            });
            spec.push(Shape::Line {
                from: self.at(self.wheel.zodiac_outer_radius, start),
                to: self.at(self.wheel.zodiac_inner_radius, start),
                stroke: Stroke::solid(self.visual_config.ring_stroke, 1.0),
            });
        }
    }

    fn push_points(&self, spec: &mut ChartSpec, chart: &NatalChart) {
        let vc = &self.visual_config;
        for (point, placement) in chart.points().iter().zip(chart.placements()) {
            let def = point.def();
            let color = Color::from_hex_or_black(def.color);
            spec.push(Shape::PointGlyph {
                center: self.at(placement.display_radius, placement.display_angle),
                point_id: def.key.to_string(),
                glyph: def.glyph.to_string(),
                radius: vc.point_disc_radius,
                size: vc.point_glyph_size,
                color,
                retrograde: point.retrograde(),
            });
            spec.push(Shape::Line {
                from: self.at(placement.display_radius, placement.display_angle),
                to: self.at(self.wheel.inner_radius, placement.display_angle),
                stroke: Stroke::dashed(color, 1.0, 2.0, 2.0),
            });
        }
    }

    /// Aspect lines join the display positions of planets only.
    fn push_aspect_lines(&self, spec: &mut ChartSpec, chart: &NatalChart) -> usize {
        let mut count = 0;
        for aspect in chart.aspects() {
            let (Some((p1, pl1)), Some((p2, pl2))) =
                (chart.placed(aspect.point1), chart.placed(aspect.point2))
            else {
                continue;
            };
            if p1.def().kind != PointKind::Planet || p2.def().kind != PointKind::Planet {
                continue;
            }
            let Some(kind) = chart.aspect_kind(aspect) else {
                continue;
            };
            spec.push(Shape::AspectLine {
                from: self.at(pl1.display_radius, pl1.display_angle),
                to: self.at(pl2.display_radius, pl2.display_angle),
                aspect_type: kind.name.clone(),
                color: Color::from_hex_or_black(&kind.color),
                width: self.visual_config.aspect_width,
                style: if kind.dashed {
                    LineStyle::Dashed
                } else {
                    LineStyle::Solid
                },
            });
            count += 1;
        }
        count
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new(WheelGeometry::default())
    }
}
