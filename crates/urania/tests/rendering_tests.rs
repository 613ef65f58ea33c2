mod common;

use urania::layout::WheelGeometry;
use urania::points::CATALOGUE;
use urania::rendering::{
    render_html, render_svg, ChartSpec, ChartSpecGenerator, Color, LineStyle, Shape,
};
use urania::{ChartAssembler, NatalChart, PointId};

fn reference_chart() -> NatalChart {
    ChartAssembler::default()
        .assemble(&common::reference_raw())
        .unwrap()
}

fn planet_aspect_count(chart: &NatalChart) -> usize {
    chart
        .aspects()
        .iter()
        .filter(|a| {
            chart.points()[a.point1].id.is_planet() && chart.points()[a.point2].id.is_planet()
        })
        .count()
}

#[test]
fn test_chart_spec_creation() {
    let spec = ChartSpec::new(800.0, 600.0);
    assert_eq!(spec.width, 800.0);
    assert_eq!(spec.height, 600.0);
    assert_eq!(spec.center.x, 400.0);
    assert_eq!(spec.center.y, 300.0);
    assert_eq!(spec.background_color, Color::WHITE);
    assert!(spec.shapes.is_empty());
}

#[test]
fn test_generated_shape_counts() {
    let chart = reference_chart();
    let spec = ChartSpecGenerator::default().generate(&chart);

    let count = |pred: fn(&Shape) -> bool| spec.shapes.iter().filter(|s| pred(s)).count();
    // Three rings plus the inner circle
    assert_eq!(count(|s| matches!(s, Shape::Circle { .. })), 4);
    assert_eq!(count(|s| matches!(s, Shape::PointGlyph { .. })), CATALOGUE.len());
    // Twelve house numbers and twelve sign glyphs
    assert_eq!(count(|s| matches!(s, Shape::Text { .. })), 24);
    // 72 ticks, 12 cusps, 12 sign separators, one leader per point
    assert_eq!(
        count(|s| matches!(s, Shape::Line { .. })),
        72 + 12 + 12 + CATALOGUE.len()
    );

    let lines = count(|s| matches!(s, Shape::AspectLine { .. }));
    assert_eq!(lines, planet_aspect_count(&chart));
    assert_eq!(spec.metadata.aspect_count, lines);
    assert_eq!(spec.metadata.point_count, CATALOGUE.len());
    assert!(spec.metadata.title.is_none());
}

#[test]
fn test_aspect_lines_only_join_planets() {
    let chart = reference_chart();
    // Ascendant 15° opposes Mercury 200°
    let non_planet = chart
        .aspects()
        .iter()
        .filter(|a| {
            !chart.points()[a.point1].id.is_planet() || !chart.points()[a.point2].id.is_planet()
        })
        .count();
    assert!(non_planet > 0);

    let spec = ChartSpecGenerator::default().generate(&chart);
    let lines = spec
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::AspectLine { .. }))
        .count();
    assert_eq!(lines + non_planet, chart.aspects().len());
}

#[test]
fn test_square_line_style() {
    let chart = reference_chart();
    let spec = ChartSpecGenerator::default().generate(&chart);
    let square = spec.shapes.iter().find_map(|s| match s {
        Shape::AspectLine {
            aspect_type, style, ..
        } if aspect_type == "square" => Some(*style),
        _ => None,
    });
    assert_eq!(square, Some(LineStyle::Dashed));
}

#[test]
fn test_custom_wheel_size() {
    let wheel = WheelGeometry {
        width: 1000.0,
        height: 800.0,
        ..WheelGeometry::default()
    };
    let spec = ChartSpecGenerator::new(wheel).generate(&reference_chart());
    assert_eq!(spec.width, 1000.0);
    assert_eq!(spec.center.x, 500.0);
    assert_eq!(spec.center.y, 400.0);
}

#[test]
fn test_svg_output() {
    let chart = reference_chart();
    let spec = ChartSpecGenerator::default().generate(&chart);
    let svg = render_svg(&spec);

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("class=\"point point-sun\""));
    assert!(svg.contains("aspect-square"));
    assert!(svg.contains("stroke-dasharray=\"4,4\""));
    assert!(svg.contains("♈"));
}

#[test]
fn test_spec_json() {
    let spec = ChartSpecGenerator::default().generate(&reference_chart());
    let value: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();
    assert_eq!(value["width"], 600.0);
    assert_eq!(value["shapes"].as_array().unwrap().len(), spec.shapes.len());
    assert_eq!(value["metadata"]["point_count"], CATALOGUE.len());
}

#[test]
fn test_html_output() {
    let chart = reference_chart();
    let spec = ChartSpecGenerator::default().generate(&chart);
    let html = render_html(&chart, &spec);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<svg"));
    assert!(html.contains("<h2>Positions</h2>"));
    assert!(html.contains("<h2>Houses</h2>"));
    assert!(html.contains("<h2>Aspect grid</h2>"));
    assert!(html.contains(PointId::Pluto.name()));
    // Exact applying Sun-Moon square in the grid
    assert!(html.contains("0°00'a"));
}
