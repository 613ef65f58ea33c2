use crate::rendering::primitives::{LineStyle, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;

/// Serialise a chart spec to a standalone SVG document.
pub fn render_svg(spec: &ChartSpec) -> String {
    let mut svg = String::new();
    let (width, height) = (spec.width, spec.height);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        spec.background_color.to_css_string()
    ));

    for shape in &spec.shapes {
        render_shape(&mut svg, shape);
    }

    svg.push_str("</svg>\n");
    svg
}

fn render_shape(svg: &mut String, shape: &Shape) {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let fill = fill.map_or("none".to_string(), |c| c.to_css_string());
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"{}/>\n",
                center.x,
                center.y,
                radius,
                fill,
                stroke.as_ref().map(stroke_attrs).unwrap_or_default()
            ));
        }
        Shape::Line { from, to, stroke } => {
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"{}/>\n",
                from.x,
                from.y,
                to.x,
                to.y,
                stroke_attrs(stroke)
            ));
        }
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
            bold,
        } => {
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\"{} text-anchor=\"{}\" dominant-baseline=\"middle\" fill=\"{}\">{}</text>\n",
                position.x,
                position.y,
                size,
                if *bold { " font-weight=\"bold\"" } else { "" },
                anchor_name(*anchor),
                color.to_css_string(),
                escape_xml(content)
            ));
        }
        Shape::PointGlyph {
            center,
            point_id,
            glyph,
            radius,
            size,
            color,
            retrograde,
        } => {
            let color = color.to_css_string();
            svg.push_str(&format!(
                "<g class=\"point point-{}\">\n",
                escape_xml(point_id)
            ));
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"white\" stroke=\"{color}\" stroke-width=\"2\"/>\n",
                center.x, center.y, radius
            ));
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" font-weight=\"bold\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"{color}\">{}</text>\n",
                center.x,
                center.y,
                size,
                escape_xml(glyph)
            ));
            if *retrograde {
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" text-anchor=\"start\" fill=\"{color}\">R</text>\n",
                    center.x + radius * 0.6,
                    center.y + radius,
                    size / 2.0
                ));
            }
            svg.push_str("</g>\n");
        }
        Shape::AspectLine {
            from,
            to,
            aspect_type,
            color,
            width,
            style,
        } => {
            let dash = match style {
                LineStyle::Solid => "",
                LineStyle::Dashed => " stroke-dasharray=\"5,5\"",
            };
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"{} class=\"aspect-line aspect-{}\"/>\n",
                from.x,
                from.y,
                to.x,
                to.y,
                color.to_css_string(),
                width,
                dash,
                escape_xml(aspect_type)
            ));
        }
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        stroke.color.to_css_string(),
        stroke.width
    );
    if let Some(dash) = &stroke.dash_array {
        let pattern: Vec<String> = dash.iter().map(|d| d.to_string()).collect();
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", pattern.join(",")));
    }
    attrs
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
