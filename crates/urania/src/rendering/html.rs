use crate::angles::Dms;
use crate::chart::NatalChart;
use crate::houses::house_label;
use crate::points::PointKind;
use crate::rendering::spec::ChartSpec;
use crate::rendering::svg::{escape_xml, render_svg};
use crate::report::{position_label, ruler_name};

const STYLE: &str = "body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background-color: #f0f0f0; }
.container { max-width: 1200px; margin: 0 auto; background-color: white; padding: 20px; border-radius: 10px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
h1, h2 { color: #333; }
.chart-container { display: flex; flex-wrap: wrap; justify-content: space-between; }
.chart { margin: 0 auto; }
.info { width: 500px; margin: 0 auto; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: #f2f2f2; }
.aspect-grid td { text-align: center; padding: 4px; font-size: 12px; }
.aspect-grid .header { font-weight: bold; background-color: #f2f2f2; }
.aspect-symbol { font-size: 18px; line-height: 1; }
.aspect-degree { font-size: 10px; display: block; margin-top: 2px; }
";

/// Orb and state for an aspect grid cell: `3°20'a` applying, `3°20's`
/// separating.
pub fn grid_label(orb: f64, applying: bool) -> String {
    let dms = Dms::from_degrees(orb);
    format!(
        "{}°{:02}'{}",
        dms.degrees,
        dms.minutes,
        if applying { 'a' } else { 's' }
    )
}

/// Full HTML page: the wheel next to point, house and aspect tables and
/// the planet aspect grid.
pub fn render_html(chart: &NatalChart, spec: &ChartSpec) -> String {
    let title = spec
        .metadata
        .title
        .clone()
        .unwrap_or_else(|| "Natal chart".to_string());

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(&format!("<title>Natal chart - {}</title>\n", escape_xml(&title)));
    html.push_str(&format!("<style>\n{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str("<div class=\"container\">\n<h1>Natal chart</h1>\n");

    if let Some(birth) = chart.birth() {
        html.push_str(&format!(
            "<p>Date: {}</p>\n",
            birth.local.format("%Y-%m-%d %H:%M")
        ));
        html.push_str(&format!(
            "<p>Location: longitude {:.2}, latitude {:.2}</p>\n",
            birth.location.lon, birth.location.lat
        ));
    }

    html.push_str("<div class=\"chart-container\">\n<div class=\"chart\">\n");
    html.push_str(&render_svg(spec));
    html.push_str("</div>\n<div class=\"info\">\n");

    push_point_table(&mut html, chart);
    push_house_table(&mut html, chart);
    push_aspect_table(&mut html, chart);
    push_aspect_grid(&mut html, chart);

    html.push_str("</div>\n</div>\n</div>\n</body>\n</html>\n");
    html
}

fn push_point_table(html: &mut String, chart: &NatalChart) {
    html.push_str("<h2>Positions</h2>\n<table>\n");
    html.push_str("<tr><th>Point</th><th>Position</th><th>House</th></tr>\n");
    for point in chart.points() {
        let def = point.def();
        html.push_str(&format!(
            "<tr><td><span style=\"color: {};\">{} {}</span></td><td>{}</td><td>{}</td></tr>\n",
            def.color,
            escape_xml(def.glyph),
            def.name,
            position_label(point.sign, point.sign_offset),
            house_label(point.house)
        ));
    }
    html.push_str("</table>\n");
}

fn push_house_table(html: &mut String, chart: &NatalChart) {
    html.push_str("<h2>Houses</h2>\n<table>\n");
    html.push_str("<tr><th>House</th><th>Cusp</th><th>Ruler</th></tr>\n");
    for house in chart.houses() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            house.label(),
            position_label(house.sign, house.sign_offset),
            ruler_name(house.ruler)
        ));
    }
    html.push_str("</table>\n");
}

fn push_aspect_table(html: &mut String, chart: &NatalChart) {
    html.push_str("<h2>Aspects</h2>\n<table>\n");
    html.push_str(
        "<tr><th>Point 1</th><th>Point 2</th><th>Aspect</th><th>Orb</th><th>State</th></tr>\n",
    );
    for aspect in chart.aspects() {
        let (Some((p1, _)), Some((p2, _)), Some(kind)) = (
            chart.placed(aspect.point1),
            chart.placed(aspect.point2),
            chart.aspect_kind(aspect),
        ) else {
            continue;
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td><span style=\"color: {};\">{}</span></td><td>{:.2}°</td><td>{}</td></tr>\n",
            p1.def().name,
            p2.def().name,
            kind.color,
            escape_xml(&kind.name),
            aspect.orb,
            if aspect.applying { "applying" } else { "separating" }
        ));
    }
    html.push_str("</table>\n");
}

/// Symmetric planet-by-planet grid; the diagonal shows the planet glyph.
fn push_aspect_grid(html: &mut String, chart: &NatalChart) {
    let planets: Vec<_> = chart
        .points()
        .iter()
        .filter(|p| p.def().kind == PointKind::Planet)
        .collect();

    html.push_str("<h2>Aspect grid</h2>\n<table class=\"aspect-grid\" border=\"1\">\n");
    html.push_str("<tr class=\"header\"><td></td>");
    for p in &planets {
        html.push_str(&format!(
            "<td style=\"color: {};\">{}</td>",
            p.def().color,
            p.def().glyph
        ));
    }
    html.push_str("</tr>\n");

    for row in &planets {
        html.push_str(&format!(
            "<tr><td class=\"header\" style=\"color: {};\">{}</td>",
            row.def().color,
            row.def().glyph
        ));
        for col in &planets {
            if row.index == col.index {
                html.push_str(&format!(
                    "<td style=\"background-color: #f2f2f2;\">{}</td>",
                    row.def().glyph
                ));
                continue;
            }
            let cell = chart
                .aspect_between(row.index, col.index)
                .and_then(|a| chart.aspect_kind(a).map(|k| (a, k)));
            match cell {
                Some((aspect, kind)) => html.push_str(&format!(
                    "<td class=\"aspect-cell\" style=\"color: {};\"><div class=\"aspect-symbol\">{}</div><div class=\"aspect-degree\">{}</div></td>",
                    kind.color,
                    escape_xml(&kind.symbol),
                    grid_label(aspect.orb, aspect.applying)
                )),
                None => html.push_str("<td></td>"),
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_labels() {
        assert_eq!(grid_label(3.3334, true), "3°20'a");
        assert_eq!(grid_label(0.0, false), "0°00's");
    }
}
