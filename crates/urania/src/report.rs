//! Plain-text chart report.

use crate::angles::Dms;
use crate::chart::NatalChart;
use crate::ephemeris::time::{julian_day, local_sidereal_hours};
use crate::houses::house_label;
use crate::points::PointId;
use crate::zodiac::sign_meta;
use chrono::Timelike;
use std::fmt;

/// "Aries 05°30'" for a sign and the offset inside it.
pub fn position_label(sign: usize, offset: f64) -> String {
    format!("{} {}", sign_meta(sign).name, Dms::from_degrees(offset).short())
}

pub fn ruler_name(ruler: Option<PointId>) -> &'static str {
    ruler.map_or("-", PointId::name)
}

fn decimal_hours(hour: u32, minute: u32) -> f64 {
    f64::from(hour) + f64::from(minute) / 60.0
}

/// Text report over a computed chart; render with `to_string()`.
pub struct ChartReport<'a> {
    chart: &'a NatalChart,
}

impl<'a> ChartReport<'a> {
    pub fn new(chart: &'a NatalChart) -> Self {
        Self { chart }
    }

    fn write_basic_data(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(birth) = self.chart.birth() else {
            return Ok(());
        };
        let utc = birth.to_utc();
        let jd = julian_day(utc);

        writeln!(f, "==== Basic data ====")?;
        writeln!(f, "Date: {}", birth.local.format("%Y-%m-%d %H:%M"))?;
        writeln!(
            f,
            "Location: longitude {:.2}, latitude {:.2}",
            birth.location.lon, birth.location.lat
        )?;
        writeln!(f, "Time zone: UTC{:+}", birth.utc_offset())?;
        writeln!(
            f,
            "Local time: {:.2}",
            decimal_hours(birth.local.hour(), birth.local.minute())
        )?;
        writeln!(f, "UT: {:.2}", decimal_hours(utc.hour(), utc.minute()))?;
        writeln!(
            f,
            "Sidereal time: {:.2}",
            local_sidereal_hours(jd, birth.location.lon)
        )?;
        writeln!(f, "Julian Day UT: {:.6}", jd)?;
        writeln!(f)
    }

    fn write_points(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== Positions ====")?;
        for point in self.chart.points() {
            writeln!(
                f,
                "{}: {}, {}{}",
                point.def().name,
                position_label(point.sign, point.sign_offset),
                house_label(point.house),
                if point.retrograde() { ", retrograde" } else { "" }
            )?;
        }
        writeln!(f)
    }

    fn write_houses(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== Houses ====")?;
        for house in self.chart.houses() {
            writeln!(
                f,
                "{}: {}, ruler {}",
                house.label(),
                position_label(house.sign, house.sign_offset),
                ruler_name(house.ruler)
            )?;
        }
        writeln!(f)
    }

    fn write_aspects(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== Aspects ====")?;
        for aspect in self.chart.aspects() {
            let (Some((p1, _)), Some((p2, _)), Some(kind)) = (
                self.chart.placed(aspect.point1),
                self.chart.placed(aspect.point2),
                self.chart.aspect_kind(aspect),
            ) else {
                continue;
            };
            writeln!(
                f,
                "{} - {}: {}, {:.2}, {}",
                p1.def().name,
                p2.def().name,
                kind.name,
                aspect.orb,
                if aspect.applying { "applying" } else { "separating" }
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ChartReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_basic_data(f)?;
        self.write_points(f)?;
        self.write_houses(f)?;
        self.write_aspects(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(position_label(0, 5.515625), "Aries 05°30'");
        assert_eq!(position_label(11, 29.999), "Pisces 29°59'");
        assert_eq!(ruler_name(Some(PointId::Mars)), "Mars");
        assert_eq!(ruler_name(None), "-");
    }
}
