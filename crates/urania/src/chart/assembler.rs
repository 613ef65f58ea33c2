use crate::aspects::AspectCalculator;
use crate::chart::model::{ChartError, NatalChart};
use crate::config::{ChartSettings, ConfigError};
use crate::derived::pars_fortunae;
use crate::ephemeris::{BirthData, EphemerisError, EphemerisProvider, RawPositions};
use crate::houses::{assign_house, build_houses, is_partition, partition_gap};
use crate::layout::RadialLayout;
use crate::points::{ChartPoint, PointDef, PointId, PointKind, CATALOGUE};

/// Turns provider output into a [`NatalChart`].
pub struct ChartAssembler {
    settings: ChartSettings,
    calculator: AspectCalculator,
    layout: RadialLayout,
}

impl ChartAssembler {
    /// Validate the settings and build an assembler over them.
    pub fn new(settings: ChartSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self::from_settings(settings))
    }

    fn from_settings(settings: ChartSettings) -> Self {
        let calculator = AspectCalculator::with_mode(settings.aspects.clone(), settings.applying);
        let layout = RadialLayout::new(settings.layout);
        Self {
            settings,
            calculator,
            layout,
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Ask the provider for positions at the birth moment, then assemble.
    pub fn compute(
        &self,
        provider: &mut dyn EphemerisProvider,
        birth: &BirthData,
    ) -> Result<NatalChart, ChartError> {
        let request = birth.request(&self.settings.house_system);
        log::info!(
            "computing chart for {} UT at {:.2},{:.2} via {}",
            request.datetime,
            request.location.lon,
            request.location.lat,
            provider.name()
        );
        let raw = provider.positions(&request)?;
        Ok(self.assemble(&raw)?.with_birth(birth.clone()))
    }

    /// Build houses, points, aspects and placements from raw positions.
    pub fn assemble(&self, raw: &RawPositions) -> Result<NatalChart, ChartError> {
        raw.validate()?;
        let raw = raw.normalized();

        if !is_partition(&raw.cusps) {
            log::warn!(
                "house cusps do not partition the circle (gap {:.3}°); unmatched points fall into house 1",
                partition_gap(&raw.cusps)
            );
        }
        let houses = build_houses(&raw.cusps);

        let mut points = Vec::with_capacity(CATALOGUE.len());
        for def in CATALOGUE {
            let (longitude, speed) = point_longitude(&raw, def)?;
            let house = def
                .fixed_house
                .unwrap_or_else(|| assign_house(longitude, &raw.cusps));
            points.push(ChartPoint::new(def.id, longitude, speed, house));
        }

        let aspects = self.calculator.compute_aspects(&points);

        let longitudes: Vec<f64> = points.iter().map(|p| p.longitude).collect();
        let placements = self
            .layout
            .place(&longitudes, self.settings.wheel.inner_radius);

        log::debug!(
            "assembled chart: {} points, {} houses, {} aspects",
            points.len(),
            houses.len(),
            aspects.len()
        );

        Ok(NatalChart::new(
            points,
            houses,
            aspects,
            placements,
            self.settings.aspects.clone(),
        ))
    }
}

impl Default for ChartAssembler {
    /// Assembler over the reference settings, which always validate.
    fn default() -> Self {
        Self::from_settings(ChartSettings::default())
    }
}

fn point_longitude(raw: &RawPositions, def: &PointDef) -> Result<(f64, Option<f64>), EphemerisError> {
    match (def.kind, def.id) {
        (PointKind::Planet | PointKind::Node, id) => {
            let body = raw.body(id)?;
            Ok((body.lon, body.speed_lon))
        }
        (PointKind::Angle, PointId::Ascendant) => Ok((raw.ascendant, None)),
        (PointKind::Angle, PointId::Midheaven) => Ok((raw.midheaven, None)),
        (PointKind::Lot, PointId::Fortune) => {
            let sun = raw.body(PointId::Sun)?.lon;
            let moon = raw.body(PointId::Moon)?.lon;
            Ok((pars_fortunae(sun, moon, raw.ascendant), None))
        }
        (_, id) => Err(EphemerisError::MissingBody(id.key().to_string())),
    }
}
