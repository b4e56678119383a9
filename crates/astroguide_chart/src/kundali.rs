//! Kundali: a chart extended with houses, aspects and Vimshottari dasha.

use astroguide_vedic_base::dasha::{DashaHierarchy, DashaSnapshot, vimshottari_hierarchy, vimshottari_snapshot};
use astroguide_vedic_base::{
    AspectKind, DEFAULT_ORB, Graha, VedicError, equal_house_cusps, find_aspect, house_of,
};
use log::debug;
use serde::Serialize;

use crate::chart::{BirthInput, ChartResult, generate_chart};
use crate::error::ChartError;

/// Options for [`generate_kundali`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KundaliConfig {
    /// Aspect orb in degrees.
    pub aspect_orb: f64,
    /// Deepest dasha level (0 = mahadasha only, 2 = pratyantardasha).
    pub dasha_max_level: u8,
}

impl Default for KundaliConfig {
    fn default() -> Self {
        Self {
            aspect_orb: DEFAULT_ORB,
            dasha_max_level: 1,
        }
    }
}

/// A graha and the house it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HousePlacement {
    pub graha: Graha,
    /// 1-12.
    pub house: u8,
}

/// An aspect formed between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaAspect {
    pub first: Graha,
    pub second: Graha,
    pub kind: AspectKind,
    /// Percent, 100 when exact.
    pub strength: f64,
}

/// Chart plus derived houses, aspects and dasha periods.
#[derive(Debug, Clone, Serialize)]
pub struct Kundali {
    pub chart: ChartResult,
    /// Equal-house cusps, `cusps[0]` = ascendant.
    pub cusps: [f64; 12],
    /// Planets in chart order with their houses.
    pub houses: [HousePlacement; 9],
    pub aspects: Vec<GrahaAspect>,
    pub dasha: DashaHierarchy,
}

impl Kundali {
    /// House (1-12) occupied by `graha`.
    pub fn house_of(&self, graha: Graha) -> u8 {
        self.houses[graha.index() as usize].house
    }

    /// Active dasha periods at `query_jd`, down to `max_level`.
    pub fn dasha_at(&self, query_jd: f64, max_level: u8) -> Result<DashaSnapshot, VedicError> {
        let moon = self.chart.planet(Graha::Chandra).longitude;
        vimshottari_snapshot(self.dasha.birth_jd, moon, query_jd, max_level)
    }
}

/// Aspects between every unordered pair of grahas.
///
/// Rahu and Ketu are included; their pseudo positions are independent.
pub fn graha_aspects(chart: &ChartResult, orb: f64) -> Vec<GrahaAspect> {
    let mut out = Vec::new();
    for (i, a) in chart.planets.iter().enumerate() {
        for b in &chart.planets[i + 1..] {
            if let Some((kind, strength)) = find_aspect(a.longitude, b.longitude, orb) {
                out.push(GrahaAspect {
                    first: a.graha,
                    second: b.graha,
                    kind,
                    strength,
                });
            }
        }
    }
    out
}

/// Build a kundali for `input`.
pub fn generate_kundali(input: &BirthInput, config: &KundaliConfig) -> Result<Kundali, ChartError> {
    if !(config.aspect_orb > 0.0 && config.aspect_orb <= 30.0) {
        return Err(ChartError::Vedic(VedicError::InvalidInput(
            "aspect orb must be in (0, 30]",
        )));
    }

    let chart = generate_chart(input);
    let cusps = equal_house_cusps(chart.ascendant.longitude);
    let houses = chart.planets.map(|p| HousePlacement {
        graha: p.graha,
        house: house_of(p.longitude, &cusps),
    });
    let aspects = graha_aspects(&chart, config.aspect_orb);
    let moon = chart.planet(Graha::Chandra).longitude;
    let dasha = vimshottari_hierarchy(input.jd(), moon, config.dasha_max_level)?;

    debug!(
        "kundali: {} aspects, {} dasha levels",
        aspects.len(),
        dasha.levels.len()
    );

    Ok(Kundali {
        chart,
        cusps,
        houses,
        aspects,
        dasha,
    })
}
