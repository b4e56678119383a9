//! Birth chart generation from the deterministic pseudo-ephemeris.
//!
//! Longitudes are whole degrees drawn from [`hash_degrees`] and read
//! directly as sidereal positions. The output is stable for a given
//! input but carries no astronomical meaning.

use astroguide_time::{CivilDateTime, parse_utc_offset};
use astroguide_vedic_base::{
    ALL_GRAHAS, Graha, Nakshatra, Rashi, format_degree, nakshatra_from_longitude,
    rashi_from_longitude,
};
use log::debug;
use serde::Serialize;

use crate::error::ChartError;
use crate::hash::{hash_degrees, pseudo_hash};

/// Notice front ends show next to every generated chart.
pub const DEMO_DISCLAIMER: &str = "Demo mode: planetary positions are approximated using a hash \
function, not real astronomical calculations.";

/// Stride between successive planet seeds.
pub const PLANET_SEED_STRIDE: f64 = 7919.0;

/// Offset added to every planet seed.
pub const PLANET_SEED_OFFSET: f64 = 31.0;

/// Stride between successive retrograde seeds.
pub const RETROGRADE_SEED_STRIDE: f64 = 113.0;

/// Birth data as entered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthInput {
    pub moment: CivilDateTime,
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

impl BirthInput {
    pub fn new(moment: CivilDateTime, latitude: f64, longitude: f64) -> Self {
        Self {
            moment,
            latitude,
            longitude,
        }
    }

    /// Parse raw form strings. `utc_offset` accepts `+HH:MM`, `-HH:MM` or `Z`.
    pub fn parse(
        date: &str,
        time: &str,
        utc_offset: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ChartError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ChartError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ChartError::Longitude(longitude));
        }
        let moment =
            CivilDateTime::parse(date, time)?.with_utc_offset(parse_utc_offset(utc_offset)?)?;
        Ok(Self::new(moment, latitude, longitude))
    }

    /// `epoch_millis + lat*1000 + lng*500`, summed left to right.
    pub fn seed(&self) -> f64 {
        self.moment.epoch_millis() as f64 + self.latitude * 1000.0 + self.longitude * 500.0
    }

    /// Julian Date (UTC) of the birth moment.
    pub fn jd(&self) -> f64 {
        self.moment.jd_utc()
    }
}

/// One graha's position in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Whole-degree longitude in [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    /// 0-11, Aries first.
    pub sign_index: u8,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    /// 0-26, Ashwini first.
    pub nakshatra_index: u8,
    /// 1-4.
    pub pada: u8,
    pub retrograde: bool,
}

impl PlanetPosition {
    /// Degree within the sign, one decimal and a degree sign (e.g. `12.0°`).
    pub fn degree_label(&self) -> String {
        format_degree(self.degree_in_sign)
    }

    /// Glyph with a retrograde marker when applicable.
    pub fn glyph(&self) -> String {
        if self.retrograde {
            format!("{}ᴿ", self.graha.symbol())
        } else {
            self.graha.symbol().to_string()
        }
    }
}

/// Lagna (ascendant).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ascendant {
    pub longitude: f64,
    pub rashi: Rashi,
    pub sign_index: u8,
    pub degree_in_sign: f64,
}

impl Ascendant {
    pub fn degree_label(&self) -> String {
        format_degree(self.degree_in_sign)
    }
}

/// Generated chart. Planets are in [`ALL_GRAHAS`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub planets: [PlanetPosition; 9],
    pub ascendant: Ascendant,
    pub moon_sign: Rashi,
    pub sun_sign: Rashi,
}

impl ChartResult {
    pub fn planet(&self, graha: Graha) -> &PlanetPosition {
        &self.planets[graha.index() as usize]
    }

    /// Planets placed in the rashi at `sign_index`.
    pub fn planets_in_sign(&self, sign_index: u8) -> impl Iterator<Item = &PlanetPosition> {
        self.planets.iter().filter(move |p| p.sign_index == sign_index)
    }
}

fn planet_position(graha: Graha, seed: f64) -> PlanetPosition {
    let i = graha.index() as f64;
    let lon = hash_degrees(seed + i * PLANET_SEED_STRIDE + PLANET_SEED_OFFSET) as f64;
    let rashi = rashi_from_longitude(lon);
    let nak = nakshatra_from_longitude(lon);
    let retrograde =
        graha.can_retrograde() && hash_degrees(seed + i * RETROGRADE_SEED_STRIDE) % 5 == 0;

    PlanetPosition {
        graha,
        longitude: lon,
        rashi: rashi.rashi,
        sign_index: rashi.rashi_index,
        degree_in_sign: rashi.degrees_in_rashi,
        nakshatra: nak.nakshatra,
        nakshatra_index: nak.nakshatra_index,
        pada: nak.pada,
        retrograde,
    }
}

/// Generate the chart for `input`. Never fails; identical input gives
/// bit-identical output.
pub fn generate_chart(input: &BirthInput) -> ChartResult {
    let seed = input.seed();
    debug!("chart seed {seed} for {}", input.moment);

    let asc_lon = hash_degrees(seed) as f64;
    let asc = rashi_from_longitude(asc_lon);
    let ascendant = Ascendant {
        longitude: asc_lon,
        rashi: asc.rashi,
        sign_index: asc.rashi_index,
        degree_in_sign: asc.degrees_in_rashi,
    };

    let planets = ALL_GRAHAS.map(|g| planet_position(g, seed));
    debug!(
        "ascendant {} {}, first hash {}",
        ascendant.rashi.western_name(),
        ascendant.degree_label(),
        pseudo_hash(seed)
    );

    ChartResult {
        moon_sign: planets[Graha::Chandra.index() as usize].rashi,
        sun_sign: planets[Graha::Surya.index() as usize].rashi,
        planets,
        ascendant,
    }
}
