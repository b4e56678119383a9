//! The twelve rashis and sign-relative positions.
//!
//! Longitudes here are sidereal unless a function says otherwise. A sign
//! covers a fixed 30 degree arc starting at 0 degrees Mesha.

use serde::Serialize;

use crate::ayanamsha::lahiri_ayanamsha_deg;
use crate::error::VedicError;
use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// Zodiac sign, Mesha (Aries) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// Rashis in zodiac order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Aries, Taurus, ...
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Zodiac glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mesha => "♈",
            Self::Vrishabha => "♉",
            Self::Mithuna => "♊",
            Self::Karka => "♋",
            Self::Simha => "♌",
            Self::Kanya => "♍",
            Self::Tula => "♎",
            Self::Vrischika => "♏",
            Self::Dhanu => "♐",
            Self::Makara => "♑",
            Self::Kumbha => "♒",
            Self::Meena => "♓",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi at a 0-based index.
    pub fn from_index(index: u8) -> Result<Self, VedicError> {
        ALL_RASHIS
            .get(index as usize)
            .copied()
            .ok_or(VedicError::IndexOutOfRange {
                table: "rashi",
                index,
            })
    }

    /// The rashi `n` signs onward (n = 1 is this rashi).
    pub fn nth_from(self, n: u8) -> Self {
        ALL_RASHIS[(self.index() as usize + n.saturating_sub(1) as usize) % 12]
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// An angle split into whole degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// Fractional, in [0, 60).
    pub seconds: f64,
}

/// Where a longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Same as `rashi.index()`.
    pub rashi_index: u8,
    /// `degrees_in_rashi` as DMS.
    pub dms: Dms,
    /// Offset into the sign, [0, 30).
    pub degrees_in_rashi: f64,
}

pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0
}

/// Split `deg` into DMS. The sign of `deg` is dropped and the magnitude
/// is wrapped into [0, 360), so `degrees` always fits.
pub fn deg_to_dms(deg: f64) -> Dms {
    let abs = normalize_360(deg.abs());
    let arcmin = abs.fract() * 60.0;
    let whole_min = arcmin.trunc();
    Dms {
        degrees: abs.trunc() as u16,
        minutes: whole_min as u8,
        seconds: (arcmin - whole_min) * 60.0,
    }
}

/// Rashi and in-sign offset for a sidereal longitude. Input is wrapped
/// into [0, 360) first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let offset = lon % RASHI_SPAN;
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        rashi_index: idx,
        dms: deg_to_dms(offset),
        degrees_in_rashi: offset,
    }
}

/// Like [`rashi_from_longitude`] for a tropical longitude, subtracting the
/// simplified Lahiri ayanamsha at `jd`.
pub fn rashi_from_tropical(tropical_lon_deg: f64, jd: f64) -> RashiInfo {
    rashi_from_longitude(tropical_lon_deg - lahiri_ayanamsha_deg(jd))
}
