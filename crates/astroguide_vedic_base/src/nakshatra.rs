//! Lunar mansions: 27 equal divisions of the sidereal zodiac, each split
//! into four padas.

use serde::Serialize;

use crate::ayanamsha::lahiri_ayanamsha_deg;
use crate::error::VedicError;
use crate::util::normalize_360;

/// 13° 20'.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// 3° 20'.
pub const PADA_SPAN: f64 = 360.0 / 108.0;

/// Nakshatra, Ashwini first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name with spaces, e.g. `Purva Phalguni`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, VedicError> {
        ALL_NAKSHATRAS_27
            .get(index as usize)
            .copied()
            .ok_or(VedicError::IndexOutOfRange {
                table: "nakshatra",
                index,
            })
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

/// Nakshatra and pada for a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// 1-4.
    pub pada: u8,
    /// Offset into the nakshatra, [0, NAKSHATRA_SPAN_27).
    pub degrees_in_nakshatra: f64,
}

/// Nakshatra and pada for a sidereal longitude.
///
/// The index comes from a division and the offset from a remainder, so at
/// a boundary the two can disagree by one ulp; the index is clamped to 26
/// and the pada to 4 rather than reconciled.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let offset = lon % NAKSHATRA_SPAN_27;
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[idx as usize],
        nakshatra_index: idx,
        pada: ((offset / PADA_SPAN).floor() as u8 + 1).min(4),
        degrees_in_nakshatra: offset,
    }
}

/// Tropical variant of [`nakshatra_from_longitude`].
pub fn nakshatra_from_tropical(tropical_lon_deg: f64, jd: f64) -> NakshatraInfo {
    nakshatra_from_longitude(tropical_lon_deg - lahiri_ayanamsha_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_index() {
        assert_eq!(Nakshatra::from_index(8), Ok(Nakshatra::Ashlesha));
        assert_eq!(Nakshatra::from_index(26), Ok(Nakshatra::Revati));
        assert!(Nakshatra::from_index(27).is_err());
        assert!(Nakshatra::all().iter().enumerate().all(|(i, n)| n.index() as usize == i));
    }

    #[test]
    fn padas_tile_a_nakshatra() {
        assert!((PADA_SPAN * 108.0 - 360.0).abs() < 1e-10);
        assert!((NAKSHATRA_SPAN_27 - 4.0 * PADA_SPAN).abs() < 1e-12);
    }

    #[test]
    fn zero_is_ashwini_first_pada() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!((info.nakshatra, info.pada), (Nakshatra::Ashwini, 1));
    }

    #[test]
    fn last_degree_is_revati_fourth_pada() {
        let info = nakshatra_from_longitude(359.5);
        assert_eq!((info.nakshatra, info.pada), (Nakshatra::Revati, 4));
    }

    #[test]
    fn inside_mula() {
        // Mula spans 240.0 - 253.33
        let info = nakshatra_from_longitude(247.0);
        assert_eq!(info.nakshatra, Nakshatra::Mula);
        assert_eq!(info.pada, 3);
        assert!((info.degrees_in_nakshatra - 7.0).abs() < 1e-9);
    }

    #[test]
    fn each_pada_of_magha() {
        let start = 9.0 * NAKSHATRA_SPAN_27;
        for p in 1..=4u8 {
            let lon = start + f64::from(p - 1) * PADA_SPAN + 1.0;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra, Nakshatra::Magha);
            assert_eq!(info.pada, p);
        }
    }

    #[test]
    fn negative_input_wraps() {
        assert_eq!(nakshatra_from_longitude(-0.5).nakshatra, Nakshatra::Revati);
        assert_eq!(nakshatra_from_longitude(370.0).nakshatra, Nakshatra::Ashwini);
    }
}
