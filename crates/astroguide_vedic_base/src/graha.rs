//! Grahas in chart order (Sun, Moon, Mars, Mercury, Jupiter, Venus,
//! Saturn, Rahu, Ketu) and sign rulership.

use std::str::FromStr;

use serde::Serialize;

use crate::error::VedicError;
use crate::rashi::Rashi;

/// A graha, named in Sanskrit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sun, Moon, ...
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Astronomical glyph (nodes use the ascending/descending node signs).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Surya => "☉",
            Self::Chandra => "☽",
            Self::Mangal => "♂",
            Self::Buddh => "☿",
            Self::Guru => "♃",
            Self::Shukra => "♀",
            Self::Shani => "♄",
            Self::Rahu => "☊",
            Self::Ketu => "☋",
        }
    }

    /// Position in chart order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Graha at a 0-based index.
    pub fn from_index(index: u8) -> Result<Self, VedicError> {
        ALL_GRAHAS
            .get(index as usize)
            .copied()
            .ok_or(VedicError::IndexOutOfRange {
                table: "graha",
                index,
            })
    }

    /// True for the five grahas that can be marked retrograde
    /// (Mars through Saturn).
    pub const fn can_retrograde(self) -> bool {
        matches!(
            self,
            Self::Mangal | Self::Buddh | Self::Guru | Self::Shukra | Self::Shani
        )
    }
}

impl FromStr for Graha {
    type Err = VedicError;

    /// Accepts English or Sanskrit names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_GRAHAS
            .into_iter()
            .find(|g| {
                g.english_name().eq_ignore_ascii_case(needle) || g.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| VedicError::UnknownName {
                table: "graha",
                name: s.to_string(),
            })
    }
}

/// Ruler of a sign. The nodes rule none.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}
