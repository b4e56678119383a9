//! Karana (half-tithi) names: 7 movable followed by 4 fixed.

use serde::Serialize;

use crate::error::VedicError;

/// The 11 karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// All 11 karanas in order (index 0 = Bava).
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    /// Sanskrit name of the karana.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// 0-based index (Bava=0 .. Kimstughna=10).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Karana at a 0-based index.
    pub fn from_index(index: u8) -> Result<Self, VedicError> {
        ALL_KARANAS
            .get(index as usize)
            .copied()
            .ok_or(VedicError::IndexOutOfRange {
                table: "karana",
                index,
            })
    }

    /// Vishti (Bhadra) is inauspicious for beginning any undertaking.
    pub const fn is_vishti(self) -> bool {
        matches!(self, Self::Vishti)
    }

    /// The four fixed (sthira) karanas.
    pub const fn is_fixed(self) -> bool {
        self.index() >= 7
    }
}
