//! Tithi (lunar day) names within one paksha.
//!
//! Each paksha (fortnight) has 15 tithis. The 15th is Purnima in the
//! bright half and Amavasya in the dark half; the paksha-neutral table
//! names it "Purnima/Amavasya".

use serde::Serialize;

use crate::error::VedicError;

/// The 15 tithis of a paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    PurnimaAmavasya,
}

/// All 15 tithis in order (index 0 = Pratipada).
pub const ALL_TITHIS: [Tithi; 15] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
    Tithi::PurnimaAmavasya,
];

const ALL_TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima/Amavasya",
];

impl Tithi {
    /// Display name of the tithi.
    pub fn name(self) -> &'static str {
        ALL_TITHI_NAMES[self.index() as usize]
    }

    /// 0-based index (Pratipada=0 .. Purnima/Amavasya=14).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Tithi at a 0-based index.
    pub fn from_index(index: u8) -> Result<Self, VedicError> {
        ALL_TITHIS
            .get(index as usize)
            .copied()
            .ok_or(VedicError::IndexOutOfRange {
                table: "tithi",
                index,
            })
    }
}
