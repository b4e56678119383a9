//! Birth chart generation for AstroGuide.
//!
//! This crate provides:
//! - `pseudo_hash`: the deterministic demo ephemeris
//! - `generate_chart`: nine grahas and the ascendant with rashi, nakshatra and pada
//! - `generate_kundali`: equal houses, aspects and Vimshottari dasha on top of a chart
//! - `SouthIndianChart`: the fixed 4x4 South Indian grid

pub mod chart;
pub mod error;
pub mod hash;
pub mod kundali;
pub mod layout;

pub use chart::{
    Ascendant, BirthInput, ChartResult, DEMO_DISCLAIMER, PlanetPosition, generate_chart,
};
pub use error::ChartError;
pub use hash::{HASH_MULTIPLIER, hash_degrees, pseudo_hash, to_uint32};
pub use kundali::{GrahaAspect, HousePlacement, Kundali, KundaliConfig, generate_kundali, graha_aspects};
pub use layout::{ChartCell, SOUTH_INDIAN_POSITIONS, SouthIndianChart};
