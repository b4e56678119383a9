//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year Vimshottari cycle is seeded by the Moon's nakshatra at
//! birth and subdivided proportionally into up to three levels
//! (mahadasha, antardasha, pratyantardasha).

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use types::{
    DAYS_PER_YEAR, DEFAULT_DASHA_LEVEL, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    MAX_DASHA_LEVEL,
};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, find_active_period,
    starting_lord, vimshottari_children, vimshottari_complete_level, vimshottari_hierarchy,
    vimshottari_level0, vimshottari_snapshot, vimshottari_years,
};
