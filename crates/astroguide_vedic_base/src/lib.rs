//! Vedic lookup tables and derived calculations for AstroGuide.
//!
//! This crate provides:
//! - Rashi, nakshatra (with pada) and graha tables
//! - Panchang name tables: tithi, yoga, karana, vaar
//! - Rahu Kalam and Gulika Kalam spans per weekday
//! - Simplified Lahiri ayanamsha
//! - Equal-house cusps and major aspects
//! - Vimshottari dasha hierarchy and snapshots

pub mod aspect;
pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod kalam;
pub mod karana;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use aspect::{
    ALL_ASPECTS, AspectKind, DEFAULT_ORB, aspect_deviation, aspect_strength, find_aspect,
    is_in_aspect,
};
pub use ayanamsha::{
    LAHIRI_J2000_DEG, PRECESSION_ARCSEC_PER_YEAR, lahiri_ayanamsha_deg, tropical_to_sidereal,
};
pub use bhava::{HOUSE_SPAN, equal_house_cusps, house_of};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use kalam::{
    GULIKA_KALAM_START, KALAM_DURATION_HOURS, RAHU_KALAM_START, gulika_kalam, rahu_kalam,
};
pub use karana::{ALL_KARANAS, Karana};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_from_tropical,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_from_tropical,
};
pub use tithi::{ALL_TITHIS, Tithi};
pub use util::{angular_distance, format_degree, normalize_360};
pub use vaar::{ALL_VAARS, Vaar};
pub use yoga::{ALL_YOGAS, Yoga};
