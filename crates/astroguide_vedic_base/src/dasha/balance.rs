//! How much of the first mahadasha is left at birth.

use serde::Serialize;

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

/// Moon's progress through its birth nakshatra, scaled onto the lord's
/// mahadasha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    pub nakshatra_index: u8,
    /// Share of the nakshatra already crossed, [0, 1).
    pub elapsed_fraction: f64,
    /// Days of the entry mahadasha still to run.
    pub balance_days: f64,
}

/// Balance of a mahadasha lasting `entry_period_days` for a Moon at
/// `moon_sidereal_lon`.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> BirthBalance {
    let lon = normalize_360(moon_sidereal_lon);
    let idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let elapsed = (lon - f64::from(idx) * NAKSHATRA_SPAN_27) / NAKSHATRA_SPAN_27;
    BirthBalance {
        nakshatra_index: idx,
        elapsed_fraction: elapsed,
        balance_days: entry_period_days * (1.0 - elapsed),
    }
}
