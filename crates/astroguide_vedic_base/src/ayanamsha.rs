//! Simplified Lahiri ayanamsha.
//!
//! The ayanamsha is the angular offset between the tropical zodiac and the
//! sidereal zodiac. This module uses a linear model: 23.85 deg at J2000.0
//! plus 50.3 arc-seconds of precession per Julian year.

use astroguide_time::julian_years_since_j2000;

use crate::util::normalize_360;

/// Lahiri ayanamsha at J2000.0, in degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.85;

/// Annual precession rate in arc-seconds.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.3;

/// Lahiri ayanamsha in degrees at Julian Date `jd`.
pub fn lahiri_ayanamsha_deg(jd: f64) -> f64 {
    LAHIRI_J2000_DEG + julian_years_since_j2000(jd) * PRECESSION_ARCSEC_PER_YEAR / 3600.0
}

/// Convert a tropical longitude to sidereal, normalized to [0, 360).
pub fn tropical_to_sidereal(tropical_lon_deg: f64, jd: f64) -> f64 {
    normalize_360(tropical_lon_deg - lahiri_ayanamsha_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use astroguide_time::{DAYS_PER_JULIAN_YEAR, J2000_JD};

    #[test]
    fn value_at_j2000() {
        assert!((lahiri_ayanamsha_deg(J2000_JD) - 23.85).abs() < 1e-12);
    }

    #[test]
    fn century_of_precession() {
        let jd = J2000_JD + 100.0 * DAYS_PER_JULIAN_YEAR;
        let expected = 23.85 + 100.0 * 50.3 / 3600.0;
        assert!((lahiri_ayanamsha_deg(jd) - expected).abs() < 1e-10);
    }

    #[test]
    fn ayanamsha_decreases_into_past() {
        assert!(lahiri_ayanamsha_deg(J2000_JD - 36525.0) < 23.85);
    }

    #[test]
    fn sidereal_wraps() {
        let s = tropical_to_sidereal(10.0, J2000_JD);
        assert!((s - 346.15).abs() < 1e-9);
    }
}
