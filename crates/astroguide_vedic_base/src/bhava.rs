//! Equal-house (bhava) cusps and house placement.
//!
//! House 1 begins at the ascendant; each following house begins 30 deg
//! further along the ecliptic.

use crate::util::normalize_360;

/// Span of one house in the equal-house system.
pub const HOUSE_SPAN: f64 = 30.0;

/// The 12 cusps, `cusps[0]` being the ascendant.
pub fn equal_house_cusps(ascendant_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (k, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(ascendant_deg + k as f64 * HOUSE_SPAN);
    }
    cusps
}

/// House number (1-12) containing `lon`.
///
/// House k spans `[cusps[k-1], cusps[k])`; a house that straddles 0 deg
/// wraps. Returns 1 when no house matches (malformed cusps).
pub fn house_of(lon: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_360(lon);
    for i in 0..12 {
        let cusp = cusps[i];
        let next = cusps[(i + 1) % 12];
        let inside = if next > cusp {
            lon >= cusp && lon < next
        } else {
            lon >= cusp || lon < next
        };
        if inside {
            return i as u8 + 1;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cusps_from_zero() {
        let c = equal_house_cusps(0.0);
        for (k, v) in c.iter().enumerate() {
            assert!((v - 30.0 * k as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn cusps_wrap() {
        let c = equal_house_cusps(350.0);
        assert!((c[0] - 350.0).abs() < 1e-12);
        assert!((c[1] - 20.0).abs() < 1e-12);
        assert!((c[11] - 320.0).abs() < 1e-12);
    }

    #[test]
    fn ascendant_is_first_house() {
        let c = equal_house_cusps(123.4);
        assert_eq!(house_of(123.4, &c), 1);
        assert_eq!(house_of(153.3, &c), 1);
        assert_eq!(house_of(153.5, &c), 2);
        assert_eq!(house_of(123.3, &c), 12);
    }

    #[test]
    fn house_across_zero() {
        let c = equal_house_cusps(350.0);
        assert_eq!(house_of(355.0, &c), 1);
        assert_eq!(house_of(5.0, &c), 1);
        assert_eq!(house_of(20.0, &c), 2);
        assert_eq!(house_of(-5.0, &c), 1);
    }

    #[test]
    fn degenerate_cusps_fall_back() {
        assert_eq!(house_of(42.0, &[0.0; 12]), 1);
    }
}
