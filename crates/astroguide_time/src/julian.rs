//! Julian Date conversions.

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Date of J2000.0 (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day` may carry a fractional part for the time of day.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Greenwich mean sidereal time at `jd` (UT), in hours [0, 24).
///
/// Meeus, Astronomical Algorithms, eq. 12.4.
pub fn gmst_hours(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = d / DAYS_PER_JULIAN_CENTURY;
    let deg = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    deg.rem_euclid(360.0) / 15.0
}

/// Local mean sidereal time in hours [0, 24) at east-positive `longitude_deg`.
pub fn local_sidereal_time_hours(jd: f64, longitude_deg: f64) -> f64 {
    (gmst_hours(jd) + longitude_deg / 15.0).rem_euclid(24.0)
}

/// Unix epoch milliseconds to Julian Date.
pub fn epoch_millis_to_jd(ms: i64) -> f64 {
    JD_UNIX_EPOCH + ms as f64 / MILLIS_PER_DAY
}

/// Julian Date to Unix epoch milliseconds (rounded to the nearest ms).
pub fn jd_to_epoch_millis(jd: f64) -> i64 {
    ((jd - JD_UNIX_EPOCH) * MILLIS_PER_DAY).round() as i64
}

/// Julian years elapsed since J2000.0.
pub fn julian_years_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_from_calendar() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn unix_epoch_from_calendar() {
        let jd = calendar_to_jd(1970, 1, 1.0);
        assert!((jd - JD_UNIX_EPOCH).abs() < 1e-9);
    }

    #[test]
    fn millis_round_trip_j2000() {
        // 2000-01-01T12:00:00Z
        let ms = 946_728_000_000;
        assert!((epoch_millis_to_jd(ms) - J2000_JD).abs() < 1e-9);
        assert_eq!(jd_to_epoch_millis(J2000_JD), ms);
    }

    #[test]
    fn gmst_at_j2000() {
        assert!((gmst_hours(J2000_JD) - 18.697_374_558).abs() < 1e-9);
    }

    #[test]
    fn gmst_meeus_example() {
        // 1987-04-10 0h UT: 13h 10m 46.3668s
        let want = 13.0 + 10.0 / 60.0 + 46.3668 / 3600.0;
        let got = gmst_hours(calendar_to_jd(1987, 4, 10.0));
        assert!((got - want).abs() < 1e-6, "{got}");
    }

    #[test]
    fn local_sidereal_time_wraps() {
        // 18.697h + 6h crosses midnight.
        let east = local_sidereal_time_hours(J2000_JD, 90.0);
        assert!((east - 0.697_374_558).abs() < 1e-9, "{east}");
        // West longitudes stay non-negative.
        let west = local_sidereal_time_hours(calendar_to_jd(1987, 4, 10.0), -77.0);
        assert!((west - 8.046_213_006).abs() < 1e-6, "{west}");
        assert_eq!(local_sidereal_time_hours(J2000_JD, 0.0), gmst_hours(J2000_JD));
    }

    #[test]
    fn years_since_j2000() {
        assert!(julian_years_since_j2000(J2000_JD).abs() < 1e-12);
        let jd = J2000_JD + 10.0 * DAYS_PER_JULIAN_YEAR;
        assert!((julian_years_since_j2000(jd) - 10.0).abs() < 1e-12);
    }
}
