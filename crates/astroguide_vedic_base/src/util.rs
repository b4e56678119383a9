//! Angle helpers.

/// Wrap an angle into [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest angular separation between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (normalize_360(a) - normalize_360(b)).abs();
    if d > 180.0 { 360.0 - d } else { d }
}

/// Format decimal degrees with one fractional digit and a degree sign.
pub fn format_degree(deg: f64) -> String {
    format!("{deg:.1}°")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_into_circle() {
        for (input, want) in [(0.0, 0.0), (360.0, 0.0), (-10.0, 350.0), (730.0, 10.0), (-370.0, 350.0)] {
            assert!((normalize_360(input) - want).abs() < 1e-10, "{input}");
        }
    }

    #[test]
    fn distance_folds_past_180() {
        assert!((angular_distance(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_distance(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((angular_distance(-30.0, 30.0) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn degree_format() {
        assert_eq!(format_degree(12.0), "12.0°");
        assert_eq!(format_degree(29.96), "30.0°");
    }
}
