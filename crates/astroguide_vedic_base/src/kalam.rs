//! Rahu Kalam and Gulika Kalam.
//!
//! Fixed 1.5-hour inauspicious windows per weekday, expressed in clock
//! hours after local midnight on a nominal 06:00-18:00 day.

use astroguide_time::HourSpan;

use crate::vaar::Vaar;

/// Length of each kalam in hours.
pub const KALAM_DURATION_HOURS: f64 = 1.5;

/// Rahu Kalam start hour, Sunday first.
pub const RAHU_KALAM_START: [f64; 7] = [16.5, 7.5, 15.0, 12.0, 13.5, 10.5, 9.0];

/// Gulika Kalam start hour, Sunday first.
pub const GULIKA_KALAM_START: [f64; 7] = [15.0, 13.5, 12.0, 10.5, 9.0, 7.5, 6.0];

/// Rahu Kalam span for the given weekday.
pub fn rahu_kalam(vaar: Vaar) -> HourSpan {
    HourSpan::starting_at(RAHU_KALAM_START[vaar.index() as usize], KALAM_DURATION_HOURS)
}

/// Gulika Kalam span for the given weekday.
pub fn gulika_kalam(vaar: Vaar) -> HourSpan {
    HourSpan::starting_at(GULIKA_KALAM_START[vaar.index() as usize], KALAM_DURATION_HOURS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaar::ALL_VAARS;

    #[test]
    fn sunday_and_saturday() {
        assert_eq!(rahu_kalam(Vaar::Ravivaar).to_string(), "16:30 – 18:00");
        assert_eq!(gulika_kalam(Vaar::Shanivaar).to_string(), "06:00 – 07:30");
    }

    #[test]
    fn all_within_daytime() {
        for v in ALL_VAARS {
            for span in [rahu_kalam(v), gulika_kalam(v)] {
                assert!(span.start >= 6.0 && span.end <= 18.0, "{v:?}: {span}");
                assert!((span.duration() - KALAM_DURATION_HOURS).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn rahu_and_gulika_never_coincide() {
        for v in ALL_VAARS {
            assert_ne!(rahu_kalam(v).start, gulika_kalam(v).start);
        }
    }
}
