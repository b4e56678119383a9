//! Clock-hour arithmetic for intra-day windows.
//!
//! Muhurta windows and kalam intervals are expressed as fractional hours
//! after local midnight (e.g. 16.5 = 16:30).

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Format fractional hours as zero-padded `HH:MM`.
///
/// Minutes are rounded to the nearest whole minute; a rounding that reaches
/// 60 carries into the hour.
pub fn format_hours(hours: f64) -> String {
    let mut hrs = hours.floor() as i64;
    let mut mins = ((hours - hrs as f64) * 60.0).round() as i64;
    if mins == 60 {
        hrs += 1;
        mins = 0;
    }
    format!("{hrs:02}:{mins:02}")
}

/// Half-open clock interval `[start, end)` in fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourSpan {
    pub start: f64,
    pub end: f64,
}

impl HourSpan {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Span of `duration` hours starting at `start`.
    pub fn starting_at(start: f64, duration: f64) -> Self {
        Self::new(start, start + duration)
    }

    /// Length in hours.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True when `hour` lies in `[start, end)`.
    pub fn contains(&self, hour: f64) -> bool {
        hour >= self.start && hour < self.end
    }

    /// True when the two half-open spans share any instant.
    pub fn overlaps(&self, other: &HourSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Display for HourSpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} – {}", format_hours(self.start), format_hours(self.end))
    }
}
