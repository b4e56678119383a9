//! Muhurta query and result types.

use std::fmt::{Display, Formatter};

use astroguide_time::{HourSpan, NaiveDate};
use astroguide_vedic_base::{Karana, Nakshatra, Tithi, Vaar, Yoga};
use serde::Serialize;

use crate::error::MuhurtaError;
use crate::event::EventKind;

/// Default number of days scanned.
pub const DEFAULT_DAYS: u32 = 7;

/// Default number of windows shown.
pub const DEFAULT_LIMIT: usize = 10;

/// A muhurta search over `[from, from + days)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MuhurtaQuery {
    pub from: NaiveDate,
    pub days: u32,
    pub event: EventKind,
}

impl MuhurtaQuery {
    pub fn new(from: NaiveDate, days: u32, event: EventKind) -> Result<Self, MuhurtaError> {
        if days == 0 {
            return Err(MuhurtaError::EmptyRange);
        }
        // The last scanned day must exist; the day after it need not.
        if from.checked_add_days(chrono::Days::new(u64::from(days - 1))).is_none() {
            return Err(MuhurtaError::RangeOverflow);
        }
        Ok(Self { from, days, event })
    }
}

/// Presentation band for a window score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: i32) -> Self {
        if score >= 75 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Weak => "weak",
        }
    }
}

/// One candidate window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MuhurtaWindow {
    pub date: NaiveDate,
    pub vaar: Vaar,
    pub window: HourSpan,
    pub tithi: Tithi,
    pub nakshatra: Nakshatra,
    pub yoga: Yoga,
    pub karana: Karana,
    /// Clamped day score the window derives from.
    pub day_score: i32,
    /// Day score plus per-window jitter; may leave [20, 98].
    pub score: i32,
    pub rahu_kalam: HourSpan,
    pub gulika_kalam: HourSpan,
    pub favorable: bool,
}

impl MuhurtaWindow {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// English weekday name.
    pub fn day(&self) -> &'static str {
        self.vaar.english_name()
    }
}

impl Display for MuhurtaWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:<9} {}  score {:>3}{}",
            self.date.format("%Y-%m-%d"),
            self.day(),
            self.window,
            self.score,
            if self.favorable { "  ★" } else { "" }
        )
    }
}
