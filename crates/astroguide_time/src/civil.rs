//! Civil (wall-clock) date and time as entered on a birth form.
//!
//! `CivilDateTime` is the canonical input representation used throughout
//! the workspace. It pairs a calendar date and a clock time with a fixed
//! offset from UTC, and converts to epoch milliseconds and Julian dates.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::TimeError;
use crate::julian::epoch_millis_to_jd;

/// Most negative civil UTC offset in use (-12:00).
pub const MIN_UTC_OFFSET_MINUTES: i32 = -12 * 60;

/// Most positive civil UTC offset in use (+14:00).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Calendar date + clock time + fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CivilDateTime {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Minutes east of UTC (IST = 330).
    pub utc_offset_minutes: i32,
}

impl CivilDateTime {
    /// Wall-clock time at UTC (offset zero).
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            utc_offset_minutes: 0,
        }
    }

    /// Same wall-clock reading interpreted at a different UTC offset.
    ///
    /// Fails when the offset is outside -12:00..=+14:00 or when the shifted
    /// instant falls off either end of the calendar.
    pub fn with_utc_offset(self, minutes: i32) -> Result<Self, TimeError> {
        if !(MIN_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&minutes) {
            return Err(TimeError::OffsetOutOfRange(minutes));
        }
        let shifted = Self {
            utc_offset_minutes: minutes,
            ..self
        };
        if shifted.checked_utc().is_none() {
            return Err(TimeError::MomentOutOfRange(shifted.to_string()));
        }
        Ok(shifted)
    }

    /// Parse form values: `YYYY-MM-DD` and `HH:MM[:SS]`, offset zero.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        Ok(Self::new(parse_date(date)?, parse_time(time)?))
    }

    fn checked_utc(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::new(self.date, self.time)
            .checked_sub_signed(Duration::minutes(i64::from(self.utc_offset_minutes)))
    }

    /// The instant as a naive UTC date-time.
    ///
    /// Values built through [`with_utc_offset`](Self::with_utc_offset) always
    /// convert exactly. A hand-assembled value whose instant lies outside the
    /// calendar is clamped to its nearest end.
    pub fn to_utc(&self) -> NaiveDateTime {
        self.checked_utc().unwrap_or(if self.utc_offset_minutes > 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
    }

    /// Milliseconds since 1970-01-01T00:00:00Z.
    pub fn epoch_millis(&self) -> i64 {
        self.to_utc().and_utc().timestamp_millis()
    }

    /// Julian Date (UTC scale) of the instant.
    pub fn jd_utc(&self) -> f64 {
        epoch_millis_to_jd(self.epoch_millis())
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M:%S"),
            format_utc_offset(self.utc_offset_minutes)
        )
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let t = s.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}

/// Parse `+HH:MM`, `-HH:MM`, `HH:MM` or `Z` into minutes east of UTC.
pub fn parse_utc_offset(s: &str) -> Result<i32, TimeError> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("z") {
        return Ok(0);
    }
    let (sign, body) = match t.as_bytes().first() {
        Some(b'+') => (1, &t[1..]),
        Some(b'-') => (-1, &t[1..]),
        _ => (1, t),
    };
    let invalid = || TimeError::InvalidOffset(s.to_string());
    let (h, m) = body.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = h.parse().map_err(|_| invalid())?;
    let minutes: i32 = m.parse().map_err(|_| invalid())?;
    if !(0..60).contains(&minutes) || hours < 0 {
        return Err(invalid());
    }
    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .map(|t| sign * t)
        .ok_or_else(invalid)?;
    if !(MIN_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&total) {
        return Err(TimeError::OffsetOutOfRange(total));
    }
    Ok(total)
}

/// Format minutes east of UTC as `+HH:MM`.
pub fn format_utc_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let m = minutes.abs();
    format!("{sign}{:02}:{:02}", m / 60, m % 60)
}

/// Weekday index with Sunday = 0 .. Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Epoch milliseconds of 00:00 UTC on `date`.
pub fn midnight_epoch_millis(date: NaiveDate) -> i64 {
    NaiveDateTime::new(date, NaiveTime::MIN)
        .and_utc()
        .timestamp_millis()
}

/// `count` consecutive calendar days starting at `start`, stopping early
/// only at the end of the calendar. `NaiveDate::MAX` itself is yielded.
pub fn days_from(start: NaiveDate, count: u32) -> impl Iterator<Item = NaiveDate> {
    (0..count).map_while(move |i| start.checked_add_days(Days::new(u64::from(i))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_form_values() {
        let c = CivilDateTime::parse("1990-01-15", "06:30").unwrap();
        assert_eq!(c.date, ymd(1990, 1, 15));
        assert_eq!(c.time, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        assert_eq!(c.utc_offset_minutes, 0);
    }

    #[test]
    fn parse_time_with_seconds() {
        let t = parse_time("23:59:58").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(23, 59, 58).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_date("15/01/1990"), Err(TimeError::InvalidDate(_))));
        assert!(matches!(parse_date("1990-02-30"), Err(TimeError::InvalidDate(_))));
        assert!(matches!(parse_time("25:00"), Err(TimeError::InvalidTime(_))));
        assert!(matches!(parse_time("noon"), Err(TimeError::InvalidTime(_))));
    }

    #[test]
    fn epoch_millis_known() {
        // 1990-01-15T06:30:00Z
        let c = CivilDateTime::parse("1990-01-15", "06:30").unwrap();
        assert_eq!(c.epoch_millis(), 632_385_000_000);
    }

    #[test]
    fn epoch_millis_unix_zero() {
        let c = CivilDateTime::parse("1970-01-01", "00:00").unwrap();
        assert_eq!(c.epoch_millis(), 0);
    }

    #[test]
    fn offset_shifts_instant_back() {
        let utc = CivilDateTime::parse("1990-01-15", "06:30").unwrap();
        let ist = utc.with_utc_offset(330).unwrap();
        assert_eq!(utc.epoch_millis() - ist.epoch_millis(), 330 * 60_000);
    }

    #[test]
    fn offset_out_of_range() {
        let c = CivilDateTime::parse("2000-01-01", "00:00").unwrap();
        assert_eq!(c.with_utc_offset(15 * 60), Err(TimeError::OffsetOutOfRange(900)));
    }

    #[test]
    fn utc_offset_parsing() {
        assert_eq!(parse_utc_offset("+05:30").unwrap(), 330);
        assert_eq!(parse_utc_offset("-03:30").unwrap(), -210);
        assert_eq!(parse_utc_offset("Z").unwrap(), 0);
        assert_eq!(parse_utc_offset("01:00").unwrap(), 60);
        assert!(matches!(parse_utc_offset("+5"), Err(TimeError::InvalidOffset(_))));
        assert!(matches!(parse_utc_offset("+05:75"), Err(TimeError::InvalidOffset(_))));
        assert_eq!(parse_utc_offset("+15:00"), Err(TimeError::OffsetOutOfRange(900)));
        assert_eq!(
            parse_utc_offset("+999:00"),
            Err(TimeError::OffsetOutOfRange(59_940))
        );
    }

    #[test]
    fn utc_offset_hours_overflow() {
        assert!(matches!(
            parse_utc_offset("+71582788:16"),
            Err(TimeError::InvalidOffset(_))
        ));
        assert!(matches!(
            parse_utc_offset("-2147483647:00"),
            Err(TimeError::InvalidOffset(_))
        ));
    }

    #[test]
    fn offset_past_calendar_ends() {
        let first = CivilDateTime::new(NaiveDate::MIN, NaiveTime::MIN);
        assert!(matches!(
            first.with_utc_offset(330),
            Err(TimeError::MomentOutOfRange(_))
        ));
        assert!(first.with_utc_offset(-330).is_ok());

        let last = CivilDateTime::new(NaiveDate::MAX, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert!(matches!(
            last.with_utc_offset(-330),
            Err(TimeError::MomentOutOfRange(_))
        ));
        assert!(last.with_utc_offset(330).is_ok());
    }

    #[test]
    fn signed_year_form_input() {
        let c = CivilDateTime::parse("-262143-01-01", "00:00").unwrap();
        assert!(matches!(
            c.with_utc_offset(330),
            Err(TimeError::MomentOutOfRange(_))
        ));
    }

    #[test]
    fn utc_offset_format() {
        assert_eq!(format_utc_offset(330), "+05:30");
        assert_eq!(format_utc_offset(-210), "-03:30");
        assert_eq!(format_utc_offset(0), "+00:00");
    }

    #[test]
    fn display_includes_offset() {
        let c = CivilDateTime::parse("1990-01-15", "06:30")
            .unwrap()
            .with_utc_offset(330)
            .unwrap();
        assert_eq!(c.to_string(), "1990-01-15 06:30:00 +05:30");
    }

    #[test]
    fn weekday_sunday_first() {
        // 2024-03-17 was a Sunday
        assert_eq!(weekday_index(ymd(2024, 3, 17)), 0);
        assert_eq!(weekday_index(ymd(2024, 3, 23)), 6);
    }

    #[test]
    fn midnight_millis() {
        assert_eq!(midnight_epoch_millis(ymd(1970, 1, 2)), 86_400_000);
    }

    #[test]
    fn days_from_crosses_month() {
        let days: Vec<_> = days_from(ymd(2024, 2, 28), 3).collect();
        assert_eq!(days, vec![ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]);
    }

    #[test]
    fn days_from_reaches_calendar_end() {
        let before = NaiveDate::MAX.pred_opt().unwrap();
        let days: Vec<_> = days_from(before, 5).collect();
        assert_eq!(days, vec![before, NaiveDate::MAX]);
    }
}
