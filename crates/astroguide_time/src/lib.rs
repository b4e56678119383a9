//! Civil date/time handling for AstroGuide.
//!
//! This crate provides:
//! - `CivilDateTime`: form-entered date + time + UTC offset
//! - Epoch-millisecond and Julian Date conversions
//! - Greenwich and local mean sidereal time
//! - `HourSpan` and `HH:MM` formatting for intra-day windows

pub mod civil;
pub mod clock;
pub mod error;
pub mod julian;

pub use civil::{
    CivilDateTime, MAX_UTC_OFFSET_MINUTES, MIN_UTC_OFFSET_MINUTES, days_from, format_utc_offset,
    midnight_epoch_millis, parse_date, parse_time, parse_utc_offset, weekday_index,
};
pub use clock::{HourSpan, format_hours};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, JD_UNIX_EPOCH, calendar_to_jd,
    epoch_millis_to_jd, gmst_hours, jd_to_epoch_millis, julian_years_since_j2000,
    local_sidereal_time_hours,
};

pub use chrono::{NaiveDate, NaiveTime};
