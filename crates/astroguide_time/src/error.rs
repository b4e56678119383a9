//! Error types for civil date/time parsing.

use thiserror::Error;

/// Errors from parsing user-entered dates, times and offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not `YYYY-MM-DD` or names a non-existent day.
    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    /// Time string is not `HH:MM` or `HH:MM:SS`.
    #[error("invalid time {0:?} (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),
    /// UTC offset string is not `[+-]HH:MM`.
    #[error("invalid UTC offset {0:?} (expected +HH:MM or -HH:MM)")]
    InvalidOffset(String),
    /// UTC offset outside the civil range of -12:00..=+14:00.
    #[error("UTC offset of {0} minutes is out of range")]
    OffsetOutOfRange(i32),
    /// Applying the offset moves the instant outside the supported calendar.
    #[error("{0} is outside the supported date range once converted to UTC")]
    MomentOutOfRange(String),
}
