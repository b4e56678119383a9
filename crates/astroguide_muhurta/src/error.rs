//! Error types for muhurta queries.

use astroguide_vedic_base::VedicError;
use thiserror::Error;

/// Errors from building or running a muhurta query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MuhurtaError {
    /// Event key matches none of the known event kinds.
    #[error("unknown event type: {0} (try `astroguide events`)")]
    UnknownEvent(String),
    /// A query spanning zero days.
    #[error("date range must cover at least one day")]
    EmptyRange,
    /// The range runs past the last representable date.
    #[error("date range overflows the calendar")]
    RangeOverflow,
    /// Panchang table lookup failed.
    #[error(transparent)]
    Vedic(#[from] VedicError),
}
