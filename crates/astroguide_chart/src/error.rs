//! Error types for chart inputs.

use astroguide_time::TimeError;
use astroguide_vedic_base::VedicError;
use thiserror::Error;

/// Errors from parsing birth data or assembling a kundali.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Date, time or UTC offset could not be parsed.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Latitude outside [-90, 90] or not a number.
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),
    /// Longitude outside [-180, 180] or not a number.
    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
    /// Kundali options rejected by the Vedic layer.
    #[error(transparent)]
    Vedic(#[from] VedicError),
}
