//! Error types for Vedic lookups.

use thiserror::Error;

/// Errors from Vedic base lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Table index outside the table's range.
    #[error("{table} index {index} out of range")]
    IndexOutOfRange { table: &'static str, index: u8 },
    /// Name that matches no table entry.
    #[error("unknown {table} name: {name}")]
    UnknownName { table: &'static str, name: String },
    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
