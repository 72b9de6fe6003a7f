//! Error types for roster module

use thiserror::Error;

use super::columns::Field;

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Roster parsing and filtering errors
#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    /// Gender cell or filter value not recognised
    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    /// Age band label not recognised
    #[error("Unknown age band: {0}")]
    UnknownAgeBand(String),

    /// Belt tier label not recognised
    #[error("Unknown belt tier: {0}")]
    UnknownBeltTier(String),

    /// Weight bound is not a number
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    /// Required column could not be matched to any header
    #[error("No column found for {0}")]
    MissingColumn(Field),
}
