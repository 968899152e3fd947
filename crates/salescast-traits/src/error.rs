//! Error types for the Salescast pipeline.
//!
//! Every failure a pipeline stage can produce is a [`SalescastError`]. Each
//! variant carries a human-readable detail string, and [`SalescastError::kind`]
//! exposes a stable tag so a serving layer can map failures to responses
//! without matching on message text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for Salescast operations.
#[derive(Debug, Error)]
pub enum SalescastError {
    /// Malformed or out-of-range caller input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input table is missing a required column or holds unparsable cells.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A lag or moving-average column has no defined entry to fill gaps from.
    #[error("Insufficient history: {0}")]
    InsufficientHistory(String),

    /// A metric is mathematically undefined for the given input.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// The external forecaster failed or returned misaligned output.
    #[error("Model error: {0}")]
    Model(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl SalescastError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Schema(_) => ErrorKind::Schema,
            Self::InsufficientHistory(_) => ErrorKind::InsufficientHistory,
            Self::DegenerateInput(_) => ErrorKind::DegenerateInput,
            Self::Model(_) => ErrorKind::Model,
            Self::Polars(_) => ErrorKind::Internal,
        }
    }
}

/// Stable classification of a [`SalescastError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`SalescastError::InvalidInput`].
    InvalidInput,
    /// See [`SalescastError::Schema`].
    Schema,
    /// See [`SalescastError::InsufficientHistory`].
    InsufficientHistory,
    /// See [`SalescastError::DegenerateInput`].
    DegenerateInput,
    /// See [`SalescastError::Model`].
    Model,
    /// A dataframe operation failed unexpectedly.
    Internal,
}

/// A specialized Result type for Salescast operations.
///
/// This is a convenience type that uses [`SalescastError`] as the error type.
pub type Result<T> = std::result::Result<T, SalescastError>;
