//! Error types for sales table ingestion.

use salescast_traits::SalescastError;
use thiserror::Error;

/// Errors that can occur while loading and normalizing a sales table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing failed.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] polars::error::PolarsError),

    /// The table could not be normalized.
    #[error(transparent)]
    Normalize(#[from] SalescastError),
}
