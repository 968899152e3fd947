//! Sales table ingestion for Salescast.
//!
//! This crate turns uploaded tables with arbitrary column names into the
//! canonical `{date, value}` sales history the feature stage expects.
//!
//! # Usage
//!
//! ```rust,ignore
//! use salescast_ingest::{SchemaConfig, SchemaNormalizer, read_csv};
//!
//! let table = read_csv("orders.csv")?;
//! let normalizer = SchemaNormalizer::new(SchemaConfig::default());
//! let history = normalizer.normalize(&table)?;
//! ```
//!
//! # Column synonyms
//!
//! By default the date column may be called `date` or
//! `Date Order was placed`, and the value column `sales` or
//! `Total Retail Price for This Order`. Other sources are supported by
//! loading a [`SchemaConfig`] from JSON:
//!
//! ```json
//! {
//!   "date_synonyms": ["order_date", "date"],
//!   "value_synonyms": ["revenue"],
//!   "date_formats": ["%Y-%m-%d"],
//!   "duplicate_dates": "sum"
//! }
//! ```

mod config;
mod error;
mod normalizer;
mod reader;

pub use config::{DuplicateDates, SchemaConfig};
pub use error::IngestError;
pub use normalizer::{CanonicalField, SchemaNormalizer};
pub use reader::{load_history, read_csv, read_csv_bytes};

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
