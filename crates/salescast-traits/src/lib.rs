#![doc(issue_tracker_base_url = "https://github.com/salescast/salescast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type definitions for the Salescast forecasting pipeline.
//!
//! This crate provides the shared vocabulary of the pipeline: sales
//! observations, feature rows handed to an external forecasting model,
//! forecast rows coming back from it, and the error type every stage reports.

/// The version of the salescast-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod features;
pub mod forecast;
pub mod forecaster;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{ErrorKind, Result, SalescastError};
pub use features::{CalendarFeatures, FeatureFrame, FeatureMode, FeatureRow, HistoryFeatures};
pub use forecast::{ForecastRow, MetricsResult, MonthlySummary, Prediction};
pub use forecaster::Forecaster;
pub use types::{Date, Observation, SalesHistory, YearMonth};
