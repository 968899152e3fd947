#![doc(issue_tracker_base_url = "https://github.com/salescast/salescast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # salescast
//!
//! Feature enrichment and forecast post-processing for daily sales forecasting.
//!
//! salescast is an umbrella crate that re-exports all salescast sub-crates for
//! convenience, and provides [`ForecastPipeline`], which wires them around a
//! pre-trained [`Forecaster`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use salescast::{Date, FeatureFrame, Forecaster, ForecastPipeline, Prediction, Result};
//!
//! struct MyModel;
//!
//! impl Forecaster for MyModel {
//!     fn name(&self) -> &str { "my_model" }
//!     fn predict(&self, features: &FeatureFrame) -> Result<Vec<Prediction>> {
//!         // Call the real model here
//!         Ok(vec![Prediction::point(0.0); features.len()])
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let pipeline = ForecastPipeline::new(MyModel);
//! let start = Date::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! let daily = pipeline.predict_range(start, 30)?;
//! let monthly = pipeline.predict_next_months(start)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types, errors and the [`Forecaster`] trait
//! - [`features`] - Date ranges, calendar and history features
//! - [`ingest`] - Schema normalization and CSV loading
//! - [`eval`] - Accuracy metrics and monthly aggregation
//!
//! ## Architecture
//!
//! 1. **Ingest** maps an uploaded table onto `{date, value}`
//! 2. **Features** derive calendar features for every row, and lag and
//!    moving-average features when sales history is present
//! 3. The external **model** predicts one value per feature row
//! 4. **Eval** scores predictions against actuals and rolls them up by month

/// Version information for the salescast crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod pipeline;

// ============================================================================
// Core Types
// ============================================================================

/// Core type definitions for salescast.
///
/// This module re-exports the shared vocabulary of the pipeline:
///
/// - [`Forecaster`] - The external model abstraction
/// - [`FeatureFrame`] - Model input
/// - [`ForecastRow`], [`MonthlySummary`], [`MetricsResult`] - Model output after post-processing
pub mod traits {
    pub use salescast_traits::*;
}

// Re-export core trait at top level for convenience
pub use salescast_traits::Forecaster;

// Re-export error types
pub use salescast_traits::{ErrorKind, Result, SalescastError};

// Re-export common types
pub use salescast_traits::{
    Date, FeatureFrame, FeatureMode, FeatureRow, ForecastRow, MetricsResult, MonthlySummary,
    Observation, Prediction, SalesHistory, YearMonth,
};

pub use pipeline::{ForecastPipeline, HistoryForecast, PipelineConfig};

// ============================================================================
// Stages
// ============================================================================

/// Feature derivation.
///
/// ## Key Components
///
/// - **Dates**: `date_range` for contiguous daily ranges
/// - **Calendar**: `calendar_features` per date
/// - **History**: `history_features` with mean backfill
/// - **Builder**: `future_frame` and `history_frame`
pub mod features {
    pub use salescast_features::*;
}

/// Schema normalization and CSV loading.
pub mod ingest {
    pub use salescast_ingest::*;
}

/// Forecast evaluation and aggregation.
pub mod eval {
    pub use salescast_eval::*;
}
