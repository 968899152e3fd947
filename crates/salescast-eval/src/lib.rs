//! Forecast evaluation for Salescast.
//!
//! This crate interprets model output:
//! - Accuracy metrics (MAE, RMSE, R²) against ground truth
//! - Aggregation of daily forecasts into calendar months
//!
//! # Example
//!
//! ```rust,ignore
//! use salescast_eval::{evaluate, monthly_summaries};
//!
//! let metrics = evaluate(&actual, &predicted)?;
//! let months = monthly_summaries(&forecast_rows);
//! ```

pub mod aggregate;
pub mod metrics;

// Re-export main functions
pub use aggregate::monthly_summaries;
pub use metrics::{evaluate, evaluate_rows};
