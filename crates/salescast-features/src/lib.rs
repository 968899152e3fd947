//! Feature derivation for the Salescast forecasting pipeline.
//!
//! This crate turns dates and sales history into model inputs:
//! - Dates: contiguous daily ranges for pure-future prediction
//! - Calendar: day, week, month, quarter and seasonal flags per date
//! - History: trailing moving averages and lags of the sales value, with
//!   mean backfill of gaps
//!
//! The [`builder`] functions assemble these into a
//! [`FeatureFrame`](salescast_traits::FeatureFrame) that always carries the
//! complete canonical feature set.
//!
//! # Example
//!
//! ```ignore
//! use salescast_features::{future_frame, parse_date};
//!
//! let frame = future_frame(parse_date("2024-06-01")?, 90)?;
//! assert_eq!(frame.len(), 90);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod calendar;
pub mod dates;
pub mod history;
pub mod registry;

// Re-export key types
pub use builder::{calendar_frame, future_frame, history_frame};
pub use calendar::{calendar_features, calendar_features_for};
pub use dates::{date_range, parse_date};
pub use history::history_features;
pub use registry::{FeatureCategory, FeatureInfo};
