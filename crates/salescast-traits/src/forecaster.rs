//! Forecaster trait for the external prediction model.
//!
//! The pipeline never inspects or trains the model. It hands over a
//! [`FeatureFrame`] and expects one [`Prediction`] per row back, in the same
//! order.

use crate::{FeatureFrame, Prediction, Result};

/// An opaque, pre-trained forecasting model.
///
/// Implementations should be thread-safe (`Send + Sync`) so one model can
/// serve concurrent invocations; the pipeline itself shares no state.
///
/// # Example
///
/// ```
/// use salescast_traits::{FeatureFrame, Forecaster, Prediction, Result};
///
/// struct Constant(f64);
///
/// impl Forecaster for Constant {
///     fn name(&self) -> &str {
///         "constant"
///     }
///
///     fn predict(&self, features: &FeatureFrame) -> Result<Vec<Prediction>> {
///         Ok(vec![Prediction::point(self.0); features.len()])
///     }
/// }
/// ```
pub trait Forecaster: Send + Sync {
    /// Returns the name of this model, used in logs and error messages.
    fn name(&self) -> &str;

    /// Predicts one value per feature row.
    ///
    /// The returned vector must be aligned one-to-one with
    /// `features.rows()`; the pipeline rejects output of any other length.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce predictions for the
    /// given features.
    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Prediction>>;
}
