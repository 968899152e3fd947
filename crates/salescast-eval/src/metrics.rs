//! Forecast accuracy metrics.
//!
//! This module compares predictions with observed values:
//! - MAE: mean absolute error
//! - RMSE: square root of the mean squared error
//! - R²: 1 - residual sum of squares / total sum of squares about the mean

use ndarray::Array1;
use salescast_traits::stats::is_constant;
use salescast_traits::{ForecastRow, MetricsResult, Result, SalescastError};
use tracing::debug;

/// Compute accuracy metrics for position-aligned actual and predicted values.
///
/// # Errors
///
/// Returns [`SalescastError::InvalidInput`] if the sequences differ in length
/// or are empty, and [`SalescastError::DegenerateInput`] if every actual
/// value is identical or the sums of squares leave the `f64` range, since R²
/// is then undefined.
///
/// # Example
///
/// ```
/// use salescast_eval::evaluate;
///
/// let metrics = evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(metrics.mae, 0.0);
/// assert_eq!(metrics.r2, 1.0);
/// ```
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<MetricsResult> {
    if actual.len() != predicted.len() {
        return Err(SalescastError::InvalidInput(format!(
            "actual and predicted differ in length ({} vs {})",
            actual.len(),
            predicted.len()
        )));
    }
    if actual.is_empty() {
        return Err(SalescastError::InvalidInput(
            "cannot evaluate an empty forecast".to_string(),
        ));
    }
    if let Some(v) = actual.iter().chain(predicted).find(|v| !v.is_finite()) {
        return Err(SalescastError::InvalidInput(format!(
            "metrics require finite values, found {v}"
        )));
    }
    if is_constant(actual) {
        return Err(SalescastError::DegenerateInput(format!(
            "R2 is undefined: all {} actual values equal {}",
            actual.len(),
            actual[0]
        )));
    }

    let actual = Array1::from_vec(actual.to_vec());
    let predicted = Array1::from_vec(predicted.to_vec());
    let residuals = &actual - &predicted;

    let mae = residuals.mapv(f64::abs).mean().unwrap_or(0.0);
    let mse = residuals.mapv(|r| r * r).mean().unwrap_or(0.0);
    let rmse = mse.sqrt();

    let mean = actual.mean().unwrap_or(0.0);
    let ss_res = residuals.mapv(|r| r * r).sum();
    let ss_tot = actual.mapv(|a| (a - mean).powi(2)).sum();
    if !(ss_tot.is_finite() && ss_tot > 0.0) {
        return Err(SalescastError::DegenerateInput(format!(
            "R2 is undefined: total sum of squares of the actual values is {ss_tot}"
        )));
    }
    let r2 = 1.0 - ss_res / ss_tot;
    if !(mae.is_finite() && rmse.is_finite() && r2.is_finite()) {
        return Err(SalescastError::DegenerateInput(format!(
            "metrics are not representable (MAE {mae}, RMSE {rmse}, R2 {r2})"
        )));
    }

    debug!(n = actual.len(), mae, rmse, r2, "evaluated forecast");
    Ok(MetricsResult { mae, rmse, r2 })
}

/// Compute metrics over the forecast rows that carry an actual value.
///
/// Returns `Ok(None)` when no row has ground truth.
///
/// # Errors
///
/// Propagates the errors of [`evaluate`] for the rows with actual values.
pub fn evaluate_rows(rows: &[ForecastRow]) -> Result<Option<MetricsResult>> {
    let (actual, predicted): (Vec<f64>, Vec<f64>) = rows
        .iter()
        .filter_map(|row| row.actual.map(|a| (a, row.predicted)))
        .unzip();

    if actual.is_empty() {
        return Ok(None);
    }
    evaluate(&actual, &predicted).map(Some)
}
