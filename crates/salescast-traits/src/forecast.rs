//! Records produced after the external model step.

use serde::{Deserialize, Serialize};

use crate::{Date, YearMonth};

/// A single point prediction returned by a [`Forecaster`](crate::Forecaster).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Point estimate.
    pub predicted: f64,
    /// Lower bound of the prediction interval, if the model provides one.
    #[serde(default)]
    pub lower: Option<f64>,
    /// Upper bound of the prediction interval, if the model provides one.
    #[serde(default)]
    pub upper: Option<f64>,
}

impl Prediction {
    /// Creates a point prediction without an interval.
    #[must_use]
    pub const fn point(predicted: f64) -> Self {
        Self {
            predicted,
            lower: None,
            upper: None,
        }
    }

    /// Creates a prediction with an interval.
    #[must_use]
    pub const fn with_interval(predicted: f64, lower: f64, upper: f64) -> Self {
        Self {
            predicted,
            lower: Some(lower),
            upper: Some(upper),
        }
    }
}

/// A dated forecast, optionally paired with the observed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    /// Calendar date of the forecast.
    pub date: Date,
    /// Point estimate.
    pub predicted: f64,
    /// Lower bound of the prediction interval.
    #[serde(default)]
    pub predicted_lower: Option<f64>,
    /// Upper bound of the prediction interval.
    #[serde(default)]
    pub predicted_upper: Option<f64>,
    /// Observed value, when ground truth is available.
    #[serde(default)]
    pub actual: Option<f64>,
}

impl ForecastRow {
    /// Pairs a model prediction with its date and optional ground truth.
    #[must_use]
    pub const fn from_prediction(date: Date, prediction: Prediction, actual: Option<f64>) -> Self {
        Self {
            date,
            predicted: prediction.predicted,
            predicted_lower: prediction.lower,
            predicted_upper: prediction.upper,
            actual,
        }
    }
}

/// Forecast totals for one calendar month.
///
/// `lower_sum` and `upper_sum` are omitted when any day of the month lacks
/// the corresponding bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The calendar month, serialized as `YYYY-MM`.
    pub month: YearMonth,
    /// Sum of daily point estimates.
    pub predicted_sum: f64,
    /// Sum of daily lower bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_sum: Option<f64>,
    /// Sum of daily upper bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_sum: Option<f64>,
}

/// Forecast accuracy against ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Mean absolute error.
    #[serde(rename = "MAE")]
    pub mae: f64,
    /// Root mean squared error.
    #[serde(rename = "RMSE")]
    pub rmse: f64,
    /// Coefficient of determination.
    #[serde(rename = "R2")]
    pub r2: f64,
}
