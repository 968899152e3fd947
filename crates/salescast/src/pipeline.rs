//! End-to-end forecast pipeline around an external model.
//!
//! Control flow: normalize the input table, generate dates when there is no
//! history, derive features, call the model, then score and aggregate its
//! output.

use polars::prelude::DataFrame;
use salescast_eval::{evaluate_rows, monthly_summaries};
use salescast_features::{future_frame, history_frame};
use salescast_ingest::SchemaNormalizer;
use salescast_traits::{
    Date, FeatureFrame, ForecastRow, Forecaster, MetricsResult, MonthlySummary, Prediction,
    Result, SalesHistory, SalescastError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Configuration for the forecast pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Days forecast by [`ForecastPipeline::predict_next_months`]
    pub next_months_horizon: i64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            next_months_horizon: 90,
        }
    }
}

/// Forecast of a sales history, compared with the observed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryForecast {
    /// One row per history date, carrying the observed value as `actual`.
    pub predictions: Vec<ForecastRow>,
    /// Accuracy over the rows with an observed value, if any.
    pub metrics: Option<MetricsResult>,
}

/// Runs the feature and post-processing stages around a [`Forecaster`].
///
/// The pipeline holds no mutable state; one instance can serve any number of
/// independent invocations.
pub struct ForecastPipeline<F> {
    model: F,
    normalizer: SchemaNormalizer,
    config: PipelineConfig,
}

impl<F: Forecaster> std::fmt::Debug for ForecastPipeline<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastPipeline")
            .field("model", &self.model.name())
            .field("normalizer", &self.normalizer)
            .field("config", &self.config)
            .finish()
    }
}

impl<F: Forecaster> ForecastPipeline<F> {
    /// Create a pipeline with the default normalizer and configuration.
    pub fn new(model: F) -> Self {
        Self::with_config(model, SchemaNormalizer::default(), PipelineConfig::default())
    }

    /// Create a pipeline with an explicit normalizer and configuration.
    pub const fn with_config(model: F, normalizer: SchemaNormalizer, config: PipelineConfig) -> Self {
        Self {
            model,
            normalizer,
            config,
        }
    }

    /// Get the model.
    pub const fn model(&self) -> &F {
        &self.model
    }

    /// Get the configuration.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Forecast `periods` days starting at `start` from calendar features alone.
    ///
    /// # Errors
    ///
    /// Returns [`SalescastError::InvalidInput`] if `periods` is not positive,
    /// or [`SalescastError::Model`] if the model fails or misaligns its output.
    pub fn predict_range(&self, start: Date, periods: i64) -> Result<Vec<ForecastRow>> {
        let frame = future_frame(start, periods)?;
        let predictions = self.run_model(&frame)?;

        Ok(frame
            .rows()
            .iter()
            .zip(predictions)
            .map(|(row, p)| ForecastRow::from_prediction(row.date, p, None))
            .collect())
    }

    /// Forecast the configured horizon from `start` and total it per month.
    ///
    /// # Errors
    ///
    /// Same as [`predict_range`](Self::predict_range).
    pub fn predict_next_months(&self, start: Date) -> Result<Vec<MonthlySummary>> {
        let rows = self.predict_range(start, self.config.next_months_horizon)?;
        let months = monthly_summaries(&rows);
        info!(%start, days = rows.len(), months = months.len(), "forecast next months");
        Ok(months)
    }

    /// Normalize an uploaded table and forecast it against its own history.
    ///
    /// # Errors
    ///
    /// Returns [`SalescastError::Schema`] if the table cannot be normalized,
    /// plus the errors of [`predict_history`](Self::predict_history).
    pub fn predict_table(&self, table: &DataFrame) -> Result<HistoryForecast> {
        let history = self.normalizer.normalize(table)?;
        self.predict_history(&history)
    }

    /// Forecast every date of a sales history and compare with the observed values.
    ///
    /// # Errors
    ///
    /// Returns [`SalescastError::InvalidInput`] if the history is empty,
    /// [`SalescastError::InsufficientHistory`] if history features cannot be
    /// filled, [`SalescastError::DegenerateInput`] if all observed values are
    /// identical, or [`SalescastError::Model`] if the model fails.
    pub fn predict_history(&self, history: &SalesHistory) -> Result<HistoryForecast> {
        if history.is_empty() {
            return Err(SalescastError::InvalidInput("sales history is empty".to_string()));
        }

        let frame = history_frame(history)?;
        let predictions = self.run_model(&frame)?;

        let rows: Vec<ForecastRow> = frame
            .rows()
            .iter()
            .zip(predictions)
            .map(|(row, p)| ForecastRow::from_prediction(row.date, p, row.value))
            .collect();
        let metrics = evaluate_rows(&rows)?;

        info!(rows = rows.len(), has_metrics = metrics.is_some(), "forecast history");
        Ok(HistoryForecast {
            predictions: rows,
            metrics,
        })
    }

    fn run_model(&self, frame: &FeatureFrame) -> Result<Vec<Prediction>> {
        debug!(model = self.model.name(), rows = frame.len(), mode = ?frame.mode(), "calling model");
        let predictions = self.model.predict(frame)?;

        if predictions.len() != frame.len() {
            return Err(SalescastError::Model(format!(
                "{} returned {} predictions for {} feature rows",
                self.model.name(),
                predictions.len(),
                frame.len()
            )));
        }
        if let Some((row, _)) = frame
            .rows()
            .iter()
            .zip(&predictions)
            .find(|(_, p)| !p.predicted.is_finite())
        {
            return Err(SalescastError::Model(format!(
                "{} returned a non-finite prediction for {}",
                self.model.name(),
                row.date
            )));
        }
        Ok(predictions)
    }
}
