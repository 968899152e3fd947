//! End-to-end tests of the forecast pipeline with stand-in models.

use approx::assert_relative_eq;
use polars::prelude::*;
use salescast::{
    Date, ErrorKind, FeatureFrame, FeatureMode, Forecaster, ForecastPipeline, Observation,
    Prediction, Result, SalesHistory, YearMonth,
};

/// Predicts the day of month from calendar features, or the weekly moving
/// average when history features are present.
struct CalendarEcho;

impl Forecaster for CalendarEcho {
    fn name(&self) -> &str {
        "calendar_echo"
    }

    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Prediction>> {
        Ok(features
            .rows()
            .iter()
            .map(|row| {
                let p = match row.history {
                    Some(h) => h.ma_7,
                    None => f64::from(row.calendar.day_of_month),
                };
                Prediction::with_interval(p, p - 1.0, p + 1.0)
            })
            .collect())
    }
}

/// Drops the last prediction.
struct ShortModel;

impl Forecaster for ShortModel {
    fn name(&self) -> &str {
        "short"
    }

    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Prediction>> {
        Ok(vec![Prediction::point(1.0); features.len().saturating_sub(1)])
    }
}

/// Emits NaN for every row.
struct NanModel;

impl Forecaster for NanModel {
    fn name(&self) -> &str {
        "nan"
    }

    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Prediction>> {
        Ok(vec![Prediction::point(f64::NAN); features.len()])
    }
}

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
}

fn history(start: Date, values: &[Option<f64>]) -> SalesHistory {
    let observations = values
        .iter()
        .enumerate()
        .map(|(i, v)| Observation {
            date: start + chrono::Duration::days(i as i64),
            value: *v,
        })
        .collect();
    SalesHistory::new(observations).unwrap()
}

#[test]
fn test_predict_range_is_contiguous() {
    let pipeline = ForecastPipeline::new(CalendarEcho);
    let rows = pipeline.predict_range(date(2024, 1, 28), 10).unwrap();

    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].date, date(2024, 1, 28));
    assert_eq!(rows[9].date, date(2024, 2, 6));
    assert!(rows.windows(2).all(|w| (w[1].date - w[0].date).num_days() == 1));
    assert!(rows.iter().all(|r| r.actual.is_none()));

    // Feb 6 echoes its day of month
    assert_relative_eq!(rows[9].predicted, 6.0);
    assert_eq!(rows[9].predicted_lower, Some(5.0));
}

#[test]
fn test_predict_range_rejects_zero_periods() {
    let pipeline = ForecastPipeline::new(CalendarEcho);
    let err = pipeline.predict_range(date(2024, 1, 1), 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_predict_next_months() {
    let pipeline = ForecastPipeline::new(CalendarEcho);
    let months = pipeline.predict_next_months(date(2024, 3, 1)).unwrap();

    // 90 days from March 1st: all of March and April, 29 days of May
    assert_eq!(months.len(), 3);
    assert_eq!(months[0].month, YearMonth::of(date(2024, 3, 1)));
    assert_eq!(months[2].month, YearMonth::of(date(2024, 5, 1)));

    assert_relative_eq!(months[0].predicted_sum, 496.0); // 1 + ... + 31
    assert_relative_eq!(months[0].lower_sum.unwrap(), 465.0);
    assert_relative_eq!(months[1].predicted_sum, 465.0); // 1 + ... + 30
    assert_relative_eq!(months[2].predicted_sum, 435.0); // 1 + ... + 29
}

#[test]
fn test_predict_history_with_metrics() {
    let values: Vec<Option<f64>> = (0..45).map(|i| Some(f64::from(i % 9) * 10.0)).collect();
    let pipeline = ForecastPipeline::new(CalendarEcho);
    let forecast = pipeline.predict_history(&history(date(2024, 1, 1), &values)).unwrap();

    assert_eq!(forecast.predictions.len(), 45);
    assert_eq!(forecast.predictions[3].actual, Some(30.0));

    let metrics = forecast.metrics.unwrap();
    assert!(metrics.mae > 0.0);
    assert!(metrics.rmse >= metrics.mae);
}

#[test]
fn test_predict_history_without_values_is_calendar_only() {
    let values = vec![None; 5];
    let pipeline = ForecastPipeline::new(CalendarEcho);
    let forecast = pipeline.predict_history(&history(date(2024, 1, 1), &values)).unwrap();

    assert_eq!(forecast.predictions.len(), 5);
    assert!(forecast.metrics.is_none());
    assert_relative_eq!(forecast.predictions[4].predicted, 5.0);
}

#[test]
fn test_predict_history_constant_actuals() {
    let values = vec![Some(7.0); 40];
    let pipeline = ForecastPipeline::new(CalendarEcho);
    let err = pipeline
        .predict_history(&history(date(2024, 1, 1), &values))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
}

#[test]
fn test_predict_history_empty() {
    let pipeline = ForecastPipeline::new(CalendarEcho);
    let err = pipeline.predict_history(&history(date(2024, 1, 1), &[])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_predict_table_normalizes_synonyms() {
    let dates: Vec<String> = (1..=31).map(|d| format!("2024-01-{d:02}")).collect();
    let sales: Vec<String> = (1..=31).map(|d| (d * 3 % 11).to_string()).collect();
    let table = DataFrame::new(vec![
        Series::new("Date Order was placed".into(), dates).into(),
        Series::new("Total Retail Price for This Order".into(), sales).into(),
        Series::new("Customer ID".into(), vec!["c"; 31]).into(),
    ])
    .unwrap();

    let pipeline = ForecastPipeline::new(CalendarEcho);
    let forecast = pipeline.predict_table(&table).unwrap();

    assert_eq!(forecast.predictions.len(), 31);
    assert_eq!(forecast.predictions[0].date, date(2024, 1, 1));
    assert_eq!(forecast.predictions[0].actual, Some(3.0));
    assert!(forecast.metrics.is_some());
}

#[test]
fn test_predict_table_missing_column() {
    let table = DataFrame::new(vec![
        Series::new("when".into(), vec!["2024-01-01"]).into(),
        Series::new("sales".into(), vec!["1"]).into(),
    ])
    .unwrap();

    let pipeline = ForecastPipeline::new(CalendarEcho);
    let err = pipeline.predict_table(&table).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn test_misaligned_model_output() {
    let pipeline = ForecastPipeline::new(ShortModel);
    let err = pipeline.predict_range(date(2024, 1, 1), 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Model);
}

#[test]
fn test_non_finite_model_output() {
    let pipeline = ForecastPipeline::new(NanModel);
    let err = pipeline.predict_range(date(2024, 1, 1), 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Model);
}

#[test]
fn test_future_frame_mode() {
    struct ModeCheck;

    impl Forecaster for ModeCheck {
        fn name(&self) -> &str {
            "mode_check"
        }

        fn predict(&self, features: &FeatureFrame) -> Result<Vec<Prediction>> {
            assert_eq!(features.mode(), FeatureMode::CalendarOnly);
            assert_eq!(features.feature_names().len(), 11);
            Ok(vec![Prediction::point(0.0); features.len()])
        }
    }

    let pipeline = ForecastPipeline::new(ModeCheck);
    assert_eq!(pipeline.predict_range(date(2024, 1, 1), 3).unwrap().len(), 3);
}

#[test]
fn test_history_forecast_serializes_metric_names() {
    let values: Vec<Option<f64>> = (0..35).map(|i| Some(f64::from(i % 5))).collect();
    let pipeline = ForecastPipeline::new(CalendarEcho);
    let forecast = pipeline.predict_history(&history(date(2024, 1, 1), &values)).unwrap();

    let json = serde_json::to_value(&forecast).unwrap();
    let metrics = json["metrics"].as_object().unwrap();
    let mut keys: Vec<&str> = metrics.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["MAE", "R2", "RMSE"]);

    assert_eq!(json["predictions"].as_array().unwrap().len(), 35);
    assert_eq!(json["predictions"][0]["date"], "2024-01-01");
    assert_eq!(json["predictions"][1]["actual"], 1.0);
}
