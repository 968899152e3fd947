//! Feature rows handed to the external forecasting model.
//!
//! A [`FeatureRow`] is one date's worth of model inputs: the calendar-derived
//! features that every row carries, plus the lag and moving-average features
//! that are only present when real sales history was supplied. Rows are
//! collected into a [`FeatureFrame`], which guarantees that every row carries
//! the same, complete feature set.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::date_to_epoch_days;
use crate::{Date, Result, SalescastError};

/// Canonical calendar feature names, in column order.
pub const CALENDAR_FEATURE_NAMES: [&str; 11] = [
    "day_of_week",
    "day_of_month",
    "week_of_year",
    "month",
    "quarter",
    "is_weekend",
    "is_month_start",
    "is_month_end",
    "is_summer",
    "is_christmas_season",
    "is_back_to_school",
];

/// Canonical history feature names, in column order.
pub const HISTORY_FEATURE_NAMES: [&str; 4] = ["ma_7", "ma_30", "lag_7", "lag_30"];

/// Features derived from a date alone.
///
/// Flags are encoded as `0` or `1`. `day_of_week` counts from Monday (`0`)
/// to Sunday (`6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarFeatures {
    /// Day of the week, 0 = Monday through 6 = Sunday.
    pub day_of_week: u32,
    /// Day of the month (1-31).
    pub day_of_month: u32,
    /// ISO 8601 week number (1-53).
    pub week_of_year: u32,
    /// Month of the year (1-12).
    pub month: u32,
    /// Quarter of the year (1-4).
    pub quarter: u32,
    /// Saturday or Sunday.
    pub is_weekend: u8,
    /// First seven days of the month.
    pub is_month_start: u8,
    /// Day 24 onwards.
    pub is_month_end: u8,
    /// June, July or August.
    pub is_summer: u8,
    /// November or December.
    pub is_christmas_season: u8,
    /// August, or the first half of September.
    pub is_back_to_school: u8,
}

impl CalendarFeatures {
    /// Returns the features in [`CALENDAR_FEATURE_NAMES`] order.
    #[must_use]
    pub fn to_array(&self) -> [i32; 11] {
        [
            self.day_of_week as i32,
            self.day_of_month as i32,
            self.week_of_year as i32,
            self.month as i32,
            self.quarter as i32,
            i32::from(self.is_weekend),
            i32::from(self.is_month_start),
            i32::from(self.is_month_end),
            i32::from(self.is_summer),
            i32::from(self.is_christmas_season),
            i32::from(self.is_back_to_school),
        ]
    }
}

/// Lag and moving-average features derived from the sales history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryFeatures {
    /// Trailing 7-row mean of the value.
    pub ma_7: f64,
    /// Trailing 30-row mean of the value.
    pub ma_30: f64,
    /// Value 7 rows earlier.
    pub lag_7: f64,
    /// Value 30 rows earlier.
    pub lag_30: f64,
}

impl HistoryFeatures {
    /// Returns the features in [`HISTORY_FEATURE_NAMES`] order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.ma_7, self.ma_30, self.lag_7, self.lag_30]
    }
}

/// Which feature groups the rows of a frame carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureMode {
    /// Calendar features only, for pure-future prediction.
    CalendarOnly,
    /// Calendar plus lag and moving-average features.
    WithHistory,
}

impl FeatureMode {
    /// Returns the canonical feature names carried in this mode.
    #[must_use]
    pub fn feature_names(&self) -> Vec<&'static str> {
        let mut names = CALENDAR_FEATURE_NAMES.to_vec();
        if *self == Self::WithHistory {
            names.extend(HISTORY_FEATURE_NAMES);
        }
        names
    }
}

/// One date's worth of model inputs.
///
/// Serializes as a flat record: `date`, `value`, then every feature by name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Calendar date of the row.
    pub date: Date,
    /// Observed sales, if known.
    pub value: Option<f64>,
    /// Calendar-derived features.
    #[serde(flatten)]
    pub calendar: CalendarFeatures,
    /// History-derived features, present only in [`FeatureMode::WithHistory`].
    #[serde(flatten)]
    pub history: Option<HistoryFeatures>,
}

impl FeatureRow {
    /// Returns the mode this row's features correspond to.
    #[must_use]
    pub const fn mode(&self) -> FeatureMode {
        match self.history {
            Some(_) => FeatureMode::WithHistory,
            None => FeatureMode::CalendarOnly,
        }
    }

    /// Returns all features as `(name, value)` pairs in canonical order.
    #[must_use]
    pub fn named_features(&self) -> Vec<(&'static str, f64)> {
        let mut features: Vec<(&'static str, f64)> = CALENDAR_FEATURE_NAMES
            .into_iter()
            .zip(self.calendar.to_array().map(f64::from))
            .collect();
        if let Some(history) = &self.history {
            features.extend(HISTORY_FEATURE_NAMES.into_iter().zip(history.to_array()));
        }
        features
    }

    /// Looks up a single feature by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.named_features()
            .into_iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }
}

/// An ordered sequence of [`FeatureRow`]s that all carry the same feature set.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    mode: FeatureMode,
    rows: Vec<FeatureRow>,
}

impl FeatureFrame {
    /// Creates a frame, checking that every row carries exactly the features of `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`SalescastError::InvalidInput`] if a row's feature set differs
    /// from `mode` or dates are not strictly ascending.
    pub fn new(mode: FeatureMode, rows: Vec<FeatureRow>) -> Result<Self> {
        if let Some(row) = rows.iter().find(|r| r.mode() != mode) {
            return Err(SalescastError::InvalidInput(format!(
                "row {} carries {:?} features in a {:?} frame",
                row.date,
                row.mode(),
                mode
            )));
        }
        if let Some(pair) = rows.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(SalescastError::InvalidInput(format!(
                "feature rows must be in strictly ascending date order ({} followed by {})",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { mode, rows })
    }

    /// Returns the feature mode of the frame.
    pub const fn mode(&self) -> FeatureMode {
        self.mode
    }

    /// Returns the rows in date order.
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// Consumes self and returns the rows.
    pub fn into_rows(self) -> Vec<FeatureRow> {
        self.rows
    }

    /// Returns the number of rows.
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the frame is empty.
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row dates in order.
    pub fn dates(&self) -> Vec<Date> {
        self.rows.iter().map(|r| r.date).collect()
    }

    /// Returns the canonical feature column names of this frame.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.mode.feature_names()
    }

    /// Renders the frame as a DataFrame for models that consume polars input.
    ///
    /// Columns are `date`, `value` (history mode only), the calendar features
    /// as `Int32`, then the history features as `Float64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the DataFrame cannot be assembled.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let days: Vec<i32> = self.rows.iter().map(|r| date_to_epoch_days(r.date)).collect();
        let mut columns: Vec<Column> = vec![Series::new("date".into(), days).cast(&DataType::Date)?.into()];

        if self.mode == FeatureMode::WithHistory {
            let values: Vec<Option<f64>> = self.rows.iter().map(|r| r.value).collect();
            columns.push(Series::new("value".into(), values).into());
        }

        let calendar: Vec<[i32; 11]> = self.rows.iter().map(|r| r.calendar.to_array()).collect();
        for (idx, name) in CALENDAR_FEATURE_NAMES.iter().enumerate() {
            let col: Vec<i32> = calendar.iter().map(|c| c[idx]).collect();
            columns.push(Series::new((*name).into(), col).into());
        }

        if self.mode == FeatureMode::WithHistory {
            let history: Vec<[f64; 4]> = self
                .rows
                .iter()
                .filter_map(|r| r.history.map(|h| h.to_array()))
                .collect();
            for (idx, name) in HISTORY_FEATURE_NAMES.iter().enumerate() {
                let col: Vec<f64> = history.iter().map(|h| h[idx]).collect();
                columns.push(Series::new((*name).into(), col).into());
            }
        }

        Ok(DataFrame::new(columns)?)
    }
}
