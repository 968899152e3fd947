//! Common types used throughout the Salescast pipeline.
//!
//! This module defines sales observations, the canonical two-column sales
//! history, and the calendar month key used by period aggregation.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use polars::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Result, SalescastError};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// Days between 0001-01-01 (CE day 1) and the Unix epoch.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Converts a date to the day count polars stores in `Date` columns.
#[must_use]
pub fn date_to_epoch_days(date: Date) -> i32 {
    date.num_days_from_ce() - EPOCH_DAYS_FROM_CE
}

/// Converts a polars `Date` day count back into a calendar date.
#[must_use]
pub fn epoch_days_to_date(days: i32) -> Option<Date> {
    Date::from_num_days_from_ce_opt(days + EPOCH_DAYS_FROM_CE)
}

/// A single dated sales observation.
///
/// `value` is present for historical rows and absent for pure-future rows
/// or gaps in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation.
    pub date: Date,
    /// Observed sales, if known.
    pub value: Option<f64>,
}

impl Observation {
    /// Creates an observation with a known value.
    #[must_use]
    pub const fn new(date: Date, value: f64) -> Self {
        Self {
            date,
            value: Some(value),
        }
    }

    /// Creates an observation without a value.
    #[must_use]
    pub const fn missing(date: Date) -> Self {
        Self { date, value: None }
    }
}

/// Sales history in the canonical `{date, value}` schema.
///
/// Observations are kept in strictly ascending date order with no duplicate
/// dates; construction fails otherwise.
///
/// # Example
///
/// ```
/// use salescast_traits::{Date, Observation, SalesHistory};
///
/// let d = |day| Date::from_ymd_opt(2024, 1, day).unwrap();
/// let history = SalesHistory::new(vec![
///     Observation::new(d(1), 10.0),
///     Observation::new(d(2), 12.5),
/// ])
/// .unwrap();
///
/// assert_eq!(history.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesHistory {
    observations: Vec<Observation>,
}

impl SalesHistory {
    /// Creates a history from observations already ordered by date.
    ///
    /// # Errors
    ///
    /// Returns [`SalescastError::InvalidInput`] if dates are not strictly
    /// increasing.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if let Some(pair) = observations.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(SalescastError::InvalidInput(format!(
                "observations must be in strictly ascending date order ({} followed by {})",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { observations })
    }

    /// Returns the observations in date order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Consumes self and returns the observations.
    pub fn into_inner(self) -> Vec<Observation> {
        self.observations
    }

    /// Returns the number of observations.
    pub const fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns whether the history is empty.
    pub const fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the observation dates in order.
    pub fn dates(&self) -> Vec<Date> {
        self.observations.iter().map(|o| o.date).collect()
    }

    /// Returns the observed values in date order.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Returns whether at least one observation carries a value.
    pub fn has_values(&self) -> bool {
        self.observations.iter().any(|o| o.value.is_some())
    }

    /// Renders the history as a DataFrame with exactly `date` and `value` columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the DataFrame cannot be assembled.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let days: Vec<i32> = self
            .observations
            .iter()
            .map(|o| date_to_epoch_days(o.date))
            .collect();
        let dates = Series::new("date".into(), days).cast(&DataType::Date)?;
        let values = Series::new("value".into(), self.values());

        Ok(DataFrame::new(vec![dates.into(), values.into()])?)
    }
}

impl TryFrom<Vec<Observation>> for SalesHistory {
    type Error = SalescastError;

    fn try_from(observations: Vec<Observation>) -> Result<Self> {
        Self::new(observations)
    }
}

/// A calendar month, used as the key of monthly aggregation.
///
/// Serializes as `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month of the year (1-12).
    pub month: u32,
}

impl YearMonth {
    /// Returns the month containing `date`.
    #[must_use]
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = SalescastError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SalescastError::InvalidInput(format!("invalid month '{s}', expected YYYY-MM"));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_epoch_days_roundtrip() {
        assert_eq!(date_to_epoch_days(d(1970, 1, 1)), 0);
        assert_eq!(date_to_epoch_days(d(1970, 1, 2)), 1);
        assert_eq!(epoch_days_to_date(19_723), Some(d(2024, 1, 1)));
    }

    #[test]
    fn test_history_rejects_unordered_dates() {
        let result = SalesHistory::new(vec![
            Observation::new(d(2024, 1, 2), 1.0),
            Observation::new(d(2024, 1, 1), 2.0),
        ]);
        assert!(matches!(result, Err(SalescastError::InvalidInput(_))));
    }

    #[test]
    fn test_history_rejects_duplicate_dates() {
        let result = SalesHistory::new(vec![
            Observation::new(d(2024, 1, 1), 1.0),
            Observation::new(d(2024, 1, 1), 2.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_history_accessors() {
        let history = SalesHistory::new(vec![
            Observation::new(d(2024, 1, 1), 1.0),
            Observation::missing(d(2024, 1, 2)),
        ])
        .unwrap();

        assert_eq!(history.len(), 2);
        assert!(history.has_values());
        assert_eq!(history.values(), vec![Some(1.0), None]);
        assert_eq!(history.dates(), vec![d(2024, 1, 1), d(2024, 1, 2)]);
    }

    #[test]
    fn test_history_to_dataframe() {
        let history = SalesHistory::new(vec![
            Observation::new(d(2024, 3, 1), 5.0),
            Observation::new(d(2024, 3, 2), 7.5),
        ])
        .unwrap();

        let df = history.to_dataframe().unwrap();
        assert_eq!(df.height(), 2);
        let names: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["date", "value"]);
        assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn test_year_month_display_and_parse() {
        let ym = YearMonth::of(d(2024, 2, 29));
        assert_eq!(ym.to_string(), "2024-02");
        assert_eq!("2024-02".parse::<YearMonth>().unwrap(), ym);
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("February".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_year_month_ordering() {
        assert!(YearMonth::of(d(2023, 12, 31)) < YearMonth::of(d(2024, 1, 1)));
        assert!(YearMonth::of(d(2024, 1, 31)) < YearMonth::of(d(2024, 2, 1)));
    }
}
