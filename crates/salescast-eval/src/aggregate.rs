//! Aggregation of daily forecasts into calendar months.

use std::collections::BTreeMap;

use salescast_traits::{ForecastRow, MonthlySummary, YearMonth};

/// Roll up daily forecast rows into one summary per calendar month.
///
/// Summaries come out in chronological order, one per month that has at
/// least one row. A month's `lower_sum` or `upper_sum` is `None` if any of its
/// rows lacks that bound.
///
/// # Example
///
/// ```
/// use salescast_eval::monthly_summaries;
/// use salescast_traits::{Date, ForecastRow, Prediction};
///
/// let rows: Vec<ForecastRow> = Date::from_ymd_opt(2024, 1, 30)
///     .unwrap()
///     .iter_days()
///     .take(3)
///     .map(|date| ForecastRow::from_prediction(date, Prediction::point(1.0), None))
///     .collect();
///
/// let months = monthly_summaries(&rows);
/// assert_eq!(months.len(), 2);
/// assert_eq!(months[0].predicted_sum, 2.0);
/// ```
pub fn monthly_summaries(rows: &[ForecastRow]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<YearMonth, MonthlySummary> = BTreeMap::new();

    for row in rows {
        let month = YearMonth::of(row.date);
        let summary = months.entry(month).or_insert(MonthlySummary {
            month,
            predicted_sum: 0.0,
            lower_sum: Some(0.0),
            upper_sum: Some(0.0),
        });

        summary.predicted_sum += row.predicted;
        summary.lower_sum = summary.lower_sum.zip(row.predicted_lower).map(|(a, b)| a + b);
        summary.upper_sum = summary.upper_sum.zip(row.predicted_upper).map(|(a, b)| a + b);
    }

    months.into_values().collect()
}
