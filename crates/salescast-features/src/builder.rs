//! Assembly of feature frames for the external model.

use salescast_traits::{Date, FeatureFrame, FeatureMode, FeatureRow, Result, SalesHistory};
use tracing::debug;

use crate::calendar::calendar_features;
use crate::dates::date_range;
use crate::history::history_features;

/// Build a calendar-only frame for the given dates.
///
/// # Errors
///
/// Returns an error if `dates` are not strictly ascending.
pub fn calendar_frame(dates: &[Date]) -> Result<FeatureFrame> {
    let rows = dates
        .iter()
        .map(|&date| FeatureRow {
            date,
            value: None,
            calendar: calendar_features(date),
            history: None,
        })
        .collect();

    FeatureFrame::new(FeatureMode::CalendarOnly, rows)
}

/// Build a calendar-only frame for `periods` days starting at `start`.
///
/// # Errors
///
/// Returns [`SalescastError::InvalidInput`](salescast_traits::SalescastError::InvalidInput)
/// if `periods` is not positive.
///
/// # Example
///
/// ```
/// use salescast_features::builder::future_frame;
/// use salescast_traits::{Date, FeatureMode};
///
/// let frame = future_frame(Date::from_ymd_opt(2024, 6, 1).unwrap(), 90).unwrap();
/// assert_eq!(frame.len(), 90);
/// assert_eq!(frame.mode(), FeatureMode::CalendarOnly);
/// ```
pub fn future_frame(start: Date, periods: i64) -> Result<FeatureFrame> {
    let dates = date_range(start, periods)?;
    debug!(%start, periods, "building future feature frame");
    calendar_frame(&dates)
}

/// Build a frame from normalized sales history.
///
/// When the history carries at least one observed value, every row gets the
/// lag and moving-average features as well. A history without any value
/// yields a calendar-only frame.
///
/// # Errors
///
/// Returns [`SalescastError::InsufficientHistory`](salescast_traits::SalescastError::InsufficientHistory)
/// if a history feature has no defined value to fill gaps from.
pub fn history_frame(history: &SalesHistory) -> Result<FeatureFrame> {
    if !history.has_values() {
        debug!(rows = history.len(), "history has no values, omitting history features");
        return calendar_frame(&history.dates());
    }

    let features = history_features(&history.values())?;
    let rows = history
        .observations()
        .iter()
        .zip(features)
        .map(|(obs, hist)| FeatureRow {
            date: obs.date,
            value: obs.value,
            calendar: calendar_features(obs.date),
            history: Some(hist),
        })
        .collect();

    debug!(rows = history.len(), "built history feature frame");
    FeatureFrame::new(FeatureMode::WithHistory, rows)
}
