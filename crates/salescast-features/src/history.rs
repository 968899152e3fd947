//! Lag and moving-average features over the sales value.
//!
//! Features are computed in two explicit passes. The first pass derives the
//! raw columns in date order, leaving gaps where a window holds no value or a
//! lag reaches before the first row. The second pass fills every gap of a
//! column with the mean of that column's defined entries.

use salescast_traits::stats::{fill_with_mean, mean_of_defined};
use salescast_traits::{HistoryFeatures, Result, SalescastError};
use tracing::debug;

/// Window of the short moving average (`ma_7`), in rows.
pub const SHORT_WINDOW: usize = 7;
/// Window of the long moving average (`ma_30`), in rows.
pub const LONG_WINDOW: usize = 30;
/// Offset of the short lag (`lag_7`), in rows.
pub const SHORT_LAG: usize = 7;
/// Offset of the long lag (`lag_30`), in rows.
pub const LONG_LAG: usize = 30;

/// Trailing mean over the current row and up to `window - 1` preceding rows.
///
/// The window shrinks at the start of the sequence. Gaps inside a window are
/// skipped; an entry is `None` only when its window holds no value at all.
///
/// # Example
///
/// ```
/// use salescast_features::history::trailing_mean;
///
/// let ma = trailing_mean(&[Some(1.0), Some(3.0), Some(5.0)], 2);
/// assert_eq!(ma, vec![Some(1.0), Some(2.0), Some(4.0)]);
/// ```
pub fn trailing_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            mean_of_defined(&values[start..=i])
        })
        .collect()
}

/// The value `offset` rows earlier, `None` for the first `offset` rows.
///
/// # Example
///
/// ```
/// use salescast_features::history::lagged;
///
/// let lag = lagged(&[Some(1.0), Some(2.0), Some(3.0)], 1);
/// assert_eq!(lag, vec![None, Some(1.0), Some(2.0)]);
/// ```
pub fn lagged(values: &[Option<f64>], offset: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| i.checked_sub(offset).and_then(|j| values[j]))
        .collect()
}

/// Compute `ma_7`, `ma_30`, `lag_7` and `lag_30` for a date-ordered value column.
///
/// Gaps left after the first pass are backfilled per column with the mean of
/// that column's defined entries.
///
/// # Errors
///
/// Returns [`SalescastError::InsufficientHistory`] if `values` is empty or a
/// feature column has no defined entry to fill from. With fewer than
/// `LONG_LAG + 1` rows, `lag_30` is undefined everywhere and this fails.
pub fn history_features(values: &[Option<f64>]) -> Result<Vec<HistoryFeatures>> {
    if values.is_empty() {
        return Err(SalescastError::InsufficientHistory(
            "no history rows to derive lag and moving-average features from".to_string(),
        ));
    }

    // First pass: raw columns with gaps.
    let ma_7 = trailing_mean(values, SHORT_WINDOW);
    let ma_30 = trailing_mean(values, LONG_WINDOW);
    let lag_7 = lagged(values, SHORT_LAG);
    let lag_30 = lagged(values, LONG_LAG);

    // Second pass: per-column mean fill.
    let ma_7 = backfill("ma_7", &ma_7)?;
    let ma_30 = backfill("ma_30", &ma_30)?;
    let lag_7 = backfill("lag_7", &lag_7)?;
    let lag_30 = backfill("lag_30", &lag_30)?;

    Ok((0..values.len())
        .map(|i| HistoryFeatures {
            ma_7: ma_7[i],
            ma_30: ma_30[i],
            lag_7: lag_7[i],
            lag_30: lag_30[i],
        })
        .collect())
}

fn backfill(name: &str, column: &[Option<f64>]) -> Result<Vec<f64>> {
    let fill = fill_with_mean(column).ok_or_else(|| {
        SalescastError::InsufficientHistory(format!(
            "{name} has no defined value across {} rows",
            column.len()
        ))
    })?;
    if fill.filled > 0 {
        debug!(feature = name, filled = fill.filled, mean = fill.mean, "backfilled feature gaps with column mean");
    }
    Ok(fill.values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(n: usize) -> Vec<Option<f64>> {
        (1..=n).map(|v| Some(v as f64)).collect()
    }

    #[test]
    fn test_trailing_mean_shrinks_at_start() {
        let values = series(10);
        let ma = trailing_mean(&values, 7);

        assert_relative_eq!(ma[0].unwrap(), 1.0);
        assert_relative_eq!(ma[1].unwrap(), 1.5);
        assert_relative_eq!(ma[6].unwrap(), 4.0);
        // rows 4..=10
        assert_relative_eq!(ma[9].unwrap(), 7.0);
    }

    #[test]
    fn test_trailing_mean_matches_window_definition() {
        let values = series(40);
        let ma = trailing_mean(&values, 7);
        for (i, entry) in ma.iter().enumerate() {
            let start = i.saturating_sub(6);
            let window: Vec<f64> = values[start..=i].iter().flatten().copied().collect();
            let expected = window.iter().sum::<f64>() / window.len() as f64;
            assert_relative_eq!(entry.unwrap(), expected);
        }
    }

    #[test]
    fn test_trailing_mean_skips_gaps() {
        let ma = trailing_mean(&[Some(2.0), None, Some(4.0)], 7);
        assert_eq!(ma, vec![Some(2.0), Some(2.0), Some(3.0)]);

        let ma = trailing_mean(&[None, None, Some(4.0)], 2);
        assert_eq!(ma, vec![None, None, Some(4.0)]);
    }

    #[test]
    fn test_lagged_offsets() {
        let lag = lagged(&series(9), 7);
        assert!(lag[..7].iter().all(Option::is_none));
        assert_eq!(lag[7], Some(1.0));
        assert_eq!(lag[8], Some(2.0));
    }

    #[test]
    fn test_lag_backfilled_with_column_mean() {
        let values = series(40);
        let features = history_features(&values).unwrap();

        // lag_7 is defined for rows 7..40 with values 1..=33, mean 17
        for f in &features[..7] {
            assert_relative_eq!(f.lag_7, 17.0);
        }
        for (i, f) in features.iter().enumerate().skip(7) {
            assert_relative_eq!(f.lag_7, values[i - 7].unwrap());
        }

        // lag_30 is defined for rows 30..40 with values 1..=10, mean 5.5
        assert_relative_eq!(features[0].lag_30, 5.5);
        assert_relative_eq!(features[29].lag_30, 5.5);
        assert_relative_eq!(features[30].lag_30, 1.0);
    }

    #[test]
    fn test_moving_averages_never_need_fill_without_gaps() {
        let values = series(31);
        let features = history_features(&values).unwrap();
        assert_relative_eq!(features[0].ma_7, 1.0);
        assert_relative_eq!(features[0].ma_30, 1.0);
        // rows 2..=31
        assert_relative_eq!(features[30].ma_30, 16.5);
    }

    #[test]
    fn test_value_gaps_are_backfilled() {
        let mut values = series(35);
        values[32] = None;
        let features = history_features(&values).unwrap();

        let lag_7_defined: Vec<Option<f64>> = lagged(&values, 7);
        let expected = mean_of_defined(&lag_7_defined).unwrap();
        assert_relative_eq!(features[0].lag_7, expected);
        assert!(features.iter().all(|f| f.ma_7.is_finite() && f.lag_30.is_finite()));
    }

    #[test]
    fn test_short_history_is_insufficient() {
        let result = history_features(&series(30));
        match result {
            Err(SalescastError::InsufficientHistory(msg)) => assert!(msg.contains("lag_30")),
            other => panic!("expected insufficient history, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_history_is_insufficient() {
        assert!(matches!(history_features(&[]), Err(SalescastError::InsufficientHistory(_))));
    }

    #[test]
    fn test_all_missing_values_are_insufficient() {
        let values = vec![None; 40];
        assert!(matches!(history_features(&values), Err(SalescastError::InsufficientHistory(_))));
    }
}
