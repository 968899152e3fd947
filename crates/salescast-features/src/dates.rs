//! Contiguous daily date ranges.

use chrono::Days;
use salescast_traits::{Date, Result, SalescastError};

/// Parse a date string in `YYYY-MM-DD` format.
///
/// # Errors
///
/// Returns [`SalescastError::InvalidInput`] if the string is not a valid date.
pub fn parse_date(date_str: &str) -> Result<Date> {
    Date::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|e| SalescastError::InvalidInput(format!("Invalid date '{date_str}': {e}")))
}

/// Generate `periods` consecutive calendar days starting at `start`, inclusive.
///
/// # Errors
///
/// Returns [`SalescastError::InvalidInput`] if `periods` is not positive or
/// the range runs past the last representable date.
///
/// # Example
///
/// ```
/// use salescast_features::date_range;
/// use salescast_traits::Date;
///
/// let start = Date::from_ymd_opt(2024, 2, 28).unwrap();
/// let dates = date_range(start, 3).unwrap();
/// assert_eq!(dates[2], Date::from_ymd_opt(2024, 3, 1).unwrap());
/// ```
pub fn date_range(start: Date, periods: i64) -> Result<Vec<Date>> {
    if periods <= 0 {
        return Err(SalescastError::InvalidInput(format!(
            "periods must be positive, got {periods}"
        )));
    }

    let span = periods as u64 - 1;
    if start.checked_add_days(Days::new(span)).is_none() {
        return Err(SalescastError::InvalidInput(format!(
            "{periods} days from {start} exceeds the supported date range"
        )));
    }

    Ok(start.iter_days().take(periods as usize).collect())
}
