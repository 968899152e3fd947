//! Calendar features derived from a date alone.
//!
//! Every feature is a pure function of the date, so rows can be derived
//! independently and in any order.

use chrono::{Datelike, Weekday};
use salescast_traits::{CalendarFeatures, Date};

/// Last day of the month that still counts as its start.
const MONTH_START_LAST_DAY: u32 = 7;
/// First day of the month that counts as its end.
const MONTH_END_FIRST_DAY: u32 = 24;
/// Last day of September that still belongs to the back-to-school period.
const BACK_TO_SCHOOL_LAST_SEPTEMBER_DAY: u32 = 15;

/// Derive the calendar features of a date.
///
/// `day_of_week` counts from Monday (`0`) to Sunday (`6`), so the weekend is
/// days `5` and `6`. `week_of_year` is the ISO 8601 week number.
///
/// # Example
///
/// ```
/// use salescast_features::calendar_features;
/// use salescast_traits::Date;
///
/// let features = calendar_features(Date::from_ymd_opt(2024, 8, 3).unwrap());
/// assert_eq!(features.day_of_week, 5);
/// assert_eq!(features.is_weekend, 1);
/// assert_eq!(features.is_back_to_school, 1);
/// ```
#[must_use]
pub fn calendar_features(date: Date) -> CalendarFeatures {
    let weekday = date.weekday();
    let day = date.day();
    let month = date.month();

    CalendarFeatures {
        day_of_week: weekday.num_days_from_monday(),
        day_of_month: day,
        week_of_year: date.iso_week().week(),
        month,
        quarter: (month - 1) / 3 + 1,
        is_weekend: flag(matches!(weekday, Weekday::Sat | Weekday::Sun)),
        is_month_start: flag(day <= MONTH_START_LAST_DAY),
        is_month_end: flag(day >= MONTH_END_FIRST_DAY),
        is_summer: flag(matches!(month, 6..=8)),
        is_christmas_season: flag(matches!(month, 11 | 12)),
        is_back_to_school: flag(
            month == 8 || (month == 9 && day <= BACK_TO_SCHOOL_LAST_SEPTEMBER_DAY),
        ),
    }
}

/// Derive calendar features for each date, preserving order.
#[must_use]
pub fn calendar_features_for(dates: &[Date]) -> Vec<CalendarFeatures> {
    dates.iter().copied().map(calendar_features).collect()
}

const fn flag(condition: bool) -> u8 {
    condition as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, day: u32) -> CalendarFeatures {
        calendar_features(Date::from_ymd_opt(y, m, day).unwrap())
    }

    #[test]
    fn test_day_of_week_starts_monday() {
        // 2024-01-01 was a Monday
        assert_eq!(at(2024, 1, 1).day_of_week, 0);
        assert_eq!(at(2024, 1, 6).day_of_week, 5);
        assert_eq!(at(2024, 1, 7).day_of_week, 6);
    }

    #[test]
    fn test_weekend_matches_day_of_week() {
        for day in 1..=14 {
            let f = at(2024, 1, day);
            assert_eq!(f.is_weekend == 1, f.day_of_week >= 5, "day {day}");
        }
    }

    #[test]
    fn test_iso_week_at_year_boundary() {
        // 2021-01-01 belongs to ISO week 53 of 2020
        assert_eq!(at(2021, 1, 1).week_of_year, 53);
        assert_eq!(at(2024, 12, 30).week_of_year, 1);
    }

    #[test]
    fn test_quarters() {
        assert_eq!(at(2024, 1, 15).quarter, 1);
        assert_eq!(at(2024, 3, 31).quarter, 1);
        assert_eq!(at(2024, 4, 1).quarter, 2);
        assert_eq!(at(2024, 9, 30).quarter, 3);
        assert_eq!(at(2024, 12, 31).quarter, 4);
    }

    #[test]
    fn test_month_start_and_end_boundaries() {
        assert_eq!(at(2024, 5, 7).is_month_start, 1);
        assert_eq!(at(2024, 5, 8).is_month_start, 0);
        assert_eq!(at(2024, 5, 23).is_month_end, 0);
        assert_eq!(at(2024, 5, 24).is_month_end, 1);
        assert_eq!(at(2024, 2, 29).is_month_end, 1);
    }

    #[test]
    fn test_summer_boundaries() {
        assert_eq!(at(2024, 5, 31).is_summer, 0);
        assert_eq!(at(2024, 6, 1).is_summer, 1);
        assert_eq!(at(2024, 8, 31).is_summer, 1);
        assert_eq!(at(2024, 9, 1).is_summer, 0);
    }

    #[test]
    fn test_christmas_season_boundaries() {
        assert_eq!(at(2024, 10, 31).is_christmas_season, 0);
        assert_eq!(at(2024, 11, 1).is_christmas_season, 1);
        assert_eq!(at(2024, 12, 31).is_christmas_season, 1);
        assert_eq!(at(2025, 1, 1).is_christmas_season, 0);
    }

    #[test]
    fn test_back_to_school_boundaries() {
        assert_eq!(at(2024, 7, 31).is_back_to_school, 0);
        assert_eq!(at(2024, 8, 1).is_back_to_school, 1);
        assert_eq!(at(2024, 9, 15).is_back_to_school, 1);
        assert_eq!(at(2024, 9, 16).is_back_to_school, 0);
        assert_eq!(at(2024, 10, 1).is_back_to_school, 0);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let dates: Vec<Date> = (1..=28).filter_map(|d| Date::from_ymd_opt(2024, 2, d)).collect();
        assert_eq!(calendar_features_for(&dates), calendar_features_for(&dates));
    }
}
