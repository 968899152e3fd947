//! Feature registry for discovering and categorizing model inputs.
//!
//! This module provides metadata for every canonical feature the builder
//! emits, in column order.

use serde::{Deserialize, Serialize};

/// Feature category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureCategory {
    /// Position of the date in the week, month and year
    Calendar,
    /// Seasonal and event flags
    Seasonal,
    /// Lags and moving averages of the sales value
    History,
}

impl FeatureCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Calendar => "Calendar position of the date",
            Self::Seasonal => "Seasonal and retail event flags",
            Self::History => "Lagged and smoothed sales values (history mode only)",
        }
    }
}

/// Metadata about a feature.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureInfo {
    /// Canonical column name
    pub name: &'static str,

    /// Category classification
    pub category: FeatureCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Rows of history the feature looks back over
    pub lookback: usize,

    /// Whether the feature needs observed sales values
    pub requires_history: bool,
}

const fn calendar(name: &'static str, category: FeatureCategory, description: &'static str) -> FeatureInfo {
    FeatureInfo {
        name,
        category,
        description,
        lookback: 0,
        requires_history: false,
    }
}

const fn history(name: &'static str, description: &'static str, lookback: usize) -> FeatureInfo {
    FeatureInfo {
        name,
        category: FeatureCategory::History,
        description,
        lookback,
        requires_history: true,
    }
}

/// Get information about all canonical features, in column order.
#[must_use]
pub fn available_features() -> Vec<FeatureInfo> {
    use FeatureCategory::{Calendar, Seasonal};

    vec![
        calendar("day_of_week", Calendar, "Day of the week, 0 = Monday to 6 = Sunday"),
        calendar("day_of_month", Calendar, "Day of the month (1-31)"),
        calendar("week_of_year", Calendar, "ISO 8601 week number"),
        calendar("month", Calendar, "Month of the year (1-12)"),
        calendar("quarter", Calendar, "Quarter of the year (1-4)"),
        calendar("is_weekend", Calendar, "Saturday or Sunday"),
        calendar("is_month_start", Calendar, "Day 1 to 7 of the month"),
        calendar("is_month_end", Calendar, "Day 24 onwards"),
        calendar("is_summer", Seasonal, "June, July or August"),
        calendar("is_christmas_season", Seasonal, "November or December"),
        calendar("is_back_to_school", Seasonal, "August, or September 1 to 15"),
        history("ma_7", "Trailing 7-row mean of sales", 6),
        history("ma_30", "Trailing 30-row mean of sales", 29),
        history("lag_7", "Sales 7 rows earlier", 7),
        history("lag_30", "Sales 30 rows earlier", 30),
    ]
}

/// Get all features in a specific category.
#[must_use]
pub fn features_by_category(category: &FeatureCategory) -> Vec<FeatureInfo> {
    available_features()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific feature by name.
#[must_use]
pub fn get_feature_info(name: &str) -> Option<FeatureInfo> {
    available_features()
        .into_iter()
        .find(|info| info.name == name)
}
