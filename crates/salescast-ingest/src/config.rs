//! Configuration of the schema normalizer.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// What to do when several rows share a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateDates {
    /// Sum the values of rows sharing a date (order-level sources).
    #[default]
    Sum,
    /// Fail with a schema error.
    Reject,
}

/// Configuration for schema normalization.
///
/// Synonyms are checked in order; the first one present in the table wins.
/// Date formats use `chrono` syntax and are tried in order for every cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Accepted names of the date column.
    pub date_synonyms: Vec<String>,
    /// Accepted names of the value column.
    pub value_synonyms: Vec<String>,
    /// Accepted date and datetime formats.
    pub date_formats: Vec<String>,
    /// Handling of rows that share a date.
    pub duplicate_dates: DuplicateDates,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            date_synonyms: vec!["date".to_string(), "Date Order was placed".to_string()],
            value_synonyms: vec![
                "sales".to_string(),
                "Total Retail Price for This Order".to_string(),
            ],
            date_formats: [
                "%Y-%m-%d",
                "%Y/%m/%d",
                // US order, month first
                "%m/%d/%Y",
                "%d-%b-%y",
                "%d-%b-%Y",
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%d %H:%M:%S%.f",
                "%Y-%m-%dT%H:%M:%S",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            duplicate_dates: DuplicateDates::Sum,
        }
    }
}

impl SchemaConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
