//! Mapping of heterogeneous tables onto the canonical `{date, value}` schema.

use chrono::NaiveDateTime;
use polars::prelude::*;
use salescast_traits::{Date, Observation, Result, SalesHistory, SalescastError};
use tracing::{debug, warn};

use crate::config::{DuplicateDates, SchemaConfig};

/// A column of the canonical schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    /// The `date` column.
    Date,
    /// The `value` column.
    Value,
}

impl CanonicalField {
    /// Canonical column name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Value => "value",
        }
    }
}

/// Normalizes sales tables with arbitrary column names.
///
/// # Example
///
/// ```
/// use polars::prelude::*;
/// use salescast_ingest::{SchemaConfig, SchemaNormalizer};
///
/// let table = df! {
///     "Date Order was placed" => &["2024-01-01", "2024-01-02"],
///     "Total Retail Price for This Order" => &[10.0, 12.5],
///     "Customer ID" => &[1, 2],
/// }
/// .unwrap();
///
/// let history = SchemaNormalizer::default().normalize(&table).unwrap();
/// assert_eq!(history.values(), vec![Some(10.0), Some(12.5)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaNormalizer {
    config: SchemaConfig,
}

impl SchemaNormalizer {
    /// Create a normalizer with the given configuration.
    #[must_use]
    pub const fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// The synonym table: each canonical field with its candidate names, in order.
    fn synonym_table(&self) -> [(CanonicalField, &[String]); 2] {
        [
            (CanonicalField::Date, &self.config.date_synonyms),
            (CanonicalField::Value, &self.config.value_synonyms),
        ]
    }

    /// Find the source column for a canonical field.
    ///
    /// # Errors
    ///
    /// Returns [`SalescastError::Schema`] if none of the field's synonyms is
    /// a column of the table.
    pub fn resolve_column(&self, table: &DataFrame, field: CanonicalField) -> Result<String> {
        let columns = table.get_column_names();
        let synonyms = self
            .synonym_table()
            .into_iter()
            .find_map(|(f, synonyms)| (f == field).then_some(synonyms))
            .unwrap_or_default();

        synonyms
            .iter()
            .find(|synonym| columns.iter().any(|c| c.as_str() == synonym.as_str()))
            .cloned()
            .ok_or_else(|| SalescastError::Schema(format!("{} column not found", field.name())))
    }

    /// Normalize a table into canonical sales history.
    ///
    /// Extraneous columns are dropped, rows are ordered by date, and rows
    /// sharing a date are handled per [`DuplicateDates`]. Empty value cells
    /// become missing values.
    ///
    /// # Errors
    ///
    /// Returns [`SalescastError::Schema`] if a canonical column is missing,
    /// a date or value cell cannot be parsed, or duplicate dates are rejected.
    pub fn normalize(&self, table: &DataFrame) -> Result<SalesHistory> {
        let date_column = self.resolve_column(table, CanonicalField::Date)?;
        let value_column = self.resolve_column(table, CanonicalField::Value)?;
        debug!(date = %date_column, value = %value_column, rows = table.height(), "resolved canonical columns");

        let dates = self.parse_dates(table.column(&date_column)?.as_materialized_series())?;
        let values = parse_values(table.column(&value_column)?.as_materialized_series())?;

        let mut rows: Vec<(Date, Option<f64>)> = dates.into_iter().zip(values).collect();
        rows.sort_by_key(|(date, _)| *date);

        let observations = self.merge_duplicates(rows)?;
        SalesHistory::new(observations)
    }

    fn parse_dates(&self, series: &Series) -> Result<Vec<Date>> {
        match series.dtype() {
            DataType::Date | DataType::Datetime(_, _) => {
                let days = series.cast(&DataType::Date)?.cast(&DataType::Int32)?;
                days.i32()?
                    .into_iter()
                    .map(|d| {
                        d.and_then(salescast_traits::types::epoch_days_to_date)
                            .ok_or_else(|| SalescastError::Schema("unparsable date".to_string()))
                    })
                    .collect()
            }
            _ => {
                let strings = series.cast(&DataType::String)?;
                strings
                    .str()?
                    .into_iter()
                    .map(|cell| {
                        cell.and_then(|raw| self.parse_date_cell(raw)).ok_or_else(|| {
                            SalescastError::Schema(format!(
                                "unparsable date '{}'",
                                cell.unwrap_or_default()
                            ))
                        })
                    })
                    .collect()
            }
        }
    }

    fn parse_date_cell(&self, raw: &str) -> Option<Date> {
        let raw = raw.trim();
        self.config.date_formats.iter().find_map(|fmt| {
            Date::parse_from_str(raw, fmt)
                .ok()
                .or_else(|| NaiveDateTime::parse_from_str(raw, fmt).ok().map(|dt| dt.date()))
        })
    }

    fn merge_duplicates(&self, rows: Vec<(Date, Option<f64>)>) -> Result<Vec<Observation>> {
        let mut observations: Vec<Observation> = Vec::with_capacity(rows.len());
        let mut merged = 0usize;

        for (date, value) in rows {
            match observations.last_mut() {
                Some(last) if last.date == date => {
                    if self.config.duplicate_dates == DuplicateDates::Reject {
                        return Err(SalescastError::Schema(format!("duplicate date {date}")));
                    }
                    last.value = match (last.value, value) {
                        (Some(a), Some(b)) => Some(a + b),
                        (a, b) => a.or(b),
                    };
                    merged += 1;
                }
                _ => observations.push(Observation { date, value }),
            }
        }

        if merged > 0 {
            warn!(merged, days = observations.len(), "summed values of rows sharing a date");
        }
        Ok(observations)
    }
}

fn parse_values(series: &Series) -> Result<Vec<Option<f64>>> {
    if series.dtype() == &DataType::String {
        return series
            .str()?
            .into_iter()
            .map(|cell| match cell.map(str::trim) {
                None | Some("") => Ok(None),
                Some(raw) => raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(Some)
                    .ok_or_else(|| SalescastError::Schema(format!("unparsable value '{raw}'"))),
            })
            .collect();
    }

    let floats = series.cast(&DataType::Float64)?;
    if floats.null_count() > series.null_count() {
        return Err(SalescastError::Schema("unparsable value".to_string()));
    }
    let values: Vec<Option<f64>> = floats.f64()?.into_iter().collect();
    if let Some(v) = values.iter().flatten().find(|v| !v.is_finite()) {
        return Err(SalescastError::Schema(format!("unparsable value '{v}'")));
    }
    Ok(values)
}
