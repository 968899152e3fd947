//! CSV loading of raw sales tables.
//!
//! Every column is read as text so the normalizer decides how dates and
//! values are parsed, independent of polars' type inference.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;
use salescast_traits::SalesHistory;
use tracing::debug;

use crate::{Result, SchemaNormalizer};

fn text_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

/// Read a CSV file into a DataFrame of string columns.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn read_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let df = text_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    debug!(path = %path.display(), rows = df.height(), columns = df.width(), "read csv");
    Ok(df)
}

/// Read CSV content held in memory, such as an uploaded file.
///
/// # Errors
///
/// Returns an error if the content is not valid CSV.
pub fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    let df = text_options()
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()?;
    Ok(df)
}

/// Read a CSV file and normalize it into canonical sales history.
///
/// # Errors
///
/// Returns an error if the file cannot be read or normalized.
pub fn load_history(path: impl AsRef<Path>, normalizer: &SchemaNormalizer) -> Result<SalesHistory> {
    let table = read_csv(path)?;
    Ok(normalizer.normalize(&table)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IngestError;
    use salescast_traits::{Date, SalescastError};

    const ORDERS: &str = "\
Order ID,Date Order was placed,Total Retail Price for This Order
1,1-Jan-17,10.50
2,1-Jan-17,4.50
3,3-Jan-17,7.00
";

    #[test]
    fn test_read_csv_bytes_keeps_text() {
        let df = read_csv_bytes(ORDERS.as_bytes()).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 3);
        assert_eq!(
            df.column("Total Retail Price for This Order").unwrap().dtype(),
            &DataType::String
        );
    }

    #[test]
    fn test_uploaded_orders_normalize() {
        let df = read_csv_bytes(ORDERS.as_bytes()).unwrap();
        let history = SchemaNormalizer::default().normalize(&df).unwrap();

        assert_eq!(
            history.dates(),
            vec![
                Date::from_ymd_opt(2017, 1, 1).unwrap(),
                Date::from_ymd_opt(2017, 1, 3).unwrap()
            ]
        );
        assert_eq!(history.values(), vec![Some(15.0), Some(7.0)]);
    }

    #[test]
    fn test_missing_column_surfaces_schema_error() {
        let df = read_csv_bytes(b"when,sales\n2024-01-01,3\n").unwrap();
        let err = SchemaNormalizer::default().normalize(&df).unwrap_err();
        assert!(matches!(err, SalescastError::Schema(_)));
    }

    #[test]
    fn test_load_history_missing_file() {
        let result = load_history("/nonexistent/orders.csv", &SchemaNormalizer::default());
        assert!(matches!(result, Err(IngestError::Csv(_) | IngestError::Io(_))));
    }
}
