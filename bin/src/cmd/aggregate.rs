//! Monthly aggregation command implementation.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use salescast::eval::monthly_summaries;
use tracing::info;

use crate::data::{read_forecast_rows, write_json};

/// Print per-month totals of the daily forecast rows in `file`.
pub(crate) fn aggregate_forecast(file: &Path) -> Result<()> {
    let rows = read_forecast_rows(file)?;
    let months = monthly_summaries(&rows);
    info!(days = rows.len(), months = months.len(), "aggregated forecast");

    let mut out = io::stdout().lock();
    write_json(&months, &mut out)?;
    out.flush()?;
    Ok(())
}
