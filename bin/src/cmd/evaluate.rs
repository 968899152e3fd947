//! Forecast evaluation command implementation.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Result, bail};
use salescast::eval::evaluate_rows;

use crate::data::{read_forecast_rows, write_json};

/// Print MAE, RMSE and R2 of the rows in `file` that carry an actual value.
pub(crate) fn evaluate_forecast(file: &Path) -> Result<()> {
    let rows = read_forecast_rows(file)?;
    let Some(metrics) = evaluate_rows(&rows)? else {
        bail!("no forecast row in {} has an actual value", file.display());
    };

    let mut out = io::stdout().lock();
    write_json(&metrics, &mut out)?;
    out.flush()?;
    Ok(())
}
