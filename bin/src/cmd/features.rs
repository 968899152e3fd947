//! Future feature generation command implementation.

use std::path::Path;

use anyhow::Result;
use salescast::features::{future_frame, parse_date};
use tracing::info;

use crate::data::{OutputFormat, open_output, write_frame};

/// Generate calendar features for `periods` days starting at `start`.
pub(crate) fn generate_features(
    start: &str,
    periods: i64,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let start = parse_date(start)?;
    let frame = future_frame(start, periods)?;
    info!(%start, rows = frame.len(), "generated future features");

    let mut out = open_output(output)?;
    write_frame(&frame, format, &mut *out)
}
