//! History enrichment command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use salescast::features::history_frame;
use salescast::ingest::read_csv;
use tracing::info;

use crate::data::{OutputFormat, load_normalizer, open_output, write_frame};

/// Normalize a sales CSV and write it with calendar and history features.
pub(crate) fn enrich_history(
    file: &Path,
    schema_config: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let normalizer = load_normalizer(schema_config)?;
    let table = read_csv(file).with_context(|| format!("cannot load {}", file.display()))?;
    let history = normalizer.normalize(&table)?;
    let frame = history_frame(&history)?;

    info!(
        file = %file.display(),
        rows = frame.len(),
        mode = ?frame.mode(),
        "enriched sales history"
    );

    let mut out = open_output(output)?;
    write_frame(&frame, format, &mut *out)
}
