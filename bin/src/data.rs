//! Input and output helpers shared by the subcommands.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use polars::prelude::{CsvWriter, SerWriter};
use salescast::ForecastRow;
use salescast::FeatureFrame;
use salescast::ingest::{SchemaConfig, SchemaNormalizer};
use serde::Serialize;

/// Serialization of feature tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// One header row, one line per date
    Csv,
    /// Array of row objects
    Json,
}

/// Open `path` for writing, or stdout when no path is given.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Write a feature frame in the requested format.
pub(crate) fn write_frame(
    frame: &FeatureFrame,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut df = frame.to_dataframe()?;
            CsvWriter::new(&mut *out)
                .include_header(true)
                .finish(&mut df)?;
        }
        OutputFormat::Json => write_json(frame.rows(), out)?,
    }
    out.flush()?;
    Ok(())
}

/// Write a value as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Read a JSON array of forecast rows.
pub(crate) fn read_forecast_rows(path: &Path) -> Result<Vec<ForecastRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of forecast rows", path.display()))
}

/// Build a normalizer from an optional schema configuration file.
pub(crate) fn load_normalizer(schema_config: Option<&Path>) -> Result<SchemaNormalizer> {
    let config = match schema_config {
        Some(path) => SchemaConfig::from_json_file(path)?,
        None => SchemaConfig::default(),
    };
    Ok(SchemaNormalizer::new(config))
}
