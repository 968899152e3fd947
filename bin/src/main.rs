//! Salescast CLI binary.
//!
//! Runs the model-independent stages of the forecast pipeline from the
//! command line: feature generation before a model runs, and evaluation and
//! monthly aggregation of its output afterwards.

mod cmd;
mod data;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use data::OutputFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "salescast")]
#[command(about = "Feature enrichment and forecast post-processing for sales forecasting", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate calendar features for a range of future dates
    Features {
        /// First date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Number of consecutive days
        #[arg(short, long)]
        periods: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Normalize a sales CSV and derive calendar and history features
    Enrich {
        /// Sales CSV with a date and a value column
        file: PathBuf,

        /// JSON file with column synonyms and date formats
        #[arg(long)]
        schema_config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute MAE, RMSE and R2 for forecast rows with actuals
    Evaluate {
        /// JSON array of forecast rows
        file: PathBuf,
    },

    /// Total daily forecast rows per calendar month
    Aggregate {
        /// JSON array of forecast rows
        file: PathBuf,
    },

    /// List the features a model receives
    ListFeatures {
        /// Filter by category (calendar, seasonal, history)
        #[arg(short, long)]
        category: Option<String>,

        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salescast=info".into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Features {
            start,
            periods,
            format,
            output,
        } => cmd::features::generate_features(&start, periods, format, output.as_deref()),
        Commands::Enrich {
            file,
            schema_config,
            format,
            output,
        } => cmd::enrich::enrich_history(&file, schema_config.as_deref(), format, output.as_deref()),
        Commands::Evaluate { file } => cmd::evaluate::evaluate_forecast(&file),
        Commands::Aggregate { file } => cmd::aggregate::aggregate_forecast(&file),
        Commands::ListFeatures { category, verbose } => {
            cmd::list_features::list_features(category.as_deref(), verbose)
        }
    }
}
