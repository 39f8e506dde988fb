//! CLI entry point for the occupancy rater tool.
//!
//! Provides subcommands for analyzing seat occupancy across a bookings
//! database and exporting the per-flight records to CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use occupancy_rater::analyzers::analyzer::run_analysis;
use occupancy_rater::config::{AnalysisConfig, DEFAULT_LOW_OCCUPANCY_THRESHOLD, DEFAULT_TOP_N};
use occupancy_rater::output::{append_records, print_json, print_report};
use occupancy_rater::source::SqliteSource;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "occupancy_rater")]
#[command(about = "Computes flight-seat occupancy and ranks under-utilized aircraft types", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze occupancy and report per-aircraft statistics
    Analyze {
        /// Path to the bookings SQLite database (falls back to DATABASE_PATH)
        #[arg(short, long)]
        db: Option<String>,

        /// Occupancy rate below which a flight counts as low-occupancy
        #[arg(short = 't', long, default_value_t = DEFAULT_LOW_OCCUPANCY_THRESHOLD)]
        threshold: f64,

        /// Number of worst-offender aircraft types to report
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Print the full report as pretty JSON instead of summary lines
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Optional CSV file to append per-flight records to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Export per-flight occupancy records to CSV
    Export {
        /// Path to the bookings SQLite database (falls back to DATABASE_PATH)
        #[arg(short, long)]
        db: Option<String>,

        /// Occupancy rate below which a flight counts as low-occupancy
        #[arg(short = 't', long, default_value_t = DEFAULT_LOW_OCCUPANCY_THRESHOLD)]
        threshold: f64,

        /// CSV file to append records to
        #[arg(short, long, default_value = "occupancy.csv")]
        output: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/occupancy_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("occupancy_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            db,
            threshold,
            top,
            json,
            output,
        } => {
            let source = SqliteSource::new(resolve_db_path(db)?);
            let config = AnalysisConfig {
                low_occupancy_threshold: threshold,
                top_n: top,
            };

            let report = run_analysis(&source, &config).await?;

            if json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }

            if let Some(path) = output {
                append_records(&path, &report.records)?;
                info!(path = %path, records = report.records.len(), "Records exported");
            }
        }
        Commands::Export {
            db,
            threshold,
            output,
        } => {
            let source = SqliteSource::new(resolve_db_path(db)?);
            let config = AnalysisConfig {
                low_occupancy_threshold: threshold,
                ..Default::default()
            };

            let report = run_analysis(&source, &config).await?;

            append_records(&output, &report.records)?;
            info!(path = %output, records = report.records.len(), "Records exported");
        }
    }

    Ok(())
}

/// Resolves the database path from the CLI flag or the DATABASE_PATH env var.
fn resolve_db_path(flag: Option<String>) -> Result<String> {
    match flag {
        Some(path) => Ok(path),
        None => std::env::var("DATABASE_PATH")
            .map_err(|_| anyhow::anyhow!("no database given: pass --db or set DATABASE_PATH")),
    }
}
