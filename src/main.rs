use analytics::{AnalysisOptions, SalesAnalyzer, SellerReport};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{init_tracing, ConfigArgs};
use core_types::Dataset;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The main entry point for the sales analytics tool.
fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args),
        Commands::CheckConfig(args) => handle_check_config(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Ranks sellers by profit and works out their bonuses from a sales dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a dataset and write the seller report as JSON.
    Report(ReportArgs),
    /// Load and validate the configuration, then print the effective settings.
    CheckConfig(CheckConfigArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// JSON file with `customers`, `products`, `sellers` and `purchase_records`.
    #[arg(long)]
    dataset: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Parser)]
struct CheckConfigArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Handles the orchestration of a single analysis run.
fn handle_report(args: ReportArgs) -> Result<()> {
    let config = args.config.load().context("Failed to load configuration")?;
    let _log_guard = init_tracing(&config.logging)?;

    let dataset = read_dataset(&args.dataset)?;
    let options = AnalysisOptions::from_config(&config)?;

    let reports = SalesAnalyzer::new().analyze(&dataset, &options)?;
    tracing::info!(sellers = reports.len(), "writing seller report");

    write_report(&reports, args.output.as_deref(), args.compact)
}

fn handle_check_config(args: CheckConfigArgs) -> Result<()> {
    let config = args.config.load().context("Failed to load configuration")?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Reads and parses the dataset file.
fn read_dataset(path: &Path) -> Result<Dataset> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset from {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid dataset in {}", path.display()))?;

    tracing::debug!(
        customers = dataset.customers.len(),
        records = dataset.purchase_records.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Serializes the report to the output file, or to stdout when none is given.
fn write_report(reports: &[SellerReport], output: Option<&Path>, compact: bool) -> Result<()> {
    let mut json = if compact {
        serde_json::to_string(reports)?
    } else {
        serde_json::to_string_pretty(reports)?
    };
    json.push('\n');

    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => std::io::stdout().lock().write_all(json.as_bytes())?,
    }

    Ok(())
}
