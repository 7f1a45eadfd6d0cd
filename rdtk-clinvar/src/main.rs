//! rdtk-clinvar - gene pathogenicity score calculator
//!
//! Scores a comma-separated gene selection from clinical significance counts
//! and prints the composite score, its interpretation and the combined
//! relative densities.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use rdtk_clinvar::config::{ClinvarConfig, TOOL_NAME};
use rdtk_clinvar::{analyze_selection, BuiltinDataset, ClinvarError, GeneDataset, TableDataset};

/// Command-line arguments for rdtk-clinvar
#[derive(Parser, Debug)]
#[command(name = "rdtk-clinvar")]
#[command(about = "Gene pathogenicity score calculator")]
#[command(version)]
struct Args {
    /// Gene names separated by commas (e.g. MYO7A,USH2A)
    #[arg(long)]
    genes: String,

    /// TOML gene count table (default: built-in sample table)
    #[arg(long, env = "RDTK_CLINVAR_DATASET")]
    dataset: Option<PathBuf>,

    /// Config file (default: platform config dir, or RDTK_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (overrides config; RUST_LOG overrides both)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config: ClinvarConfig =
        rdtk_common::config::load_tool_config(args.config.as_deref(), TOOL_NAME)
            .context("Failed to load configuration")?;
    let config = config.apply_overrides(args.dataset.clone(), args.log_level.clone());

    rdtk_common::logging::init_tracing(&config.logging);

    info!("Starting rdtk-clinvar v{}", env!("CARGO_PKG_VERSION"));

    let dataset: Box<dyn GeneDataset> = match &config.dataset_path {
        Some(path) => Box::new(TableDataset::load(path)?),
        None => {
            info!("Using built-in sample gene table");
            Box::new(BuiltinDataset)
        }
    };

    match analyze_selection(&args.genes, dataset.as_ref()) {
        Ok(report) => {
            print!("{}", report.render());
            Ok(ExitCode::SUCCESS)
        }
        Err(ClinvarError::NoValidSelection { .. }) => {
            eprintln!("Error: No valid genes selected. Please check your input.");
            eprintln!("Known genes: {}", dataset.genes().join(", "));
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}
