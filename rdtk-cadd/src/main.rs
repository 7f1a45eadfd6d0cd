//! rdtk-cadd - CADD score aggregation over a genomic interval
//!
//! Queries the CADD range API for every variant in `[start, end)` of a
//! chromosome, then prints the mean raw and PHRED scores with their
//! interpretation.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use rdtk_cadd::config::{CaddConfig, CaddOverrides, TOOL_NAME};
use rdtk_cadd::{AnalysisRequest, CaddAnalyzer, CaddError};

/// Command-line arguments for rdtk-cadd
#[derive(Parser, Debug)]
#[command(name = "rdtk-cadd")]
#[command(about = "Aggregate CADD scores over a genomic interval")]
#[command(version)]
struct Args {
    /// Chromosome (e.g. 22)
    #[arg(long)]
    chrom: String,

    /// Start position, inclusive (e.g. 44044001)
    #[arg(long)]
    start: String,

    /// End position, exclusive (e.g. 44044002)
    #[arg(long)]
    end: String,

    /// Config file (default: platform config dir, or RDTK_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// CADD API root
    #[arg(long, env = "RDTK_CADD_BASE_URL")]
    base_url: Option<String>,

    /// Genome build and CADD release
    #[arg(long, env = "RDTK_CADD_ASSEMBLY")]
    assembly: Option<String>,

    /// Width of one range request in base pairs
    #[arg(long, env = "RDTK_CADD_CHUNK_SIZE")]
    chunk_size: Option<u64>,

    /// Maximum concurrent range requests
    #[arg(long, env = "RDTK_CADD_CONCURRENCY")]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, env = "RDTK_CADD_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level (overrides config; RUST_LOG overrides both)
    #[arg(long)]
    log_level: Option<String>,

    /// Print every retrieved score pair
    #[arg(long)]
    show_records: bool,
}

impl Args {
    fn overrides(&self) -> CaddOverrides {
        CaddOverrides {
            base_url: self.base_url.clone(),
            assembly: self.assembly.clone(),
            chunk_size: self.chunk_size,
            concurrency_limit: self.concurrency,
            request_timeout_secs: self.timeout_secs,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config: CaddConfig =
        rdtk_common::config::load_tool_config(args.config.as_deref(), TOOL_NAME)
            .context("Failed to load configuration")?;
    let config = config.apply_overrides(args.overrides());

    rdtk_common::logging::init_tracing(&config.logging);

    info!("Starting rdtk-cadd v{}", env!("CARGO_PKG_VERSION"));
    info!(
        base_url = %config.base_url,
        assembly = %config.assembly,
        chunk_size = config.chunk_size,
        concurrency = config.concurrency_limit,
        "Configuration resolved"
    );

    let request = match AnalysisRequest::parse(&args.chrom, &args.start, &args.end) {
        Ok(request) => request,
        Err(CaddError::InvalidInterval(msg)) => {
            eprintln!("Error: {}", msg);
            return Ok(ExitCode::from(2));
        }
        Err(e) => return Err(e.into()),
    };

    let analyzer = CaddAnalyzer::from_config(&config).context("Invalid configuration")?;

    println!("Querying CADD API (this may take a while)...");

    let report = match analyzer
        .submit(request)
        .await
        .context("Analysis task failed")?
    {
        Ok(report) => report,
        Err(CaddError::InvalidInterval(msg)) => {
            eprintln!("Error: {}", msg);
            return Ok(ExitCode::from(2));
        }
        Err(e) => return Err(e.into()),
    };

    println!();
    print!("{}", report.render());

    if args.show_records && !report.is_empty() {
        println!("\nRawScore\tPHRED");
        for record in report.records() {
            println!("{:.6}\t{:.3}", record.raw_score, record.phred_score);
        }
    }

    info!(
        elapsed_ms = report.elapsed.as_millis() as u64,
        requested_at = %report.requested_at.to_rfc3339(),
        "Done"
    );

    Ok(ExitCode::SUCCESS)
}
