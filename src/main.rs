//! kobench - Main Entry Point
//!
//! Runs the kernel-object benchmark and prints its progress to stdout.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};

use kobench::common::constants::{ARRAY_SIZE, ITERATIONS, PROGRESS_INTERVAL};
use kobench::{run_harness, BenchmarkConfig, BenchmarkReport, BuildInfo, HarnessConfig, WriterReporter};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(all(feature = "jemalloc", not(feature = "mimalloc")))]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn allocator_name() -> &'static str {
    if cfg!(feature = "mimalloc") {
        "mimalloc"
    } else if cfg!(feature = "jemalloc") {
        "jemalloc"
    } else {
        "system"
    }
}

#[derive(Parser)]
#[command(name = "kobench")]
#[command(about = "Kernel-object allocation and arithmetic throughput benchmark")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Number of loop iterations
    #[arg(long, default_value_t = ITERATIONS)]
    iterations: u64,

    /// Number of object slots in the working set
    #[arg(long, default_value_t = ARRAY_SIZE)]
    slots: usize,

    /// Print a progress line every N iterations
    #[arg(long, default_value_t = PROGRESS_INTERVAL)]
    progress_interval: u64,

    /// Measured runs; only the first prints progress
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Unmeasured warm-up runs before the measured ones
    #[arg(short, long, default_value_t = 0)]
    warmup: usize,

    /// Write a JSON summary to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = BenchmarkConfig::new(cli.iterations, cli.slots, cli.progress_interval);
    let harness = HarnessConfig {
        warmup_runs: cli.warmup,
        measured_runs: cli.runs,
    };
    info!(?config, ?harness, allocator = allocator_name(), "starting benchmark");

    let stdout = io::stdout();
    let mut reporter = WriterReporter::new(stdout.lock());
    let outcome = run_harness(&config, &harness, &mut reporter).context("benchmark failed")?;

    if let Some(path) = cli.report {
        let report = BenchmarkReport::new(config, harness, &outcome, BuildInfo::current(allocator_name()));
        report
            .write_to(&path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
