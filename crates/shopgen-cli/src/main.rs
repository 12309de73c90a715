mod config;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use shopgen_generate::{GenerationEngine, GenerationError};
use thiserror::Error;

use config::{Overrides, apply_overrides, load_options};
use logging::{LogFormat, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Generate the synthetic customers, orders, and order lines dataset.
#[derive(Parser, Debug)]
#[command(name = "shopgen", version, about = "Synthetic e-commerce dataset generator")]
struct Cli {
    /// TOML file with generation options.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output directory for the CSV files.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Run seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of customers.
    #[arg(long, value_name = "COUNT")]
    customers: Option<u32>,
    /// Number of orders.
    #[arg(long, value_name = "COUNT")]
    orders: Option<u32>,
    /// Skip generation_report.json.
    #[arg(long, default_value_t = false)]
    no_report: bool,
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    let options = load_options(cli.config.as_deref())?;
    let options = apply_overrides(
        options,
        Overrides {
            out_dir: cli.out,
            seed: cli.seed,
            customer_count: cli.customers,
            order_count: cli.orders,
            no_report: cli.no_report,
        },
    );
    tracing::debug!(?options, "options resolved");

    let result = GenerationEngine::new(options).run()?;
    println!("out_dir={}", result.out_dir.display());
    Ok(())
}
