use std::path::PathBuf;

use clap::Parser;
use gics_tools::pipeline;
use gics_tools::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;

    if !cli.workbook.exists() {
        return Err(ToolError::MissingInput(cli.workbook));
    }

    pipeline::run(&cli.workbook, &cli.csv_dir, &cli.output)
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert the GICS classification workbook into CSV tables and a nested JSON document."
)]
struct Cli {
    /// Source workbook containing the four classification sheets.
    #[arg(long, default_value = "gics.xlsx")]
    workbook: PathBuf,

    /// Directory receiving the per-level CSV tables.
    #[arg(long, default_value = "csv")]
    csv_dir: PathBuf,

    /// Destination of the nested JSON document.
    #[arg(long, default_value = "gics.json")]
    output: PathBuf,
}
