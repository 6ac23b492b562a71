use std::path::PathBuf;

use address_report::analyze::DEFAULT_TOP_N;
use address_report::pipeline;
use address_report::{ReportError, Result};
use chrono::Local;
use clap::Parser;
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

    if !cli.input.exists() {
        return Err(ReportError::MissingInput(cli.input));
    }

    let output = cli.output.unwrap_or_else(default_output_path);
    pipeline::generate_report(&cli.input, &output, cli.top)?;
    println!("Address report written to {}", output.display());
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ReportError::Logging(error.to_string()))
}

/// Default report name embeds the current date, e.g.
/// `clientes_enderecos_2026-08-07.xlsx`.
fn default_output_path() -> PathBuf {
    let today = Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("clientes_enderecos_{today}.xlsx"))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Detect repeated customer addresses in an Excel export and build a summary workbook."
)]
struct Cli {
    /// Input workbook with the customer address export.
    #[arg(long, default_value = "enderecos.xlsx")]
    input: PathBuf,

    /// Output workbook path. Defaults to a date-stamped file in the current
    /// directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// How many of the most repeated addresses to include in the summary.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
}
