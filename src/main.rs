use std::fs::File;
use std::io::BufReader;
use std::io::IsTerminal as _;
use std::io::Write as _;
use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use color_eyre::eyre::WrapErr as _;
use sales_report::engine::ReportEngine;
use sales_report::sales::SalesData;
use sales_report::strategy::Strategies;
use tracing::Level;

use crate::tracing_observer::TracingObserver;

mod csv_report;
mod tracing_observer;

/// Seller performance report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sales data JSON file with `sellers`, `products` and `purchase_records`
    #[arg(value_name = "SALES_DATA_FILE", value_hint = clap::ValueHint::FilePath)]
    sales_data_path: PathBuf,
    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Log ranking details besides skipped records
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.verbose);

    let sales_data_file = File::open(&args.sales_data_path)
        .wrap_err_with(|| format!("failed to open sales data path={}", args.sales_data_path.display()))?;
    let sales_data: SalesData =
        serde_json::from_reader(BufReader::new(sales_data_file)).wrap_err("failed to deserialize sales data")?;
    tracing::debug!(
        sellers = sales_data.sellers.len(),
        products = sales_data.products.len(),
        purchase_records = sales_data.purchase_records.len(),
        "sales data loaded"
    );

    let report = ReportEngine::new(Strategies::default())
        .with_observer(TracingObserver)
        .generate(&sales_data)?;

    match args.format {
        OutputFormat::Csv => csv_report::write_to_stdout(&report)?,
        OutputFormat::Json => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_max_level(max_level)
        .init();
}
