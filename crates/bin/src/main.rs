//! indus CLI binary.
//!
//! Downloads an NSE universe list, looks up each company's name and
//! industry classification, and writes the result as an Excel workbook.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use indus::session::Session;
use indus::universe::{self, NseUniverse};
use indus_data::fetcher::{self, IndustryRecord, PacingPolicy};
use indus_data::universe_list::UniverseListLoader;
use indus_data::yahoo::YahooProfileProvider;
use indus_output::excel;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "indus")]
#[command(about = "Industry data downloader for NSE stock universes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch industry data for a universe and export it as a workbook
    Fetch {
        /// Universe name (Nifty50, Nifty100, Nifty200, Nifty250, Nifty500, N750, AllNSE)
        #[arg(default_value = "AllNSE")]
        universe: String,

        /// Pause after each lookup and process symbols in batches
        #[arg(long)]
        throttle: bool,

        /// Per-item delay in milliseconds when throttling
        #[arg(long, default_value = "500")]
        delay_ms: u64,

        /// Batch size when throttling
        #[arg(long, default_value = "50")]
        batch_size: usize,

        /// Only process the first N symbols of the universe
        #[arg(long)]
        limit: Option<usize>,

        /// Output path for the workbook (default: {universe}_Industry_Data.xlsx)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the available universes and their CSV sources
    Universes,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            universe,
            throttle,
            delay_ms,
            batch_size,
            limit,
            output,
        } => {
            let universe = parse_universe_arg(&universe)?;
            let pacing = if throttle {
                PacingPolicy::Throttled {
                    per_item_delay: Duration::from_millis(delay_ms),
                    batch_size,
                }
            } else {
                PacingPolicy::Unthrottled
            };
            fetch_universe(universe, pacing, limit, output).await?;
        }
        Commands::Universes => list_universes(),
    }

    Ok(())
}

fn parse_universe_arg(name: &str) -> Result<NseUniverse, Box<dyn std::error::Error>> {
    universe::parse_universe(name)
        .ok_or_else(|| format!("Unknown universe: {} (see `indus universes`)", name).into())
}

fn list_universes() {
    println!("Available universes:");
    for universe in NseUniverse::all() {
        println!("  {:<10} {}", universe.label(), universe.source_url());
    }
}

async fn fetch_universe(
    universe: NseUniverse,
    pacing: PacingPolicy,
    limit: Option<usize>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    session.choose_universe(universe)?;

    println!("Universe: {}", universe);
    println!("Fetching stock list...");

    let mut loader = UniverseListLoader::new()?;
    match loader.load(&universe.source_url()).await {
        Ok(mut symbols) => {
            if let Some(n) = limit {
                symbols.truncate(n);
            }
            println!("Number of stocks in the universe: {}", symbols.len());
            session.list_loaded(symbols)?;
        }
        Err(e) => {
            session.list_load_failed(e.to_string())?;
            return Err(format!("Failed to fetch stock list: {}", e).into());
        }
    }

    let yahoo_symbols = session.begin_fetch()?;
    let total = yahoo_symbols.len();

    println!("Fetching industry data. This may take some time...");
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );

    let provider = YahooProfileProvider::new()?;
    let table = fetcher::fetch_industry(&provider, &yahoo_symbols, pacing, |progress| {
        pb.set_position((progress * total as f64).round() as u64);
        pb.set_message(format!("{}%", (progress * 100.0) as u32));
    })
    .await;
    pb.finish_with_message("done");

    print_preview(&table);
    session.finish_fetch(table)?;

    let path = output.unwrap_or_else(|| PathBuf::from(excel::export_filename(universe.label())));
    let bytes = excel::write_workbook(session.table())?;
    std::fs::write(&path, &bytes)?;

    println!(
        "\nSaved {} ({} rows, {} bytes)",
        path.display(),
        session.table().len(),
        bytes.len()
    );
    println!("Content type: {}", excel::SPREADSHEET_MIME);

    Ok(())
}

const PREVIEW_ROWS: usize = 10;

fn print_preview(table: &[IndustryRecord]) {
    println!("\n{:<40} {:<16} {}", "Company Name", "Symbol", "Industry");
    println!("{}", "─".repeat(80));
    for record in table.iter().take(PREVIEW_ROWS) {
        println!(
            "{:<40} {:<16} {}",
            record.company_name, record.symbol, record.industry
        );
    }
    if table.len() > PREVIEW_ROWS {
        println!("... {} more rows", table.len() - PREVIEW_ROWS);
    }
}
