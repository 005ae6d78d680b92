use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use slipsort::config::Config;
use slipsort::output;
use slipsort::sheet;
use slipsort::similarity::DistanceTable;
use slipsort::slip::RouteSlip;
use slipsort::tour;

/// Slipsort: route-slip scheduling for a ride club.
///
/// Orders a season's route slips so that textually similar rides never
/// land in consecutive weeks, and lays out individual slips for printing.
#[derive(Parser)]
#[command(name = "slipsort", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a ride order for the given route slips
    Order {
        /// Route slip files to schedule
        files: Vec<PathBuf>,

        /// Emit the result as JSON instead of a formatted list
        #[arg(long)]
        json: bool,
    },

    /// Lay out one slip (stdin) as repeated columns for printing (stdout)
    Sheet {
        /// Side-by-side copies per sheet (default 3, or SLIPSORT_COPIES)
        #[arg(long)]
        copies: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("slipsort=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Order { files, json } => run_order(&files, json),

        Commands::Sheet { copies } => {
            let config = Config::load()?;
            let copies = copies.unwrap_or(config.copies);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            sheet::render(stdin.lock(), &mut stdout, copies)
        }
    }
}

fn run_order(files: &[PathBuf], json: bool) -> Result<()> {
    let mut slips = Vec::with_capacity(files.len());
    for path in files {
        println!("Reading route slip [{}]...", path.display());
        slips.push(RouteSlip::load(path)?);
    }

    // Fix a canonical ordering so every tie-break is reproducible, and
    // schedule a slip listed twice only once.
    slips.sort_by(|a, b| a.name.cmp(&b.name));
    slips.dedup_by(|a, b| a.name == b.name);

    println!(
        "\nComputing the best sequence for {} route slips...",
        slips.len()
    );

    let table = DistanceTable::build(&slips);

    // A steady tick keeps the spinner moving while the search holds
    // this thread.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("    {spinner} {msg}")
            .expect("valid template"),
    );
    spinner.set_message("Growing greedy paths from every start...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    let best = tour::best_tour(&table);
    spinner.finish_and_clear();

    match best {
        Some(best) => {
            info!(cost = best.cost, "keeping the cheapest of the greedy paths");
            if json {
                let report = output::OrderingReport::new(&slips, &best);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::display_order(&slips, &best, &table);
            }
        }
        None => output::display_no_order(),
    }

    Ok(())
}
