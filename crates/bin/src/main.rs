//! Hobart CLI binary.
//!
//! Command-line interface for deriving and screening company statistics.

mod store;

use clap::{Parser, Subcommand};
use hobart::data::{ProfileRepository, SqliteProfileRepository, YearlyProfile};
use hobart::output::{Report, render_text};
use hobart::stats::{DescriptorCatalog, DiscountRateTable, StatsAggregator};
use hobart::{ScreenOutcome, ScreenerService};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Hobart: fundamentals screening statistics", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the profiles database
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive full statistics for a single company
    Company {
        /// Company CIK
        #[arg(long, conflicts_with = "ticker")]
        cik: Option<String>,

        /// Ticker symbol (alternative to --cik)
        #[arg(long)]
        ticker: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Minimum trailing fully-reported years required
        #[arg(long, default_value = "5")]
        min_years: usize,
    },

    /// Screen every company in the database
    Screen {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Minimum trailing fully-reported years required
        #[arg(long, default_value = "5")]
        min_years: usize,
    },

    /// List company keys in the database
    List,

    /// Import yearly profiles from a JSON file
    Import {
        /// JSON file holding an array of yearly profiles
        file: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let repo = store::open_repository(cli.db)?;

    match cli.command {
        Commands::Company {
            cik,
            ticker,
            format,
            min_years,
        } => {
            let service = make_service(repo, min_years);
            let stats = match (cik, ticker) {
                (Some(cik), _) => service.stats_for_cik(&cik)?,
                (None, Some(ticker)) => service.stats_for_ticker(&ticker)?,
                (None, None) => return Err("provide --cik or --ticker".into()),
            };

            match format.as_str() {
                "json" => println!("{}", Report::new(stats).to_json()?),
                _ => print!("{}", render_text(&stats)),
            }
        }

        Commands::Screen { format, min_years } => {
            let service = make_service(repo, min_years);
            let outcome = screen_with_progress(&service)?;

            match format.as_str() {
                "json" => {
                    let reports: Vec<Report> = outcome.stats.into_iter().map(Report::new).collect();
                    println!("{}", serde_json::to_string_pretty(&reports)?);
                }
                _ => print_screen_summary(&outcome),
            }
        }

        Commands::List => {
            for key in repo.company_keys()? {
                println!("{key}");
            }
        }

        Commands::Import { file } => {
            let contents = std::fs::read_to_string(&file)?;
            let profiles: Vec<YearlyProfile> = serde_json::from_str(&contents)?;
            repo.put_profiles(&profiles)?;
            println!("Imported {} profiles from {}", profiles.len(), file.display());
        }
    }

    Ok(())
}

fn make_service(
    repo: SqliteProfileRepository,
    min_years: usize,
) -> ScreenerService<SqliteProfileRepository> {
    let aggregator = StatsAggregator::new(
        DescriptorCatalog::standard(),
        DiscountRateTable::us_inflation_2010s(),
    )
    .with_min_years(min_years);
    ScreenerService::new(repo, aggregator)
}

fn screen_with_progress(
    service: &ScreenerService<SqliteProfileRepository>,
) -> Result<ScreenOutcome, Box<dyn std::error::Error>> {
    let keys = service.company_keys()?;

    let pb = ProgressBar::new(keys.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );

    let mut stats = Vec::new();
    let mut skipped = Vec::new();
    for cik in keys {
        pb.set_message(cik.clone());
        match service.stats_for_cik(&cik) {
            Ok(company) => stats.push(company),
            Err(hobart::ScreenerError::Stats(err)) => skipped.push((cik, err)),
            Err(err) => {
                pb.finish_with_message("Failed!");
                return Err(err.into());
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    Ok(ScreenOutcome { stats, skipped })
}

fn print_screen_summary(outcome: &ScreenOutcome) {
    println!(
        "{:<12} {:<8} {:<11} {:>14}",
        "CIK", "Ticker", "Years", "Compound ROI"
    );
    println!("{}", "-".repeat(48));
    for stats in &outcome.stats {
        println!(
            "{:<12} {:<8} {:<11} {:>14.4}",
            stats.cik,
            stats.ticker,
            format!("{}-{}", stats.begin_year, stats.end_year),
            stats.compound_roi_for_period
        );
    }
    println!("{}", "-".repeat(48));
    println!(
        "{} companies analyzed, {} skipped",
        outcome.stats.len(),
        outcome.skipped.len()
    );
    for (cik, err) in &outcome.skipped {
        println!("  skipped {cik}: {err}");
    }
}
