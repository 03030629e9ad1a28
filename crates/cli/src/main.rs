//! tripscope - travel timeline from a calendar export
//!
//! Usage:
//!   tripscope import calendar.ics      Show what the import kept and skipped
//!   tripscope trips calendar.ics       List trips (filter with --destination/--year)
//!   tripscope summary calendar.ics     Headline numbers, top destinations, timeline
//!   tripscope map calendar.ics         Marker data with resolved coordinates
//!
//! Every command accepts `--json` for machine-readable output.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tripscope_core::insights::{MapFilter, TripSortOrder};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "tripscope")]
#[command(about = "Find the trips hiding in a calendar export")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (JSON or TOML); standard locations are probed otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a calendar and report accepted, duplicate and skipped events
    Import {
        /// Path to the .ics export
        calendar: PathBuf,
    },
    /// List trips as a table
    Trips {
        calendar: PathBuf,

        /// Only trips to this destination (exact match)
        #[arg(long)]
        destination: Option<String>,

        /// Only trips starting in this year
        #[arg(long)]
        year: Option<i32>,

        /// next-upcoming, most-recent, oldest-first, longest-duration, destination-az
        #[arg(long, default_value_t = TripSortOrder::NextUpcoming)]
        sort: TripSortOrder,
    },
    /// Summary statistics and chart data
    Summary { calendar: PathBuf },
    /// Place trips on a map
    Map {
        calendar: PathBuf,

        /// past, upcoming or all
        #[arg(long, default_value_t = MapFilter::All)]
        filter: MapFilter,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = tripscope_infra::config::load_with(cli.config.clone())
        .context("Failed to load configuration")?;
    tripscope_infra::init_tracing(&config.logging).context("Failed to initialize logging")?;

    let app = commands::App::new(config, cli.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Import { calendar } => app.import(&calendar, &mut out),
        Commands::Trips { calendar, destination, year, sort } => {
            app.trips(&calendar, destination, year, sort, &mut out)
        }
        Commands::Summary { calendar } => app.summary(&calendar, &mut out),
        Commands::Map { calendar, filter } => app.map(&calendar, filter, &mut out),
    }?;

    out.flush().context("Failed to flush output")
}
