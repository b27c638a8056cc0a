mod commands;
mod dto;

use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode, time::Instant};
use tracing::{Level, error, info};
use wellington::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "wellington",
    version,
    about = "Browse Wellington regional train stations, lines and services"
)]
struct Args {
    /// Data directory or zip archive holding stations.data and train-lines.data
    #[arg(short, long, env = "WELLINGTON_DATA", default_value = ".")]
    data: PathBuf,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Show debug messages
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// All stations, ordered by name
    Stations,
    /// All lines, ordered by name
    Lines,
    /// Every station with the lines serving it
    StationLines,
    /// Every line with the stations it visits
    LineStations,
    /// Lines serving a station
    LinesAt { station: String },
    /// Stations visited by a line, in travel order
    StationsOn { line: String },
    /// Services running on a line
    Services {
        line: String,
        /// Only services departing at or after this time (HH:MM, or "now")
        #[arg(long)]
        after: Option<String>,
    },
    /// Every line serving a station with its service times
    StationServices { station: String },
    /// Whether two stations are served by the same lines
    Route { from: String, to: String },
    /// Fuzzy search over station and line names
    Search { text: String },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("Loading data from {}...", args.data.display());
    let now = Instant::now();
    let data = DataReader::new(Config::default()).from_path(&args.data);
    let repository = match Repository::new().load_data(data) {
        Ok(repository) => repository,
        Err(err) => {
            error!("Failed to load data: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!("Loading data took {:?}", now.elapsed());

    match commands::run(&repository, args.command, args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
