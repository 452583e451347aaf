use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::domain::value_objects::SolverBackend;

/// Solve a 0/1 knapsack instance
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance file: `item_count capacity`, then one `value weight` line per item
    #[arg(value_name = "FILE")]
    pub input_file: PathBuf,
    /// Overrides the backend from the config file
    #[arg(short, long, value_name = "[exhaustive, cbc, highs]")]
    pub backend: Option<SolverBackend>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Largest instance the exhaustive solver accepts
    #[arg(long, value_name = "N")]
    pub max_items: Option<usize>,
    /// Verify the answer against the exhaustive solver
    #[arg(long)]
    pub check: bool,
    /// Print the solution as JSON instead of the two-line text format
    #[arg(long)]
    pub json: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
