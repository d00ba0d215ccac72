use std::path::PathBuf;

use clap::Parser;

/// Explore a CSV dataset of volcanoes: filter by country and elevation,
/// then browse the table, charts and map.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// CSV file to open at startup
    #[clap(value_name = "FILE")]
    pub dataset: Option<PathBuf>,

    /// JSON settings file (default window, top-N, thresholds)
    #[clap(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
