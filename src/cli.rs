//! Command-line interface argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// FlixLens - explore a movie and show catalogue
///
/// Opens a dashboard over a CSV (or JSON / Parquet) export with genre
/// frequency, vote-average distribution, popularity extremes, release trend
/// and title search.
///
/// Examples:
///   flixlens
///   flixlens mymoviedb.csv --genre Drama
///   flixlens mymoviedb.csv --search man --report -
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalogue file to open on start-up
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for flixlens.toml in the current directory
    #[arg(short, long, value_name = "FILE", env = "FLIXLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Initial genre filter ("All" for no filter)
    #[arg(short, long, default_value = "All", value_name = "GENRE")]
    pub genre: String,

    /// Initial title search
    #[arg(short, long, default_value = "", value_name = "TEXT")]
    pub search: String,

    /// Write the dashboard as JSON to FILE ("-" for stdout) instead of
    /// opening a window. Requires FILE.
    #[arg(short, long, value_name = "OUT", requires = "file")]
    pub report: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}
