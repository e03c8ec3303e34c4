//! CLI commands for Arietta.

pub mod list;
pub mod search;
pub mod show;
pub mod stats;

use clap::{Parser, Subcommand};

/// Arietta - query the Packagist.org registry
#[derive(Parser, Debug)]
#[command(name = "arietta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List package names, optionally filtered by vendor or type
    List(list::ListArgs),

    /// Search for packages by name, tag or type
    Search(search::SearchArgs),

    /// Show details for one package
    Show(show::ShowArgs),

    /// Show registry-wide statistics
    Stats(stats::StatsArgs),
}
