//! Arietta CLI - query the Packagist.org registry from the terminal.

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use console::style;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 if cli.quiet => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to create runtime");

    match runtime.block_on(run_command(&cli)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run_command(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::List(args) => commands::list::run(args.clone()).await?,
        Commands::Search(args) => commands::search::run(args.clone()).await?,
        Commands::Show(args) => commands::show::run(args.clone()).await?,
        Commands::Stats(args) => commands::stats::run(args.clone()).await?,
    }
    Ok(ExitCode::SUCCESS)
}
