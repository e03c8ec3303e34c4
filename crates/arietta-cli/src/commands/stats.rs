//! Stats command implementation.

use anyhow::Result;
use arietta_client::PackagistClient;
use clap::Args;
use console::style;
use tracing::info;

/// Arguments for the stats command.
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {}

/// Run the stats command.
pub async fn run(_args: StatsArgs) -> Result<()> {
    info!("running stats command");

    let client = PackagistClient::new()?;
    let stats = client.get_packagist_stats().await?;

    println!("{}", style("Packagist.org totals").cyan().bold());
    println!("packages  : {}", stats.totals.packages);
    println!("versions  : {}", stats.totals.version);
    println!("downloads : {}", stats.totals.downloads);

    Ok(())
}
