//! List command implementation.

use anyhow::Result;
use arietta_client::PackagistClient;
use clap::Args;
use console::style;
use tracing::info;

/// Arguments for the list command.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Only list packages from this vendor namespace
    #[arg(long, conflicts_with = "package_type")]
    pub vendor: Option<String>,

    /// Only list packages of this type (library, composer-plugin, ...)
    #[arg(short = 't', long = "type")]
    pub package_type: Option<String>,
}

/// Run the list command.
pub async fn run(args: ListArgs) -> Result<()> {
    info!(vendor = ?args.vendor, package_type = ?args.package_type, "running list command");

    let client = PackagistClient::new()?;
    let list = match (&args.vendor, &args.package_type) {
        (Some(vendor), _) => client.list_by_org(vendor).await?,
        (None, Some(package_type)) => client.list_by_type(package_type).await?,
        (None, None) => client.list_all().await?,
    };

    for name in &list.package_names {
        println!("{name}");
    }

    eprintln!(
        "{}",
        style(format!("{} packages", list.package_names.len())).dim()
    );

    Ok(())
}
