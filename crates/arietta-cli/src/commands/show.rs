//! Show command implementation.

use anyhow::Result;
use arietta_client::PackagistClient;
use clap::Args;
use console::style;
use tracing::info;

/// Arguments for the show command.
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Package to show, as vendor/package
    pub package: String,
}

/// Run the show command.
pub async fn run(args: ShowArgs) -> Result<()> {
    info!(package = %args.package, "running show command");

    let client = PackagistClient::new()?;
    let response = client.get_package_details(args.package.as_str()).await?;
    let package = &response.package;

    println!("{}", style(&package.name).green().bold());
    if package.abandoned.is_abandoned() {
        match package.abandoned.replacement() {
            Some(replacement) => println!(
                "{} use {replacement} instead",
                style("abandoned!").red().bold()
            ),
            None => println!("{}", style("abandoned!").red().bold()),
        }
    }
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    println!();

    if let Some(package_type) = &package.package_type {
        println!("type       : {package_type}");
    }
    if let Some(repository) = &package.repository {
        println!("repository : {repository}");
    }
    if let Some(language) = &package.language {
        println!("language   : {language}");
    }
    println!("versions   : {}", package.versions.len());
    println!(
        "downloads  : {} total, {} monthly, {} daily",
        package.downloads.total, package.downloads.monthly, package.downloads.daily
    );
    println!("favers     : {}", package.favers);
    println!("dependents : {}", package.dependents);
    println!("suggesters : {}", package.suggesters);

    if !package.maintainers.is_empty() {
        let names: Vec<&str> = package
            .maintainers
            .iter()
            .map(|maintainer| maintainer.name.as_str())
            .collect();
        println!("maintained : {}", names.join(", "));
    }

    Ok(())
}
