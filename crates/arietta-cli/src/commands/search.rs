//! Search command implementation.

use anyhow::{Result, bail};
use arietta_client::{PackagistClient, SearchFilters, SearchPage};
use clap::Args;
use console::style;
use tracing::info;

/// Arguments for the search command.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query
    pub query: Option<String>,

    /// Filter by tag (repeatable; multiple tags are OR-combined upstream)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Filter by package type (library, project, ...)
    #[arg(short = 't', long = "type")]
    pub package_type: Option<String>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Number of pages to fetch
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    /// Only show package names
    #[arg(short = 'N', long)]
    pub only_name: bool,
}

/// Run the search command.
pub async fn run(args: SearchArgs) -> Result<()> {
    if args.query.is_none() && args.tags.is_empty() && args.package_type.is_none() {
        bail!("provide a search term, --tag or --type");
    }

    info!(query = ?args.query, tags = ?args.tags, "running search command");

    let mut filters = SearchFilters::new();
    if let Some(query) = &args.query {
        filters = filters.name(query.clone());
    }
    if !args.tags.is_empty() {
        filters = filters.tags(args.tags.clone());
    }
    if let Some(package_type) = &args.package_type {
        filters = filters.package_type(package_type.clone());
    }

    let client = PackagistClient::new()?;
    let mut page = client.search(&filters, args.per_page).await?;
    let mut fetched = 1;

    loop {
        print_page(&page, args.only_name);
        if fetched >= args.pages {
            break;
        }
        let following = match page.next() {
            Some(next) => next.fetch().await?,
            None => break,
        };
        page = following;
        fetched += 1;
    }

    eprintln!(
        "{}",
        style(format!(
            "{} total matches, {fetched} page{} shown",
            page.total,
            if fetched == 1 { "" } else { "s" }
        ))
        .dim()
    );

    Ok(())
}

fn print_page(page: &SearchPage, only_name: bool) {
    for result in &page.results {
        if only_name {
            println!("{}", result.name);
            continue;
        }

        println!(
            "{} {}",
            style(&result.name).green().bold(),
            style(format!("({} downloads, {} stars)", result.downloads, result.favers)).dim()
        );
        if result.abandoned.is_abandoned() {
            match result.abandoned.replacement() {
                Some(replacement) => println!(
                    "  {} use {replacement} instead",
                    style("abandoned!").red().bold()
                ),
                None => println!("  {}", style("abandoned!").red().bold()),
            }
        }
        if !result.description.is_empty() {
            println!("  {}", result.description);
        }
    }
}
