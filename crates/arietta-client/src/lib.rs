//! Typed client for the Packagist.org web API.
//!
//! Wraps the public REST endpoints of <https://packagist.org>:
//!
//! - **Listing**: full or server-side filtered package name lists, by vendor
//!   or by package type.
//! - **Search**: by name, tag(s) and type, with lazily-walked pagination.
//!   A page carrying more results exposes a [`NextPage`] handle; invoking it
//!   fetches the following page, until a page has none.
//! - **Metadata**: raw Composer metadata with `If-Modified-Since` support.
//!   A 304 from upstream is translated into an empty result plus the current
//!   modification timestamp rather than an error.
//! - **Details and statistics**: rendered package descriptors and
//!   registry-wide totals.
//!
//! The client performs no retries, no rate limiting and no caching; transient
//! failures are the caller's to handle.
//!
//! # Example
//!
//! ```no_run
//! use arietta_client::PackagistClient;
//!
//! # async fn example() -> arietta_client::Result<()> {
//! let client = PackagistClient::new()?;
//!
//! let page = client.search_by_name("monolog", None).await?;
//! println!("{} matches", page.total);
//! for hit in page.results.iter().take(5) {
//!     println!("{}: {}", hit.name, hit.description);
//! }
//! if let Some(next) = page.next() {
//!     let more = next.fetch().await?;
//!     println!("next page has {} results", more.results.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Conditional metadata
//!
//! ```no_run
//! use arietta_client::PackagistClient;
//!
//! # async fn example() -> arietta_client::Result<()> {
//! let client = PackagistClient::new()?;
//!
//! let first = client.get_package_metadata("monolog/monolog", None).await?;
//! let second = client
//!     .get_package_metadata("monolog/monolog", first.last_modified.as_deref())
//!     .await?;
//! if second.data.is_empty() {
//!     println!("unchanged since {:?}", second.last_modified);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod error;
mod info;
mod list;
mod search;
mod types;

pub use client::{PACKAGIST_REPO_URL, PACKAGIST_URL, PackagistClient, PackagistConfig};
pub use error::{Error, Result};
pub use info::{MetadataUpdate, PackageRef};
pub use search::{NextPage, SearchFilters, SearchPage, Tags};
pub use types::{
    AbandonedValue, Author, DistRef, DownloadStats, LicenseValue, Maintainer, PackageDetails,
    PackageDetailsResponse, PackageList, PackageMetadata, SearchResult, SourceRef, Statistics,
    Totals, VersionDetails,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create a client for packagist.org with default settings.
///
/// # Errors
/// Returns error if the HTTP client cannot be built.
pub fn client() -> Result<PackagistClient> {
    PackagistClient::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn default_client_targets_packagist() {
        let client = client().unwrap();
        assert_eq!(client.web_url().host_str(), Some("packagist.org"));
        assert_eq!(client.repo_url().host_str(), Some("repo.packagist.org"));
    }
}
