//! Package search with lazy pagination.
//!
//! See <https://packagist.org/apidoc#search-packages>. Each page of results
//! may carry a fully-qualified next-page URL in its body; the client wraps
//! that URL in a [`NextPage`] handle instead of exposing it, so callers walk
//! pages by invoking the handle until a page comes back without one.

use crate::client::PackagistClient;
use crate::error::{Error, Result};
use crate::types::{SearchResponse, SearchResult};
use tracing::debug;
use url::Url;

/// Tag filter: one tag or an ordered list of tags.
///
/// A single tag serializes as `tags=<value>`; a list serializes as indexed
/// parameters `tags[0]=<t0>&tags[1]=<t1>&...` in input order. Multiple tags
/// are combined with OR semantics by the Packagist API itself; there is no
/// AND form to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tags {
    /// A single tag.
    One(String),
    /// Multiple tags, in order.
    Many(Vec<String>),
}

impl Tags {
    /// Reject blank tags and empty lists before any request is built.
    fn ensure_valid(&self) -> Result<()> {
        match self {
            Self::One(tag) if tag.trim().is_empty() => {
                Err(Error::InvalidArgument("tag must not be empty".into()))
            }
            Self::Many(tags) if tags.is_empty() => {
                Err(Error::InvalidArgument("tag list must not be empty".into()))
            }
            Self::Many(tags) if tags.iter().any(|tag| tag.trim().is_empty()) => Err(
                Error::InvalidArgument("tag list must not contain empty tags".into()),
            ),
            _ => Ok(()),
        }
    }
}

impl From<&str> for Tags {
    fn from(tag: &str) -> Self {
        Self::One(tag.to_owned())
    }
}

impl From<String> for Tags {
    fn from(tag: String) -> Self {
        Self::One(tag)
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Self::Many(tags)
    }
}

impl From<Vec<&str>> for Tags {
    fn from(tags: Vec<&str>) -> Self {
        Self::Many(tags.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Tags {
    fn from(tags: &[&str]) -> Self {
        Self::Many(tags.iter().map(|tag| (*tag).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Tags {
    fn from(tags: [&str; N]) -> Self {
        Self::Many(tags.iter().map(|tag| (*tag).to_owned()).collect())
    }
}

/// Filters for a combined search. Any subset may be set; absent or empty
/// filters are omitted from the query entirely.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Free-text name query (`q`).
    pub name: Option<String>,
    /// Tag filter (`tags` or `tags[i]`).
    pub tags: Option<Tags>,
    /// Package type filter (`type`).
    pub package_type: Option<String>,
}

impl SearchFilters {
    /// Empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name query.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the tag filter.
    #[must_use]
    pub fn tags(mut self, tags: impl Into<Tags>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Set the package type filter.
    #[must_use]
    pub fn package_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = Some(package_type.into());
        self
    }
}

/// One page of search results.
#[derive(Debug)]
pub struct SearchPage {
    /// Matches on this page, in upstream order.
    pub results: Vec<SearchResult>,
    /// Total matches across all pages.
    pub total: u64,
    next: Option<NextPage>,
}

impl SearchPage {
    /// Continuation handle for the next page, absent on the final page.
    #[must_use]
    pub fn next(&self) -> Option<&NextPage> {
        self.next.as_ref()
    }

    /// True while more pages exist.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Continuation handle bound to a discovered next-page URL.
///
/// [`fetch`](Self::fetch) re-issues the request each time it is called;
/// nothing is memoized. A failed fetch fails only that call and leaves the
/// page it came from intact.
#[derive(Debug, Clone)]
pub struct NextPage {
    client: PackagistClient,
    url: Url,
}

impl NextPage {
    fn new(client: PackagistClient, raw: &str) -> Result<Self> {
        let url = Url::parse(raw).map_err(|e| Error::Parse {
            url: raw.to_owned(),
            message: format!("invalid next-page URL: {e}"),
        })?;
        Ok(Self { client, url })
    }

    /// Fetch the next page of results.
    ///
    /// # Errors
    /// Returns [`Error::Network`], [`Error::Http`] or [`Error::Parse`] if the
    /// page fetch fails; earlier pages remain valid.
    pub async fn fetch(&self) -> Result<SearchPage> {
        self.client.fetch_search_page(self.url.clone()).await
    }
}

impl PackagistClient {
    /// Search with any combination of name, tags and type filters.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for a blank or empty tag filter
    /// before any request is made, otherwise [`Error::Network`],
    /// [`Error::Http`] or [`Error::Parse`].
    pub async fn search(
        &self,
        filters: &SearchFilters,
        per_page: Option<u32>,
    ) -> Result<SearchPage> {
        let url = self.search_url(filters, per_page)?;
        self.fetch_search_page(url).await
    }

    /// Search packages by name.
    ///
    /// See <https://packagist.org/apidoc#search-packages-by-name>.
    ///
    /// # Errors
    /// Returns [`Error::Network`], [`Error::Http`] or [`Error::Parse`] on
    /// failure.
    pub async fn search_by_name(&self, name: &str, per_page: Option<u32>) -> Result<SearchPage> {
        self.search(&SearchFilters::new().name(name), per_page).await
    }

    /// Search packages by one tag or several.
    ///
    /// See <https://packagist.org/apidoc#search-packages-by-tag>. Multiple
    /// tags are OR-combined by the upstream API.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for blank or empty tags before any
    /// request is made, otherwise [`Error::Network`], [`Error::Http`] or
    /// [`Error::Parse`].
    pub async fn search_by_tag(
        &self,
        tags: impl Into<Tags>,
        per_page: Option<u32>,
    ) -> Result<SearchPage> {
        self.search(&SearchFilters::new().tags(tags), per_page).await
    }

    /// Search packages by package type.
    ///
    /// See <https://packagist.org/apidoc#search-packages-by-type>.
    ///
    /// # Errors
    /// Returns [`Error::Network`], [`Error::Http`] or [`Error::Parse`] on
    /// failure.
    pub async fn search_by_type(
        &self,
        package_type: &str,
        per_page: Option<u32>,
    ) -> Result<SearchPage> {
        self.search(&SearchFilters::new().package_type(package_type), per_page)
            .await
    }

    fn search_url(&self, filters: &SearchFilters, per_page: Option<u32>) -> Result<Url> {
        if let Some(tags) = &filters.tags {
            tags.ensure_valid()?;
        }

        let mut url = self.web_endpoint("search.json")?;
        {
            let mut pairs = url.query_pairs_mut();

            if let Some(name) = filters.name.as_deref().filter(|name| !name.is_empty()) {
                pairs.append_pair("q", name);
            }

            match &filters.tags {
                Some(Tags::One(tag)) => {
                    pairs.append_pair("tags", tag);
                }
                Some(Tags::Many(tags)) => {
                    for (index, tag) in tags.iter().enumerate() {
                        pairs.append_pair(&format!("tags[{index}]"), tag);
                    }
                }
                None => {}
            }

            if let Some(package_type) = filters
                .package_type
                .as_deref()
                .filter(|package_type| !package_type.is_empty())
            {
                pairs.append_pair("type", package_type);
            }

            if let Some(per_page) = per_page {
                pairs.append_pair("per_page", &per_page.to_string());
            }
        }

        // An all-empty filter set would otherwise leave a dangling '?'.
        if url.query().is_some_and(str::is_empty) {
            url.set_query(None);
        }

        Ok(url)
    }

    pub(crate) async fn fetch_search_page(&self, url: Url) -> Result<SearchPage> {
        let response: SearchResponse = self.get_json(url).await?;

        debug!(
            results = response.results.len(),
            total = response.total,
            has_next = response.next.is_some(),
            "search page fetched"
        );

        let next = match response.next {
            Some(raw) => Some(NextPage::new(self.clone(), &raw)?),
            None => None,
        };

        Ok(SearchPage {
            results: response.results,
            total: response.total,
            next,
        })
    }
}
