//! Package metadata, package details and registry statistics.
//!
//! See "Get package data" at <https://packagist.org/apidoc#get-package-data>.

use crate::client::PackagistClient;
use crate::error::{Error, Result};
use crate::types::{PackageDetailsResponse, PackageMetadata, Statistics};
use reqwest::Response;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, IF_MODIFIED_SINCE, LAST_MODIFIED};
use tracing::debug;

/// Reference to a package, either as a full `"vendor/package"` name or as a
/// structured pair. Both forms normalize to the same canonical path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageRef {
    /// Full `vendor/package` name.
    Name(String),
    /// Structured vendor and package pair.
    Parts {
        /// Vendor namespace.
        vendor: String,
        /// Package name within the vendor namespace.
        package: String,
    },
}

impl PackageRef {
    /// Build a structured reference.
    #[must_use]
    pub fn new(vendor: impl Into<String>, package: impl Into<String>) -> Self {
        Self::Parts {
            vendor: vendor.into(),
            package: package.into(),
        }
    }

    /// Normalize to the canonical `vendor/package` path segment.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when the name form is not two
    /// non-empty segments separated by `/`, or when a structured half is
    /// empty.
    pub fn canonical(&self) -> Result<String> {
        match self {
            Self::Name(name) => match name.split_once('/') {
                Some((vendor, package)) if !vendor.is_empty() && !package.is_empty() => {
                    Ok(name.clone())
                }
                _ => Err(Error::InvalidArgument(format!(
                    "package reference '{name}' must be in vendor/package form"
                ))),
            },
            Self::Parts { vendor, package } => {
                if vendor.is_empty() || package.is_empty() {
                    return Err(Error::InvalidArgument(
                        "vendor and package must both be non-empty".into(),
                    ));
                }
                Ok(format!("{vendor}/{package}"))
            }
        }
    }
}

impl From<&str> for PackageRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for PackageRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<(&str, &str)> for PackageRef {
    fn from((vendor, package): (&str, &str)) -> Self {
        Self::new(vendor, package)
    }
}

/// Result of a (possibly conditional) metadata fetch.
///
/// When upstream answers 304 Not Modified, `data` is empty and
/// `last_modified` carries the timestamp from the response headers, so "no
/// data" and "no change" read the same to callers.
#[derive(Debug, Clone)]
pub struct MetadataUpdate {
    /// Composer metadata, empty when nothing changed.
    pub data: PackageMetadata,
    /// Value of the response's `Last-Modified` header, to be replayed on the
    /// next conditional request.
    pub last_modified: Option<String>,
}

impl PackagistClient {
    /// Fetch Composer metadata for a package, optionally conditional on a
    /// previously seen `Last-Modified` timestamp.
    ///
    /// A 304 from upstream is not an error: it yields empty metadata plus the
    /// current timestamp.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for a malformed reference or
    /// timestamp before any request is made, otherwise [`Error::Network`],
    /// [`Error::Http`] or [`Error::Parse`].
    pub async fn get_package_metadata(
        &self,
        package: impl Into<PackageRef>,
        if_modified_since: Option<&str>,
    ) -> Result<MetadataUpdate> {
        let canonical = package.into().canonical()?;
        let url = self.repo_endpoint(&format!("p/{canonical}.json"))?;

        let mut headers = HeaderMap::new();
        if let Some(stamp) = if_modified_since {
            let value = HeaderValue::from_str(stamp).map_err(|e| {
                Error::InvalidArgument(format!("invalid If-Modified-Since value: {e}"))
            })?;
            headers.insert(IF_MODIFIED_SINCE, value);
        }

        let response = self.send(url, headers).await?;
        let last_modified = last_modified_header(&response);

        if response.status() == StatusCode::NOT_MODIFIED {
            debug!(package = %canonical, "metadata unchanged upstream");
            return Ok(MetadataUpdate {
                data: PackageMetadata::default(),
                last_modified,
            });
        }

        let response = self.check_success(response).await?;
        let data = self.read_json(response).await?;
        Ok(MetadataUpdate {
            data,
            last_modified,
        })
    }

    /// Fetch the rendered package details, exactly as the upstream
    /// `{package: {...}}` envelope.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for a malformed reference before
    /// any request is made, otherwise [`Error::Network`], [`Error::Http`] or
    /// [`Error::Parse`].
    pub async fn get_package_details(
        &self,
        package: impl Into<PackageRef>,
    ) -> Result<PackageDetailsResponse> {
        let canonical = package.into().canonical()?;
        let url = self.web_endpoint(&format!("packages/{canonical}.json"))?;
        self.get_json(url).await
    }

    /// Fetch registry-wide statistics.
    ///
    /// See <https://packagist.org/apidoc#get-statistics>.
    ///
    /// # Errors
    /// Returns [`Error::Network`], [`Error::Http`] or [`Error::Parse`] on
    /// failure.
    pub async fn get_packagist_stats(&self) -> Result<Statistics> {
        let url = self.web_endpoint("statistics.json")?;
        self.get_json(url).await
    }
}

fn last_modified_header(response: &Response) -> Option<String> {
    response
        .headers()
        .get(LAST_MODIFIED)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_form_passes_through() {
        let reference = PackageRef::from("monolog/monolog");
        assert_eq!(reference.canonical().unwrap(), "monolog/monolog");
    }

    #[test]
    fn structured_form_joins() {
        let reference = PackageRef::new("monolog", "monolog");
        assert_eq!(reference.canonical().unwrap(), "monolog/monolog");
    }

    #[test]
    fn both_forms_are_equal_after_normalization() {
        let by_name = PackageRef::from("composer/composer").canonical().unwrap();
        let by_parts = PackageRef::new("composer", "composer").canonical().unwrap();
        assert_eq!(by_name, by_parts);
    }

    #[test]
    fn name_without_separator_is_rejected() {
        let result = PackageRef::from("monolog").canonical();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(PackageRef::from("/monolog").canonical().is_err());
        assert!(PackageRef::from("monolog/").canonical().is_err());
        assert!(PackageRef::new("", "monolog").canonical().is_err());
        assert!(PackageRef::new("monolog", "").canonical().is_err());
    }
}
