//! Package name listing.
//!
//! See <https://packagist.org/apidoc#list-packages>. The endpoint returns the
//! full (optionally server-side filtered) list in one response; there is no
//! pagination and no client-side filtering here.

use crate::client::PackagistClient;
use crate::error::Result;
use crate::types::PackageList;
use url::Url;

impl PackagistClient {
    /// List every package name on the registry.
    ///
    /// # Errors
    /// Returns [`crate::Error::Network`] or [`crate::Error::Http`] on
    /// transport or non-2xx failure.
    pub async fn list_all(&self) -> Result<PackageList> {
        let url = self.list_url(None)?;
        self.get_json(url).await
    }

    /// List package names under one vendor namespace.
    ///
    /// See <https://packagist.org/apidoc#list-packages-by-organization>.
    ///
    /// # Errors
    /// Returns [`crate::Error::Network`] or [`crate::Error::Http`] on
    /// transport or non-2xx failure.
    pub async fn list_by_org(&self, vendor: &str) -> Result<PackageList> {
        let url = self.list_url(Some(("vendor", vendor)))?;
        self.get_json(url).await
    }

    /// List package names of one package type.
    ///
    /// See <https://packagist.org/apidoc#list-packages-by-type>.
    ///
    /// # Errors
    /// Returns [`crate::Error::Network`] or [`crate::Error::Http`] on
    /// transport or non-2xx failure.
    pub async fn list_by_type(&self, package_type: &str) -> Result<PackageList> {
        let url = self.list_url(Some(("type", package_type)))?;
        self.get_json(url).await
    }

    fn list_url(&self, filter: Option<(&str, &str)>) -> Result<Url> {
        let mut url = self.web_endpoint("packages/list.json")?;
        if let Some((key, value)) = filter {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PackagistClient {
        PackagistClient::new().unwrap()
    }

    #[test]
    fn unfiltered_list_has_no_query() {
        let url = client().list_url(None).unwrap();
        assert_eq!(url.as_str(), "https://packagist.org/packages/list.json");
        assert!(url.query().is_none());
    }

    #[test]
    fn vendor_filter() {
        let url = client().list_url(Some(("vendor", "composer"))).unwrap();
        assert_eq!(url.query(), Some("vendor=composer"));
    }

    #[test]
    fn type_filter() {
        let url = client().list_url(Some(("type", "composer-plugin"))).unwrap();
        assert_eq!(url.query(), Some("type=composer-plugin"));
    }
}
