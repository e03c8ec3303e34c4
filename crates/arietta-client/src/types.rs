//! Packagist API response types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response from the `packages/list.json` endpoint family.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageList {
    /// Fully-qualified `vendor/package` names, in upstream order.
    #[serde(rename = "packageNames")]
    pub package_names: Vec<String>,
}

/// Raw search page envelope: `{results, total, next?}`.
///
/// Internal only. The `next` URL is wrapped in a continuation handle before a
/// page reaches the caller.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub next: Option<String>,
}

/// A single search hit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult {
    /// Package name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Package URL on Packagist.
    #[serde(default)]
    pub url: String,
    /// Repository URL.
    #[serde(default)]
    pub repository: Option<String>,
    /// Download count.
    #[serde(default)]
    pub downloads: u64,
    /// Favorites count.
    #[serde(default)]
    pub favers: u64,
    /// Whether abandoned.
    #[serde(default)]
    pub abandoned: AbandonedValue,
}

/// Abandoned marker: boolean or replacement package name.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AbandonedValue {
    /// Boolean abandoned flag.
    Boolean(bool),
    /// Replacement package name.
    Replacement(String),
    /// Not abandoned.
    #[default]
    None,
}

impl AbandonedValue {
    /// Check if the package is abandoned.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        match self {
            Self::Boolean(flag) => *flag,
            Self::Replacement(_) => true,
            Self::None => false,
        }
    }

    /// Suggested replacement package, if one was named.
    #[must_use]
    pub fn replacement(&self) -> Option<&str> {
        match self {
            Self::Replacement(name) => Some(name),
            _ => None,
        }
    }
}

/// License value: a single identifier or a list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LicenseValue {
    /// Single license.
    Single(String),
    /// Multiple licenses.
    Multiple(Vec<String>),
    /// No license specified.
    #[default]
    None,
}

impl LicenseValue {
    /// Flatten to a list of license identifiers.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Single(license) => vec![license.clone()],
            Self::Multiple(licenses) => licenses.clone(),
            Self::None => vec![],
        }
    }
}

/// Author information.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Author {
    /// Author name.
    #[serde(default)]
    pub name: String,
    /// Author email.
    #[serde(default)]
    pub email: Option<String>,
    /// Author homepage.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Author role.
    #[serde(default)]
    pub role: Option<String>,
}

/// Source (VCS) descriptor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceRef {
    /// VCS type (git, svn, ...).
    #[serde(rename = "type")]
    pub source_type: String,
    /// Repository URL.
    pub url: String,
    /// Reference (branch, tag, commit).
    pub reference: String,
}

/// Distribution (archive) descriptor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DistRef {
    /// Archive type (zip, tar).
    #[serde(rename = "type")]
    pub dist_type: String,
    /// Download URL.
    pub url: String,
    /// SHA checksum.
    #[serde(default)]
    pub shasum: Option<String>,
    /// Reference.
    #[serde(default)]
    pub reference: Option<String>,
}

/// One version entry from the Composer metadata or details endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionDetails {
    /// Package name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Version string.
    pub version: String,
    /// Normalized version.
    #[serde(default)]
    pub version_normalized: Option<String>,
    /// Release time.
    #[serde(default)]
    pub time: Option<String>,
    /// Keywords/tags.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// License(s).
    #[serde(default)]
    pub license: LicenseValue,
    /// Authors.
    #[serde(default)]
    pub authors: Vec<Author>,
    /// Repository/source info.
    #[serde(default)]
    pub source: Option<SourceRef>,
    /// Distribution info.
    #[serde(default)]
    pub dist: Option<DistRef>,
    /// Package type (library, project, ...).
    #[serde(default, rename = "type")]
    pub package_type: Option<String>,
    /// Upstream version identifier.
    #[serde(default)]
    pub uid: Option<u64>,
    /// Autoload configuration, kept free-form.
    #[serde(default)]
    pub autoload: Option<HashMap<String, sonic_rs::Value>>,
    /// Required dependencies.
    #[serde(default)]
    pub require: Option<HashMap<String, String>>,
    /// Development dependencies.
    #[serde(default, rename = "require-dev")]
    pub require_dev: Option<HashMap<String, String>>,
    /// Suggested packages.
    #[serde(default)]
    pub suggest: Option<HashMap<String, String>>,
    /// Conflicting packages.
    #[serde(default)]
    pub conflict: Option<HashMap<String, String>>,
    /// Provided virtual packages.
    #[serde(default)]
    pub provide: Option<HashMap<String, String>>,
    /// Replaced packages.
    #[serde(default)]
    pub replace: Option<HashMap<String, String>>,
    /// Whether abandoned.
    #[serde(default)]
    pub abandoned: AbandonedValue,
}

/// Composer metadata envelope: package name to version string to details.
///
/// Deserializes to the empty map when upstream signals no change, so callers
/// can treat "no data" and "no change" uniformly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageMetadata {
    /// Package versions keyed by name, then by version string.
    #[serde(default)]
    pub packages: HashMap<String, HashMap<String, VersionDetails>>,
}

impl PackageMetadata {
    /// True when no package data is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Package maintainer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Maintainer {
    /// Maintainer name.
    pub name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Download counters from the details endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DownloadStats {
    /// All-time downloads.
    #[serde(default)]
    pub total: u64,
    /// Downloads in the last month.
    #[serde(default)]
    pub monthly: u64,
    /// Downloads in the last day.
    #[serde(default)]
    pub daily: u64,
}

/// Full package descriptor from `packages/{vendor}/{package}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageDetails {
    /// Package name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Creation time.
    #[serde(default)]
    pub time: Option<String>,
    /// Maintainers.
    #[serde(default)]
    pub maintainers: Vec<Maintainer>,
    /// Versions keyed by version string.
    #[serde(default)]
    pub versions: HashMap<String, VersionDetails>,
    /// Package type.
    #[serde(default, rename = "type")]
    pub package_type: Option<String>,
    /// Repository URL.
    #[serde(default)]
    pub repository: Option<String>,
    /// GitHub stars.
    #[serde(default)]
    pub github_stars: Option<u64>,
    /// GitHub watchers.
    #[serde(default)]
    pub github_watchers: Option<u64>,
    /// GitHub forks.
    #[serde(default)]
    pub github_forks: Option<u64>,
    /// GitHub open issues.
    #[serde(default)]
    pub github_open_issues: Option<u64>,
    /// Primary repository language.
    #[serde(default)]
    pub language: Option<String>,
    /// Number of dependent packages.
    #[serde(default)]
    pub dependents: u64,
    /// Number of packages suggesting this one.
    #[serde(default)]
    pub suggesters: u64,
    /// Download counters.
    #[serde(default)]
    pub downloads: DownloadStats,
    /// Favorites count.
    #[serde(default)]
    pub favers: u64,
    /// Whether abandoned.
    #[serde(default)]
    pub abandoned: AbandonedValue,
}

/// Envelope returned by the details endpoint, kept as-is: `{package: {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageDetailsResponse {
    /// The package descriptor.
    pub package: PackageDetails,
}

/// Registry-wide statistics: `{totals: {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Statistics {
    /// Aggregate totals.
    pub totals: Totals,
}

/// Aggregate totals across the whole registry.
#[derive(Debug, Clone, Deserialize)]
pub struct Totals {
    /// Total downloads served.
    #[serde(default)]
    pub downloads: u64,
    /// Total registered packages.
    #[serde(default)]
    pub packages: u64,
    /// Total package versions.
    #[serde(default)]
    pub version: u64,
}
