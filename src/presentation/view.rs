use super::install::{InstallSnippet, PackageManager, install_snippet, manifest_dependency};
use super::name::split_package_name;
use super::sort::sort_versions;
use super::time::{format_date, time_ago};
use super::urls::{latest_tarball_url, tarball_url};
use crate::models::{DistTagMap, PackageDetail, PackageSummary, VersionDetail, VersionMetadata};
use chrono::{DateTime, Utc};

pub const DEFAULT_DESCRIPTION: &str = "A DataKit private package";
pub const DEPENDENCY_PREVIEW_LIMIT: usize = 10;

/// One tile on the package listing
#[derive(Debug, Clone, PartialEq)]
pub struct PackageCard<'a> {
    pub scope: &'a str,
    pub short_name: &'a str,
    pub latest_version: &'a str,
    pub description: &'a str,
    pub versions_label: String,
    pub build_count: i64,
    pub updated: String,
}

impl<'a> PackageCard<'a> {
    pub fn new(summary: &'a PackageSummary, now: DateTime<Utc>) -> Self {
        let (scope, short_name) = split_package_name(&summary.name);
        let plural = if summary.version_count == 1 { "" } else { "s" };

        Self {
            scope,
            short_name,
            latest_version: summary
                .latest_version
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or("—"),
            description: summary
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(DEFAULT_DESCRIPTION),
            versions_label: format!("{} version{plural}", summary.version_count),
            build_count: summary.build_count,
            updated: time_ago(summary.updated_at.as_deref(), now),
        }
    }
}

/// The declared latest version, else the first served version, else "".
pub fn resolve_latest_version(detail: &PackageDetail) -> &str {
    detail
        .latest_version
        .as_deref()
        .filter(|v| !v.is_empty())
        .or_else(|| detail.versions.first().map(|v| v.version.as_str()))
        .unwrap_or_default()
}

pub fn latest_metadata(detail: &PackageDetail) -> Option<&VersionMetadata> {
    let latest = resolve_latest_version(detail);
    detail
        .versions
        .iter()
        .find(|v| v.version == latest)
        .map(|v| &v.metadata)
}

/// Tags pointing at `version`, in tag-name order
pub fn tags_for_version<'a>(tags: &'a DistTagMap, version: &str) -> Vec<&'a str> {
    tags.iter()
        .filter(|(_, target)| target.as_str() == version)
        .map(|(tag, _)| tag.as_str())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGroups {
    pub runtime: Vec<(String, String)>,
    pub dev: Vec<(String, String)>,
    pub peer: Vec<(String, String)>,
}

impl DependencyGroups {
    pub fn from_metadata(metadata: &VersionMetadata) -> Self {
        Self {
            runtime: metadata.dependencies(),
            dev: metadata.dev_dependencies(),
            peer: metadata.peer_dependencies(),
        }
    }

    pub fn has_any(&self) -> bool {
        !(self.runtime.is_empty() && self.dev.is_empty() && self.peer.is_empty())
    }

    /// First `limit` runtime dependencies and how many were left out
    pub fn preview(&self, limit: usize) -> (&[(String, String)], usize) {
        let shown = &self.runtime[..self.runtime.len().min(limit)];
        (shown, self.runtime.len() - shown.len())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageLinks {
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub bugs: Option<String>,
}

impl PackageLinks {
    pub fn from_metadata(metadata: &VersionMetadata) -> Self {
        Self {
            homepage: metadata.homepage().map(str::to_string),
            repository: metadata.repository_url(),
            bugs: metadata.bugs_url(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.homepage.is_none() && self.repository.is_none() && self.bugs.is_none()
    }
}

/// A row of the versions table
#[derive(Debug, Clone, PartialEq)]
pub struct VersionRow<'a> {
    pub version: &'a str,
    pub tags: Vec<&'a str>,
    pub published: String,
    pub dependency: String,
    pub tarball_url: String,
}

/// Everything the package page shows, derived from one detail response
#[derive(Debug, Clone)]
pub struct PackageOverview<'a> {
    pub name: &'a str,
    pub scope: &'a str,
    pub short_name: &'a str,
    pub latest_version: &'a str,
    pub latest_metadata: VersionMetadata,
    pub versions: Vec<&'a VersionDetail>,
    pub install: InstallSnippet,
    pub latest_tarball_url: String,
    pub dependencies: DependencyGroups,
    pub links: PackageLinks,
}

impl<'a> PackageOverview<'a> {
    pub fn build(detail: &'a PackageDetail, manager: PackageManager, registry_base: &str) -> Self {
        let (scope, short_name) = split_package_name(&detail.name);
        let latest_version = resolve_latest_version(detail);
        let latest_metadata = latest_metadata(detail).cloned().unwrap_or_default();

        let mut versions: Vec<&VersionDetail> = detail.versions.iter().collect();
        sort_versions(&mut versions);

        Self {
            name: &detail.name,
            scope,
            short_name,
            latest_version,
            install: install_snippet(&detail.name, latest_version, manager),
            latest_tarball_url: latest_tarball_url(registry_base, &detail.name),
            dependencies: DependencyGroups::from_metadata(&latest_metadata),
            links: PackageLinks::from_metadata(&latest_metadata),
            latest_metadata,
            versions,
        }
    }

    pub fn version_rows(&self, tags: &'a DistTagMap, registry_base: &str) -> Vec<VersionRow<'a>> {
        self.versions
            .iter()
            .map(|v| VersionRow {
                version: &v.version,
                tags: tags_for_version(tags, &v.version),
                published: format_date(v.created_at.as_deref()),
                dependency: manifest_dependency(self.name, &v.version),
                tarball_url: tarball_url(registry_base, self.name, &v.version),
            })
            .collect()
    }
}
