//! In-memory stores for exercising the services without SQLite.

use crate::database::{MetadataStore, StoreResult};
use crate::models::*;
use std::collections::BTreeMap;

#[derive(Default)]
pub struct MemoryStore {
    packages: Vec<Package>,
    versions: Vec<PackageVersion>,
    tags: Vec<DistTag>,
    stats: Vec<PackageStats>,
}

impl MemoryStore {
    pub fn with_package(mut self, name: &str) -> Self {
        self.packages.push(Package {
            name: name.to_string(),
            description: None,
            latest_version: None,
            created_at: None,
            updated_at: None,
        });
        self
    }

    pub fn with_version(mut self, package: &str, version: &str, metadata: Option<&str>) -> Self {
        self.versions.push(PackageVersion {
            package_name: package.to_string(),
            version: version.to_string(),
            metadata: metadata.map(str::to_string),
            tarball_path: Some(format!("{package}/{version}.tgz")),
            created_at: None,
        });
        self
    }

    pub fn with_tag(mut self, package: &str, tag: &str, version: &str) -> Self {
        self.tags.push(DistTag::new(package, tag, version));
        self
    }

    pub fn with_builds(mut self, package: &str, build_count: i32) -> Self {
        self.stats.push(PackageStats {
            package_name: package.to_string(),
            build_count,
        });
        self
    }
}

impl MetadataStore for MemoryStore {
    fn select_all_packages(&self) -> StoreResult<Vec<Package>> {
        Ok(self.packages.clone())
    }

    fn select_all_stats(&self) -> StoreResult<Vec<PackageStats>> {
        Ok(self.stats.clone())
    }

    fn select_version_counts_by_package(&self) -> StoreResult<Vec<VersionCount>> {
        let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
        for v in &self.versions {
            *counts.entry(v.package_name.as_str()).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(name, count)| VersionCount {
                package_name: name.to_string(),
                count,
            })
            .collect())
    }

    fn select_all_dist_tags(&self) -> StoreResult<Vec<DistTag>> {
        Ok(self.tags.clone())
    }

    fn select_package_by_name(&self, name: &str) -> StoreResult<Option<Package>> {
        Ok(self.packages.iter().find(|p| p.name == name).cloned())
    }

    fn select_versions_by_package(&self, name: &str) -> StoreResult<Vec<PackageVersion>> {
        Ok(self
            .versions
            .iter()
            .filter(|v| v.package_name == name)
            .cloned()
            .collect())
    }

    fn select_dist_tags_by_package(&self, name: &str) -> StoreResult<Vec<DistTag>> {
        Ok(self
            .tags
            .iter()
            .filter(|t| t.package_name == name)
            .cloned()
            .collect())
    }

    fn select_stats_by_package(&self, name: &str) -> StoreResult<Option<i64>> {
        Ok(self
            .stats
            .iter()
            .find(|s| s.package_name == name)
            .map(|s| i64::from(s.build_count)))
    }

    fn count_packages(&self) -> StoreResult<i64> {
        Ok(self.packages.len() as i64)
    }

    fn count_versions(&self) -> StoreResult<i64> {
        Ok(self.versions.len() as i64)
    }

    fn count_dist_tags(&self) -> StoreResult<i64> {
        Ok(self.tags.len() as i64)
    }

    fn total_builds(&self) -> StoreResult<i64> {
        Ok(self.stats.iter().map(|s| i64::from(s.build_count)).sum())
    }
}

/// Store whose every call fails as if the database were unreachable
pub struct FailingStore;

fn unreachable_store<T>() -> StoreResult<T> {
    Err(diesel::result::Error::DatabaseError(
        diesel::result::DatabaseErrorKind::UnableToSendCommand,
        Box::new("connection refused".to_string()),
    ))
}

impl MetadataStore for FailingStore {
    fn select_all_packages(&self) -> StoreResult<Vec<Package>> {
        unreachable_store()
    }

    fn select_all_stats(&self) -> StoreResult<Vec<PackageStats>> {
        unreachable_store()
    }

    fn select_version_counts_by_package(&self) -> StoreResult<Vec<VersionCount>> {
        unreachable_store()
    }

    fn select_all_dist_tags(&self) -> StoreResult<Vec<DistTag>> {
        unreachable_store()
    }

    fn select_package_by_name(&self, _name: &str) -> StoreResult<Option<Package>> {
        unreachable_store()
    }

    fn select_versions_by_package(&self, _name: &str) -> StoreResult<Vec<PackageVersion>> {
        unreachable_store()
    }

    fn select_dist_tags_by_package(&self, _name: &str) -> StoreResult<Vec<DistTag>> {
        unreachable_store()
    }

    fn select_stats_by_package(&self, _name: &str) -> StoreResult<Option<i64>> {
        unreachable_store()
    }

    fn count_packages(&self) -> StoreResult<i64> {
        unreachable_store()
    }

    fn count_versions(&self) -> StoreResult<i64> {
        unreachable_store()
    }

    fn count_dist_tags(&self) -> StoreResult<i64> {
        unreachable_store()
    }

    fn total_builds(&self) -> StoreResult<i64> {
        unreachable_store()
    }
}
