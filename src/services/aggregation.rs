use crate::database::MetadataStore;
use crate::error::ApiError;
use crate::models::{DistTagMap, PackageSummary, RegistryStats, RegistryStatus, format_timestamp};
use log::debug;
use std::collections::HashMap;

/// Registry-wide views computed from the four relations
pub struct AggregationService;

impl AggregationService {
    /// One summary per package row, in store order. Every relation is read in
    /// full before anything is assembled, so a failing read never yields a
    /// partial list.
    pub fn list_package_summaries(
        store: &dyn MetadataStore,
    ) -> Result<Vec<PackageSummary>, ApiError> {
        let packages = store.select_all_packages()?;
        let stats = store.select_all_stats()?;
        let version_counts = store.select_version_counts_by_package()?;
        let tags = store.select_all_dist_tags()?;

        let builds: HashMap<String, i64> = stats
            .into_iter()
            .map(|s| (s.package_name, i64::from(s.build_count)))
            .collect();

        let counts: HashMap<String, i64> = version_counts
            .into_iter()
            .map(|c| (c.package_name, c.count))
            .collect();

        let mut tag_maps: HashMap<String, DistTagMap> = HashMap::new();
        for tag in tags {
            tag_maps
                .entry(tag.package_name)
                .or_default()
                .insert(tag.tag, tag.version);
        }

        let summaries: Vec<PackageSummary> = packages
            .into_iter()
            .map(|pkg| PackageSummary {
                build_count: builds.get(&pkg.name).copied().unwrap_or(0),
                version_count: counts.get(&pkg.name).copied().unwrap_or(0),
                dist_tags: tag_maps.remove(&pkg.name).unwrap_or_default(),
                created_at: format_timestamp(pkg.created_at),
                updated_at: format_timestamp(pkg.updated_at),
                name: pkg.name,
                description: pkg.description,
                latest_version: pkg.latest_version,
            })
            .collect();

        debug!("Aggregated {} package summaries", summaries.len());
        Ok(summaries)
    }

    pub fn get_registry_stats(store: &dyn MetadataStore) -> Result<RegistryStats, ApiError> {
        Ok(RegistryStats {
            total_packages: store.count_packages()?,
            total_versions: store.count_versions()?,
            total_dist_tags: store.count_dist_tags()?,
            total_builds: store.total_builds()?,
        })
    }

    pub fn get_registry_status(store: &dyn MetadataStore) -> Result<RegistryStatus, ApiError> {
        let packages = store.count_packages()?;
        Ok(RegistryStatus::ready(packages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{FailingStore, MemoryStore};

    #[test]
    fn test_summary_for_every_package() {
        let store = MemoryStore::default()
            .with_package("bare")
            .with_package("full")
            .with_version("full", "1.0.0", None)
            .with_version("full", "1.1.0", None)
            .with_tag("full", "latest", "1.1.0")
            .with_tag("full", "beta", "1.1.0")
            .with_builds("full", 7);

        let summaries = AggregationService::list_package_summaries(&store).unwrap();
        assert_eq!(summaries.len(), 2);

        let bare = summaries.iter().find(|s| s.name == "bare").unwrap();
        assert_eq!(bare.version_count, 0);
        assert_eq!(bare.build_count, 0);
        assert!(bare.dist_tags.is_empty());

        let full = summaries.iter().find(|s| s.name == "full").unwrap();
        assert_eq!(full.version_count, 2);
        assert_eq!(full.build_count, 7);
        assert_eq!(full.dist_tags.len(), 2);
        assert_eq!(full.dist_tags["beta"], "1.1.0");
    }

    #[test]
    fn test_rows_for_unknown_packages_are_ignored() {
        let store = MemoryStore::default()
            .with_package("a")
            .with_tag("ghost", "latest", "1.0.0")
            .with_builds("ghost", 3);

        let summaries = AggregationService::list_package_summaries(&store).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].build_count, 0);
        assert!(summaries[0].dist_tags.is_empty());
    }

    #[test]
    fn test_duplicate_tags_last_write_wins() {
        let store = MemoryStore::default()
            .with_package("a")
            .with_tag("a", "latest", "1.0.0")
            .with_tag("a", "latest", "2.0.0");

        let summaries = AggregationService::list_package_summaries(&store).unwrap();
        assert_eq!(summaries[0].dist_tags["latest"], "2.0.0");
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::default();

        assert!(AggregationService::list_package_summaries(&store)
            .unwrap()
            .is_empty());
        assert_eq!(
            AggregationService::get_registry_stats(&store).unwrap(),
            RegistryStats::default()
        );
    }

    #[test]
    fn test_registry_stats_totals() {
        let store = MemoryStore::default()
            .with_package("a")
            .with_package("b")
            .with_version("a", "1.0.0", None)
            .with_version("b", "0.1.0", None)
            .with_version("b", "0.2.0", None)
            .with_tag("b", "latest", "0.2.0")
            .with_builds("a", 2)
            .with_builds("b", 5);

        let stats = AggregationService::get_registry_stats(&store).unwrap();
        assert_eq!(stats.total_packages, 2);
        assert_eq!(stats.total_versions, 3);
        assert_eq!(stats.total_dist_tags, 1);
        assert_eq!(stats.total_builds, 7);
    }

    #[test]
    fn test_store_failure_is_store_unavailable() {
        assert!(matches!(
            AggregationService::list_package_summaries(&FailingStore),
            Err(ApiError::StoreUnavailable(_))
        ));
        assert!(matches!(
            AggregationService::get_registry_stats(&FailingStore),
            Err(ApiError::StoreUnavailable(_))
        ));
        assert!(matches!(
            AggregationService::get_registry_status(&FailingStore),
            Err(ApiError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn test_status_reports_package_count() {
        let store = MemoryStore::default().with_package("a").with_package("b");
        let status = AggregationService::get_registry_status(&store).unwrap();
        assert!(status.is_ready());
        assert_eq!(status.packages, Some(2));
    }
}
