//! Read contract the aggregation layer expects from the metadata store.
//!
//! [`DatabaseService`](super::DatabaseService) is the production
//! implementation; tests substitute in-memory and failing stores.

use crate::models::{DistTag, Package, PackageStats, PackageVersion, VersionCount};

pub type StoreResult<T> = Result<T, diesel::result::Error>;

pub trait MetadataStore: Send + Sync {
    fn select_all_packages(&self) -> StoreResult<Vec<Package>>;

    fn select_all_stats(&self) -> StoreResult<Vec<PackageStats>>;

    fn select_version_counts_by_package(&self) -> StoreResult<Vec<VersionCount>>;

    fn select_all_dist_tags(&self) -> StoreResult<Vec<DistTag>>;

    fn select_package_by_name(&self, name: &str) -> StoreResult<Option<Package>>;

    fn select_versions_by_package(&self, name: &str) -> StoreResult<Vec<PackageVersion>>;

    fn select_dist_tags_by_package(&self, name: &str) -> StoreResult<Vec<DistTag>>;

    /// Build count for one package, `None` when no stats row exists
    fn select_stats_by_package(&self, name: &str) -> StoreResult<Option<i64>>;

    fn count_packages(&self) -> StoreResult<i64>;

    fn count_versions(&self) -> StoreResult<i64>;

    fn count_dist_tags(&self) -> StoreResult<i64>;

    /// Sum of all build counters, 0 when there are none
    fn total_builds(&self) -> StoreResult<i64>;
}
