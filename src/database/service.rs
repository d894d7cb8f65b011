use super::connection::{DbPool, create_pool};
use super::dist_tags::DistTagOperations;
use super::packages::PackageOperations;
use super::stats::StatsOperations;
use super::store::{MetadataStore, StoreResult};
use super::versions::VersionOperations;
use crate::models::*;

/// Main database service that provides a unified interface to all database operations
#[derive(Debug)]
pub struct DatabaseService {
    pub pool: DbPool,
}

impl DatabaseService {
    /// Creates a new DatabaseService with an initialized connection pool
    pub fn new(database_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = create_pool(database_url)?;
        Ok(Self { pool })
    }

    // Write side. Not reachable over HTTP.
    pub fn create_package(&self, new_package: &NewPackage) -> StoreResult<Package> {
        PackageOperations::new(&self.pool).create_package(new_package)
    }

    pub fn update_package(&self, name: &str, changes: UpdatePackage) -> StoreResult<Package> {
        PackageOperations::new(&self.pool).update_package(name, changes)
    }

    pub fn delete_package(&self, name: &str) -> StoreResult<usize> {
        PackageOperations::new(&self.pool).delete_package(name)
    }

    pub fn insert_version(&self, new_version: &NewPackageVersion) -> StoreResult<PackageVersion> {
        VersionOperations::new(&self.pool).insert_version(new_version)
    }

    pub fn set_dist_tag(&self, package_name: &str, tag: &str, version: &str) -> StoreResult<DistTag> {
        DistTagOperations::new(&self.pool).set_dist_tag(package_name, tag, version)
    }

    pub fn delete_dist_tag(&self, package_name: &str, tag: &str) -> StoreResult<usize> {
        DistTagOperations::new(&self.pool).delete_dist_tag(package_name, tag)
    }

    pub fn increment_build_count(&self, package_name: &str) -> StoreResult<i64> {
        StatsOperations::new(&self.pool).increment_build_count(package_name)
    }
}

impl MetadataStore for DatabaseService {
    fn select_all_packages(&self) -> StoreResult<Vec<Package>> {
        PackageOperations::new(&self.pool).select_all()
    }

    fn select_all_stats(&self) -> StoreResult<Vec<PackageStats>> {
        StatsOperations::new(&self.pool).select_all()
    }

    fn select_version_counts_by_package(&self) -> StoreResult<Vec<VersionCount>> {
        VersionOperations::new(&self.pool).counts_by_package()
    }

    fn select_all_dist_tags(&self) -> StoreResult<Vec<DistTag>> {
        DistTagOperations::new(&self.pool).select_all()
    }

    fn select_package_by_name(&self, name: &str) -> StoreResult<Option<Package>> {
        PackageOperations::new(&self.pool).select_by_name(name)
    }

    fn select_versions_by_package(&self, name: &str) -> StoreResult<Vec<PackageVersion>> {
        VersionOperations::new(&self.pool).select_by_package(name)
    }

    fn select_dist_tags_by_package(&self, name: &str) -> StoreResult<Vec<DistTag>> {
        DistTagOperations::new(&self.pool).select_by_package(name)
    }

    fn select_stats_by_package(&self, name: &str) -> StoreResult<Option<i64>> {
        StatsOperations::new(&self.pool).select_by_package(name)
    }

    fn count_packages(&self) -> StoreResult<i64> {
        PackageOperations::new(&self.pool).count()
    }

    fn count_versions(&self) -> StoreResult<i64> {
        VersionOperations::new(&self.pool).count()
    }

    fn count_dist_tags(&self) -> StoreResult<i64> {
        DistTagOperations::new(&self.pool).count()
    }

    fn total_builds(&self) -> StoreResult<i64> {
        StatsOperations::new(&self.pool).total_builds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_database() -> (DatabaseService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("store.db");
        let database = DatabaseService::new(&db_path.display().to_string())
            .expect("Failed to initialize database");
        (database, temp_dir)
    }

    #[test]
    fn test_empty_store_counts_are_zero() {
        let (db, _dir) = test_database();

        assert_eq!(db.count_packages().unwrap(), 0);
        assert_eq!(db.count_versions().unwrap(), 0);
        assert_eq!(db.count_dist_tags().unwrap(), 0);
        assert_eq!(db.total_builds().unwrap(), 0);
        assert!(db.select_version_counts_by_package().unwrap().is_empty());
    }

    #[test]
    fn test_package_lookup_is_exact() {
        let (db, _dir) = test_database();
        db.create_package(&NewPackage::new("@datakit/core".into(), None))
            .unwrap();

        assert!(db.select_package_by_name("@datakit/core").unwrap().is_some());
        assert!(db.select_package_by_name("@DataKit/core").unwrap().is_none());
        assert!(db.select_package_by_name("core").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_package_is_rejected() {
        let (db, _dir) = test_database();
        db.create_package(&NewPackage::new("left-pad".into(), None))
            .unwrap();

        assert!(db
            .create_package(&NewPackage::new("left-pad".into(), None))
            .is_err());
    }

    #[test]
    fn test_version_counts_group_by_package() {
        let (db, _dir) = test_database();
        db.create_package(&NewPackage::new("a".into(), None)).unwrap();
        db.create_package(&NewPackage::new("b".into(), None)).unwrap();
        for v in ["1.0.0", "1.1.0"] {
            db.insert_version(&NewPackageVersion::new("a".into(), v.into()))
                .unwrap();
        }

        let counts = db.select_version_counts_by_package().unwrap();
        assert_eq!(
            counts,
            vec![VersionCount {
                package_name: "a".into(),
                count: 2
            }]
        );
        assert_eq!(db.count_versions().unwrap(), 2);
    }

    #[test]
    fn test_version_requires_existing_package() {
        let (db, _dir) = test_database();

        let orphan = NewPackageVersion::new("ghost".into(), "1.0.0".into());
        assert!(db.insert_version(&orphan).is_err());
    }

    #[test]
    fn test_dist_tag_upsert_replaces_target() {
        let (db, _dir) = test_database();
        db.create_package(&NewPackage::new("a".into(), None)).unwrap();

        db.set_dist_tag("a", "latest", "1.0.0").unwrap();
        db.set_dist_tag("a", "latest", "2.0.0").unwrap();
        db.set_dist_tag("a", "beta", "2.0.0").unwrap();

        let tags = db.select_dist_tags_by_package("a").unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&DistTag::new("a", "latest", "2.0.0")));

        assert_eq!(db.delete_dist_tag("a", "beta").unwrap(), 1);
        assert_eq!(db.count_dist_tags().unwrap(), 1);
    }

    #[test]
    fn test_build_counter_increments() {
        let (db, _dir) = test_database();
        db.create_package(&NewPackage::new("a".into(), None)).unwrap();
        db.create_package(&NewPackage::new("b".into(), None)).unwrap();

        assert_eq!(db.select_stats_by_package("a").unwrap(), None);
        assert_eq!(db.increment_build_count("a").unwrap(), 1);
        assert_eq!(db.increment_build_count("a").unwrap(), 2);
        assert_eq!(db.increment_build_count("b").unwrap(), 1);

        assert_eq!(db.select_stats_by_package("a").unwrap(), Some(2));
        assert_eq!(db.total_builds().unwrap(), 3);
    }

    #[test]
    fn test_latest_version_is_stored_as_given() {
        let (db, _dir) = test_database();
        db.create_package(&NewPackage::new("a".into(), None)).unwrap();

        let updated = db
            .update_package(
                "a",
                UpdatePackage {
                    latest_version: Some("9.9.9".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.latest_version.as_deref(), Some("9.9.9"));
    }

    #[test]
    fn test_delete_package_cascades() {
        let (db, _dir) = test_database();
        db.create_package(&NewPackage::new("a".into(), None)).unwrap();
        db.insert_version(&NewPackageVersion::new("a".into(), "1.0.0".into()))
            .unwrap();
        db.set_dist_tag("a", "latest", "1.0.0").unwrap();
        db.increment_build_count("a").unwrap();

        assert_eq!(db.delete_package("a").unwrap(), 1);

        assert_eq!(db.count_versions().unwrap(), 0);
        assert_eq!(db.count_dist_tags().unwrap(), 0);
        assert_eq!(db.total_builds().unwrap(), 0);
    }
}
