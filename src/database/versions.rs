use super::connection::{DbPool, checkout};
use crate::models::version::*;
use crate::schema::{packages, versions};
use diesel::dsl::count_star;
use diesel::prelude::*;
use log::debug;

/// Package version-related database operations
pub struct VersionOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> VersionOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Number of version rows per package. Packages without versions are absent.
    pub fn counts_by_package(&self) -> Result<Vec<VersionCount>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        let rows: Vec<(String, i64)> = versions::table
            .group_by(versions::package_name)
            .select((versions::package_name, count_star()))
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(package_name, count)| VersionCount {
                package_name,
                count,
            })
            .collect())
    }

    /// All versions of a package, newest first
    pub fn select_by_package(
        &self,
        package_name: &str,
    ) -> Result<Vec<PackageVersion>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        versions::table
            .filter(versions::package_name.eq(package_name))
            .order(versions::created_at.desc())
            .select(PackageVersion::as_select())
            .load(&mut conn)
    }

    pub fn count(&self) -> Result<i64, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;
        versions::table.count().get_result(&mut conn)
    }

    /// Records a published version and bumps the owning package's `updated_at`.
    /// The package row must already exist.
    pub fn insert_version(
        &self,
        new_version: &NewPackageVersion,
    ) -> Result<PackageVersion, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        conn.transaction(|conn| {
            diesel::insert_into(versions::table)
                .values(new_version)
                .execute(conn)?;

            diesel::update(packages::table.filter(packages::name.eq(&new_version.package_name)))
                .set(packages::updated_at.eq(chrono::Utc::now().naive_utc()))
                .execute(conn)?;

            debug!(
                "Stored version {} of {}",
                new_version.version, new_version.package_name
            );

            versions::table
                .filter(versions::package_name.eq(&new_version.package_name))
                .filter(versions::version.eq(&new_version.version))
                .select(PackageVersion::as_select())
                .first(conn)
        })
    }
}
