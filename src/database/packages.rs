use super::connection::{DbPool, checkout};
use crate::models::package::*;
use crate::schema::{packages, versions};
use diesel::prelude::*;
use log::{debug, warn};

/// Package-related database operations
pub struct PackageOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> PackageOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn select_all(&self) -> Result<Vec<Package>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        packages::table
            .select(Package::as_select())
            .load(&mut conn)
    }

    /// Exact, case-sensitive lookup; names are never normalized
    pub fn select_by_name(&self, name: &str) -> Result<Option<Package>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        packages::table
            .filter(packages::name.eq(name))
            .select(Package::as_select())
            .first(&mut conn)
            .optional()
    }

    pub fn count(&self) -> Result<i64, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;
        packages::table.count().get_result(&mut conn)
    }

    /// Inserts a new package; fails with a unique violation if the name exists
    pub fn create_package(&self, new_package: &NewPackage) -> Result<Package, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(packages::table)
            .values(new_package)
            .execute(&mut conn)?;

        debug!("Created package {}", new_package.name);

        packages::table
            .filter(packages::name.eq(&new_package.name))
            .select(Package::as_select())
            .first(&mut conn)
    }

    /// Updates description and/or latest version. `latest_version` is stored as
    /// given; a value that matches no version row is accepted with a warning.
    pub fn update_package(
        &self,
        name: &str,
        changes: UpdatePackage,
    ) -> Result<Package, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        if let Some(latest) = &changes.latest_version {
            let exists: i64 = versions::table
                .filter(versions::package_name.eq(name))
                .filter(versions::version.eq(latest))
                .count()
                .get_result(&mut conn)?;
            if exists == 0 {
                warn!("latest_version {latest} of {name} does not reference a stored version");
            }
        }

        let changes = UpdatePackage {
            updated_at: Some(chrono::Utc::now().naive_utc()),
            ..changes
        };

        diesel::update(packages::table.filter(packages::name.eq(name)))
            .set(&changes)
            .execute(&mut conn)?;

        packages::table
            .filter(packages::name.eq(name))
            .select(Package::as_select())
            .first(&mut conn)
    }

    /// Deletes the package; versions, dist tags and stats go with it
    pub fn delete_package(&self, name: &str) -> Result<usize, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        diesel::delete(packages::table.filter(packages::name.eq(name))).execute(&mut conn)
    }
}
