use super::connection::{DbPool, checkout};
use crate::models::PackageStats;
use crate::schema::stats;
use diesel::dsl::sum;
use diesel::prelude::*;

/// Build counter operations
pub struct StatsOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> StatsOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn select_all(&self) -> Result<Vec<PackageStats>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        stats::table
            .select(PackageStats::as_select())
            .load(&mut conn)
    }

    pub fn select_by_package(
        &self,
        package_name: &str,
    ) -> Result<Option<i64>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        let count: Option<i32> = stats::table
            .filter(stats::package_name.eq(package_name))
            .select(stats::build_count)
            .first(&mut conn)
            .optional()?;

        Ok(count.map(i64::from))
    }

    /// SUM over every row; an empty table sums to 0
    pub fn total_builds(&self) -> Result<i64, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        let total: Option<i64> = stats::table
            .select(sum(stats::build_count))
            .first(&mut conn)?;

        Ok(total.unwrap_or(0))
    }

    /// Adds one build, creating the row on first use. Returns the new count.
    pub fn increment_build_count(&self, package_name: &str) -> Result<i64, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        diesel::insert_into(stats::table)
            .values(&PackageStats {
                package_name: package_name.to_string(),
                build_count: 1,
            })
            .on_conflict(stats::package_name)
            .do_update()
            .set(stats::build_count.eq(stats::build_count + 1))
            .execute(&mut conn)?;

        let count: i32 = stats::table
            .filter(stats::package_name.eq(package_name))
            .select(stats::build_count)
            .first(&mut conn)?;

        Ok(i64::from(count))
    }
}
