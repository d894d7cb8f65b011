use super::connection::{DbPool, checkout};
use crate::models::DistTag;
use crate::schema::{dist_tags, versions};
use diesel::prelude::*;
use log::warn;

/// Dist-tag database operations. A tag may point at a version string that has
/// no row in `versions`; this is tolerated, not enforced.
pub struct DistTagOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> DistTagOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn select_all(&self) -> Result<Vec<DistTag>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        dist_tags::table
            .order((dist_tags::package_name, dist_tags::tag))
            .select(DistTag::as_select())
            .load(&mut conn)
    }

    pub fn select_by_package(
        &self,
        package_name: &str,
    ) -> Result<Vec<DistTag>, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        dist_tags::table
            .filter(dist_tags::package_name.eq(package_name))
            .order(dist_tags::tag)
            .select(DistTag::as_select())
            .load(&mut conn)
    }

    pub fn count(&self) -> Result<i64, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;
        dist_tags::table.count().get_result(&mut conn)
    }

    /// Points `tag` at `version`, replacing any previous target
    pub fn set_dist_tag(
        &self,
        package_name: &str,
        tag: &str,
        version: &str,
    ) -> Result<DistTag, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        let known: i64 = versions::table
            .filter(versions::package_name.eq(package_name))
            .filter(versions::version.eq(version))
            .count()
            .get_result(&mut conn)?;
        if known == 0 {
            warn!("dist tag {tag} of {package_name} points at unknown version {version}");
        }

        let row = DistTag::new(package_name, tag, version);
        diesel::insert_into(dist_tags::table)
            .values(&row)
            .on_conflict((dist_tags::package_name, dist_tags::tag))
            .do_update()
            .set(dist_tags::version.eq(version))
            .execute(&mut conn)?;

        Ok(row)
    }

    pub fn delete_dist_tag(
        &self,
        package_name: &str,
        tag: &str,
    ) -> Result<usize, diesel::result::Error> {
        let mut conn = checkout(self.pool)?;

        diesel::delete(dist_tags::table)
            .filter(dist_tags::package_name.eq(package_name))
            .filter(dist_tags::tag.eq(tag))
            .execute(&mut conn)
    }
}
