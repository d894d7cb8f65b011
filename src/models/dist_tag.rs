use crate::schema::dist_tags;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = dist_tags)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DistTag {
    pub package_name: String,
    pub tag: String,
    pub version: String,
}

impl DistTag {
    pub fn new(package_name: &str, tag: &str, version: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            tag: tag.to_string(),
            version: version.to_string(),
        }
    }
}
