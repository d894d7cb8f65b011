use crate::schema::stats;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

// Build counter row; absent means zero builds
#[derive(Queryable, Selectable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = stats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PackageStats {
    pub package_name: String,
    pub build_count: i32,
}
