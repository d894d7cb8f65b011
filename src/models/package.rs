use crate::schema::packages;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

// Package row - one per published package name, scope included
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = packages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Package {
    pub name: String,
    pub description: Option<String>,
    pub latest_version: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = packages)]
pub struct NewPackage {
    pub name: String,
    pub description: Option<String>,
    pub latest_version: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = packages)]
pub struct UpdatePackage {
    pub description: Option<String>,
    pub latest_version: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

impl NewPackage {
    pub fn new(name: String, description: Option<String>) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            name,
            description,
            latest_version: None,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn with_latest_version(mut self, version: impl Into<String>) -> Self {
        self.latest_version = Some(version.into());
        self
    }
}
