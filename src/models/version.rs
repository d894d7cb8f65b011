use crate::schema::versions;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

// Version row - metadata is the raw manifest JSON exactly as stored
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = versions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PackageVersion {
    pub package_name: String,
    pub version: String,
    pub metadata: Option<String>,
    pub tarball_path: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = versions)]
pub struct NewPackageVersion {
    pub package_name: String,
    pub version: String,
    pub metadata: Option<String>,
    pub tarball_path: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl NewPackageVersion {
    pub fn new(package_name: String, version: String) -> Self {
        Self {
            package_name,
            version,
            metadata: None,
            tarball_path: None,
            created_at: Some(chrono::Utc::now().naive_utc()),
        }
    }

    /// Stores the manifest serialized as-is; no validation happens on write.
    pub fn with_metadata(mut self, manifest: &serde_json::Value) -> Self {
        self.metadata = Some(manifest.to_string());
        self
    }

    pub fn with_raw_metadata(mut self, raw: impl Into<String>) -> Self {
        self.metadata = Some(raw.into());
        self
    }

    pub fn with_tarball_path(mut self, path: impl Into<String>) -> Self {
        self.tarball_path = Some(path.into());
        self
    }
}

/// Per-package version count, as returned by the grouped count query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCount {
    pub package_name: String,
    pub count: i64,
}
