// API response shapes. Field names are part of the wire contract with the UI.
use super::metadata::VersionMetadata;
use chrono::{NaiveDateTime, SecondsFormat};
use rocket::serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type DistTagMap = BTreeMap<String, String>;

/// Renders a stored UTC timestamp the way every endpoint exposes it.
pub fn format_timestamp(ts: Option<NaiveDateTime>) -> Option<String> {
    ts.map(|ts| ts.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PackageSummary {
    pub name: String,
    pub description: Option<String>,
    pub latest_version: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub build_count: i64,
    pub version_count: i64,
    pub dist_tags: DistTagMap,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VersionDetail {
    pub version: String,
    pub metadata: VersionMetadata,
    pub tarball_path: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PackageDetail {
    pub name: String,
    pub description: Option<String>,
    pub latest_version: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub build_count: i64,
    pub dist_tags: DistTagMap,
    pub versions: Vec<VersionDetail>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub total_packages: i64,
    pub total_versions: i64,
    pub total_dist_tags: i64,
    pub total_builds: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegistryStatus {
    pub status: String,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RegistryStatus {
    pub fn ready(packages: i64) -> Self {
        Self {
            status: "ONLINE".to_string(),
            database: "READY".to_string(),
            packages: Some(packages),
            message: None,
        }
    }

    pub fn database_error(message: String) -> Self {
        Self {
            status: "ONLINE".to_string(),
            database: "ERROR".to_string(),
            packages: None,
            message: Some(message),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ONLINE" && self.database == "READY"
    }
}
