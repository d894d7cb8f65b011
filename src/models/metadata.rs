//! Loosely-typed manifest document stored per version.
//!
//! The manifest schema belongs to whoever published the version, so the
//! document is kept as an ordered JSON object. Only a handful of well-known
//! fields get typed accessors; everything else is reachable through
//! [`VersionMetadata::get`].

use rocket::serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug)]
pub enum MetadataError {
    InvalidJson(String),
    NotAnObject(&'static str),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::InvalidJson(msg) => write!(f, "invalid metadata JSON: {msg}"),
            MetadataError::NotAnObject(kind) => {
                write!(f, "metadata must be a JSON object, found {kind}")
            }
        }
    }
}

impl std::error::Error for MetadataError {}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct VersionMetadata(Map<String, Value>);

impl VersionMetadata {
    /// Parses a stored blob. `None`, empty and `null` all mean "no metadata".
    pub fn parse(raw: Option<&str>) -> Result<Self, MetadataError> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(raw) => raw,
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(Value::Null) => Ok(Self::default()),
            Ok(Value::Array(_)) => Err(MetadataError::NotAnObject("array")),
            Ok(Value::String(_)) => Err(MetadataError::NotAnObject("string")),
            Ok(Value::Number(_)) => Err(MetadataError::NotAnObject("number")),
            Ok(Value::Bool(_)) => Err(MetadataError::NotAnObject("boolean")),
            Err(e) => Err(MetadataError::InvalidJson(e.to_string())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    // Non-string values inside a dependency map are skipped, not stringified
    fn string_map(&self, key: &str) -> Vec<(String, String)> {
        self.0
            .get(key)
            .and_then(Value::as_object)
            .map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Reads a field that may be either a URL string or an object with `url`.
    fn url_field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(url) => Some(url.clone()),
            Value::Object(obj) => obj.get("url").and_then(Value::as_str).map(str::to_string),
            _ => None,
        }
    }

    pub fn main(&self) -> Option<&str> {
        self.str_field("main")
    }

    pub fn types(&self) -> Option<&str> {
        self.str_field("types")
    }

    pub fn license(&self) -> Option<&str> {
        self.str_field("license")
    }

    pub fn homepage(&self) -> Option<&str> {
        self.str_field("homepage")
    }

    pub fn keywords(&self) -> Vec<String> {
        self.string_list("keywords")
    }

    pub fn files(&self) -> Vec<String> {
        self.string_list("files")
    }

    pub fn dependencies(&self) -> Vec<(String, String)> {
        self.string_map("dependencies")
    }

    pub fn dev_dependencies(&self) -> Vec<(String, String)> {
        self.string_map("devDependencies")
    }

    pub fn peer_dependencies(&self) -> Vec<(String, String)> {
        self.string_map("peerDependencies")
    }

    pub fn engines(&self) -> Vec<(String, String)> {
        self.string_map("engines")
    }

    /// Repository URL made browser-friendly (`git+` prefix, `.git` suffix and
    /// SSH host forms are rewritten).
    pub fn repository_url(&self) -> Option<String> {
        self.url_field("repository")
            .map(|url| clean_repository_url(&url))
    }

    pub fn bugs_url(&self) -> Option<String> {
        self.url_field("bugs")
    }
}

impl From<Map<String, Value>> for VersionMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn clean_repository_url(url: &str) -> String {
    let mut cleaned = url.strip_prefix("git+").unwrap_or(url);
    cleaned = cleaned.strip_suffix(".git").unwrap_or(cleaned);

    for (ssh, https) in [
        ("git@github.com:", "https://github.com/"),
        ("git@gitlab.com:", "https://gitlab.com/"),
        ("git@bitbucket.org:", "https://bitbucket.org/"),
    ] {
        if let Some(path) = cleaned.strip_prefix(ssh) {
            return format!("{https}{path}");
        }
    }

    cleaned.to_string()
}
