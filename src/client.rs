//! Typed client for the browsing API, used by anything that renders the
//! catalog outside this process.

use crate::models::{PackageDetail, PackageSummary, RegistryStats, RegistryStatus};
use crate::presentation::RegistryHealth;
use log::{debug, warn};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    /// The server could not be reached or its body could not be decoded
    Transport(reqwest::Error),
    NotFound(String),
    Status(StatusCode),
    InvalidUrl(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(err) => write!(f, "Request failed: {err}"),
            ClientError::NotFound(what) => write!(f, "{what} not found"),
            ClientError::Status(status) => write!(f, "Unexpected response status {status}"),
            ClientError::InvalidUrl(url) => write!(f, "Invalid API base URL '{url}'"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base: Url,
}

impl RegistryClient {
    /// `base` is the origin the dashboard is served from, e.g.
    /// `http://127.0.0.1:8000`.
    pub fn new(base: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(http: reqwest::Client, base: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base).map_err(|_| ClientError::InvalidUrl(base.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base.to_string()));
        }
        Ok(Self { http, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api");
            // Each segment is percent-encoded, so a scoped name travels as
            // a single `@scope%2Fname` segment.
            path.extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, ClientError> {
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<T>().await?),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(what.to_string())),
            status => {
                warn!("{what} request answered with {status}");
                Err(ClientError::Status(status))
            }
        }
    }

    /// Reads the status body even when the server answers 500, since a
    /// broken database still reports itself through the same shape.
    pub async fn status(&self) -> Result<RegistryStatus, ClientError> {
        let url = self.endpoint(&["status"]);
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::INTERNAL_SERVER_ERROR {
            Ok(response.json::<RegistryStatus>().await?)
        } else {
            Err(ClientError::Status(status))
        }
    }

    pub async fn health(&self) -> RegistryHealth {
        let status = self.status().await;
        if let Err(err) = &status {
            warn!("Registry status check failed: {err}");
        }
        RegistryHealth::from_status(status)
    }

    pub async fn stats(&self) -> Result<RegistryStats, ClientError> {
        self.get_json(self.endpoint(&["stats"]), "Stats").await
    }

    pub async fn packages(&self) -> Result<Vec<PackageSummary>, ClientError> {
        self.get_json(self.endpoint(&["packages"]), "Package list")
            .await
    }

    pub async fn package(&self, name: &str) -> Result<PackageDetail, ClientError> {
        self.get_json(self.endpoint(&["packages", name]), &format!("Package '{name}'"))
            .await
    }
}
