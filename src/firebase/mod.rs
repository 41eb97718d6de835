pub mod dto;

use std::fmt;
use std::path::Path;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::AppError;

/// A node the app reads from the realtime database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotPath {
    Courses,
    Course(String),
}

impl SnapshotPath {
    fn segments(&self) -> Vec<&str> {
        match self {
            SnapshotPath::Courses => vec!["courses"],
            SnapshotPath::Course(id) => vec!["courses", id.as_str()],
        }
    }
}

impl fmt::Display for SnapshotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}

#[derive(Clone, Debug)]
pub struct FirebaseConfig {
    pub database_url: String,
    pub request_timeout: Duration,
}

/// Read-only access to the database. Every fetch returns the whole current
/// value at `path`; a missing node is `Value::Null`.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, path: &SnapshotPath) -> Result<Value, AppError>;
}

/// Realtime Database REST client (`GET {url}/{path}.json`).
pub struct FirebaseHttpClient {
    client: Client,
    base_url: Url,
}

impl FirebaseHttpClient {
    pub fn new(config: FirebaseConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        let base_url = Url::parse(&config.database_url)
            .map_err(|e| AppError::Config(format!("FIREBASE_DATABASE_URL: {}", e)))?;
        Ok(Self { client, base_url })
    }

    /// Each path segment is percent-encoded, so an id never leaves its node.
    fn url_for(&self, path: &SnapshotPath) -> Result<Url, AppError> {
        let segments = path.segments();
        let Some((last, parents)) = segments.split_last() else {
            return Err(AppError::DataSource(format!("empty path {:?}", path)));
        };

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(parents)
            .push(&format!("{}.json", last));
        Ok(url)
    }
}

#[async_trait]
impl DataSource for FirebaseHttpClient {
    async fn fetch(&self, path: &SnapshotPath) -> Result<Value, AppError> {
        let url = self.url_for(path)?;

        let response = self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::DataSource(format!("GET {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::DataSource(format!("Firebase error {}: {}", status, body)));
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| AppError::DataSource(format!("Failed to read body of {}: {}", url, e)))?;

        serde_json::from_str::<Value>(&body_text).map_err(|e| {
            tracing::error!("Failed to parse: {}", e);
            AppError::DataSource(format!("Failed to parse Firebase response: {}", e))
        })
    }
}

/// An in-memory database root, for fixtures and tests. Replacing the root
/// stands in for a remote write.
pub struct StaticDataSource {
    root: RwLock<Value>,
}

impl StaticDataSource {
    pub fn new(root: Value) -> Self {
        Self { root: RwLock::new(root) }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Ok(Self::new(serde_json::from_str(&text)?))
    }

    pub fn set_root(&self, root: Value) -> Result<(), AppError> {
        let mut guard = self.root
            .write()
            .map_err(|_| AppError::DataSource("snapshot lock poisoned".to_string()))?;
        *guard = root;
        Ok(())
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch(&self, path: &SnapshotPath) -> Result<Value, AppError> {
        let guard = self.root
            .read()
            .map_err(|_| AppError::DataSource("snapshot lock poisoned".to_string()))?;

        let pointer: String = path
            .segments()
            .iter()
            .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
            .collect();

        Ok(guard.pointer(&pointer).cloned().unwrap_or(Value::Null))
    }
}
