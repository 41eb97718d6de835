use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;
use crate::firebase::FirebaseConfig;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub enum SourceConfig {
    Firebase(FirebaseConfig),
    SnapshotFile(PathBuf),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub poll_interval: Duration,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads the process environment after loading `.env`, if present.
    pub fn new_from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let source = match (lookup("FIREBASE_DATABASE_URL"), lookup("SNAPSHOT_FILE")) {
            (Some(database_url), _) if !database_url.is_empty() => {
                SourceConfig::Firebase(FirebaseConfig {
                    database_url,
                    request_timeout: Duration::from_secs(10),
                })
            }
            (_, Some(path)) if !path.is_empty() => SourceConfig::SnapshotFile(PathBuf::from(path)),
            _ => {
                return Err(AppError::Config(
                    "set FIREBASE_DATABASE_URL or SNAPSHOT_FILE".to_string(),
                ));
            }
        };

        let poll_interval_secs = match lookup("POLL_INTERVAL_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "POLL_INTERVAL_SECS must be a positive integer, got {:?}",
                        raw
                    ))
                })?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR: {}", e)))?;

        Ok(Self {
            source,
            poll_interval: Duration::from_secs(poll_interval_secs),
            bind_addr,
        })
    }
}
