use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::firebase::{DataSource, SnapshotPath};

/// Turns a pull-only data source into a push feed of whole snapshots.
/// Fetches `path` right away, then every `interval`, and publishes only
/// values that differ from the last one published.
pub struct SnapshotSubscriber {
    source: Arc<dyn DataSource>,
    path: SnapshotPath,
    interval: Duration,
}

impl SnapshotSubscriber {
    pub fn new(source: Arc<dyn DataSource>, path: SnapshotPath, interval: Duration) -> Self {
        Self {
            source,
            path,
            interval,
        }
    }

    pub fn subscribe(self) -> Subscription {
        let (tx, rx) = watch::channel(None);
        let path = self.path.clone();
        let task = tokio::spawn(self.run(tx));
        Subscription { path, rx, task }
    }

    async fn run(self, tx: watch::Sender<Option<Arc<Value>>>) {
        info!("Subscribed to {} (poll interval: {:?})", self.path, self.interval);
        let mut last: Option<Arc<Value>> = None;

        loop {
            match self.source.fetch(&self.path).await {
                Ok(value) => {
                    let changed = last.as_deref() != Some(&value);
                    if changed {
                        let snapshot = Arc::new(value);
                        last = Some(snapshot.clone());
                        if tx.send(Some(snapshot)).is_err() {
                            break;
                        }
                    }
                }
                Err(e) => {
                    // keep the last good snapshot and retry next tick
                    warn!("Fetching {} failed: {}", self.path, e);
                }
            }

            if tx.is_closed() {
                break;
            }
            tokio::time::sleep(self.interval).await;
        }

        info!("Subscription to {} closed", self.path);
    }
}

/// Handle to a live snapshot feed. Dropping it stops the feed.
pub struct Subscription {
    path: SnapshotPath,
    rx: watch::Receiver<Option<Arc<Value>>>,
    task: JoinHandle<()>,
}

impl Subscription {
    pub fn path(&self) -> &SnapshotPath {
        &self.path
    }

    /// Waits for the next full snapshot. `None` once the feed has stopped.
    pub async fn next(&mut self) -> Option<Arc<Value>> {
        self.rx.changed().await.ok()?;
        self.rx.borrow_and_update().clone()
    }

    /// The most recent snapshot, if one has arrived.
    pub fn latest(&self) -> Option<Arc<Value>> {
        self.rx.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
