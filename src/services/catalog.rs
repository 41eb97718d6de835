use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::error::RecordFault;
use crate::models::{Course, FlattenedSearchRecord};
use crate::services::normalizer;
use crate::services::subscription::Subscription;

/// Everything the home and search screens derive from one `courses`
/// snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub classes: Vec<FlattenedSearchRecord>,
    pub faults: Vec<RecordFault>,
}

impl Catalog {
    pub fn from_snapshot(value: &Value) -> Self {
        let tree = match normalizer::parse_tree(value) {
            Ok(tree) => tree,
            Err(e) => {
                warn!("Discarding courses snapshot: {}", e);
                return Self::default();
            }
        };

        Self {
            courses: normalizer::to_course_summary_list(&tree),
            classes: normalizer::to_flattened_class_list(&tree),
            faults: tree.faults,
        }
    }
}

/// Rebuilds the shared catalog on every snapshot the subscription delivers.
pub struct CatalogFeed {
    subscription: Subscription,
    catalog: watch::Sender<Arc<Catalog>>,
}

impl CatalogFeed {
    pub fn new(subscription: Subscription, catalog: watch::Sender<Arc<Catalog>>) -> Self {
        Self { subscription, catalog }
    }

    /// Runs until the subscription ends or every catalog reader is gone.
    pub async fn run(mut self) {
        info!("Catalog feed started on {}", self.subscription.path());

        while let Some(snapshot) = self.subscription.next().await {
            let catalog = Catalog::from_snapshot(&snapshot);
            info!(
                "Catalog rebuilt - {} courses, {} classes, {} faults",
                catalog.courses.len(),
                catalog.classes.len(),
                catalog.faults.len()
            );

            if self.catalog.send(Arc::new(catalog)).is_err() {
                break;
            }
        }

        info!("Catalog feed stopped");
    }
}
