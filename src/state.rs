use std::sync::Arc;

use tokio::sync::watch;

use crate::firebase::DataSource;
use crate::services::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DataSource>,
    pub catalog: watch::Receiver<Arc<Catalog>>,
}

impl AppState {
    /// The catalog built from the latest `courses` snapshot.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.borrow().clone()
    }
}
