use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yoga_browser::api::router;
use yoga_browser::config::{AppConfig, SourceConfig};
use yoga_browser::firebase::{DataSource, FirebaseHttpClient, SnapshotPath, StaticDataSource};
use yoga_browser::services::{Catalog, CatalogFeed, SnapshotSubscriber};
use yoga_browser::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "yoga_browser=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let source: Arc<dyn DataSource> = match &config.source {
        SourceConfig::Firebase(firebase) => {
            info!("reading courses from {}", firebase.database_url);
            Arc::new(FirebaseHttpClient::new(firebase.clone())?)
        }
        SourceConfig::SnapshotFile(path) => {
            info!("reading courses from fixture {}", path.display());
            Arc::new(StaticDataSource::from_file(path)?)
        }
    };

    let (catalog_tx, catalog_rx) = watch::channel(Arc::new(Catalog::default()));
    let subscriber =
        SnapshotSubscriber::new(source.clone(), SnapshotPath::Courses, config.poll_interval);
    let subscription = subscriber.subscribe();
    tokio::spawn(CatalogFeed::new(subscription, catalog_tx).run());

    let state = AppState {
        source,
        catalog: catalog_rx,
    };

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
