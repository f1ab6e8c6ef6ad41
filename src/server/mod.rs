pub mod handlers;
mod types;

pub use types::{ErrorResponse, IndexResponse};

use crate::{
    classifier::LexiconClassifier, config::Config, pipeline::ClassificationPipeline,
    preprocessor::Preprocessor, store::{ResultStore, SqliteResultStore}, Result,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Build the shared components before binding; any failure here aborts
    // startup and the process never accepts traffic.
    let preprocessor = Arc::new(Preprocessor::new(config.preprocessing.clone())?);
    let classifier = Arc::new(LexiconClassifier::load(&config.model.dir)?);

    let db_path = std::env::var("RESULTS_DB_PATH")
        .unwrap_or_else(|_| config.server.database_path.clone());
    let store = Arc::new(SqliteResultStore::new(&db_path).await?);
    store.ensure_schema().await?;

    let app_state = handlers::AppState {
        pipeline: Arc::new(ClassificationPipeline::new(preprocessor, classifier, store)),
    };

    let app = router(app_state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/results", get(handlers::read_results))
        .route("/classify/:message", post(handlers::classify))
        .with_state(state)
}
