pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::services::results::{MemoryResultsStore, ResultsStore};
use crate::services::sessions::SessionRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub sessions: Arc<SessionRegistry>,
    pub results: Arc<dyn ResultsStore>,
    pub max_words_text_bytes: usize,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        max_words_text_bytes: usize,
        session_idle_timeout: Duration,
    ) -> Self {
        Self {
            db,
            sessions: Arc::new(SessionRegistry::with_idle_timeout(session_idle_timeout)),
            results: Arc::new(MemoryResultsStore::new()),
            max_words_text_bytes,
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.max_connections).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState::new(
        Arc::new(db),
        config.max_words_text_bytes,
        config.session_idle_timeout,
    );

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    let protected_routes = Router::new()
        // User routes
        .route("/api/users/me", get(routes::users::me))
        // List routes
        .route(
            "/api/lists",
            get(routes::lists::index).post(routes::lists::create),
        )
        .route(
            "/api/lists/:id",
            get(routes::lists::show)
                .put(routes::lists::update)
                .delete(routes::lists::delete),
        )
        .route("/api/lists/:id/text", get(routes::lists::text))
        .route("/api/lists/:id/results", get(routes::study::results))
        // Study routes
        .route("/api/lists/:id/study", post(routes::study::start))
        .route("/api/study/:session_id/submit", post(routes::study::submit))
        .route("/api/study/:session_id/finish", post(routes::study::finish))
        .route(
            "/api/study/:session_id",
            axum::routing::delete(routes::study::abandon),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/users/register", post(routes::users::register))
        .merge(protected_routes)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
