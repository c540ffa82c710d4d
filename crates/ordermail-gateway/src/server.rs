//! HTTP server implementation using Axum.

use axum::{Router, routing::get, routing::post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use ordermail_core::config::GatewayConfig;
use ordermail_feed::FeedInjector;

/// Shared state for the gateway server.
#[derive(Clone)]
pub struct AppState {
    /// Collection the feed pushes are scoped to.
    pub collection: String,
    /// Shared secret expected in X-Feed-Token; None disables auth.
    pub feed_token: Option<String>,
    /// Write half of the change feed.
    pub injector: FeedInjector,
    pub start_time: std::time::Instant,
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let shared = Arc::new(state);
    Router::new()
        .route("/", get(super::routes::running))
        .route("/health", get(super::routes::health_check))
        .route("/api/v1/feed/events", post(super::routes::feed_inbound))
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Start the HTTP server.
pub async fn start(config: &GatewayConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🌐 Gateway listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
