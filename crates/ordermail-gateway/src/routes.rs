//! Route handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use ordermail_feed::event::parse_change_payload;

use super::server::AppState;

/// GET /: static acknowledgment for the hosting platform's liveness probe.
pub async fn running() -> &'static str {
    "OrderMail is running"
}

/// GET /health: basic service health.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "status": "healthy",
        "collection": state.collection,
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /api/v1/feed/events: inbound change pushes from the upstream store.
/// Parses the payload and injects every well-formed event into the feed.
pub async fn feed_inbound(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    if let Some(expected) = &state.feed_token {
        let supplied = headers
            .get("X-Feed-Token")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if supplied != expected {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "ok": false,
                    "error": "Unauthorized — invalid or missing feed token"
                })),
            );
        }
    }

    let events = parse_change_payload(&payload);
    let mut accepted = 0usize;
    for event in events {
        if state.injector.push(event) {
            accepted += 1;
        } else {
            tracing::error!("❌ Feed subscription is gone; dropping event");
        }
    }

    tracing::debug!("📥 Feed push accepted {accepted} event(s)");
    (
        StatusCode::OK,
        Json(serde_json::json!({"ok": true, "accepted": accepted})),
    )
}
