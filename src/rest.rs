// Copyright 2026 Tokenpress Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP REST API.
//!
//! One read endpoint plus a health probe. CORS is open to any origin so
//! the web frontend can call straight from the browser.

use crate::news::{NewsScraper, SOURCE_NAME};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for the REST handlers.
pub struct AppState {
    pub scraper: NewsScraper,
}

/// Build the axum Router with all REST endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/news", get(get_news))
        .layer(cors)
        .with_state(state)
}

/// Start the REST API server on the given port.
///
/// Binds all interfaces — the service runs containerized and must be
/// reachable from outside.
pub async fn start(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("news API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Handlers ────────────────────────────────────────────────────

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(serde::Deserialize, Default)]
struct NewsParams {
    token: Option<String>,
}

/// `GET /news?token=<name>` — headlines for one token.
///
/// 400 when the token parameter is absent or empty, 500 when the scrape
/// task dies unexpectedly, otherwise 200 with possibly-empty headlines.
async fn get_news(
    Query(params): Query<NewsParams>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let token = match params.token {
        Some(t) if !t.is_empty() => t,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing 'token' parameter" })),
            );
        }
    };

    // Run the scrape on its own task so a panic surfaces as a 500
    // response instead of tearing down the connection.
    let scraper = state.scraper.clone();
    let scrape_token = token.clone();
    let result = tokio::task::spawn(async move { scraper.scrape(&scrape_token).await }).await;

    match result {
        Ok(headlines) => (
            StatusCode::OK,
            Json(json!({
                "token": token,
                "source": SOURCE_NAME,
                "headlines": headlines,
            })),
        ),
        Err(e) => {
            tracing::error!(token = %token, "scrape task failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch news",
                    "details": e.to_string(),
                })),
            )
        }
    }
}
