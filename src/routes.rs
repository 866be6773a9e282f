//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                   - Static landing page
//! - `POST /shorten`            - Create a short URL
//! - `GET  /health`             - Health check (database)
//! - `GET  /analytics/{token}`  - Rendered visit statistics
//! - `GET  /{token}`            - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling
//!
//! Fixed routes take precedence over the `/{token}` catch-all, so `/health`
//! and `/shorten` are never treated as tokens.

use crate::api::handlers::{analytics_handler, health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeFile;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/analytics/{token}", get(analytics_handler))
        .route("/{token}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
