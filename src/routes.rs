//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`           - Health check (database)
//! - `/api/v2/*`, `/api/v1/*` - Routes of the configured service, see
//!   [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::api::paths;
use crate::config::ServiceKind;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router for the service selected in `state`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(service_router(state))
}

/// Health and service routes with tracing, without path normalization.
pub fn service_router(state: AppState) -> Router {
    let service_routes = match state.service {
        ServiceKind::Usuario => api::routes::usuario_routes(),
        ServiceKind::Venta => api::routes::venta_routes(),
    };

    Router::new()
        .route(paths::HEALTH, get(health_handler))
        .merge(service_routes)
        .with_state(state)
        .layer(tracing::layer())
}
