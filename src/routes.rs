//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /whois`  - WHOIS lookup (public)
//! - `GET /health` - Health check (public)
//!
//! Paths match exactly; `/whois/` is not an alias for `/whois`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::whois_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
