//! API route configuration.

use crate::api::handlers::whois_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public lookup routes.
///
/// # Endpoints
///
/// - `GET /whois?domain=...` - Raw WHOIS record for a domain
pub fn whois_routes() -> Router<AppState> {
    Router::new().route("/whois", get(whois_handler))
}
