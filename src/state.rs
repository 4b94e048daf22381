use std::sync::Arc;

use crate::application::services::WhoisService;

/// Shared state injected into handlers.
///
/// Holds no per-request data; requests never observe each other.
#[derive(Clone)]
pub struct AppState {
    pub whois_service: Arc<WhoisService>,
}

impl AppState {
    pub fn new(whois_service: Arc<WhoisService>) -> Self {
        Self { whois_service }
    }
}
