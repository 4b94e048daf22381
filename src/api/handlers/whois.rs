//! Handler for WHOIS lookups.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{error, info, warn};

use crate::domain::errors::LookupError;
use crate::error::AppError;
use crate::state::AppState;

pub const MISSING_DOMAIN: &str = "Missing 'domain' query parameter";

/// Looks up the WHOIS record of a domain and relays it verbatim.
///
/// # Endpoint
///
/// `GET /whois?domain=example.com`
///
/// # Request Flow
///
/// 1. Read `domain` from the query string (first occurrence wins)
/// 2. Resolve the registry server for its TLD via the root server
/// 3. Query the registry server with the full domain
/// 4. Return the raw reply as `text/plain`
///
/// # Response Codes
///
/// - **200 OK**: Raw WHOIS reply, byte for byte
/// - **400 Bad Request**: `domain` missing or empty
/// - **500 Internal Server Error**: Registry resolution or domain query failed
///
/// # Errors
///
/// Error bodies are plain text:
///
/// ```text
/// Missing 'domain' query parameter
/// Error getting whois server: whois server not found
/// Error querying whois information: connection reset by peer
/// ```
pub async fn whois_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let started = Instant::now();

    let domain = match params
        .into_iter()
        .find_map(|(key, value)| (key == "domain").then_some(value))
        .filter(|domain| !domain.is_empty())
    {
        Some(domain) => domain,
        None => {
            warn!("{}", MISSING_DOMAIN);
            return Err(AppError::bad_request(MISSING_DOMAIN));
        }
    };

    let lookup = state
        .whois_service
        .lookup(&domain)
        .await
        .inspect_err(|e| match e {
            LookupError::Registry(cause) => error!(
                %domain,
                error = %cause,
                "Error getting whois server for domain {domain}: {cause}"
            ),
            LookupError::Query(cause) => error!(
                %domain,
                error = %cause,
                "Error querying whois information for domain {domain}: {cause}"
            ),
        })?;

    let elapsed = started.elapsed();
    info!(
        %domain,
        server = %lookup.registry_server,
        bytes = lookup.reply.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Served whois request for domain {domain} in {elapsed:?}"
    );

    Ok((
        [(header::CONTENT_TYPE, "text/plain")],
        lookup.reply.into_bytes(),
    )
        .into_response())
}
