//! Client trait for WHOIS queries.

use crate::domain::errors::WhoisError;
use crate::domain::reply::WhoisReply;
use async_trait::async_trait;

/// Sends a single query to a WHOIS server and returns the raw reply.
///
/// One call is one connection: implementations open a fresh connection, send
/// the query, read until the peer closes and release the connection before
/// returning. Nothing is retried.
///
/// # Implementations
///
/// - [`crate::infrastructure::whois::TcpWhoisClient`] - Plain TCP (port 43)
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WhoisClient: Send + Sync {
    /// Queries `server` with `query` and returns everything the server sent.
    ///
    /// # Errors
    ///
    /// Returns [`WhoisError::Connection`] if the server cannot be reached.
    /// Returns [`WhoisError::Io`] if the exchange breaks after connecting.
    /// Returns [`WhoisError::Timeout`] if a deadline is configured and expires.
    async fn query(&self, server: &str, query: &str) -> Result<WhoisReply, WhoisError>;
}
