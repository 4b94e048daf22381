//! WHOIS lookup service.

use crate::domain::clients::WhoisClient;
use crate::domain::errors::{LookupError, WhoisError};
use crate::domain::registry::parse_registry_server;
use crate::domain::reply::WhoisReply;
use crate::domain::tld::extract_tld;
use std::sync::Arc;
use tracing::debug;

/// Result of a successful two-step lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Registry server the root server referred us to.
    pub registry_server: String,
    /// Raw reply from the registry server.
    pub reply: WhoisReply,
}

/// Service resolving registry WHOIS servers and querying them.
///
/// Stateless between calls: the registry server is re-derived from the root
/// server on every lookup and nothing is cached.
pub struct WhoisService {
    client: Arc<dyn WhoisClient>,
    root_server: String,
}

impl WhoisService {
    /// Creates a new service using `root_server` for TLD resolution.
    pub fn new(client: Arc<dyn WhoisClient>, root_server: impl Into<String>) -> Self {
        Self {
            client,
            root_server: root_server.into(),
        }
    }

    pub fn root_server(&self) -> &str {
        &self.root_server
    }

    /// Finds the registry WHOIS server responsible for `tld`.
    ///
    /// Queries the root server with the TLD label and takes the first
    /// `whois:` referral line from the reply.
    ///
    /// # Errors
    ///
    /// Returns [`WhoisError::NotFound`] if the reply has no referral.
    /// Client errors are returned unchanged.
    pub async fn resolve_registry_server(&self, tld: &str) -> Result<String, WhoisError> {
        let reply = self.client.query(&self.root_server, tld).await?;

        let server = parse_registry_server(&reply.text()).ok_or(WhoisError::NotFound)?;
        debug!(tld, %server, "Resolved registry server");

        Ok(server)
    }

    /// Queries `server` for the full `domain`.
    ///
    /// # Errors
    ///
    /// Client errors are returned unchanged.
    pub async fn query_registry(
        &self,
        server: &str,
        domain: &str,
    ) -> Result<WhoisReply, WhoisError> {
        self.client.query(server, domain).await
    }

    /// Runs a complete lookup for `domain`.
    ///
    /// # Flow
    ///
    /// 1. Extract the TLD (text after the last dot, whole input if none)
    /// 2. Resolve the registry server for the TLD via the root server
    /// 3. Query the registry server with the full domain
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Registry`] if step 2 fails.
    /// Returns [`LookupError::Query`] if step 3 fails.
    pub async fn lookup(&self, domain: &str) -> Result<Lookup, LookupError> {
        let tld = extract_tld(domain);

        let registry_server = self
            .resolve_registry_server(tld)
            .await
            .map_err(LookupError::Registry)?;

        let reply = self
            .query_registry(&registry_server, domain)
            .await
            .map_err(LookupError::Query)?;

        Ok(Lookup {
            registry_server,
            reply,
        })
    }
}
