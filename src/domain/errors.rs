//! Errors produced while talking to WHOIS servers.

use std::io;
use std::time::Duration;

/// Failure of a single WHOIS exchange or of registry resolution.
///
/// The `Display` output is what ends up in the HTTP error body, so variants
/// carry only the context a caller can act on.
#[derive(Debug, thiserror::Error)]
pub enum WhoisError {
    /// TCP connect failed, including name resolution.
    #[error("failed to connect to {addr}: {source}")]
    Connection {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Write or read failed on an established connection.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The root server reply had no `whois:` referral line.
    #[error("whois server not found")]
    NotFound,

    #[error("i/o timeout talking to {addr} after {after:?}")]
    Timeout { addr: String, after: Duration },
}

/// Failure of a full lookup, tagged with the stage that failed.
///
/// The message prefixes are part of the HTTP contract.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Error getting whois server: {0}")]
    Registry(#[source] WhoisError),

    #[error("Error querying whois information: {0}")]
    Query(#[source] WhoisError),
}

impl LookupError {
    /// The underlying WHOIS failure, regardless of stage.
    pub fn cause(&self) -> &WhoisError {
        match self {
            Self::Registry(e) | Self::Query(e) => e,
        }
    }
}
