//! TCP implementation of [`WhoisClient`].

use crate::domain::clients::WhoisClient;
use crate::domain::errors::WhoisError;
use crate::domain::registry::WHOIS_PORT;
use crate::domain::reply::WhoisReply;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// WHOIS client speaking the plain TCP protocol.
///
/// Each query opens a new connection to `server:port`, writes the query
/// followed by CRLF and reads until the server closes the connection. The
/// stream is dropped before [`WhoisClient::query`] returns, on success and on
/// error alike.
///
/// By default there is no deadline: a server that never closes the
/// connection keeps the query pending. [`TcpWhoisClient::with_timeout`] bounds
/// the whole exchange.
#[derive(Debug, Clone)]
pub struct TcpWhoisClient {
    port: u16,
    timeout: Option<Duration>,
}

impl TcpWhoisClient {
    /// Creates a client for the standard WHOIS port with no deadline.
    pub fn new() -> Self {
        Self {
            port: WHOIS_PORT,
            timeout: None,
        }
    }

    /// Overrides the destination port for every query.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Bounds connect, write and read of each query by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    async fn exchange(
        &self,
        server: &str,
        addr: &str,
        query: &str,
    ) -> Result<WhoisReply, WhoisError> {
        let mut stream = TcpStream::connect((server, self.port))
            .await
            .map_err(|source| WhoisError::Connection {
                addr: addr.to_string(),
                source,
            })?;

        stream.write_all(format!("{query}\r\n").as_bytes()).await?;

        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await?;

        Ok(WhoisReply::new(buf))
    }
}

impl Default for TcpWhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhoisClient for TcpWhoisClient {
    async fn query(&self, server: &str, query: &str) -> Result<WhoisReply, WhoisError> {
        let addr = format!("{}:{}", server, self.port);
        debug!(%addr, query, "Sending whois query");

        let reply = match self.timeout {
            None => self.exchange(server, &addr, query).await?,
            Some(after) => tokio::time::timeout(after, self.exchange(server, &addr, query))
                .await
                .map_err(|_| WhoisError::Timeout {
                    addr: addr.clone(),
                    after,
                })??,
        };

        debug!(%addr, bytes = reply.len(), "Received whois reply");
        Ok(reply)
    }
}
