//! # WHOIS Relay
//!
//! A small HTTP service that looks up domain registration records over WHOIS
//! and relays the raw text.
//!
//! ## How a lookup works
//!
//! 1. `GET /whois?domain=example.com` arrives
//! 2. The root server (`whois.iana.org`) is asked about the TLD (`com`)
//! 3. Its `whois:` line names the registry server (`whois.verisign-grs.com`)
//! 4. The registry server is asked about `example.com`
//! 5. Its reply is returned as `text/plain`, untouched
//!
//! Every WHOIS query is a fresh TCP connection to port 43. Nothing is cached
//! or retried.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Reply type, errors, client trait, parsing
//! - **Application Layer** ([`application`]) - Lookup orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - TCP WHOIS client
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- -port 8080
//! curl 'http://localhost:8080/whois?domain=example.com'
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables and CLI flags via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Lookup, WhoisService};
    pub use crate::domain::clients::WhoisClient;
    pub use crate::domain::errors::{LookupError, WhoisError};
    pub use crate::domain::reply::WhoisReply;
    pub use crate::error::AppError;
    pub use crate::infrastructure::whois::TcpWhoisClient;
    pub use crate::state::AppState;
}
