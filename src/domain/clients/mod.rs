//! Client interfaces for outbound WHOIS traffic.
//!
//! Traits define the contract the application layer depends on. The TCP
//! implementation lives in [`crate::infrastructure::whois`].
//!
//! # Testing
//!
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod whois_client;

pub use whois_client::WhoisClient;

#[cfg(test)]
pub use whois_client::MockWhoisClient;
