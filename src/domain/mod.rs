//! Domain layer containing the WHOIS lookup model.
//!
//! This module defines the data that flows through a lookup and the client
//! interface used to talk to WHOIS servers. It has no knowledge of HTTP or of
//! the concrete TCP transport.
//!
//! # Architecture
//!
//! - [`clients`] - WHOIS client trait definition
//! - [`errors`] - Lookup failure taxonomy
//! - [`registry`] - Root server constants and registry referral parsing
//! - [`reply`] - Raw WHOIS response wrapper
//! - [`tld`] - Top-level domain extraction
//!
//! # Lookup Flow
//!
//! 1. [`tld::extract_tld`] takes the label after the last dot
//! 2. The root server is queried with that label
//! 3. [`registry::parse_registry_server`] finds the `whois:` referral
//! 4. The registry server is queried with the full domain

pub mod clients;
pub mod errors;
pub mod registry;
pub mod reply;
pub mod tld;
