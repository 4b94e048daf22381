//! Infrastructure layer for external integrations.
//!
//! Implements the client traits from [`crate::domain::clients`] on top of
//! concrete transports.
//!
//! # Modules
//!
//! - [`whois`] - Plain TCP WHOIS client

pub mod whois;
