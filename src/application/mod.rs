//! Application layer services implementing the lookup logic.
//!
//! Services consume the client traits from [`crate::domain::clients`] and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::whois_service::WhoisService`] - Registry resolution and domain queries

pub mod services;
