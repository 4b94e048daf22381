//! Business logic services for the application layer.

pub mod whois_service;

pub use whois_service::{Lookup, WhoisService};
