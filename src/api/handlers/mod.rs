//! HTTP request handlers for API endpoints.

pub mod health;
pub mod whois;

pub use health::health_handler;
pub use whois::whois_handler;
