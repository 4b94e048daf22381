//! Data Transfer Objects for API responses.
//!
//! The WHOIS endpoint answers in plain text; only the health check uses JSON.

pub mod health;
