//! HTTP API layer.
//!
//! Translates HTTP requests into lookups and formats the responses.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies serialized as JSON
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
