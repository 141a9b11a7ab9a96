//! HTTP request handlers for the sheet feed API.
//!
//! Handlers follow a consistent pattern:
//! - Tracing for observability
//! - A fresh upstream fetch per request, no caching
//! - Standardized error responses
//!
//! # Error Handling
//!
//! The feed handler catches every propagated fetch error and answers with
//! HTTP 500 plus a machine-readable `message` field; errors never crash
//! the process. Decoding is lenient and has no failure path.

pub mod feed;
pub mod health;

pub use feed::homepage_feed;
pub use health::{health_check, liveness_check};
