//! Sheet export fetching.
//!
//! This crate retrieves the tabular export of a publicly shared spreadsheet
//! over HTTP. Several equivalent export endpoint shapes exist and which one
//! answers depends on how the sheet was shared, so the client walks an
//! ordered candidate list:
//!
//! 1. **Candidate URLs** - distinct export endpoint shapes for the same
//!    sheet, tried strictly in order
//! 2. **One-level redirects** - a redirect response is followed exactly
//!    once per candidate; the follow-up response is authoritative
//! 3. **HTML sniffing** - a 200 carrying an HTML document means the sheet
//!    is not actually public and fails that candidate
//! 4. **Aggregated exhaustion** - only when every candidate fails does an
//!    error propagate to the caller
//!
//! There is no backoff, caching, or parallelism: the fetch path is a plain
//! sequential loop bounded by a fixed per-request timeout.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod urls;

pub use client::{ClientConfig, SheetClient};
pub use error::{ErrorCategory, FetchError, Result};
pub use urls::{candidate_urls, DEFAULT_EXPORT_BASE};

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
