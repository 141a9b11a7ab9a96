//! Core domain types for the sheet feed service.
//!
//! Provides the tabular data model, the lenient delimited-text decoder, and
//! the feed projection policies that reshape decoded rows into response
//! bodies. This crate performs no I/O: fetching lives in `sheetfeed-fetch`
//! and the HTTP surface in `sheetfeed-api`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decode;
pub mod models;
pub mod project;

pub use decode::{decode, parse_line};
pub use models::{FeedItem, FeedLink, HomepageFeed, ItemsFeed, Newsletter, NextMeeting, RawTable};
pub use project::{classify, project, Feed, ProjectionPolicy, Section};
