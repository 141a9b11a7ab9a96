//! Domain models for decoded sheets and projected feeds.
//!
//! Defines the raw tabular shape produced by the decoder and the response
//! bodies produced by the projection policies. All values are constructed
//! fresh per request and discarded after the response is sent; nothing here
//! is cached or persisted.

use std::collections::HashMap;

use serde::Serialize;

/// A decoded sheet export: ordered column names plus row mappings.
///
/// Every row map contains a value (possibly the empty string) for every
/// header. Missing trailing cells default to the empty string; cells beyond
/// the header count are dropped by the decoder. Header names are not
/// required to be unique; duplicates collapse map-wise with the last column
/// winning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names in sheet order.
    pub headers: Vec<String>,
    /// One mapping from header name to cell value per data row.
    pub rows: Vec<HashMap<String, String>>,
}

impl RawTable {
    /// Returns the cell at column `col` for `row`, or `""` when the column
    /// does not exist.
    pub fn cell<'a>(&self, row: &'a HashMap<String, String>, col: usize) -> &'a str {
        self.headers
            .get(col)
            .and_then(|header| row.get(header))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One labeled entry in the generic feed listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    /// Trimmed, non-empty label from the first column.
    pub label: String,
    /// Non-empty trimmed values from the remaining columns, in column order.
    pub content: Vec<String>,
}

/// Response body for the generic label/content projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemsFeed {
    /// Feed entries in sheet row order.
    pub items: Vec<FeedItem>,
}

/// Response body for the fixed-section homepage projection.
///
/// Serialized camelCase for the JavaScript frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageFeed {
    /// Details of the next scheduled meeting.
    pub next_meeting: NextMeeting,
    /// Latest newsletter pointer.
    pub newsletter: Newsletter,
    /// Current volunteer asks in sheet row order.
    pub volunteer_asks: Vec<FeedLink>,
    /// Partner items in sheet row order.
    pub partner_items: Vec<FeedLink>,
}

/// Next-meeting section of the homepage feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NextMeeting {
    /// Meeting date as free text from the sheet.
    pub date: String,
    /// Meeting time as free text from the sheet.
    pub time: String,
    /// Meeting location as free text from the sheet.
    pub location: String,
    /// Meeting description.
    pub description: String,
}

/// Newsletter section of the homepage feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Newsletter {
    /// Newsletter title.
    pub title: String,
    /// Link to the newsletter.
    pub url: String,
}

/// A titled link entry used by the volunteer and partner sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedLink {
    /// Entry title.
    pub title: String,
    /// Longer description, possibly empty.
    pub description: String,
    /// Link target, possibly empty.
    pub url: String,
}
