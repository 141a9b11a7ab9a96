//! Feed projection policies.
//!
//! Two policies reshape a decoded table into a response body: a generic
//! label/content listing and the fixed-section homepage aggregate. Both
//! consume the same decoded table; deployment configuration selects one.
//!
//! The homepage projection classifies rows by substring matching on their
//! free-text labels. The matching is inherently fragile, so the classifier
//! is exposed as a pure function with a fixed precedence order that must
//! not be reordered.

use serde::{Deserialize, Serialize};

use crate::models::{FeedItem, FeedLink, HomepageFeed, ItemsFeed, RawTable};

/// Which projection reshapes decoded rows for the feed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionPolicy {
    /// Generic label/content item list.
    Items,
    /// Fixed-section homepage aggregate.
    Homepage,
}

/// Projected feed body, shaped by the active policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Feed {
    /// Output of [`ProjectionPolicy::Items`].
    Items(ItemsFeed),
    /// Output of [`ProjectionPolicy::Homepage`].
    Homepage(HomepageFeed),
}

/// Projects a decoded table through the selected policy.
pub fn project(policy: ProjectionPolicy, table: &RawTable) -> Feed {
    match policy {
        ProjectionPolicy::Items => Feed::Items(project_items(table)),
        ProjectionPolicy::Homepage => Feed::Homepage(project_homepage(table)),
    }
}

/// Homepage section a labeled row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Next-meeting details.
    NextMeeting,
    /// Newsletter pointer.
    Newsletter,
    /// Volunteer ask entry.
    VolunteerAsk,
    /// Partner entry.
    PartnerItem,
}

/// Maps a free-text row label to its homepage section.
///
/// Case-insensitive substring matching, first match wins:
/// 1. "next meeting", or "meeting" without "volunteer"
/// 2. "newsletter"
/// 3. "volunteer"
/// 4. "partner"
///
/// Labels matching nothing yield `None` and the row is ignored. A label
/// like "Volunteer Meeting Signup" is a volunteer ask, not a meeting.
pub fn classify(label: &str) -> Option<Section> {
    let label = label.to_lowercase();

    if label.contains("next meeting") || (label.contains("meeting") && !label.contains("volunteer"))
    {
        return Some(Section::NextMeeting);
    }
    if label.contains("newsletter") {
        return Some(Section::Newsletter);
    }
    if label.contains("volunteer") {
        return Some(Section::VolunteerAsk);
    }
    if label.contains("partner") {
        return Some(Section::PartnerItem);
    }
    None
}

/// Generic projection: first column is the label, the rest is content.
///
/// Rows with an empty trimmed label are dropped entirely. Content collects
/// every non-empty trimmed value from the columns after the first, in
/// column order.
pub fn project_items(table: &RawTable) -> ItemsFeed {
    let mut items = Vec::new();

    for row in &table.rows {
        let label = table.cell(row, 0).trim();
        if label.is_empty() {
            continue;
        }

        let content: Vec<String> = (1..table.headers.len())
            .map(|col| table.cell(row, col).trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();

        items.push(FeedItem { label: label.to_string(), content });
    }

    ItemsFeed { items }
}

/// Fixed-section projection: column 1 is the label, column 2 the primary
/// content, columns 3-5 auxiliary fields whose meaning depends on the
/// section.
///
/// Rows are classified by [`classify`]; unmatched rows are silently
/// ignored. Sheets that never label their rows fall back to the legacy row
/// order: the second data row is assumed to hold the meeting description
/// and the third the newsletter title.
pub fn project_homepage(table: &RawTable) -> HomepageFeed {
    let mut feed = HomepageFeed::default();

    for row in &table.rows {
        let label = table.cell(row, 0).trim();
        let content = table.cell(row, 1).trim();
        let col3 = table.cell(row, 2).trim();
        let col4 = table.cell(row, 3).trim();
        let col5 = table.cell(row, 4).trim();

        match classify(label) {
            Some(Section::NextMeeting) => {
                feed.next_meeting.description = content.to_string();
                if !col3.is_empty() {
                    feed.next_meeting.date = col3.to_string();
                }
                if !col4.is_empty() {
                    feed.next_meeting.time = col4.to_string();
                }
                if !col5.is_empty() {
                    feed.next_meeting.location = col5.to_string();
                }
            },
            Some(Section::Newsletter) => {
                feed.newsletter.title = content.to_string();
                if !col3.is_empty() {
                    feed.newsletter.url = col3.to_string();
                }
            },
            Some(Section::VolunteerAsk) => {
                if !content.is_empty() || !col3.is_empty() {
                    feed.volunteer_asks.push(FeedLink {
                        title: content.to_string(),
                        description: col3.to_string(),
                        url: col4.to_string(),
                    });
                }
            },
            Some(Section::PartnerItem) => {
                if !content.is_empty() || !col3.is_empty() {
                    feed.partner_items.push(FeedLink {
                        title: content.to_string(),
                        description: col3.to_string(),
                        url: col4.to_string(),
                    });
                }
            },
            None => {},
        }
    }

    // Best-effort fallback for unlabeled sheets; assumes the legacy
    // Announcements / Next Meeting / Newsletter row order.
    if feed.next_meeting.description.is_empty() && table.rows.len() >= 2 {
        feed.next_meeting.description = table.cell(&table.rows[1], 1).trim().to_string();
        if let Some(third) = table.rows.get(2) {
            if feed.newsletter.title.is_empty() {
                feed.newsletter.title = table.cell(third, 1).trim().to_string();
            }
        }
    }

    feed
}
