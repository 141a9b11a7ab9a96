//! Integration tests for the feed projection policies.
//!
//! Exercises both policies end-to-end from CSV text through the decoder,
//! including the keyword precedence rules and the legacy positional
//! fallback of the homepage projection.

use sheetfeed_core::{decode, project, Feed, ProjectionPolicy};

fn items(csv: &str) -> sheetfeed_core::ItemsFeed {
    match project(ProjectionPolicy::Items, &decode(csv)) {
        Feed::Items(feed) => feed,
        Feed::Homepage(_) => panic!("expected items feed"),
    }
}

fn homepage(csv: &str) -> sheetfeed_core::HomepageFeed {
    match project(ProjectionPolicy::Homepage, &decode(csv)) {
        Feed::Homepage(feed) => feed,
        Feed::Items(_) => panic!("expected homepage feed"),
    }
}

#[test]
fn items_projection_collects_non_empty_content() {
    let feed = items("Label,C1,C2\nAnnounce,Hello,");

    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].label, "Announce");
    assert_eq!(feed.items[0].content, vec!["Hello"]);
}

#[test]
fn items_projection_drops_rows_without_label() {
    let feed = items("Label,C1\n,orphaned\n   ,also orphaned\nKept,value");

    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].label, "Kept");
}

#[test]
fn items_projection_preserves_column_order() {
    let feed = items("Label,C1,C2,C3\nRow,first,,third");

    assert_eq!(feed.items[0].content, vec!["first", "third"]);
}

#[test]
fn items_projection_allows_empty_content() {
    let feed = items("Label,C1\nBare,");

    assert_eq!(feed.items.len(), 1);
    assert!(feed.items[0].content.is_empty());
}

#[test]
fn homepage_meeting_row_populates_next_meeting() {
    let feed = homepage(
        "Label,Content,Col3,Col4,Col5\n\
         Next Meeting,Planning session,2026-09-01,19:00,Community Hall",
    );

    assert_eq!(feed.next_meeting.description, "Planning session");
    assert_eq!(feed.next_meeting.date, "2026-09-01");
    assert_eq!(feed.next_meeting.time, "19:00");
    assert_eq!(feed.next_meeting.location, "Community Hall");
}

#[test]
fn homepage_volunteer_meeting_label_is_a_volunteer_ask() {
    let feed = homepage("Label,Content,Col3,Col4\nVolunteer Meeting Signup,x,,");

    assert!(feed.next_meeting.description.is_empty());
    assert_eq!(feed.volunteer_asks.len(), 1);
    assert_eq!(feed.volunteer_asks[0].title, "x");
}

#[test]
fn homepage_newsletter_row_populates_title_and_url() {
    let feed = homepage(
        "Label,Content,Col3\nOctober Newsletter,Fall update,https://example.org/news",
    );

    assert_eq!(feed.newsletter.title, "Fall update");
    assert_eq!(feed.newsletter.url, "https://example.org/news");
}

#[test]
fn homepage_partner_rows_accumulate_in_order() {
    let feed = homepage(
        "Label,Content,Col3,Col4\n\
         Partner A,First,desc one,https://a.example\n\
         Partner B,Second,desc two,https://b.example",
    );

    assert_eq!(feed.partner_items.len(), 2);
    assert_eq!(feed.partner_items[0].title, "First");
    assert_eq!(feed.partner_items[1].url, "https://b.example");
}

#[test]
fn homepage_volunteer_rows_without_title_or_description_are_skipped() {
    let feed = homepage("Label,Content,Col3,Col4\nVolunteer drivers,,,");

    assert!(feed.volunteer_asks.is_empty());
}

#[test]
fn homepage_unmatched_rows_are_ignored() {
    let feed = homepage(
        "Label,Content\n\
         Random heading,ignored\n\
         Next Meeting,kept",
    );

    assert_eq!(feed.next_meeting.description, "kept");
    assert!(feed.volunteer_asks.is_empty());
    assert!(feed.partner_items.is_empty());
}

#[test]
fn homepage_positional_fallback_reads_second_and_third_rows() {
    // No row label matches a keyword, so the legacy row-order assumption
    // kicks in: row 1 holds the meeting description, row 2 the newsletter
    // title.
    let feed = homepage(
        "Label,Content\n\
         Announcements,Welcome back\n\
         Untitled,Monthly meetup details\n\
         Untitled too,Autumn digest",
    );

    assert_eq!(feed.next_meeting.description, "Monthly meetup details");
    assert_eq!(feed.newsletter.title, "Autumn digest");
}

#[test]
fn homepage_fallback_skipped_when_keyword_match_found() {
    let feed = homepage(
        "Label,Content\n\
         Next Meeting,Labeled description\n\
         Announcements,Should not leak",
    );

    assert_eq!(feed.next_meeting.description, "Labeled description");
    assert!(feed.newsletter.title.is_empty());
}

#[test]
fn homepage_fallback_requires_two_data_rows() {
    let feed = homepage("Label,Content\nAnnouncements,Only row");

    assert!(feed.next_meeting.description.is_empty());
    assert!(feed.newsletter.title.is_empty());
}
