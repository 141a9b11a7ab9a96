//! Candidate export URL construction.
//!
//! A public sheet can be exported through several equivalent endpoint
//! shapes, and which of them answers with CSV depends on how the sheet was
//! shared. The fetcher tries each shape in order and stops at the first
//! success.

/// Base URL of the production export endpoints.
pub const DEFAULT_EXPORT_BASE: &str = "https://docs.google.com";

/// Ordered list of export URL shapes for one sheet.
///
/// Order matters: the direct CSV export with an explicit gid, then the
/// gviz query export, then the plain export without a sheet qualifier.
pub fn candidate_urls(base_url: &str, sheet_id: &str) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    vec![
        format!("{base}/spreadsheets/d/{sheet_id}/export?format=csv&gid=0"),
        format!("{base}/spreadsheets/d/{sheet_id}/gviz/tq?tqx=out:csv&sheet=Sheet1"),
        format!("{base}/spreadsheets/d/{sheet_id}/export?format=csv"),
    ]
}
