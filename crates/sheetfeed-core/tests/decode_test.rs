//! Integration tests for the tabular decoder.
//!
//! Covers header/row zipping, blank-line handling, and the quoting rules
//! the sheet export endpoints rely on.

use sheetfeed_core::decode;

#[test]
fn empty_input_yields_empty_table() {
    let table = decode("");
    assert!(table.headers.is_empty());
    assert!(table.rows.is_empty());

    let table = decode("\n  \n\t\n");
    assert!(table.headers.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn header_only_input_yields_no_rows() {
    let table = decode("Label,C1,C2");
    assert_eq!(table.headers, vec!["Label", "C1", "C2"]);
    assert!(table.rows.is_empty());
}

#[test]
fn short_rows_pad_missing_cells_with_empty_string() {
    let table = decode("H1,H2,H3\na,b");

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0]["H1"], "a");
    assert_eq!(table.rows[0]["H2"], "b");
    assert_eq!(table.rows[0]["H3"], "");
}

#[test]
fn extra_cells_beyond_headers_are_dropped() {
    let table = decode("H1,H2\na,b,c,d");

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].len(), 2);
    assert_eq!(table.rows[0]["H1"], "a");
    assert_eq!(table.rows[0]["H2"], "b");
}

#[test]
fn interior_blank_lines_do_not_change_row_count() {
    let with_blanks = decode("H1,H2\na,b\n\n   \nc,d\n");
    let without_blanks = decode("H1,H2\na,b\nc,d");

    assert_eq!(with_blanks, without_blanks);
    assert_eq!(with_blanks.rows.len(), 2);
}

#[test]
fn quoted_cells_survive_decoding() {
    let table = decode("Label,Content\n\"Smith, Jane\",\"say \"\"hi\"\"\"");

    assert_eq!(table.rows[0]["Label"], "Smith, Jane");
    assert_eq!(table.rows[0]["Content"], "say \"hi\"");
}

#[test]
fn crlf_line_endings_are_tolerated() {
    let table = decode("H1,H2\r\na,b\r\n");

    assert_eq!(table.headers, vec!["H1", "H2"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0]["H2"], "b");
}

#[test]
fn duplicate_headers_collapse_to_last_column() {
    let table = decode("H,H\na,b");

    assert_eq!(table.headers, vec!["H", "H"]);
    assert_eq!(table.rows[0]["H"], "b");
}
