//! Lenient decoder for delimited sheet exports.
//!
//! Converts the raw CSV text of a sheet export into a [`RawTable`]. The
//! decoder is deliberately forgiving: malformed quoting never fails, it
//! always produces some output. Export endpoints occasionally emit ragged
//! rows, so widths are normalized against the header row here rather than
//! rejected.

use std::collections::HashMap;

use crate::models::RawTable;

/// Decodes delimited text into a header row plus row mappings.
///
/// Blank and whitespace-only lines are discarded. The first remaining line
/// is the header row; every later line is parsed the same way and zipped
/// positionally against the headers. Rows shorter than the header row are
/// padded with empty strings, longer rows are truncated.
pub fn decode(text: &str) -> RawTable {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return RawTable::default();
    };
    let headers = parse_line(header_line);

    let rows = lines
        .map(|line| {
            let values = parse_line(line);
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    (header.clone(), values.get(i).cloned().unwrap_or_default())
                })
                .collect::<HashMap<_, _>>()
        })
        .collect();

    RawTable { headers, rows }
}

/// Splits one line into trimmed fields, honoring double-quote rules.
///
/// A `"` toggles quoting state; two consecutive quotes inside a quoted
/// field decode to one literal quote. A comma outside quotes terminates the
/// current field, inside quotes it is content. The last field is emitted at
/// end of line with no trailing comma required.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            },
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            },
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_split_on_commas() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn quoted_field_keeps_embedded_comma() {
        assert_eq!(parse_line("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn doubled_quote_decodes_to_literal_quote() {
        assert_eq!(parse_line("\"say \"\"hi\"\"\""), vec!["say \"hi\""]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(parse_line("  a , b  ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trailing_carriage_return_is_trimmed() {
        assert_eq!(parse_line("a,b\r"), vec!["a", "b"]);
    }

    #[test]
    fn unmatched_quote_still_produces_output() {
        assert_eq!(parse_line("a,\"b,c"), vec!["a", "b,c"]);
    }

    #[test]
    fn empty_line_yields_single_empty_field() {
        assert_eq!(parse_line(""), vec![""]);
    }
}
