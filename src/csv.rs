// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Tolerant RFC-4180-ish parser (quotes + CRLF + multi-line cells). std-only.
///
/// - A field is quoted only when it *starts* with `"`; a quote later in an
///   unquoted field is literal content.
/// - A doubled quote inside a quoted field is a literal `"`.
/// - A line break inside an open quote is cell content, not a row end.
/// - Cells come back trimmed; rows whose cells are all empty are dropped.
/// - The trailing row is flushed even without a final line break.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else if field.is_empty() {
                    // quoting only opens at the start of a field
                    in_quotes = true;
                } else {
                    field.push('"');
                }
            }
            ',' if !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                flush_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        flush_row(&mut rows, &mut row);
    }

    rows
}

/// Trim every cell, then keep the row unless it is entirely empty.
fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    for cell in row.iter_mut() {
        let trimmed = cell.trim();
        if trimmed.len() != cell.len() {
            *cell = trimmed.to_string();
        }
    }
    if row.iter().any(|c| !c.is_empty()) {
        rows.push(take(row));
    } else {
        row.clear();
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, ",")?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string from a header row and data rows.
pub fn to_export_string(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, headers);
    for r in rows {
        let _ = write_row(&mut buf, r);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rows() {
        let rows = parse_rows("a,b,c\n1,2,3\n");
        assert_eq!(rows, vec![
            vec!["a", "b", "c"],
            vec!["1", "2", "3"],
        ]);
    }

    #[test]
    fn quoted_comma_and_escaped_quote() {
        let rows = parse_rows("\"x, y\",\"He said \"\"hi\"\"\"\n");
        assert_eq!(rows, vec![vec!["x, y", "He said \"hi\""]]);
    }

    #[test]
    fn newline_inside_quotes_is_content() {
        let rows = parse_rows("\"line1\nline2\",b\r\nnext,row\n");
        assert_eq!(rows, vec![
            vec!["line1\nline2", "b"],
            vec!["next", "row"],
        ]);
    }

    #[test]
    fn mid_field_quote_is_literal_content() {
        let rows = parse_rows("ab\"c,d\ne,f");
        assert_eq!(rows, vec![
            vec!["ab\"c", "d"],
            vec!["e", "f"],
        ]);
    }

    #[test]
    fn blank_and_all_empty_rows_dropped() {
        let rows = parse_rows("a,b\n\n,,\n   ,\t\nc,d");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn eof_flush_without_terminator() {
        let rows = parse_rows("a,b");
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("\n\r\n\n").is_empty());
    }

    #[test]
    fn cells_are_trimmed() {
        let rows = parse_rows("  a , b \n");
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn write_row_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "a,b", "q\"q", "multi\nline"]).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "plain,\"a,b\",\"q\"\"q\",\"multi\nline\"\n");
    }
}
