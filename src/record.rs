// src/record.rs
//
// Record Mapper: header row + data rows → one key/value record per row.
//
// Each cell lands under its literal header string AND under a positional
// alias `col_<index>`, so field resolution can fall back to position when
// header text is unreliable. Key order follows the source header order.

use indexmap::IndexMap;

/// One mapped feed row. Insertion-ordered; keys unique (first wins).
pub type Record = IndexMap<String, String>;

/// Where to find one logical field in the feed.
///
/// Resolution is a fixed strategy chain (see [`resolve`]):
/// exact name → partial-with-exclusion → positional alias.
#[derive(Clone, Copy, Debug)]
pub struct ColumnSpec {
    /// Candidate header names, checked in order.
    pub names: &'static [&'static str],
    /// A header that merely *contains* a candidate is skipped when it also
    /// contains one of these (e.g. "Task ID" must not resolve as the task
    /// description column).
    pub exclude: &'static [&'static str],
    /// 0-based column index used when no header matches.
    pub fallback: usize,
}

/// Map the first row as header and every following row into a [`Record`].
pub fn map_rows(rows: &[Vec<String>]) -> Vec<Record> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };

    data.iter()
        .map(|row| {
            let mut rec = Record::new();
            for (i, cell) in row.iter().enumerate() {
                if let Some(name) = header.get(i) {
                    rec.entry(name.clone()).or_insert_with(|| cell.clone());
                }
                rec.entry(format!("col_{i}")).or_insert_with(|| cell.clone());
            }
            rec
        })
        .collect()
}

/// Resolve one field from a record. Never fails; missing everything is "".
///
/// 1. Case-insensitive exact match against any candidate name.
/// 2. Case-insensitive substring match (header contains candidate), skipping
///    headers that also contain an exclusion keyword.
/// 3. The positional alias `col_<fallback>`.
pub fn resolve<'a>(rec: &'a Record, spec: &ColumnSpec) -> &'a str {
    for name in spec.names {
        for (key, val) in rec {
            if key.eq_ignore_ascii_case(name) {
                return val;
            }
        }
    }

    for name in spec.names {
        let needle = name.to_lowercase();
        for (key, val) in rec {
            if key.starts_with("col_") {
                continue;
            }
            let header = key.to_lowercase();
            if header.contains(&needle)
                && !spec.exclude.iter().any(|ex| header.contains(ex))
            {
                return val;
            }
        }
    }

    rec.get(&format!("col_{}", spec.fallback))
        .map(String::as_str)
        .unwrap_or("")
}

/* ---------------- Tests ---------------- */
