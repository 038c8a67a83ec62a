// src/ingest.rs
//
// Ingestion pipeline: raw feed text → parser → mapper → task builder.
//
// The pipeline is total: malformed rows degrade to absent/default fields or
// are dropped pre-mapping; they never abort the batch. The only ingestion
// failure mode is not getting the document at all (see src/net.rs).

use chrono::{Local, NaiveDateTime};

use crate::csv;
use crate::record;
use crate::task::Task;

/// Full pass over the feed document, with "now" captured once.
pub fn ingest(text: &str) -> Vec<Task> {
    ingest_at(text, Local::now().naive_local())
}

/// Same, against an explicit "now" (tests, replays).
pub fn ingest_at(text: &str, now: NaiveDateTime) -> Vec<Task> {
    let rows = csv::parse_rows(text);
    let records = record::map_rows(&rows);
    records
        .iter()
        .filter_map(|rec| Task::build(rec, now))
        .collect()
}
