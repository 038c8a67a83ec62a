// src/task.rs
//
// The durable entity: one Task per qualifying feed row. Status and delay are
// derived from (planned, actual, now) on every ingestion pass, never stored
// independently of their inputs.

use chrono::NaiveDateTime;

use crate::dates;
use crate::params;
use crate::record::{self, Record};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Completed,
    Delayed,
    Pending,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::Delayed => "Delayed",
            Status::Pending => "Pending",
        }
    }
}

/// Immutable once built; a new ingestion pass replaces the whole collection.
#[derive(Clone, Debug)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub planned: Option<NaiveDateTime>,
    pub actual: Option<NaiveDateTime>,
    pub system: String,
    pub owner: String,
    pub status: Status,
    pub delay_hours: f64,
}

impl Task {
    /// Build one Task from a mapped record. Returns `None` for rows whose
    /// resolved id or description is empty; those never become Tasks.
    pub fn build(rec: &Record, now: NaiveDateTime) -> Option<Task> {
        let id = record::resolve(rec, &params::ID_COL).trim();
        let description = record::resolve(rec, &params::TASK_COL).trim();
        if id.is_empty() || description.is_empty() {
            return None;
        }

        let planned = dates::parse_instant(record::resolve(rec, &params::PLANNED_COL));
        let actual = dates::parse_instant(record::resolve(rec, &params::ACTUAL_COL));
        let (status, delay_hours) = derive_status(planned, actual, now);

        let system = non_empty_or(record::resolve(rec, &params::SYSTEM_COL), params::GENERAL);
        let owner = non_empty_or(record::resolve(rec, &params::OWNER_COL), params::UNASSIGNED);

        Some(Task {
            id: s!(id),
            description: s!(description),
            planned,
            actual,
            system,
            owner,
            status,
            delay_hours,
        })
    }

    /// Fixed-order export row matching [`params::EXPORT_HEADERS`].
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.description.clone(),
            dates::format_instant(self.planned),
            dates::format_instant(self.actual),
            self.system.clone(),
            self.owner.clone(),
            s!(self.status.label()),
            format!("{:.1}", self.delay_hours),
        ]
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    let v = value.trim();
    if v.is_empty() { s!(default) } else { s!(v) }
}

/// Pure status/delay derivation against one "now" captured per pass.
///
/// Comparison between planned and actual (and against today) is on calendar
/// days; the delay itself is measured on the full timestamps and floored at
/// zero. Delay is only non-zero for `Delayed` with both dates present.
pub fn derive_status(
    planned: Option<NaiveDateTime>,
    actual: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> (Status, f64) {
    let today = now.date();
    match (planned, actual) {
        (Some(p), Some(a)) => {
            if a.date() <= p.date() {
                (Status::Completed, 0.0)
            } else {
                let hours = (a - p).num_seconds() as f64 / 3600.0;
                (Status::Delayed, hours.max(0.0))
            }
        }
        (Some(p), None) => {
            if p.date() < today {
                (Status::Delayed, 0.0)
            } else {
                (Status::Pending, 0.0)
            }
        }
        // completed with no plan on record
        (None, Some(_)) => (Status::Completed, 0.0),
        (None, None) => (Status::Pending, 0.0),
    }
}

/* ---------------- Tests ---------------- */
