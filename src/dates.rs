// src/dates.rs
//
// Date Normalizer: raw feed cell → canonical instant or absent.
// Never fails; absence is the only failure signal.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Literal tokens the sheet uses for "no date on record".
const PLACEHOLDERS: &[&str] = &["-", "\u{2014}", "\u{2013}"];

/// Parse a raw date cell. Empty/whitespace and placeholder dashes → `None`.
///
/// Primary format is day-first: `DD/MM/YYYY` with `/`, `-` or `.` between the
/// date fields, optionally followed by `HH:MM(:SS)` after a space or comma.
/// Anything else gets one shot at a small set of general formats.
pub fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() || PLACEHOLDERS.contains(&s) {
        return None;
    }
    parse_day_first(s).or_else(|| parse_general(s))
}

fn parse_day_first(s: &str) -> Option<NaiveDateTime> {
    let cleaned = s.replace(',', " ");
    let mut parts = cleaned.split_whitespace();
    let date_part = parts.next()?;
    let time_part = parts.next();
    if parts.next().is_some() {
        return None; // more than date + time
    }

    let fields: Vec<&str> = date_part.split(['/', '-', '.']).collect();
    if fields.len() != 3 || fields[2].len() != 4 {
        return None; // day-month-year with a 4-digit year, nothing else
    }
    let day: u32 = fields[0].parse().ok()?;
    let month: u32 = fields[1].parse().ok()?;
    let year: i32 = fields[2].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let time = match time_part {
        Some(t) => parse_hms(t)?,
        None => NaiveTime::MIN,
    };
    Some(date.and_time(time))
}

fn parse_hms(s: &str) -> Option<NaiveTime> {
    let fields: Vec<&str> = s.split(':').collect();
    if fields.len() < 2 || fields.len() > 3 {
        return None;
    }
    let hour: u32 = fields[0].parse().ok()?;
    let minute: u32 = fields[1].parse().ok()?;
    let second: u32 = match fields.get(2) {
        Some(f) => f.parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%B %d %Y",
];

/// Fallback for cells the day-first pattern rejects (ISO exports, textual
/// months). Still total: an unrecognized shape is just absent.
fn parse_general(s: &str) -> Option<NaiveDateTime> {
    let decommaed = s.replace(',', " ");
    let cleaned = decommaed.split_whitespace().collect::<Vec<_>>().join(" ");

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Inclusive end bound for a date filter: 23:59:59 of the given day.
pub fn end_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_opt(23, 59, 59).expect("23:59:59 is always valid")
}

/// Render an optional instant for display/export; absent → empty cell.
pub fn format_instant(dt: Option<NaiveDateTime>) -> String {
    match dt {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => s!(),
    }
}

/* ---------------- Tests ---------------- */
