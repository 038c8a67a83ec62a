// src/params.rs
use crate::record::ColumnSpec;

// Feed endpoint defaults (plain HTTP; override via CLI flags)
pub const HOST: &str = "localhost";
pub const PORT: u16 = 80;
pub const PATH: &str = "/tasks.csv";

// Sentinels
pub const ALL: &str = "All";
pub const GENERAL: &str = "General";
pub const UNASSIGNED: &str = "Unassigned";

// Display / refresh
pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const DEFAULT_REFRESH_SECS: u64 = 300;

// Export
pub const DEFAULT_EXPORT_FILE: &str = "tasks_export.csv";
pub const EXPORT_HEADERS: &[&str] = &[
    "ID", "Task", "Planned", "Actual", "System", "Owner", "Status", "Delay (h)",
];

// Column resolution. Candidate names are checked before the positional
// fallbacks (0,1,2,3,7,9 in the sheet layout we see in the wild); the
// exclusion keywords keep e.g. "Task ID" from resolving as the description.
pub const ID_COL: ColumnSpec = ColumnSpec {
    names: &["unique id", "id", "task id"],
    exclude: &[],
    fallback: 0,
};

pub const TASK_COL: ColumnSpec = ColumnSpec {
    names: &["task", "description", "activity"],
    exclude: &["id", "unique"],
    fallback: 1,
};

pub const PLANNED_COL: ColumnSpec = ColumnSpec {
    names: &["planned", "planned date", "planned end"],
    exclude: &["actual"],
    fallback: 2,
};

pub const ACTUAL_COL: ColumnSpec = ColumnSpec {
    names: &["actual", "actual date", "actual end"],
    exclude: &["planned"],
    fallback: 3,
};

pub const SYSTEM_COL: ColumnSpec = ColumnSpec {
    names: &["system", "module", "application"],
    exclude: &[],
    fallback: 7,
};

pub const OWNER_COL: ColumnSpec = ColumnSpec {
    names: &["owner", "name", "responsible", "assigned to"],
    exclude: &["system", "task"],
    fallback: 9,
};
