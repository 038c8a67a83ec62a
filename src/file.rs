// src/file.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::csv;
use crate::error::FeedError;
use crate::params;
use crate::task::Task;

/// Write the filtered (unpaginated) collection as CSV under the fixed
/// header order. Returns the path written to.
pub fn write_export(path: &Path, tasks: &[Task]) -> Result<PathBuf, FeedError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let rows: Vec<Vec<String>> = tasks.iter().map(Task::to_row).collect();
    let contents = csv::to_export_string(params::EXPORT_HEADERS, &rows);
    fs::write(path, contents)?;
    logf!("Export: OK {} rows → {}", tasks.len(), path.display());
    Ok(path.to_path_buf())
}

/// Serialize without touching disk (clipboard/stdout paths).
pub fn export_string(tasks: &[Task]) -> String {
    let rows: Vec<Vec<String>> = tasks.iter().map(Task::to_row).collect();
    csv::to_export_string(params::EXPORT_HEADERS, &rows)
}

pub fn ensure_directory(dir: &Path) -> Result<(), FeedError> {
    if dir.exists() && !dir.is_dir() {
        return Err(FeedError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
