// src/summary.rs
use crate::task::{Status, Task};

/// Aggregate counts over the filtered (not paginated) collection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub delayed: usize,
    pub not_done: usize,
    /// delayed / total, as a percentage; 0 for an empty collection.
    pub delayed_rate: f64,
}

impl Summary {
    pub fn over(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.status == Status::Completed).count();
        let delayed = tasks.iter().filter(|t| t.status == Status::Delayed).count();
        let not_done = tasks.iter().filter(|t| t.actual.is_none()).count();
        let delayed_rate = if total == 0 {
            0.0
        } else {
            delayed as f64 * 100.0 / total as f64
        };
        Self { total, completed, delayed, not_done, delayed_rate }
    }
}
