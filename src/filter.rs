// src/filter.rs
//
// Filter Engine: a Task is visible iff every active clause holds.

use chrono::NaiveDate;

use crate::dates;
use crate::params;
use crate::search::SearchQuery;
use crate::task::{Status, Task};

/// The active filter set. Selectors hold `"All"` or an exact value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub owner: String,
    pub system: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub delayed_only: bool,
    pub not_done_only: bool,
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            owner: s!(params::ALL),
            system: s!(params::ALL),
            from: None,
            to: None,
            delayed_only: false,
            not_done_only: false,
            search: s!(),
        }
    }
}

impl FilterState {
    /// Parse the search box once per recomputation, not once per task.
    pub fn query(&self) -> SearchQuery {
        SearchQuery::parse(&self.search)
    }

    /// AND of all clauses. `query` must come from [`FilterState::query`].
    pub fn matches(&self, task: &Task, query: &SearchQuery) -> bool {
        if self.owner != params::ALL && self.owner != task.owner {
            return false;
        }
        if self.system != params::ALL && self.system != task.system {
            return false;
        }
        // date bounds apply to the planned instant; absent planned fails
        // any active bound
        if let Some(from) = self.from {
            match task.planned {
                Some(p) if p >= from.and_time(chrono::NaiveTime::MIN) => {}
                _ => return false,
            }
        }
        if let Some(to) = self.to {
            match task.planned {
                Some(p) if p <= dates::end_of_day(to) => {}
                _ => return false,
            }
        }
        if self.delayed_only && task.status != Status::Delayed {
            return false;
        }
        if self.not_done_only && task.actual.is_some() {
            return false;
        }
        query.matches(&task.description) || query.matches(&task.id)
    }
}

/// Materialize the filtered collection (recomputed from scratch each time).
pub fn apply(tasks: &[Task], filter: &FilterState) -> Vec<Task> {
    let query = filter.query();
    tasks
        .iter()
        .filter(|t| filter.matches(t, &query))
        .cloned()
        .collect()
}

/* ---------------- Tests ---------------- */
