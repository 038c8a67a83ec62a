// src/board.rs
//! Board: the canonical task collection plus the active view state.
//!
//! Owns what the frontends read: the last successfully ingested collection,
//! the filter set, the sort column/direction and the page cursor. Every
//! change recomputes filtered → sorted → paginated from scratch; nothing is
//! patched incrementally, so there is no cache to invalidate.
//!
//! A failed refresh never touches the collection; consumers keep reading
//! the stale data and see the error string alongside it.

use crate::filter::{self, FilterState};
use crate::page::{self, PageInfo};
use crate::params;
use crate::sort::{self, SortKey, SortState};
use crate::summary::Summary;
use crate::task::Task;

pub struct Board {
    tasks: Vec<Task>,
    filter: FilterState,
    sort: SortState,
    page: usize,
    page_size: usize,
    last_error: Option<String>,
}

/// What a frontend renders: the visible slice plus page and count metadata.
#[derive(Clone, Debug)]
pub struct View {
    pub tasks: Vec<Task>,
    pub info: PageInfo,
    /// Computed over the filtered collection, not the visible slice.
    pub summary: Summary,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: FilterState::default(),
            sort: SortState::default(),
            page: 1,
            page_size: params::DEFAULT_PAGE_SIZE,
            last_error: None,
        }
    }

    /* ---------------- Ingestion boundary ---------------- */

    /// Atomically replace the whole collection (successful refresh).
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        logf!("Board: collection replaced, {} tasks", tasks.len());
        self.tasks = tasks;
        self.last_error = None;
    }

    /// Record a refresh failure; the stale collection stays untouched.
    pub fn refresh_failed(&mut self, err: String) {
        loge!("Board: refresh failed: {err}");
        self.last_error = Some(err);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /* ---------------- View state ---------------- */

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Any filter change restarts paging at page 1.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_search(&mut self, query: &str) {
        self.filter.search = s!(query);
        self.page = 1;
    }

    /// Column select: toggles direction on the active column, resets to
    /// ascending on a new one. Either way paging restarts at page 1.
    pub fn select_sort(&mut self, key: SortKey) {
        self.sort.select(key);
        self.page = 1;
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_page(&mut self, p: usize) {
        self.page = p.max(1);
    }

    pub fn set_page_size(&mut self, n: usize) {
        self.page_size = n.max(1);
        self.page = 1;
    }

    /* ---------------- Derived collections ---------------- */

    /// Filtered and sorted, unpaginated. This is what the export
    /// collaborator consumes.
    pub fn filtered(&self) -> Vec<Task> {
        let mut kept = filter::apply(&self.tasks, &self.filter);
        sort::sort_tasks(&mut kept, self.sort);
        kept
    }

    /// The visible slice plus metadata, recomputed from scratch.
    pub fn view(&self) -> View {
        let kept = self.filtered();
        let summary = Summary::over(&kept);
        let visible = page::slice(&kept, self.page_size, self.page).to_vec();
        let info = PageInfo {
            page: self.page,
            page_size: self.page_size,
            total: kept.len(),
            pages: page::total_pages(kept.len(), self.page_size),
        };
        View { tasks: visible, info, summary }
    }
}

/* ---------------- Tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest;

    const FEED: &str = "\
Unique ID,Task,Planned Date,Actual Date,Col4,Col5,Col6,System,Col8,Name
T-1,Alpha task,10/01/2024,10/01/2024,,,,Billing,,Ana
T-2,Beta task,10/01/2024,12/01/2024,,,,Billing,,Ben
T-3,Gamma task,10/01/2024,,,,,Stores,,Ana
T-4,Delta task,20/01/2024,,,,,Stores,,Ben
";

    fn board() -> Board {
        let now = crate::dates::parse_instant("15/01/2024").unwrap();
        let mut b = Board::new();
        b.replace_tasks(ingest::ingest_at(FEED, now));
        b
    }

    #[test]
    fn view_reflects_filter_and_summary() {
        let mut b = board();
        assert_eq!(b.view().summary.total, 4);

        let mut f = FilterState::default();
        f.owner = s!("Ana");
        b.set_filter(f);
        let v = b.view();
        assert_eq!(v.summary.total, 2);
        assert_eq!(v.info.total, 2);
        // summary covers filtered set: T-1 completed, T-3 delayed (overdue)
        assert_eq!(v.summary.completed, 1);
        assert_eq!(v.summary.delayed, 1);
    }

    #[test]
    fn page_resets_on_filter_sort_and_size_changes() {
        let mut b = board();
        b.set_page_size(1);
        b.set_page(3);
        assert_eq!(b.view().info.page, 3);

        b.set_search("task");
        assert_eq!(b.view().info.page, 1);

        b.set_page(2);
        b.select_sort(SortKey::Owner);
        assert_eq!(b.view().info.page, 1);

        b.set_page(2);
        b.set_page_size(2);
        assert_eq!(b.view().info.page, 1);
    }

    #[test]
    fn sort_toggle_flips_direction() {
        let mut b = board();
        b.select_sort(SortKey::Id);
        let first = b.view().tasks[0].id.clone();
        b.select_sort(SortKey::Id);
        let flipped = b.view().tasks[0].id.clone();
        assert_ne!(first, flipped);
    }

    #[test]
    fn failed_refresh_keeps_stale_collection() {
        let mut b = board();
        assert_eq!(b.task_count(), 4);
        b.refresh_failed(s!("feed unreachable: timed out"));
        assert_eq!(b.task_count(), 4);
        assert!(b.last_error().is_some());

        // next successful pass clears the error
        b.replace_tasks(Vec::new());
        assert!(b.last_error().is_none());
        assert_eq!(b.task_count(), 0);
    }

    #[test]
    fn export_set_is_filtered_not_paginated() {
        let mut b = board();
        b.set_page_size(1);
        b.set_page(1);
        assert_eq!(b.view().tasks.len(), 1);
        assert_eq!(b.filtered().len(), 4);
    }
}
