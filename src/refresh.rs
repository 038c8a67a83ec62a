// src/refresh.rs
//
// Background refresh: fetch + ingest on a worker thread, results applied
// to the Board from the caller's thread. One fetch in flight at most;
// a timer tick that lands while a fetch is outstanding is a no-op.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::board::Board;
use crate::error::FeedError;
use crate::ingest;
use crate::task::Task;

/// Source of the raw feed document.
pub trait FeedSource: Send {
    fn fetch(&self) -> Result<String, FeedError>;
}

/// What `poll` did with the worker's result, if anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No result pending (idle, or the fetch is still running).
    Idle,
    /// Collection replaced with this many tasks.
    Replaced(usize),
    /// Refresh failed; the stale collection was kept.
    Failed(String),
}

pub struct Refresher {
    pending: Option<Receiver<Result<Vec<Task>, FeedError>>>,
}

impl Default for Refresher {
    fn default() -> Self {
        Self::new()
    }
}

impl Refresher {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Timer tick: start a fetch unless one is already outstanding.
    pub fn tick<S: FeedSource + Clone + 'static>(&mut self, source: &S) {
        if self.pending.is_some() {
            logd!("Refresh: tick while fetch outstanding, skipped");
            return;
        }
        let (tx, rx) = mpsc::channel();
        let source = source.clone();
        thread::spawn(move || {
            let result = source.fetch().map(|text| ingest::ingest(&text));
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
        logf!("Refresh: fetch started");
    }

    /// Drain a finished fetch into the board, if one is ready. Success
    /// replaces the collection atomically; failure leaves it untouched.
    pub fn poll(&mut self, board: &mut Board) -> RefreshOutcome {
        let Some(rx) = self.pending.take() else {
            return RefreshOutcome::Idle;
        };
        match rx.try_recv() {
            Ok(Ok(tasks)) => {
                let n = tasks.len();
                board.replace_tasks(tasks);
                RefreshOutcome::Replaced(n)
            }
            Ok(Err(e)) => {
                let msg = e.to_string();
                board.refresh_failed(msg.clone());
                RefreshOutcome::Failed(msg)
            }
            Err(TryRecvError::Empty) => {
                // still running; keep waiting
                self.pending = Some(rx);
                RefreshOutcome::Idle
            }
            Err(TryRecvError::Disconnected) => {
                let msg = s!("refresh worker died before sending a result");
                board.refresh_failed(msg.clone());
                RefreshOutcome::Failed(msg)
            }
        }
    }
}

/// Synchronous fetch + ingest + apply, for the initial load and one-shot
/// CLI runs. First-load failure leaves the collection empty and the error
/// set, a blocking error state for the frontend to surface.
pub fn refresh_now<S: FeedSource>(board: &mut Board, source: &S) -> Result<usize, FeedError> {
    match source.fetch() {
        Ok(text) => {
            let tasks = ingest::ingest(&text);
            let n = tasks.len();
            board.replace_tasks(tasks);
            Ok(n)
        }
        Err(e) => {
            board.refresh_failed(e.to_string());
            Err(e)
        }
    }
}

/* ---------------- Sources ---------------- */

/// The collaborator-provided network source: "give me the current full
/// document as text, or fail."
#[derive(Clone, Debug)]
pub struct HttpSource {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl FeedSource for HttpSource {
    fn fetch(&self) -> Result<String, FeedError> {
        crate::net::http_get(&self.host, self.port, &self.path)
    }
}

/// Local file stand-in for the network source (offline runs, tests).
#[derive(Clone, Debug)]
pub struct FileSource(pub std::path::PathBuf);

impl FeedSource for FileSource {
    fn fetch(&self) -> Result<String, FeedError> {
        Ok(std::fs::read_to_string(&self.0)?)
    }
}
