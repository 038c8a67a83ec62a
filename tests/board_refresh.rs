// tests/board_refresh.rs
//
// Refresh boundary: atomic replace on success, stale retention on failure,
// and the single in-flight guard against overlapping timer ticks.
//
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use taskfeed::board::Board;
use taskfeed::error::FeedError;
use taskfeed::refresh::{FeedSource, Refresher, RefreshOutcome, refresh_now};

const FEED: &str = "Unique ID,Task,Planned Date\nT-1,a,10/01/2020\nT-2,b,10/01/2020\n";

#[derive(Clone)]
struct StaticSource(&'static str);
impl FeedSource for StaticSource {
    fn fetch(&self) -> Result<String, FeedError> {
        Ok(self.0.to_string())
    }
}

#[derive(Clone)]
struct FailSource;
impl FeedSource for FailSource {
    fn fetch(&self) -> Result<String, FeedError> {
        Err(FeedError::Unreachable("connection refused".into()))
    }
}

#[derive(Clone)]
struct SlowSource {
    hits: Arc<AtomicUsize>,
}
impl FeedSource for SlowSource {
    fn fetch(&self) -> Result<String, FeedError> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(150));
        Ok(FEED.to_string())
    }
}

fn poll_until_done(r: &mut Refresher, board: &mut Board) -> RefreshOutcome {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        match r.poll(board) {
            RefreshOutcome::Idle if r.in_flight() => {
                assert!(Instant::now() < deadline, "refresh never completed");
                thread::sleep(Duration::from_millis(10));
            }
            other => return other,
        }
    }
}

#[test]
fn first_load_success_populates() {
    let mut board = Board::new();
    let n = refresh_now(&mut board, &StaticSource(FEED)).unwrap();
    assert_eq!(n, 2);
    assert_eq!(board.task_count(), 2);
    assert!(board.last_error().is_none());
}

#[test]
fn first_load_failure_is_blocking_error_state() {
    let mut board = Board::new();
    let err = refresh_now(&mut board, &FailSource).unwrap_err();
    assert!(matches!(err, FeedError::Unreachable(_)));
    assert_eq!(board.task_count(), 0);
    assert!(board.last_error().unwrap().contains("connection refused"));
}

#[test]
fn background_refresh_replaces_collection() {
    let mut board = Board::new();
    let mut r = Refresher::new();
    r.tick(&StaticSource(FEED));
    let outcome = poll_until_done(&mut r, &mut board);
    assert_eq!(outcome, RefreshOutcome::Replaced(2));
    assert_eq!(board.task_count(), 2);
    assert!(!r.in_flight());
}

#[test]
fn failed_background_refresh_keeps_stale_data() {
    let mut board = Board::new();
    refresh_now(&mut board, &StaticSource(FEED)).unwrap();

    let mut r = Refresher::new();
    r.tick(&FailSource);
    let outcome = poll_until_done(&mut r, &mut board);
    assert!(matches!(outcome, RefreshOutcome::Failed(_)));
    // stale collection untouched, error surfaced
    assert_eq!(board.task_count(), 2);
    assert!(board.last_error().is_some());

    // next success clears the error state
    r.tick(&StaticSource(FEED));
    let outcome = poll_until_done(&mut r, &mut board);
    assert_eq!(outcome, RefreshOutcome::Replaced(2));
    assert!(board.last_error().is_none());
}

#[test]
fn overlapping_ticks_are_deduplicated() {
    let mut board = Board::new();
    let mut r = Refresher::new();
    let source = SlowSource { hits: Arc::new(AtomicUsize::new(0)) };

    r.tick(&source);
    assert!(r.in_flight());
    // a second tick while the fetch is outstanding must not start another
    r.tick(&source);
    r.tick(&source);

    let outcome = poll_until_done(&mut r, &mut board);
    assert_eq!(outcome, RefreshOutcome::Replaced(2));
    assert_eq!(source.hits.load(Ordering::SeqCst), 1);

    // idle again: a new tick may start a new fetch
    r.tick(&source);
    poll_until_done(&mut r, &mut board);
    assert_eq!(source.hits.load(Ordering::SeqCst), 2);
}

#[test]
fn poll_without_tick_is_idle() {
    let mut board = Board::new();
    let mut r = Refresher::new();
    assert_eq!(r.poll(&mut board), RefreshOutcome::Idle);
}
