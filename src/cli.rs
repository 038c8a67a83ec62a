// src/cli.rs
use std::{env, error::Error, path::PathBuf, thread, time::Duration};

use crate::board::Board;
use crate::file;
use crate::filter::FilterState;
use crate::params;
use crate::refresh::{self, FeedSource, FileSource, HttpSource, Refresher, RefreshOutcome};
use crate::sort::SortKey;

/// Where the feed comes from for this run.
#[derive(Clone)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl FeedSource for Source {
    fn fetch(&self) -> Result<String, crate::error::FeedError> {
        match self {
            Source::Http(s) => s.fetch(),
            Source::File(s) => s.fetch(),
        }
    }
}

pub struct Params {
    pub source: Source,
    pub filter: FilterState,
    pub sort: Option<SortKey>,
    pub desc: bool,
    pub page: usize,
    pub page_size: usize,
    pub out: Option<PathBuf>,
    pub watch: Option<u64>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            source: Source::Http(HttpSource {
                host: s!(params::HOST),
                port: params::PORT,
                path: s!(params::PATH),
            }),
            filter: FilterState::default(),
            sort: None,
            desc: false,
            page: 1,
            page_size: params::DEFAULT_PAGE_SIZE,
            out: None,
            watch: None,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut p = Params::new();
    let mut host = s!(params::HOST);
    let mut port = params::PORT;
    let mut path = s!(params::PATH);
    let mut from_file: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--host" => host = args.next().ok_or("Missing value for --host")?,
            "--port" => port = args.next().ok_or("Missing value for --port")?.parse()?,
            "--path" => path = args.next().ok_or("Missing value for --path")?,
            "-f" | "--file" => from_file = Some(PathBuf::from(args.next().ok_or("Missing feed file path")?)),
            "--owner" => p.filter.owner = args.next().ok_or("Missing value for --owner")?,
            "--system" => p.filter.system = args.next().ok_or("Missing value for --system")?,
            "--from" => p.filter.from = Some(parse_date_arg(&args.next().ok_or("Missing value for --from")?)?),
            "--to" => p.filter.to = Some(parse_date_arg(&args.next().ok_or("Missing value for --to")?)?),
            "--delayed" => p.filter.delayed_only = true,
            "--not-done" => p.filter.not_done_only = true,
            "-s" | "--search" => p.filter.search = args.next().ok_or("Missing value for --search")?,
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                p.sort = Some(parse_sort_key(&v)?);
            }
            "--desc" => p.desc = true,
            "--page" => p.page = args.next().ok_or("Missing value for --page")?.parse()?,
            "--page-size" => p.page_size = args.next().ok_or("Missing value for --page-size")?.parse()?,
            "-o" | "--out" => p.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "-w" | "--watch" => {
                let secs: u64 = args.next().ok_or("Missing value for --watch")?.parse()?;
                p.watch = Some(secs);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if let Some(f) = from_file {
        p.source = Source::File(FileSource(f));
    } else {
        p.source = Source::Http(HttpSource { host, port, path });
    }
    Ok(p)
}

fn parse_date_arg(s: &str) -> Result<chrono::NaiveDate, Box<dyn Error>> {
    crate::dates::parse_instant(s)
        .map(|dt| dt.date())
        .ok_or_else(|| format!("Unparseable date: {}", s).into())
}

fn parse_sort_key(s: &str) -> Result<SortKey, Box<dyn Error>> {
    Ok(match s.to_ascii_lowercase().as_str() {
        "id" => SortKey::Id,
        "task" | "description" => SortKey::Description,
        "planned" => SortKey::Planned,
        "actual" => SortKey::Actual,
        "system" => SortKey::System,
        "owner" => SortKey::Owner,
        "status" => SortKey::Status,
        "delay" => SortKey::Delay,
        other => return Err(format!("Unknown sort column: {}", other).into()),
    })
}

pub fn run(p: Params) -> Result<(), Box<dyn Error>> {
    let mut board = Board::new();
    board.set_filter(p.filter.clone());
    board.set_page_size(p.page_size);
    if let Some(key) = p.sort {
        board.select_sort(key);
        if p.desc {
            board.select_sort(key); // second select flips to descending
        }
    }
    board.set_page(p.page);

    // First load is blocking; without data there is nothing to show.
    refresh::refresh_now(&mut board, &p.source)?;

    if let Some(out) = &p.out {
        let tasks = board.filtered();
        let path = file::write_export(out, &tasks)?;
        println!("Exported {} tasks → {}", tasks.len(), path.display());
        return Ok(());
    }

    print_view(&board);

    if let Some(secs) = p.watch {
        watch_loop(&mut board, &p.source, secs);
    }
    Ok(())
}

/// Recurring timer refresh. Stale data stays on screen across failures.
fn watch_loop(board: &mut Board, source: &Source, secs: u64) {
    let mut refresher = Refresher::new();
    loop {
        thread::sleep(Duration::from_secs(secs.max(1)));
        refresher.tick(source);
        let outcome = loop {
            match refresher.poll(board) {
                RefreshOutcome::Idle if refresher.in_flight() => {
                    thread::sleep(Duration::from_millis(50));
                }
                other => break other,
            }
        };
        match outcome {
            RefreshOutcome::Replaced(n) => println!("Refreshed: {n} tasks"),
            RefreshOutcome::Failed(e) => println!("Refresh failed, showing stale data: {e}"),
            RefreshOutcome::Idle => {}
        }
        print_view(board);
    }
}

fn print_view(board: &Board) {
    let view = board.view();

    println!(
        "{:<10} {:<40} {:<17} {:<17} {:<12} {:<14} {:<10} {:>9}",
        "ID", "Task", "Planned", "Actual", "System", "Owner", "Status", "Delay (h)"
    );
    for t in &view.tasks {
        println!(
            "{:<10} {:<40} {:<17} {:<17} {:<12} {:<14} {:<10} {:>9.1}",
            clip(&t.id, 10),
            clip(&t.description, 40),
            crate::dates::format_instant(t.planned),
            crate::dates::format_instant(t.actual),
            clip(&t.system, 12),
            clip(&t.owner, 14),
            t.status.label(),
            t.delay_hours,
        );
    }

    let s = view.summary;
    println!(
        "Page {}/{} · {} tasks · {} completed · {} delayed ({:.1}%) · {} open",
        view.info.page, view.info.pages, s.total, s.completed, s.delayed, s.delayed_rate, s.not_done
    );
    if let Some(err) = board.last_error() {
        println!("Last refresh failed: {err}");
    }
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s!(s);
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
