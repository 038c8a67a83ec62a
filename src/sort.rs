// src/sort.rs
//
// Sort Engine: stable, type-aware ordering over the filtered collection.
//
// - Instant columns: absent values sort after all present values under
//   either direction; direction only reorders the present ones.
// - Numeric columns: arithmetic comparison.
// - Everything else: natural string order ("Task 2" before "Task 10").

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::task::Task;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Description,
    Planned,
    Actual,
    System,
    Owner,
    Status,
    Delay,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }

    fn flip(self) -> Direction {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// Current sort column + direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub dir: Direction,
}

impl Default for SortState {
    fn default() -> Self {
        Self { key: SortKey::Planned, dir: Direction::Asc }
    }
}

impl SortState {
    /// Re-selecting the active column flips direction; a new column resets
    /// to ascending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.dir = self.dir.flip();
        } else {
            self.key = key;
            self.dir = Direction::Asc;
        }
    }
}

/// Stable sort in place.
pub fn sort_tasks(tasks: &mut [Task], state: SortState) {
    tasks.sort_by(|a, b| compare(a, b, state));
}

fn compare(a: &Task, b: &Task, state: SortState) -> Ordering {
    let dir = state.dir;
    match state.key {
        SortKey::Id => dir.apply(natural_cmp(&a.id, &b.id)),
        SortKey::Description => dir.apply(natural_cmp(&a.description, &b.description)),
        SortKey::Planned => cmp_instant(a.planned, b.planned, dir),
        SortKey::Actual => cmp_instant(a.actual, b.actual, dir),
        SortKey::System => dir.apply(natural_cmp(&a.system, &b.system)),
        SortKey::Owner => dir.apply(natural_cmp(&a.owner, &b.owner)),
        SortKey::Status => dir.apply(natural_cmp(a.status.label(), b.status.label())),
        SortKey::Delay => dir.apply(a.delay_hours.total_cmp(&b.delay_hours)),
    }
}

/// Nulls-last regardless of direction.
fn cmp_instant(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>, dir: Direction) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => dir.apply(x.cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive compare with digit runs compared by numeric value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let da = take_digits(&mut ca);
                let db = take_digits(&mut cb);
                let ord = cmp_digit_run(&da, &db);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                ca.next();
                cb.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = s!();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            run.push(c);
            chars.next();
        } else {
            break;
        }
    }
    run
}

fn cmp_digit_run(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/* ---------------- Tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_numeric_runs() {
        assert_eq!(natural_cmp("Task 2", "Task 10"), Ordering::Less);
        assert_eq!(natural_cmp("Task 10", "Task 2"), Ordering::Greater);
        assert_eq!(natural_cmp("task 2", "TASK 2"), Ordering::Equal);
        assert_eq!(natural_cmp("a2b", "a2c"), Ordering::Less);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("v1.9", "v1.10"), Ordering::Less);
    }

    #[test]
    fn select_toggles_and_resets() {
        let mut s = SortState::default();
        assert_eq!(s.key, SortKey::Planned);
        s.select(SortKey::Planned);
        assert_eq!(s.dir, Direction::Desc);
        s.select(SortKey::Owner);
        assert_eq!((s.key, s.dir), (SortKey::Owner, Direction::Asc));
    }

    fn mini(id: &str, planned: Option<&str>) -> Task {
        let planned = planned.and_then(crate::dates::parse_instant);
        Task {
            id: s!(id),
            description: s!(),
            planned,
            actual: None,
            system: s!(),
            owner: s!(),
            status: crate::task::Status::Pending,
            delay_hours: 0.0,
        }
    }

    #[test]
    fn absent_instants_sort_last_both_directions() {
        let mut tasks = vec![
            mini("a", None),
            mini("b", Some("02/01/2024")),
            mini("c", Some("01/01/2024")),
        ];
        sort_tasks(&mut tasks, SortState { key: SortKey::Planned, dir: Direction::Asc });
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);

        sort_tasks(&mut tasks, SortState { key: SortKey::Planned, dir: Direction::Desc });
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn id_sort_is_natural() {
        let mut tasks = vec![mini("T-10", None), mini("T-2", None)];
        sort_tasks(&mut tasks, SortState { key: SortKey::Id, dir: Direction::Asc });
        assert_eq!(tasks[0].id, "T-2");
    }

    #[test]
    fn stable_on_ties() {
        let mut tasks = vec![mini("first", None), mini("second", None)];
        sort_tasks(&mut tasks, SortState { key: SortKey::Planned, dir: Direction::Asc });
        assert_eq!(tasks[0].id, "first");
        assert_eq!(tasks[1].id, "second");
    }
}
