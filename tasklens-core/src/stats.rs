//! Aggregate statistics over a task list snapshot.

use chrono::{DateTime, Utc};

use crate::overdue::is_overdue;
use crate::task::{Priority, Task};

/// Derived counts and subsets for one report request. Borrows the task
/// list and preserves its order; nothing here outlives the report call.
#[derive(Debug)]
pub struct TaskStats<'a> {
    pub total: usize,
    pub completed: Vec<&'a Task>,
    pub pending: Vec<&'a Task>,
    /// Subset of `pending`; completed tasks are never overdue.
    pub overdue: Vec<&'a Task>,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Single pass over the snapshot: completed/pending split, overdue subset,
/// priority counts. Pure function of (tasks, now), no external calls.
///
/// Tasks with an unrecognized or absent priority are counted in `total`
/// but in none of the three priority buckets.
pub fn aggregate<'a>(tasks: &'a [Task], now: DateTime<Utc>) -> TaskStats<'a> {
    let mut stats = TaskStats {
        total: tasks.len(),
        completed: Vec::new(),
        pending: Vec::new(),
        overdue: Vec::new(),
        high: 0,
        medium: 0,
        low: 0,
    };

    for task in tasks {
        match task.priority {
            Priority::High => stats.high += 1,
            Priority::Medium => stats.medium += 1,
            Priority::Low => stats.low += 1,
            Priority::Unknown => {}
        }

        if task.is_completed() {
            stats.completed.push(task);
        } else {
            stats.pending.push(task);
            if is_overdue(task.due_date(), now) {
                stats.overdue.push(task);
            }
        }
    }

    stats
}
