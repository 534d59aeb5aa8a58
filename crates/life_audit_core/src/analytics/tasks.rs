//! Task dashboard counters.

use crate::model::task::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    pub total: usize,
    /// `round(100 * done / total)`, `0` without tasks.
    pub completion_rate: u32,
}

pub fn task_stats(tasks: &[Task]) -> TaskStats {
    let count = |status: TaskStatus| tasks.iter().filter(|task| task.status == status).count();
    let done = count(TaskStatus::Done);
    let completion_rate = if tasks.is_empty() {
        0
    } else {
        (done as f64 / tasks.len() as f64 * 100.0).round() as u32
    };
    TaskStats {
        todo: count(TaskStatus::Todo),
        in_progress: count(TaskStatus::InProgress),
        done,
        total: tasks.len(),
        completion_rate,
    }
}

/// Tasks matching `status`; every task when `status` is `None`.
pub fn filter_tasks(tasks: &[Task], status: Option<TaskStatus>) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| status.map_or(true, |wanted| task.status == wanted))
        .collect()
}
