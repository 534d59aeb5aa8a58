//! Standalone task model.
//!
//! # Responsibility
//! - Define free-standing tasks tracked on the action dashboard.
//! - Own the status cycle used by repeated toggling.
//!
//! # Invariants
//! - Status cycles `Todo -> InProgress -> Done -> Todo`.
//! - `completed_at` is set while the task is `Done` and cleared otherwise.
//! - `category` is never blank; it defaults to `General`.

use crate::model::action::Priority;
use crate::model::id::{empty_as_none, RecordId};
use crate::model::validation::ModelValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type TaskId = RecordId;

pub const DEFAULT_TASK_CATEGORY: &str = "General";

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Next state in the toggle cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Todo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
    pub category: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
}

/// Partial task update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<NaiveDate>>,
    pub category: Option<String>,
}

impl Task {
    /// Creates a `Todo` task.
    ///
    /// # Errors
    /// - Returns `BlankField("title")` when the title is blank.
    pub fn new(input: NewTask, created_at: DateTime<Utc>) -> Result<Self, ModelValidationError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ModelValidationError::BlankField("title"));
        }
        Ok(Self {
            id: RecordId::generate(),
            title: title.to_string(),
            description: input.description.filter(|value| !value.trim().is_empty()),
            priority: input.priority,
            status: TaskStatus::Todo,
            due_date: input.due_date,
            category: normalize_category(input.category.as_deref()),
            created_at,
            completed_at: None,
        })
    }

    /// Moves to `status`, maintaining `completed_at`.
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        match (self.status, status) {
            (TaskStatus::Done, TaskStatus::Done) => {}
            (_, TaskStatus::Done) => self.completed_at = Some(now),
            _ => self.completed_at = None,
        }
        self.status = status;
    }

    /// Advances one step in the status cycle.
    pub fn cycle_status(&mut self, now: DateTime<Utc>) {
        self.set_status(self.status.next(), now);
    }

    /// Applies a partial update.
    ///
    /// # Errors
    /// - Returns `BlankField("title")` when the patch blanks the title.
    pub fn apply(&mut self, patch: TaskPatch, now: DateTime<Utc>) -> Result<(), ModelValidationError> {
        if let Some(title) = patch.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(ModelValidationError::BlankField("title"));
            }
            self.title = title.to_string();
        }
        if let Some(description) = patch.description {
            self.description = description.filter(|value| !value.trim().is_empty());
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(category) = patch.category {
            self.category = normalize_category(Some(category.as_str()));
        }
        if let Some(status) = patch.status {
            self.set_status(status, now);
        }
        Ok(())
    }
}

fn normalize_category(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(category) if !category.is_empty() => category.to_string(),
        _ => DEFAULT_TASK_CATEGORY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{NewTask, Task, TaskPatch, TaskStatus};
    use crate::model::action::Priority;
    use chrono::{TimeZone, Utc};

    fn new_task() -> Task {
        Task::new(
            NewTask {
                title: " Renew passport ".to_string(),
                description: None,
                priority: Priority::Medium,
                due_date: None,
                category: Some("".to_string()),
            },
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_task_defaults_category_and_trims_title() {
        let task = new_task();
        assert_eq!(task.title, "Renew passport");
        assert_eq!(task.category, "General");
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn status_cycles_through_all_states() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        let mut task = new_task();

        task.cycle_status(now);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.completed_at, None);

        task.cycle_status(now);
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.completed_at, Some(now));

        task.cycle_status(now);
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn patch_rejects_blank_title() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        let mut task = new_task();
        let err = task
            .apply(
                TaskPatch {
                    title: Some("  ".to_string()),
                    ..TaskPatch::default()
                },
                now,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "title must not be blank");
    }
}
