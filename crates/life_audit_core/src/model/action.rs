//! Action item model.
//!
//! # Responsibility
//! - Define dated actions that move a goal forward.
//! - Own the completion timestamp rule for status transitions.
//!
//! # Invariants
//! - `completed_at` is stamped on the first transition into `Completed` and
//!   is never overwritten or cleared afterwards.
//! - `goal_id`/`domain_id` referenced an existing goal/domain at creation.

use crate::model::domain::LifeDomain;
use crate::model::goal::GoalId;
use crate::model::id::{empty_as_none, RecordId};
use crate::model::validation::ModelValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type ActionId = RecordId;

/// Shared priority scale for actions and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Action lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Pending,
    Completed,
    Skipped,
}

/// Stored action item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: ActionId,
    /// `None` for actions prescribed during onboarding before any goal exists.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub goal_id: Option<GoalId>,
    pub domain_id: LifeDomain,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: ActionStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input for creating an action item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAction {
    pub goal_id: Option<GoalId>,
    pub domain_id: LifeDomain,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub priority: Priority,
}

impl ActionItem {
    /// Creates a pending action.
    ///
    /// # Errors
    /// - Returns `BlankField("title")` when the title is blank.
    pub fn new(input: NewAction, created_at: DateTime<Utc>) -> Result<Self, ModelValidationError> {
        if input.title.trim().is_empty() {
            return Err(ModelValidationError::BlankField("title"));
        }
        Ok(Self {
            id: RecordId::generate(),
            goal_id: input.goal_id,
            domain_id: input.domain_id,
            title: input.title,
            description: input.description.filter(|value| !value.trim().is_empty()),
            due_date: input.due_date,
            status: ActionStatus::Pending,
            priority: input.priority,
            created_at,
            completed_at: None,
        })
    }

    /// Applies a status transition.
    ///
    /// Only the first transition into `Completed` stamps `completed_at`.
    pub fn set_status(&mut self, status: ActionStatus, now: DateTime<Utc>) {
        if status == ActionStatus::Completed && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
        self.status = status;
    }

    /// Flips between `Pending` and `Completed`, as the checkbox does.
    pub fn toggle_completed(&mut self, now: DateTime<Utc>) {
        let next = match self.status {
            ActionStatus::Completed => ActionStatus::Pending,
            ActionStatus::Pending | ActionStatus::Skipped => ActionStatus::Completed,
        };
        self.set_status(next, now);
    }

    pub fn is_completed(&self) -> bool {
        self.status == ActionStatus::Completed
    }
}
