//! SMART goal model.
//!
//! # Responsibility
//! - Define goal records owned by one life domain.
//! - Normalize "next action" links attached to a goal.
//!
//! # Invariants
//! - `specific` is never blank for a stored goal.
//! - Deleting a goal deletes its actions (enforced by the service layer).

use crate::model::domain::LifeDomain;
use crate::model::id::{empty_as_none, RecordId};
use crate::model::validation::ModelValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type GoalId = RecordId;

/// Goal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
}

/// Kind of external link offered as a goal's next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextActionKind {
    Calendly,
    Amazon,
    Mailto,
    Custom,
}

impl NextActionKind {
    /// Label used when the caller leaves the label blank.
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Calendly => "Schedule Meeting",
            Self::Amazon => "Buy Something",
            Self::Mailto => "Send Email",
            Self::Custom => "Custom Link",
        }
    }
}

/// One-click follow-up attached to a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextAction {
    #[serde(rename = "type")]
    pub kind: NextActionKind,
    pub url: String,
    pub label: String,
}

impl NextAction {
    /// Builds a normalized link.
    ///
    /// - `mailto` targets are prefixed with `mailto:` exactly once.
    /// - Blank labels fall back to the kind's default label.
    ///
    /// # Errors
    /// - Returns `BlankField("url")` when `url` is blank.
    pub fn new(
        kind: NextActionKind,
        url: &str,
        label: &str,
    ) -> Result<Self, ModelValidationError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ModelValidationError::BlankField("url"));
        }
        let url = match kind {
            NextActionKind::Mailto => {
                format!("mailto:{}", url.strip_prefix("mailto:").unwrap_or(url))
            }
            _ => url.to_string(),
        };
        let label = match label.trim() {
            "" => kind.default_label().to_string(),
            value => value.to_string(),
        };
        Ok(Self { kind, url, label })
    }
}

/// Stored SMART goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartGoal {
    pub id: GoalId,
    pub domain_id: LifeDomain,
    /// Display label of the owning area, copied at creation.
    #[serde(default)]
    pub area: String,
    pub specific: String,
    #[serde(default)]
    pub measurable: String,
    #[serde(default)]
    pub achievable: String,
    #[serde(default)]
    pub relevant: String,
    #[serde(default)]
    pub time_bound: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<NextAction>,
    pub status: GoalStatus,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGoal {
    pub specific: String,
    pub measurable: String,
    pub achievable: String,
    pub relevant: String,
    pub time_bound: String,
    pub target_date: Option<NaiveDate>,
}

impl SmartGoal {
    /// Creates an active goal for `domain_id`.
    ///
    /// # Errors
    /// - Returns `BlankField("specific")` when the specific statement is blank.
    pub fn new(
        domain_id: LifeDomain,
        input: NewGoal,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ModelValidationError> {
        if input.specific.trim().is_empty() {
            return Err(ModelValidationError::BlankField("specific"));
        }
        Ok(Self {
            id: RecordId::generate(),
            domain_id,
            area: domain_id.display_name().to_string(),
            specific: input.specific,
            measurable: input.measurable,
            achievable: input.achievable,
            relevant: input.relevant,
            time_bound: input.time_bound,
            target_date: input.target_date,
            next_action: None,
            status: GoalStatus::Active,
            created_at,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::{NextAction, NextActionKind};

    #[test]
    fn mailto_prefix_is_added_once() {
        let action = NextAction::new(NextActionKind::Mailto, "coach@example.com", "").unwrap();
        assert_eq!(action.url, "mailto:coach@example.com");
        assert_eq!(action.label, "Send Email");

        let again = NextAction::new(NextActionKind::Mailto, "mailto:coach@example.com", "Ask")
            .unwrap();
        assert_eq!(again.url, "mailto:coach@example.com");
        assert_eq!(again.label, "Ask");
    }

    #[test]
    fn blank_url_is_rejected() {
        assert!(NextAction::new(NextActionKind::Custom, "   ", "x").is_err());
    }

    #[test]
    fn next_action_uses_type_wire_field() {
        let action =
            NextAction::new(NextActionKind::Calendly, "https://calendly.com/me", "").unwrap();
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "calendly");
        assert_eq!(json["label"], "Schedule Meeting");
    }
}
