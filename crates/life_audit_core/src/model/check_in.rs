//! Daily mood check-in model.
//!
//! # Invariants
//! - Uniqueness per `(domain_id, date)` is not enforced on insert; "today"
//!   lookups take the first match.

use crate::model::domain::LifeDomain;
use crate::model::id::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type CheckInId = RecordId;

/// Five-point mood scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Bad,
    Terrible,
}

impl Mood {
    /// Numeric value used by mood charts: terrible=1 .. great=5.
    pub fn value(self) -> u8 {
        match self {
            Self::Great => 5,
            Self::Good => 4,
            Self::Okay => 3,
            Self::Bad => 2,
            Self::Terrible => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCheckIn {
    pub id: CheckInId,
    pub date: NaiveDate,
    pub domain_id: LifeDomain,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    pub actions_completed: u32,
    pub actions_total: u32,
}

/// Input for recording a check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckIn {
    pub date: NaiveDate,
    pub domain_id: LifeDomain,
    pub mood: Mood,
    pub reflection: Option<String>,
    pub actions_completed: u32,
    pub actions_total: u32,
}

impl DailyCheckIn {
    pub fn new(input: NewCheckIn) -> Self {
        Self {
            id: RecordId::generate(),
            date: input.date,
            domain_id: input.domain_id,
            mood: input.mood,
            reflection: input.reflection.filter(|value| !value.trim().is_empty()),
            actions_completed: input.actions_completed,
            actions_total: input.actions_total,
        }
    }
}
