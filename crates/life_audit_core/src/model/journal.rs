//! Good Time Journal entries.

use crate::model::id::RecordId;
use crate::model::validation::ModelValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type JournalEntryId = RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engagement {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    Energized,
    Neutral,
    Drained,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodTimeEntry {
    pub id: JournalEntryId,
    pub date: NaiveDate,
    pub activity: String,
    pub engagement: Engagement,
    pub energy: Energy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GoodTimeEntry {
    /// # Errors
    /// - Returns `BlankField("activity")` when the activity is blank.
    pub fn new(
        date: NaiveDate,
        activity: &str,
        engagement: Engagement,
        energy: Energy,
        notes: Option<String>,
    ) -> Result<Self, ModelValidationError> {
        let activity = activity.trim();
        if activity.is_empty() {
            return Err(ModelValidationError::BlankField("activity"));
        }
        Ok(Self {
            id: RecordId::generate(),
            date,
            activity: activity.to_string(),
            engagement,
            energy,
            notes: notes.filter(|value| !value.trim().is_empty()),
        })
    }
}
