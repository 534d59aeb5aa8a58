//! Quick win model.

use crate::model::validation::ModelValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seeded quick wins use slug ids (`clarity`, `health`, ...); user-added
/// ones use generated UUID strings.
pub type QuickWinId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickWin {
    pub id: QuickWinId,
    pub area: String,
    pub action: String,
    pub rationale: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
}

impl QuickWin {
    /// Creates a user-authored quick win.
    ///
    /// # Errors
    /// - Returns `BlankField("action")` when the action text is blank.
    pub fn custom(area: &str, action: &str, rationale: &str) -> Result<Self, ModelValidationError> {
        let action = action.trim();
        if action.is_empty() {
            return Err(ModelValidationError::BlankField("action"));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            area: area.trim().to_string(),
            action: action.to_string(),
            rationale: rationale.trim().to_string(),
            completed: false,
            is_custom: Some(true),
        })
    }

    pub fn is_custom(&self) -> bool {
        self.is_custom.unwrap_or(false)
    }

    /// Short title: the action text before the first `:`.
    pub fn headline(&self) -> &str {
        self.action
            .split(':')
            .next()
            .unwrap_or(self.action.as_str())
            .trim()
    }
}
