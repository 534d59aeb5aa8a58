//! Shared validation errors for model records.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected model input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Domain or target score outside `1..=10`.
    ScoreOutOfRange(u8),
    /// Likert answer outside the scale of the questionnaire.
    AnswerOutOfRange { value: u8, min: u8, max: u8 },
    /// Required text field is blank after trim.
    BlankField(&'static str),
    /// More domains flagged as priority than allowed.
    TooManyPriorities { selected: usize, max: usize },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScoreOutOfRange(value) => {
                write!(f, "score must be within 1..=10, got {value}")
            }
            Self::AnswerOutOfRange { value, min, max } => {
                write!(f, "answer must be within {min}..={max}, got {value}")
            }
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::TooManyPriorities { selected, max } => {
                write!(f, "at most {max} priority domains allowed, got {selected}")
            }
        }
    }
}

impl Error for ModelValidationError {}
