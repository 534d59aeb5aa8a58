//! Guided assessments that turn answers into scores and actions.
//!
//! # Responsibility
//! - Host the onboarding questionnaire, priority selection and diagnosis.
//! - Host the Satisfaction With Life Scale.
//!
//! # Invariants
//! - Assessments never touch persistence; callers commit their results.
//!
//! # See also
//! - `service::audit_service` for committing onboarding results.

use crate::model::domain::LifeDomain;
use crate::model::validation::ModelValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod catalog;
pub mod diagnosis;
pub mod onboarding;
pub mod priority;
pub mod swls;

/// Error for invalid assessment input or out-of-order flow calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    InvalidAnswer(ModelValidationError),
    UnknownRootCause {
        domain: LifeDomain,
        root_cause: String,
    },
    UnknownAction {
        domain: LifeDomain,
        action_id: String,
    },
    NoActionsSelected(LifeDomain),
    PrioritiesIncomplete {
        selected: usize,
    },
    WrongPhase {
        expected: &'static str,
        actual: &'static str,
    },
}

impl Display for AssessmentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAnswer(err) => write!(f, "invalid answer: {err}"),
            Self::UnknownRootCause { domain, root_cause } => {
                write!(f, "unknown root cause `{root_cause}` for domain {domain}")
            }
            Self::UnknownAction { domain, action_id } => {
                write!(f, "unknown action `{action_id}` for domain {domain}")
            }
            Self::NoActionsSelected(domain) => {
                write!(f, "select at least one action for domain {domain}")
            }
            Self::PrioritiesIncomplete { selected } => write!(
                f,
                "exactly {} priority domains are required, got {selected}",
                priority::MAX_PRIORITY_DOMAINS
            ),
            Self::WrongPhase { expected, actual } => {
                write!(f, "operation requires phase `{expected}`, current phase is `{actual}`")
            }
        }
    }
}

impl Error for AssessmentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAnswer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelValidationError> for AssessmentError {
    fn from(value: ModelValidationError) -> Self {
        Self::InvalidAnswer(value)
    }
}
