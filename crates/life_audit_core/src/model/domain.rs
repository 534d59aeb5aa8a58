//! Wheel of Life domain model.
//!
//! # Responsibility
//! - Define the fixed set of eight life domains.
//! - Resolve per-domain display metadata without string-keyed lookups.
//!
//! # Invariants
//! - `WheelDomain::score` is always within `MIN_SCORE..=MAX_SCORE`.
//! - `target_score`, when set, is within the same range.
//! - Domains are never created or destroyed after seeding.

use crate::model::validation::ModelValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Lowest committed domain score.
pub const MIN_SCORE: u8 = 1;
/// Highest committed domain score.
pub const MAX_SCORE: u8 = 10;
/// Score assigned to every domain before any assessment.
pub const DEFAULT_SCORE: u8 = 5;

/// One of the eight fixed life areas.
///
/// Serialized as the lowercase domain id (`career`, `finance`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeDomain {
    Career,
    Finance,
    Health,
    Relationships,
    Romance,
    Growth,
    Fun,
    Environment,
}

impl LifeDomain {
    /// All domains in canonical wheel order.
    pub const ALL: [LifeDomain; 8] = [
        LifeDomain::Career,
        LifeDomain::Finance,
        LifeDomain::Health,
        LifeDomain::Relationships,
        LifeDomain::Romance,
        LifeDomain::Growth,
        LifeDomain::Fun,
        LifeDomain::Environment,
    ];

    /// Stable wire id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Finance => "finance",
            Self::Health => "health",
            Self::Relationships => "relationships",
            Self::Romance => "romance",
            Self::Growth => "growth",
            Self::Fun => "fun",
            Self::Environment => "environment",
        }
    }

    /// Parses a wire id.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str() == value.trim())
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Career => "Career & Work",
            Self::Finance => "Money & Finance",
            Self::Health => "Health & Fitness",
            Self::Relationships => "Friends & Family",
            Self::Romance => "Romance & Partner",
            Self::Growth => "Personal Growth",
            Self::Fun => "Fun & Recreation",
            Self::Environment => "Physical Environment",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Career => {
                "Your professional life, job satisfaction, career path, and future prospects."
            }
            Self::Finance => {
                "Your financial health, income, savings, debt, and sense of financial security."
            }
            Self::Health => {
                "Your physical well-being, nutrition, exercise, sleep, and energy levels."
            }
            Self::Relationships => {
                "The quality of your relationships with friends, family, and social network."
            }
            Self::Romance => {
                "The state of your primary romantic relationship or your approach to finding one."
            }
            Self::Growth => {
                "Your education, skill development, spiritual life, and self-improvement efforts."
            }
            Self::Fun => {
                "The time you dedicate to hobbies, relaxation, travel, and enjoyable activities."
            }
            Self::Environment => {
                "Your home, workspace, and the physical surroundings that impact your daily life."
            }
        }
    }

    /// CSS color used by charts and badges.
    pub fn color(self) -> &'static str {
        match self {
            Self::Career => "hsl(200, 70%, 50%)",
            Self::Finance => "hsl(150, 60%, 45%)",
            Self::Health => "hsl(120, 50%, 45%)",
            Self::Relationships => "hsl(340, 65%, 55%)",
            Self::Romance => "hsl(320, 70%, 55%)",
            Self::Growth => "hsl(270, 50%, 55%)",
            Self::Fun => "hsl(45, 90%, 55%)",
            Self::Environment => "hsl(25, 60%, 50%)",
        }
    }
}

impl Display for LifeDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored wheel entry for one life domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelDomain {
    pub id: LifeDomain,
    pub name: String,
    pub description: String,
    pub score: u8,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_priority: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_score: Option<u8>,
}

impl WheelDomain {
    /// Creates the seeded entry for `id` with the default score.
    pub fn seeded(id: LifeDomain) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            description: id.description().to_string(),
            score: DEFAULT_SCORE,
            color: id.color().to_string(),
            is_priority: None,
            target_score: None,
        }
    }

    pub fn is_priority(&self) -> bool {
        self.is_priority.unwrap_or(false)
    }
}

/// Validates a committed domain score.
///
/// # Errors
/// - Returns `ScoreOutOfRange` when `score` is outside `1..=10`.
pub fn validate_score(score: u8) -> Result<u8, ModelValidationError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(ModelValidationError::ScoreOutOfRange(score))
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_score, LifeDomain, WheelDomain};

    #[test]
    fn parse_roundtrips_every_domain() {
        for domain in LifeDomain::ALL {
            assert_eq!(LifeDomain::parse(domain.as_str()), Some(domain));
        }
        assert_eq!(LifeDomain::parse("career "), Some(LifeDomain::Career));
        assert_eq!(LifeDomain::parse("spirituality"), None);
    }

    #[test]
    fn domain_serializes_as_lowercase_id() {
        let json = serde_json::to_value(LifeDomain::Relationships).unwrap();
        assert_eq!(json, "relationships");
    }

    #[test]
    fn seeded_domain_starts_at_default_score() {
        let domain = WheelDomain::seeded(LifeDomain::Fun);
        assert_eq!(domain.score, 5);
        assert_eq!(domain.name, "Fun & Recreation");
        assert!(!domain.is_priority());
    }

    #[test]
    fn validate_score_rejects_out_of_range() {
        assert!(validate_score(0).is_err());
        assert!(validate_score(11).is_err());
        assert_eq!(validate_score(10).unwrap(), 10);
    }
}
