//! Satisfaction With Life Scale (SWLS).
//!
//! # Responsibility
//! - Hold the five SWLS statements and collect 1-7 answers.
//! - Score and interpret the total.
//!
//! # Invariants
//! - A total exists only when all five items are answered.
//! - Totals are always within `5..=35`.

use crate::assessment::AssessmentError;
use crate::model::validation::ModelValidationError;

pub const SWLS_MIN_ANSWER: u8 = 1;
pub const SWLS_MAX_ANSWER: u8 = 7;
pub const SWLS_ITEM_COUNT: usize = 5;

/// SWLS statement with its reflection hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwlsItem {
    pub text: &'static str,
    pub hint: &'static str,
}

pub const SWLS_ITEMS: [SwlsItem; SWLS_ITEM_COUNT] = [
    SwlsItem {
        text: "In most ways my life is close to my ideal.",
        hint: "Consider how your current reality matches your vision of an ideal life.",
    },
    SwlsItem {
        text: "The conditions of my life are excellent.",
        hint: "Think about your living situation, health, relationships, and resources.",
    },
    SwlsItem {
        text: "I am satisfied with my life.",
        hint: "An overall assessment of your contentment with life as it is now.",
    },
    SwlsItem {
        text: "So far I have gotten the important things I want in life.",
        hint: "Reflect on your achievements and progress toward meaningful goals.",
    },
    SwlsItem {
        text: "If I could live my life over, I would change almost nothing.",
        hint: "Consider your life path and the choices you've made.",
    },
];

/// Interpretation band of a SWLS total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatisfactionBand {
    HighlySatisfied,
    QuiteSatisfied,
    Average,
    BelowAverage,
    Dissatisfied,
}

impl SatisfactionBand {
    /// Band for `total`; thresholds are inclusive lower bounds.
    pub fn from_total(total: u8) -> Self {
        match total {
            30.. => Self::HighlySatisfied,
            25..=29 => Self::QuiteSatisfied,
            20..=24 => Self::Average,
            15..=19 => Self::BelowAverage,
            _ => Self::Dissatisfied,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HighlySatisfied => "Highly Satisfied",
            Self::QuiteSatisfied => "Quite Satisfied",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::Dissatisfied => "Dissatisfied",
        }
    }

    pub fn range(self) -> &'static str {
        match self {
            Self::HighlySatisfied => "30-35",
            Self::QuiteSatisfied => "25-29",
            Self::Average => "20-24",
            Self::BelowAverage => "15-19",
            Self::Dissatisfied => "5-14",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::HighlySatisfied => "Continue nurturing what's working. The Wheel of Life can help you identify areas for even greater fulfillment.",
            Self::QuiteSatisfied => "Use this audit to pinpoint specific areas where small improvements could elevate your satisfaction further.",
            Self::Average => "This is an ideal starting point for a life audit. You have solid foundations to build upon.",
            Self::BelowAverage => "This audit will help identify which areas need attention most. Consider reaching out to supportive friends or professionals.",
            Self::Dissatisfied => "This audit can help clarify what needs to change. We strongly encourage seeking support from trusted people or a counselor.",
        }
    }
}

/// Sums five complete answers.
///
/// # Errors
/// - `InvalidAnswer` when any answer is outside `1..=7`.
pub fn swls_total(answers: &[u8; SWLS_ITEM_COUNT]) -> Result<u8, AssessmentError> {
    for value in answers {
        validate_answer(*value)?;
    }
    Ok(answers.iter().sum())
}

/// In-progress SWLS questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwlsAssessment {
    answers: [Option<u8>; SWLS_ITEM_COUNT],
    current: usize,
}

impl SwlsAssessment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &'static SwlsItem {
        &SWLS_ITEMS[self.current]
    }

    /// Records the answer for the current item.
    ///
    /// # Errors
    /// - `InvalidAnswer` when `value` is outside `1..=7`.
    pub fn answer(&mut self, value: u8) -> Result<(), AssessmentError> {
        validate_answer(value)?;
        self.answers[self.current] = Some(value);
        Ok(())
    }

    /// Advances to the next item; returns `false` on the last item.
    pub fn next_item(&mut self) -> bool {
        if self.current + 1 < SWLS_ITEM_COUNT {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_item(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn all_answered(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// Total score once every item is answered.
    pub fn total(&self) -> Option<u8> {
        if !self.all_answered() {
            return None;
        }
        Some(self.answers.iter().flatten().sum())
    }

    pub fn band(&self) -> Option<SatisfactionBand> {
        self.total().map(SatisfactionBand::from_total)
    }
}

fn validate_answer(value: u8) -> Result<u8, AssessmentError> {
    if (SWLS_MIN_ANSWER..=SWLS_MAX_ANSWER).contains(&value) {
        Ok(value)
    } else {
        Err(AssessmentError::InvalidAnswer(
            ModelValidationError::AnswerOutOfRange {
                value,
                min: SWLS_MIN_ANSWER,
                max: SWLS_MAX_ANSWER,
            },
        ))
    }
}
