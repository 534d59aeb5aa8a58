//! Onboarding questionnaire state machine.
//!
//! # Responsibility
//! - Walk the user through 3 statements per domain, then show scores.
//! - Collect exactly two priority domains.
//! - Run one diagnosis per priority domain and gather prescribed actions.
//!
//! # Invariants
//! - Phases only move forward, except `previous()` inside the questions and
//!   `back_to_questions()` inside one diagnosis.
//! - An auto-advance ticket is honored only if no answer or navigation
//!   happened after it was issued.
//! - Domains with fewer than 3 answers score `DEFAULT_SCORE`.
//!
//! # See also
//! - `assessment::diagnosis` for root-cause filtering rules.

use crate::assessment::catalog::{domain_questions, QUESTIONS_PER_DOMAIN};
use crate::assessment::diagnosis::{DiagnosisSession, DiagnosisStep};
use crate::assessment::priority::PrioritySelection;
use crate::assessment::AssessmentError;
use crate::model::action::NewAction;
use crate::model::domain::{LifeDomain, DEFAULT_SCORE, MAX_SCORE};
use crate::model::validation::ModelValidationError;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;
use std::time::Duration;

/// Delay the caller waits before firing an [`AdvanceTicket`].
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(300);

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Where the user is in onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingPhase {
    AskingQuestions {
        domain_index: usize,
        question_index: usize,
    },
    /// Scores are computed and shown; waiting for the user to continue.
    Scoring,
    PrioritySelection,
    Diagnosis {
        priority_index: usize,
        step: DiagnosisStep,
    },
    Complete,
}

impl OnboardingPhase {
    /// Stable phase name used in errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::AskingQuestions { .. } => "asking_questions",
            Self::Scoring => "scoring",
            Self::PrioritySelection => "priority_selection",
            Self::Diagnosis { .. } => "diagnosis",
            Self::Complete => "complete",
        }
    }
}

/// Deferred "move to next question" request bound to one answer.
///
/// The caller fires it after [`AUTO_ADVANCE_DELAY`]. Any later answer or
/// navigation invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    generation: u64,
    domain_index: usize,
    question_index: usize,
}

/// Everything onboarding produced, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingResult {
    pub scores: BTreeMap<LifeDomain, u8>,
    pub priority_domains: Vec<LifeDomain>,
    pub prescribed_actions: Vec<NewAction>,
}

/// Converts three 1-5 answers into a 1-10 score.
///
/// `round((mean / 5) * 10)`; anything but exactly three answers yields the
/// default score.
pub fn score_from_answers(answers: &[u8]) -> u8 {
    if answers.len() != QUESTIONS_PER_DOMAIN {
        return DEFAULT_SCORE;
    }
    let sum: u32 = answers.iter().map(|value| u32::from(*value)).sum();
    let mean = f64::from(sum) / QUESTIONS_PER_DOMAIN as f64;
    let scaled = ((mean / f64::from(LIKERT_MAX)) * f64::from(MAX_SCORE)).round();
    scaled.clamp(0.0, f64::from(MAX_SCORE)) as u8
}

#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    phase: OnboardingPhase,
    answers: BTreeMap<LifeDomain, [Option<u8>; QUESTIONS_PER_DOMAIN]>,
    generation: u64,
    pending: Option<AdvanceTicket>,
    scores: BTreeMap<LifeDomain, u8>,
    priorities: PrioritySelection,
    diagnosis: Option<DiagnosisSession>,
    prescribed: Vec<NewAction>,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            phase: OnboardingPhase::AskingQuestions {
                domain_index: 0,
                question_index: 0,
            },
            answers: BTreeMap::new(),
            generation: 0,
            pending: None,
            scores: BTreeMap::new(),
            priorities: PrioritySelection::new(),
            diagnosis: None,
            prescribed: Vec::new(),
        }
    }

    pub fn phase(&self) -> OnboardingPhase {
        self.phase
    }

    /// Domain and statement currently asked, if in the questions phase.
    pub fn current_question(&self) -> Option<(LifeDomain, &'static str)> {
        match self.phase {
            OnboardingPhase::AskingQuestions {
                domain_index,
                question_index,
            } => {
                let domain = LifeDomain::ALL[domain_index];
                Some((domain, domain_questions(domain)[question_index]))
            }
            _ => None,
        }
    }

    /// Fraction of statements answered, `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = LifeDomain::ALL.len() * QUESTIONS_PER_DOMAIN;
        let answered: usize = self
            .answers
            .values()
            .map(|slots| slots.iter().filter(|slot| slot.is_some()).count())
            .sum();
        answered as f64 / total as f64
    }

    pub fn answers_for(&self, domain: LifeDomain) -> Vec<u8> {
        self.answers
            .get(&domain)
            .map(|slots| slots.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    /// Records an answer for the current statement.
    ///
    /// Cancels any outstanding ticket and returns a new one that advances
    /// past this statement when fired.
    ///
    /// # Errors
    /// - `InvalidAnswer` when `value` is outside `1..=5`.
    /// - `WrongPhase` outside the questions phase.
    pub fn answer(&mut self, value: u8) -> Result<AdvanceTicket, AssessmentError> {
        let OnboardingPhase::AskingQuestions {
            domain_index,
            question_index,
        } = self.phase
        else {
            return Err(self.wrong_phase("asking_questions"));
        };
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            return Err(AssessmentError::InvalidAnswer(
                ModelValidationError::AnswerOutOfRange {
                    value,
                    min: LIKERT_MIN,
                    max: LIKERT_MAX,
                },
            ));
        }

        let domain = LifeDomain::ALL[domain_index];
        self.answers.entry(domain).or_default()[question_index] = Some(value);

        self.generation += 1;
        let ticket = AdvanceTicket {
            generation: self.generation,
            domain_index,
            question_index,
        };
        self.pending = Some(ticket);
        Ok(ticket)
    }

    /// Fires a ticket; returns whether the flow advanced.
    ///
    /// Stale tickets (superseded by another answer or by navigation) are
    /// ignored.
    pub fn fire_advance(&mut self, ticket: AdvanceTicket) -> bool {
        if self.pending != Some(ticket) || ticket.generation != self.generation {
            debug!(
                "event=advance_ignored module=assessment status=stale generation={} current={}",
                ticket.generation, self.generation
            );
            return false;
        }
        self.pending = None;

        let last_question = QUESTIONS_PER_DOMAIN - 1;
        let last_domain = LifeDomain::ALL.len() - 1;
        self.phase = if ticket.question_index < last_question {
            OnboardingPhase::AskingQuestions {
                domain_index: ticket.domain_index,
                question_index: ticket.question_index + 1,
            }
        } else if ticket.domain_index < last_domain {
            OnboardingPhase::AskingQuestions {
                domain_index: ticket.domain_index + 1,
                question_index: 0,
            }
        } else {
            self.compute_scores();
            OnboardingPhase::Scoring
        };
        true
    }

    /// Drops any outstanding ticket without moving.
    pub fn cancel_pending_advance(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Steps back one statement, crossing into the previous domain's last
    /// statement at a boundary. No-op on the very first statement.
    pub fn previous(&mut self) {
        let OnboardingPhase::AskingQuestions {
            domain_index,
            question_index,
        } = self.phase
        else {
            return;
        };
        self.cancel_pending_advance();
        if question_index > 0 {
            self.phase = OnboardingPhase::AskingQuestions {
                domain_index,
                question_index: question_index - 1,
            };
        } else if domain_index > 0 {
            self.phase = OnboardingPhase::AskingQuestions {
                domain_index: domain_index - 1,
                question_index: QUESTIONS_PER_DOMAIN - 1,
            };
        }
    }

    /// Computed scores; empty before the questions are finished.
    pub fn scores(&self) -> &BTreeMap<LifeDomain, u8> {
        &self.scores
    }

    /// Leaves the score summary for priority selection.
    ///
    /// # Errors
    /// - `WrongPhase` unless scores are being shown.
    pub fn begin_priority_selection(&mut self) -> Result<(), AssessmentError> {
        if self.phase != OnboardingPhase::Scoring {
            return Err(self.wrong_phase("scoring"));
        }
        self.phase = OnboardingPhase::PrioritySelection;
        Ok(())
    }

    /// # Errors
    /// - `WrongPhase` outside priority selection.
    pub fn toggle_priority(&mut self, domain: LifeDomain) -> Result<(), AssessmentError> {
        if self.phase != OnboardingPhase::PrioritySelection {
            return Err(self.wrong_phase("priority_selection"));
        }
        self.priorities.toggle(domain);
        Ok(())
    }

    pub fn priorities(&self) -> &PrioritySelection {
        &self.priorities
    }

    /// Starts diagnosing the first priority domain.
    ///
    /// # Errors
    /// - `WrongPhase` outside priority selection.
    /// - `PrioritiesIncomplete` unless exactly two domains are selected.
    pub fn start_diagnosis(&mut self) -> Result<(), AssessmentError> {
        if self.phase != OnboardingPhase::PrioritySelection {
            return Err(self.wrong_phase("priority_selection"));
        }
        if !self.priorities.is_complete() {
            return Err(AssessmentError::PrioritiesIncomplete {
                selected: self.priorities.selected().len(),
            });
        }
        self.enter_diagnosis(0);
        Ok(())
    }

    /// Active diagnosis session, if any.
    pub fn diagnosis(&self) -> Option<&DiagnosisSession> {
        self.diagnosis.as_ref()
    }

    /// # Errors
    /// - `WrongPhase` unless on the diagnosis question step.
    /// - `UnknownRootCause` for a tag the domain does not offer.
    pub fn toggle_root_cause(&mut self, root_cause: &str) -> Result<(), AssessmentError> {
        self.session_at(DiagnosisStep::Questions)?
            .toggle_root_cause(root_cause)
    }

    /// Moves the current diagnosis to its recommendations step.
    ///
    /// # Errors
    /// - `WrongPhase` unless on the diagnosis question step.
    pub fn show_recommendations(&mut self) -> Result<(), AssessmentError> {
        self.session_at(DiagnosisStep::Questions)?.show_actions();
        self.sync_diagnosis_step();
        Ok(())
    }

    /// # Errors
    /// - `WrongPhase` unless on the diagnosis actions step.
    pub fn back_to_questions(&mut self) -> Result<(), AssessmentError> {
        self.session_at(DiagnosisStep::Actions)?.back_to_questions();
        self.sync_diagnosis_step();
        Ok(())
    }

    /// # Errors
    /// - `WrongPhase` unless on the diagnosis actions step.
    /// - `UnknownAction` for an id outside the domain catalog.
    pub fn toggle_action(&mut self, action_id: &str) -> Result<(), AssessmentError> {
        self.session_at(DiagnosisStep::Actions)?
            .toggle_action(action_id)
    }

    /// Accepts the selected actions of the current diagnosis and moves on.
    ///
    /// # Errors
    /// - `WrongPhase` unless on the diagnosis actions step.
    /// - `NoActionsSelected` when nothing is selected.
    pub fn complete_diagnosis(&mut self, today: NaiveDate) -> Result<(), AssessmentError> {
        let drafts = self.session_at(DiagnosisStep::Actions)?.finish(today)?;
        self.prescribed.extend(drafts);
        self.advance_diagnosis();
        Ok(())
    }

    /// Skips the current diagnosis without adding actions.
    ///
    /// # Errors
    /// - `WrongPhase` outside diagnosis.
    pub fn skip_diagnosis(&mut self) -> Result<(), AssessmentError> {
        if !matches!(self.phase, OnboardingPhase::Diagnosis { .. }) {
            return Err(self.wrong_phase("diagnosis"));
        }
        self.advance_diagnosis();
        Ok(())
    }

    /// Final output once the flow is complete.
    pub fn result(&self) -> Option<OnboardingResult> {
        if self.phase != OnboardingPhase::Complete {
            return None;
        }
        Some(OnboardingResult {
            scores: self.scores.clone(),
            priority_domains: self.priorities.selected().to_vec(),
            prescribed_actions: self.prescribed.clone(),
        })
    }

    fn compute_scores(&mut self) {
        self.scores = LifeDomain::ALL
            .into_iter()
            .map(|domain| (domain, score_from_answers(&self.answers_for(domain))))
            .collect();
    }

    fn enter_diagnosis(&mut self, priority_index: usize) {
        match self.priorities.selected().get(priority_index) {
            Some(domain) => {
                self.diagnosis = Some(DiagnosisSession::new(*domain));
                self.phase = OnboardingPhase::Diagnosis {
                    priority_index,
                    step: DiagnosisStep::Questions,
                };
            }
            None => {
                self.diagnosis = None;
                self.phase = OnboardingPhase::Complete;
            }
        }
    }

    fn advance_diagnosis(&mut self) {
        if let OnboardingPhase::Diagnosis { priority_index, .. } = self.phase {
            self.enter_diagnosis(priority_index + 1);
        }
    }

    fn session_at(&mut self, step: DiagnosisStep) -> Result<&mut DiagnosisSession, AssessmentError> {
        let expected = match step {
            DiagnosisStep::Questions => "diagnosis_questions",
            DiagnosisStep::Actions => "diagnosis_actions",
        };
        match (self.phase, self.diagnosis.as_mut()) {
            (OnboardingPhase::Diagnosis { step: current, .. }, Some(session))
                if current == step =>
            {
                Ok(session)
            }
            (phase, _) => Err(AssessmentError::WrongPhase {
                expected,
                actual: phase.name(),
            }),
        }
    }

    fn sync_diagnosis_step(&mut self) {
        if let (OnboardingPhase::Diagnosis { priority_index, .. }, Some(session)) =
            (self.phase, self.diagnosis.as_ref())
        {
            self.phase = OnboardingPhase::Diagnosis {
                priority_index,
                step: session.step(),
            };
        }
    }

    fn wrong_phase(&self, expected: &'static str) -> AssessmentError {
        AssessmentError::WrongPhase {
            expected,
            actual: self.phase.name(),
        }
    }
}
