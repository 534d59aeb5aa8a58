//! Root-cause diagnosis for one priority domain.
//!
//! # Responsibility
//! - Filter prescribed actions by the selected root causes.
//! - Convert chosen actions into dated, prioritized action drafts.
//!
//! # Invariants
//! - With no root cause selected, every action of the domain is recommended.
//! - Otherwise an action is recommended when it addresses any selected cause.
//! - Recommendation order follows catalog order.

use crate::assessment::catalog::{diagnosis_for, Difficulty, PrescribedAction};
use crate::assessment::AssessmentError;
use crate::model::action::{NewAction, Priority};
use crate::model::domain::LifeDomain;
use chrono::{Days, NaiveDate};

const WEEK_DAYS: u64 = 7;
const MONTH_DAYS: u64 = 30;
const DEFAULT_LEAD_DAYS: u64 = 3;
const SAME_DAY_KEYWORDS: [&str; 3] = ["Today", "tonight", "now"];

/// Which screen of the diagnosis the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosisStep {
    Questions,
    Actions,
}

/// Actions recommended for `domain` given the selected root causes.
pub fn recommended_actions<S: AsRef<str>>(
    domain: LifeDomain,
    selected_root_causes: &[S],
) -> Vec<&'static PrescribedAction> {
    let actions = diagnosis_for(domain).actions;
    if selected_root_causes.is_empty() {
        return actions.iter().collect();
    }
    actions
        .iter()
        .filter(|action| {
            selected_root_causes
                .iter()
                .any(|cause| action.addresses(cause.as_ref()))
        })
        .collect()
}

/// Due date derived from a free-text timeframe.
///
/// Keywords are matched case-sensitively as substrings, first match wins:
/// `Today`/`tonight`/`now` -> today, `week` -> +7 days, `month` -> +30 days,
/// anything else -> +3 days. `"Weekly"` and `"Weekend activity"` therefore
/// fall through to the default.
pub fn due_date_for_timeframe(timeframe: &str, today: NaiveDate) -> NaiveDate {
    let lead_days = if SAME_DAY_KEYWORDS
        .iter()
        .any(|keyword| timeframe.contains(keyword))
    {
        0
    } else if timeframe.contains("week") {
        WEEK_DAYS
    } else if timeframe.contains("month") {
        MONTH_DAYS
    } else {
        DEFAULT_LEAD_DAYS
    };
    today
        .checked_add_days(Days::new(lead_days))
        .unwrap_or(today)
}

/// Action priority derived from difficulty.
pub fn priority_for_difficulty(difficulty: Difficulty) -> Priority {
    match difficulty {
        Difficulty::Hard => Priority::High,
        Difficulty::Medium => Priority::Medium,
        Difficulty::Easy => Priority::Low,
    }
}

/// Builds the action draft for a chosen prescription.
pub fn draft_from_prescription(
    domain: LifeDomain,
    action: &PrescribedAction,
    today: NaiveDate,
) -> NewAction {
    NewAction {
        goal_id: None,
        domain_id: domain,
        title: action.title.to_string(),
        description: Some(action.description.to_string()),
        due_date: due_date_for_timeframe(action.timeframe, today),
        priority: priority_for_difficulty(action.difficulty),
    }
}

/// Diagnosis session state for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisSession {
    domain: LifeDomain,
    step: DiagnosisStep,
    root_causes: Vec<&'static str>,
    selected_actions: Vec<&'static str>,
}

impl DiagnosisSession {
    pub fn new(domain: LifeDomain) -> Self {
        Self {
            domain,
            step: DiagnosisStep::Questions,
            root_causes: Vec::new(),
            selected_actions: Vec::new(),
        }
    }

    pub fn domain(&self) -> LifeDomain {
        self.domain
    }

    pub fn step(&self) -> DiagnosisStep {
        self.step
    }

    pub fn selected_root_causes(&self) -> &[&'static str] {
        &self.root_causes
    }

    pub fn selected_actions(&self) -> &[&'static str] {
        &self.selected_actions
    }

    /// Selects or deselects a root cause by tag.
    ///
    /// # Errors
    /// - `UnknownRootCause` when the tag is not offered for this domain.
    pub fn toggle_root_cause(&mut self, root_cause: &str) -> Result<(), AssessmentError> {
        let diagnosis = diagnosis_for(self.domain);
        let tag = diagnosis
            .questions
            .iter()
            .map(|question| question.root_cause)
            .find(|known| *known == root_cause)
            .ok_or_else(|| AssessmentError::UnknownRootCause {
                domain: self.domain,
                root_cause: root_cause.to_string(),
            })?;
        toggle(&mut self.root_causes, tag);
        Ok(())
    }

    /// Actions recommended for the current root-cause selection.
    pub fn recommendations(&self) -> Vec<&'static PrescribedAction> {
        recommended_actions(self.domain, &self.root_causes)
    }

    /// Moves from the question screen to the recommendations screen.
    pub fn show_actions(&mut self) {
        self.step = DiagnosisStep::Actions;
    }

    /// Returns to the question screen, keeping selections.
    pub fn back_to_questions(&mut self) {
        self.step = DiagnosisStep::Questions;
    }

    /// Selects or deselects a prescribed action by id.
    ///
    /// # Errors
    /// - `UnknownAction` when the id is not in the domain catalog.
    pub fn toggle_action(&mut self, action_id: &str) -> Result<(), AssessmentError> {
        let action = diagnosis_for(self.domain)
            .action(action_id)
            .ok_or_else(|| AssessmentError::UnknownAction {
                domain: self.domain,
                action_id: action_id.to_string(),
            })?;
        toggle(&mut self.selected_actions, action.id);
        Ok(())
    }

    /// Converts the selected actions into drafts, in selection order.
    ///
    /// # Errors
    /// - `NoActionsSelected` when nothing is selected.
    pub fn finish(&self, today: NaiveDate) -> Result<Vec<NewAction>, AssessmentError> {
        if self.selected_actions.is_empty() {
            return Err(AssessmentError::NoActionsSelected(self.domain));
        }
        let diagnosis = diagnosis_for(self.domain);
        Ok(self
            .selected_actions
            .iter()
            .filter_map(|id| diagnosis.action(id))
            .map(|action| draft_from_prescription(self.domain, action, today))
            .collect())
    }
}

fn toggle(items: &mut Vec<&'static str>, value: &'static str) {
    if let Some(index) = items.iter().position(|item| *item == value) {
        items.remove(index);
    } else {
        items.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::{
        draft_from_prescription, due_date_for_timeframe, priority_for_difficulty,
        recommended_actions,
    };
    use crate::assessment::catalog::{diagnosis_for, Difficulty};
    use crate::model::action::Priority;
    use crate::model::domain::LifeDomain;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 10).unwrap()
    }

    #[test]
    fn sleep_selects_exactly_two_health_actions() {
        let titles: Vec<_> = recommended_actions(LifeDomain::Health, &["sleep"])
            .iter()
            .map(|action| action.title)
            .collect();
        assert_eq!(titles, vec!["Sleep Hygiene Reset", "10-Minute Morning Walk"]);
    }

    #[test]
    fn no_root_cause_recommends_everything() {
        let none: [&str; 0] = [];
        assert_eq!(recommended_actions(LifeDomain::Health, &none).len(), 6);
    }

    #[test]
    fn multiple_causes_take_the_union() {
        let ids: Vec<_> = recommended_actions(LifeDomain::Finance, &["debt", "savings"])
            .iter()
            .map(|action| action.id)
            .collect();
        assert_eq!(ids, vec!["f3", "f4"]);
    }

    #[test]
    fn timeframe_keywords_map_to_due_dates() {
        let d = today();
        assert_eq!(due_date_for_timeframe("Start tonight", d), d);
        assert_eq!(due_date_for_timeframe("Today, 20 mins", d), d);
        assert_eq!(due_date_for_timeframe("Right now", d), d);
        assert_eq!(
            due_date_for_timeframe("This week", d),
            NaiveDate::from_ymd_opt(2026, 4, 17).unwrap()
        );
        assert_eq!(
            due_date_for_timeframe("This month", d),
            NaiveDate::from_ymd_opt(2026, 5, 10).unwrap()
        );
        assert_eq!(
            due_date_for_timeframe("As needed", d),
            NaiveDate::from_ymd_opt(2026, 4, 13).unwrap()
        );
    }

    #[test]
    fn timeframe_keywords_are_case_sensitive() {
        let d = today();
        let default_lead = NaiveDate::from_ymd_opt(2026, 4, 13).unwrap();
        assert_eq!(due_date_for_timeframe("Weekly", d), default_lead);
        assert_eq!(due_date_for_timeframe("Weekend activity", d), default_lead);
        assert_eq!(due_date_for_timeframe("today", d), default_lead);
        assert_eq!(due_date_for_timeframe("Schedule now", d), d);
        assert_eq!(
            due_date_for_timeframe("Schedule this week", d),
            NaiveDate::from_ymd_opt(2026, 4, 17).unwrap()
        );
    }

    #[test]
    fn catalog_actions_with_capitalized_week_use_default_lead() {
        let d = today();
        let meal_prep = diagnosis_for(LifeDomain::Health).action("h3").unwrap();
        let draft = draft_from_prescription(LifeDomain::Health, meal_prep, d);
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2026, 4, 13).unwrap());
    }

    #[test]
    fn difficulty_maps_to_priority() {
        assert_eq!(priority_for_difficulty(Difficulty::Hard), Priority::High);
        assert_eq!(priority_for_difficulty(Difficulty::Medium), Priority::Medium);
        assert_eq!(priority_for_difficulty(Difficulty::Easy), Priority::Low);
    }
}
