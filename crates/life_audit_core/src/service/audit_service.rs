//! Life Audit store service.
//!
//! # Responsibility
//! - Own the in-memory aggregate and expose every mutation on it.
//! - Persist the full aggregate after each successful mutation.
//! - Bridge backup export/import and onboarding results into the store.
//!
//! # Invariants
//! - A rejected mutation leaves the aggregate unchanged and writes nothing.
//! - Save failures are logged and swallowed; the in-memory state stays
//!   authoritative for the session.
//! - Actions always reference an existing goal (or none) and domain.
//!
//! # See also
//! - `repo::gateway` for the load/save/export/import contracts.

use crate::assessment::onboarding::{OnboardingFlow, OnboardingResult};
use crate::assessment::priority::MAX_PRIORITY_DOMAINS;
use crate::assessment::swls::{SWLS_ITEM_COUNT, SWLS_MAX_ANSWER, SWLS_MIN_ANSWER};
use crate::assessment::AssessmentError;
use crate::clock::Clock;
use crate::model::action::{ActionId, ActionItem, ActionStatus, NewAction};
use crate::model::check_in::{CheckInId, DailyCheckIn, NewCheckIn};
use crate::model::domain::{validate_score, LifeDomain, WheelDomain};
use crate::model::goal::{GoalId, GoalStatus, NewGoal, NextAction, SmartGoal};
use crate::model::journal::{Energy, Engagement, GoodTimeEntry, JournalEntryId};
use crate::model::planning::{DylArea, OdysseyField, OdysseyPlanId};
use crate::model::quick_win::{QuickWin, QuickWinId};
use crate::model::snapshot::{record_snapshot, ScoreSnapshot};
use crate::model::state::LifeAuditState;
use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use crate::model::validation::ModelValidationError;
use crate::repo::backup::{BackupError, BackupFile, ImportOutcome, ImportStatus};
use crate::repo::gateway::PersistenceGateway;
use crate::repo::state_storage::StateStorage;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, error, info};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuditResult<T> = Result<T, AuditServiceError>;

/// Error returned by store mutations.
#[derive(Debug)]
pub enum AuditServiceError {
    Validation(ModelValidationError),
    Assessment(AssessmentError),
    Backup(BackupError),
    NotFound { entity: &'static str, id: String },
}

impl Display for AuditServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Assessment(err) => write!(f, "{err}"),
            Self::Backup(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
        }
    }
}

impl Error for AuditServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Assessment(err) => Some(err),
            Self::Backup(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ModelValidationError> for AuditServiceError {
    fn from(value: ModelValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<AssessmentError> for AuditServiceError {
    fn from(value: AssessmentError) -> Self {
        Self::Assessment(value)
    }
}

impl From<BackupError> for AuditServiceError {
    fn from(value: BackupError) -> Self {
        Self::Backup(value)
    }
}

fn not_found(entity: &'static str, id: impl ToString) -> AuditServiceError {
    AuditServiceError::NotFound {
        entity,
        id: id.to_string(),
    }
}

/// Input for a "good time" journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub date: NaiveDate,
    pub activity: String,
    pub engagement: Engagement,
    pub energy: Energy,
    pub notes: Option<String>,
}

/// Store owning the aggregate, a storage port and a clock.
pub struct AuditService<S: StateStorage, C: Clock> {
    gateway: PersistenceGateway<S>,
    clock: C,
    state: LifeAuditState,
    import_status: ImportStatus,
}

impl<S: StateStorage, C: Clock> AuditService<S, C> {
    /// Loads the stored aggregate, falling back to seed data.
    pub fn open(storage: S, clock: C) -> Self {
        let gateway = PersistenceGateway::new(storage);
        let state = match gateway.load() {
            Some(state) => state,
            None => {
                info!("event=state_seed module=service status=ok");
                LifeAuditState::seeded()
            }
        };
        Self {
            gateway,
            clock,
            state,
            import_status: ImportStatus::Idle,
        }
    }

    pub fn state(&self) -> &LifeAuditState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// `lastSaved` of the persisted blob.
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.gateway.last_saved()
    }

    // Domains and assessments

    /// Sets a live domain score without recording history.
    pub fn update_domain_score(&mut self, domain: LifeDomain, score: u8) -> AuditResult<()> {
        let score = validate_score(score)?;
        self.domain_mut(domain)?.score = score;
        self.persist("update_domain_score");
        Ok(())
    }

    /// Sets or clears the target score of a domain.
    pub fn set_target_score(&mut self, domain: LifeDomain, target: Option<u8>) -> AuditResult<()> {
        let target = target.map(validate_score).transpose()?;
        self.domain_mut(domain)?.target_score = target;
        self.persist("set_target_score");
        Ok(())
    }

    /// Commits an onboarding run: scores, snapshots, priorities, audit start
    /// and prescribed actions. Returns the ids of the created actions.
    ///
    /// # Errors
    /// - `Validation` for an out-of-range score, more than two priorities or
    ///   a blank action title; nothing is committed in that case.
    pub fn complete_onboarding(&mut self, result: OnboardingResult) -> AuditResult<Vec<ActionId>> {
        if result.priority_domains.len() > MAX_PRIORITY_DOMAINS {
            return Err(ModelValidationError::TooManyPriorities {
                selected: result.priority_domains.len(),
                max: MAX_PRIORITY_DOMAINS,
            }
            .into());
        }
        for score in result.scores.values() {
            validate_score(*score)?;
        }
        let now = self.clock.now();
        let today = self.clock.today();
        let actions = result
            .prescribed_actions
            .into_iter()
            .map(|draft| ActionItem::new(draft, now))
            .collect::<Result<Vec<_>, _>>()?;

        self.apply_scores(&result.scores, today);
        for domain in &mut self.state.wheel_domains {
            domain.is_priority = Some(result.priority_domains.contains(&domain.id));
        }
        self.state.priority_domains = result.priority_domains;
        if self.state.audit_start_date.is_none() {
            self.state.audit_start_date = Some(today);
        }
        let ids = actions.iter().map(|action| action.id.clone()).collect();
        self.state.action_items.extend(actions);

        self.persist("complete_onboarding");
        Ok(ids)
    }

    /// Commits a finished onboarding flow.
    ///
    /// # Errors
    /// - `Assessment(WrongPhase)` unless the flow is complete.
    pub fn commit_onboarding(&mut self, flow: &OnboardingFlow) -> AuditResult<Vec<ActionId>> {
        let result = flow.result().ok_or_else(|| AssessmentError::WrongPhase {
            expected: "complete",
            actual: flow.phase().name(),
        })?;
        self.complete_onboarding(result)
    }

    /// Commits new scores for some domains and snapshots them for today.
    pub fn record_reassessment(&mut self, scores: &BTreeMap<LifeDomain, u8>) -> AuditResult<()> {
        for score in scores.values() {
            validate_score(*score)?;
        }
        let today = self.clock.today();
        self.apply_scores(scores, today);
        self.persist("record_reassessment");
        Ok(())
    }

    /// Stores a SWLS total with today's date.
    pub fn set_life_satisfaction(&mut self, total: u8) -> AuditResult<()> {
        let min = SWLS_MIN_ANSWER * SWLS_ITEM_COUNT as u8;
        let max = SWLS_MAX_ANSWER * SWLS_ITEM_COUNT as u8;
        if !(min..=max).contains(&total) {
            return Err(ModelValidationError::AnswerOutOfRange {
                value: total,
                min,
                max,
            }
            .into());
        }
        self.state.life_satisfaction_score = Some(total);
        self.state.life_satisfaction_date = Some(self.clock.today());
        self.persist("set_life_satisfaction");
        Ok(())
    }

    // Goals

    pub fn add_goal(&mut self, domain: LifeDomain, input: NewGoal) -> AuditResult<GoalId> {
        let goal = SmartGoal::new(domain, input, self.clock.now())?;
        let id = goal.id.clone();
        self.state.smart_goals.push(goal);
        self.persist("add_goal");
        Ok(id)
    }

    pub fn update_goal_status(&mut self, id: &GoalId, status: GoalStatus) -> AuditResult<()> {
        self.goal_mut(id)?.status = status;
        self.persist("update_goal_status");
        Ok(())
    }

    pub fn set_goal_next_action(&mut self, id: &GoalId, next: Option<NextAction>) -> AuditResult<()> {
        self.goal_mut(id)?.next_action = next;
        self.persist("set_goal_next_action");
        Ok(())
    }

    /// Removes a goal and every action attached to it.
    pub fn remove_goal(&mut self, id: &GoalId) -> AuditResult<()> {
        let before = self.state.smart_goals.len();
        self.state.smart_goals.retain(|goal| &goal.id != id);
        if self.state.smart_goals.len() == before {
            return Err(not_found("goal", id));
        }
        self.state
            .action_items
            .retain(|action| action.goal_id.as_ref() != Some(id));
        self.persist("remove_goal");
        Ok(())
    }

    // Actions and check-ins

    /// # Errors
    /// - `NotFound` when `goal_id` names a missing goal.
    /// - `Validation` for a blank title.
    pub fn add_action(&mut self, input: NewAction) -> AuditResult<ActionId> {
        if let Some(goal_id) = &input.goal_id {
            if !self.state.smart_goals.iter().any(|goal| &goal.id == goal_id) {
                return Err(not_found("goal", goal_id));
            }
        }
        let action = ActionItem::new(input, self.clock.now())?;
        let id = action.id.clone();
        self.state.action_items.push(action);
        self.persist("add_action");
        Ok(id)
    }

    pub fn set_action_status(&mut self, id: &ActionId, status: ActionStatus) -> AuditResult<()> {
        let now = self.clock.now();
        self.action_mut(id)?.set_status(status, now);
        self.persist("set_action_status");
        Ok(())
    }

    pub fn toggle_action(&mut self, id: &ActionId) -> AuditResult<()> {
        let now = self.clock.now();
        self.action_mut(id)?.toggle_completed(now);
        self.persist("toggle_action");
        Ok(())
    }

    pub fn remove_action(&mut self, id: &ActionId) -> AuditResult<()> {
        let before = self.state.action_items.len();
        self.state.action_items.retain(|action| &action.id != id);
        if self.state.action_items.len() == before {
            return Err(not_found("action", id));
        }
        self.persist("remove_action");
        Ok(())
    }

    pub fn add_check_in(&mut self, input: NewCheckIn) -> CheckInId {
        let check_in = DailyCheckIn::new(input);
        let id = check_in.id.clone();
        self.state.daily_check_ins.push(check_in);
        self.persist("add_check_in");
        id
    }

    // Quick wins

    pub fn toggle_quick_win(&mut self, id: &str) -> AuditResult<()> {
        let win = self
            .state
            .quick_wins
            .iter_mut()
            .find(|win| win.id == id)
            .ok_or_else(|| not_found("quick_win", id))?;
        win.completed = !win.completed;
        self.persist("toggle_quick_win");
        Ok(())
    }

    pub fn add_quick_win(&mut self, area: &str, action: &str, rationale: &str) -> AuditResult<QuickWinId> {
        let win = QuickWin::custom(area, action, rationale)?;
        let id = win.id.clone();
        self.state.quick_wins.push(win);
        self.persist("add_quick_win");
        Ok(id)
    }

    pub fn remove_quick_win(&mut self, id: &str) -> AuditResult<()> {
        let before = self.state.quick_wins.len();
        self.state.quick_wins.retain(|win| win.id != id);
        if self.state.quick_wins.len() == before {
            return Err(not_found("quick_win", id));
        }
        self.persist("remove_quick_win");
        Ok(())
    }

    // Tasks

    pub fn add_task(&mut self, input: NewTask) -> AuditResult<TaskId> {
        let task = Task::new(input, self.clock.now())?;
        let id = task.id.clone();
        self.state.tasks.push(task);
        self.persist("add_task");
        Ok(id)
    }

    pub fn update_task(&mut self, id: &TaskId, patch: TaskPatch) -> AuditResult<()> {
        let now = self.clock.now();
        let task = self.task_mut(id)?;
        let mut updated = task.clone();
        updated.apply(patch, now)?;
        *task = updated;
        self.persist("update_task");
        Ok(())
    }

    pub fn cycle_task_status(&mut self, id: &TaskId) -> AuditResult<()> {
        let now = self.clock.now();
        self.task_mut(id)?.cycle_status(now);
        self.persist("cycle_task_status");
        Ok(())
    }

    pub fn remove_task(&mut self, id: &TaskId) -> AuditResult<()> {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|task| &task.id != id);
        if self.state.tasks.len() == before {
            return Err(not_found("task", id));
        }
        self.persist("remove_task");
        Ok(())
    }

    // Reflections

    pub fn update_odyssey_plan(
        &mut self,
        id: OdysseyPlanId,
        field: OdysseyField,
        value: impl Into<String>,
    ) -> AuditResult<()> {
        let plan = self
            .state
            .odyssey_plans
            .iter_mut()
            .find(|plan| plan.id == id)
            .ok_or_else(|| not_found("odyssey_plan", format!("{id:?}")))?;
        plan.set_field(field, value);
        self.persist("update_odyssey_plan");
        Ok(())
    }

    pub fn update_dyl_reflection(&mut self, area: DylArea, reflection: impl Into<String>) -> AuditResult<()> {
        let component = self
            .state
            .dyl_components
            .iter_mut()
            .find(|component| component.id == area)
            .ok_or_else(|| not_found("dyl_component", format!("{area:?}")))?;
        component.reflection = reflection.into();
        self.persist("update_dyl_reflection");
        Ok(())
    }

    pub fn add_journal_entry(&mut self, input: NewJournalEntry) -> AuditResult<JournalEntryId> {
        let entry = GoodTimeEntry::new(
            input.date,
            &input.activity,
            input.engagement,
            input.energy,
            input.notes,
        )?;
        let id = entry.id.clone();
        self.state.good_time_journal.push(entry);
        self.persist("add_journal_entry");
        Ok(id)
    }

    pub fn remove_journal_entry(&mut self, id: &JournalEntryId) -> AuditResult<()> {
        let before = self.state.good_time_journal.len();
        self.state.good_time_journal.retain(|entry| &entry.id != id);
        if self.state.good_time_journal.len() == before {
            return Err(not_found("journal_entry", id));
        }
        self.persist("remove_journal_entry");
        Ok(())
    }

    // Navigation and lifecycle

    pub fn set_current_section(&mut self, section: &str) {
        self.state.current_section = section.trim().to_string();
        self.state.normalize();
        self.persist("set_current_section");
    }

    pub fn set_active_domain(&mut self, domain: Option<LifeDomain>) {
        self.state.active_domain_id = domain;
        self.persist("set_active_domain");
    }

    /// Restores seed data and clears storage.
    pub fn reset(&mut self) {
        self.state = LifeAuditState::seeded();
        self.import_status = ImportStatus::Idle;
        match self.gateway.clear() {
            Ok(()) => info!("event=state_reset module=service status=ok"),
            Err(err) => error!(
                "event=state_reset module=service status=error error_code=storage_clear_failed error={}",
                err
            ),
        }
    }

    /// Exports the persisted aggregate as a `.lab` file.
    pub fn export_backup(&self) -> AuditResult<BackupFile> {
        Ok(self.gateway.export(self.clock.now())?)
    }

    /// Imports a `.lab` file and replaces the in-memory aggregate.
    ///
    /// On failure the aggregate and storage are untouched and the import
    /// status carries the user-facing message.
    pub fn import_backup(&mut self, text: &str) -> AuditResult<ImportOutcome> {
        match self.gateway.import(text) {
            Ok(outcome) => {
                self.state = outcome.state.clone();
                self.import_status = ImportStatus::Success;
                Ok(outcome)
            }
            Err(err) => {
                self.import_status = ImportStatus::Error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn import_status(&self) -> &ImportStatus {
        &self.import_status
    }

    pub fn reset_import_status(&mut self) {
        self.import_status = ImportStatus::Idle;
    }

    fn apply_scores(&mut self, scores: &BTreeMap<LifeDomain, u8>, today: NaiveDate) {
        for (domain, score) in scores {
            if let Some(entry) = self.state.domain_mut(*domain) {
                entry.score = *score;
            }
            record_snapshot(
                &mut self.state.score_history,
                ScoreSnapshot {
                    domain_id: *domain,
                    score: *score,
                    date: today,
                },
            );
        }
    }

    fn persist(&mut self, operation: &'static str) {
        let now = self.clock.now();
        match self.gateway.save(&mut self.state, now) {
            Ok(()) => debug!(
                "event=state_save module=service status=ok operation={}",
                operation
            ),
            Err(err) => error!(
                "event=state_save module=service status=error operation={} error_code=state_save_failed error={}",
                operation, err
            ),
        }
    }

    fn domain_mut(&mut self, id: LifeDomain) -> AuditResult<&mut WheelDomain> {
        self.state
            .domain_mut(id)
            .ok_or_else(|| not_found("domain", id))
    }

    fn goal_mut(&mut self, id: &GoalId) -> AuditResult<&mut SmartGoal> {
        self.state
            .smart_goals
            .iter_mut()
            .find(|goal| &goal.id == id)
            .ok_or_else(|| not_found("goal", id))
    }

    fn action_mut(&mut self, id: &ActionId) -> AuditResult<&mut ActionItem> {
        self.state
            .action_items
            .iter_mut()
            .find(|action| &action.id == id)
            .ok_or_else(|| not_found("action", id))
    }

    fn task_mut(&mut self, id: &TaskId) -> AuditResult<&mut Task> {
        self.state
            .tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(|| not_found("task", id))
    }
}
