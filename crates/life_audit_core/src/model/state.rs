//! Persisted Life Audit aggregate and its seed data.
//!
//! # Responsibility
//! - Hold every record the dashboard works with as one serializable unit.
//! - Provide first-run seed data and optional-field defaults for old blobs.
//!
//! # Invariants
//! - The aggregate is always persisted and restored as a whole.
//! - After `normalize()`, all 8 domains and all 3 Odyssey plans exist exactly
//!   once, in canonical order.

use crate::model::action::ActionItem;
use crate::model::check_in::DailyCheckIn;
use crate::model::domain::{LifeDomain, WheelDomain};
use crate::model::goal::SmartGoal;
use crate::model::journal::GoodTimeEntry;
use crate::model::planning::{DylArea, DylComponent, OdysseyPlan, OdysseyPlanId};
use crate::model::quick_win::QuickWin;
use crate::model::snapshot::{DomainProgress, ScoreSnapshot};
use crate::model::task::Task;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Section shown when no section was persisted.
pub const DEFAULT_SECTION: &str = "hero";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeAuditState {
    #[serde(default = "seed_wheel_domains")]
    pub wheel_domains: Vec<WheelDomain>,
    #[serde(default = "seed_dyl_components")]
    pub dyl_components: Vec<DylComponent>,
    #[serde(default = "seed_odyssey_plans")]
    pub odyssey_plans: Vec<OdysseyPlan>,
    #[serde(default)]
    pub smart_goals: Vec<SmartGoal>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default)]
    pub daily_check_ins: Vec<DailyCheckIn>,
    #[serde(default)]
    pub domain_progress: Vec<DomainProgress>,
    #[serde(default)]
    pub score_history: Vec<ScoreSnapshot>,
    #[serde(default = "seed_quick_wins")]
    pub quick_wins: Vec<QuickWin>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub good_time_journal: Vec<GoodTimeEntry>,
    #[serde(default = "default_section")]
    pub current_section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_domain_id: Option<LifeDomain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority_domains: Vec<LifeDomain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_satisfaction_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_satisfaction_date: Option<NaiveDate>,
}

impl Default for LifeAuditState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl LifeAuditState {
    /// First-run aggregate.
    pub fn seeded() -> Self {
        Self {
            wheel_domains: seed_wheel_domains(),
            dyl_components: seed_dyl_components(),
            odyssey_plans: seed_odyssey_plans(),
            smart_goals: Vec::new(),
            action_items: Vec::new(),
            daily_check_ins: Vec::new(),
            domain_progress: Vec::new(),
            score_history: Vec::new(),
            quick_wins: seed_quick_wins(),
            tasks: Vec::new(),
            good_time_journal: Vec::new(),
            current_section: default_section(),
            active_domain_id: None,
            last_saved: None,
            audit_start_date: None,
            priority_domains: Vec::new(),
            life_satisfaction_score: None,
            life_satisfaction_date: None,
        }
    }

    /// Restores fixed records missing from an older or hand-edited blob.
    ///
    /// Duplicates of a fixed record keep their first occurrence.
    pub fn normalize(&mut self) {
        let mut domains = Vec::with_capacity(LifeDomain::ALL.len());
        for id in LifeDomain::ALL {
            let existing = self.wheel_domains.iter().find(|domain| domain.id == id);
            domains.push(existing.cloned().unwrap_or_else(|| WheelDomain::seeded(id)));
        }
        self.wheel_domains = domains;

        let mut plans = Vec::with_capacity(OdysseyPlanId::ALL.len());
        for id in OdysseyPlanId::ALL {
            let existing = self.odyssey_plans.iter().find(|plan| plan.id == id);
            plans.push(existing.cloned().unwrap_or_else(|| OdysseyPlan::seeded(id)));
        }
        self.odyssey_plans = plans;

        let mut components = Vec::with_capacity(DylArea::ALL.len());
        for id in DylArea::ALL {
            let existing = self.dyl_components.iter().find(|component| component.id == id);
            components.push(existing.cloned().unwrap_or_else(|| DylComponent::seeded(id)));
        }
        self.dyl_components = components;

        if self.current_section.trim().is_empty() {
            self.current_section = default_section();
        }
    }

    pub fn domain(&self, id: LifeDomain) -> Option<&WheelDomain> {
        self.wheel_domains.iter().find(|domain| domain.id == id)
    }

    pub fn domain_mut(&mut self, id: LifeDomain) -> Option<&mut WheelDomain> {
        self.wheel_domains.iter_mut().find(|domain| domain.id == id)
    }
}

fn default_section() -> String {
    DEFAULT_SECTION.to_string()
}

fn seed_wheel_domains() -> Vec<WheelDomain> {
    LifeDomain::ALL.into_iter().map(WheelDomain::seeded).collect()
}

fn seed_dyl_components() -> Vec<DylComponent> {
    DylArea::ALL.into_iter().map(DylComponent::seeded).collect()
}

fn seed_odyssey_plans() -> Vec<OdysseyPlan> {
    OdysseyPlanId::ALL.into_iter().map(OdysseyPlan::seeded).collect()
}

fn seed_quick_wins() -> Vec<QuickWin> {
    const SEEDED: [(&str, &str, &str, &str); 5] = [
        (
            "clarity",
            "Clarity",
            "The Brain Dump: Write down every task, worry, idea, and commitment.",
            "Frees up mental RAM and creates a single source of truth.",
        ),
        (
            "environment",
            "Environment",
            "The 15-Minute Declutter: Declutter one small, high-traffic area.",
            "A clean environment reduces cognitive load.",
        ),
        (
            "health",
            "Health",
            "The Water Challenge: Drink a full glass of water upon waking.",
            "Kickstarts hydration and energy for the day.",
        ),
        (
            "finance",
            "Finance",
            "The 5-Minute Budget Check: Review statements for top spending categories.",
            "Creates awareness of current financial reality.",
        ),
        (
            "productivity",
            "Productivity",
            "The \"One Thing\" Rule: Identify your MIT before bed.",
            "Start the day with focus and clear priority.",
        ),
    ];

    SEEDED
        .iter()
        .map(|(id, area, action, rationale)| QuickWin {
            id: (*id).to_string(),
            area: (*area).to_string(),
            action: (*action).to_string(),
            rationale: (*rationale).to_string(),
            completed: false,
            is_custom: None,
        })
        .collect()
}
