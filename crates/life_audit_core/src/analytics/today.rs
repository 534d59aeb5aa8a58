//! Per-domain "today" view.

use crate::model::action::{ActionItem, ActionStatus};
use crate::model::check_in::DailyCheckIn;
use crate::model::domain::LifeDomain;
use crate::model::goal::SmartGoal;
use chrono::NaiveDate;

/// Number of recent check-ins shown alongside today's actions.
pub const RECENT_CHECK_INS: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct TodayView<'a> {
    pub active_goals: Vec<&'a SmartGoal>,
    pub due_today: Vec<&'a ActionItem>,
    pub pending: Vec<&'a ActionItem>,
    pub completed_count: usize,
    /// First check-in recorded for the domain on that day.
    pub check_in: Option<&'a DailyCheckIn>,
    /// Last `RECENT_CHECK_INS` check-ins of the domain, in insertion order.
    pub recent_check_ins: Vec<&'a DailyCheckIn>,
}

pub fn today_view<'a>(
    domain: LifeDomain,
    goals: &'a [SmartGoal],
    actions: &'a [ActionItem],
    check_ins: &'a [DailyCheckIn],
    today: NaiveDate,
) -> TodayView<'a> {
    let due_today: Vec<&ActionItem> = actions
        .iter()
        .filter(|action| action.domain_id == domain && action.due_date == today)
        .collect();
    let pending = due_today
        .iter()
        .copied()
        .filter(|action| action.status == ActionStatus::Pending)
        .collect();
    let completed_count = due_today
        .iter()
        .filter(|action| action.status == ActionStatus::Completed)
        .count();

    let domain_check_ins: Vec<&DailyCheckIn> = check_ins
        .iter()
        .filter(|check_in| check_in.domain_id == domain)
        .collect();
    let check_in = domain_check_ins
        .iter()
        .copied()
        .find(|check_in| check_in.date == today);
    let skip = domain_check_ins.len().saturating_sub(RECENT_CHECK_INS);
    let recent_check_ins = domain_check_ins[skip..].to_vec();

    TodayView {
        active_goals: goals
            .iter()
            .filter(|goal| goal.domain_id == domain && goal.is_active())
            .collect(),
        due_today,
        pending,
        completed_count,
        check_in,
        recent_check_ins,
    }
}

#[cfg(test)]
mod tests {
    use super::today_view;
    use crate::model::action::{ActionItem, ActionStatus, NewAction, Priority};
    use crate::model::check_in::{DailyCheckIn, Mood, NewCheckIn};
    use crate::model::domain::LifeDomain;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn view_splits_due_actions_and_picks_first_check_in() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 3, 7, 0, 0).unwrap();
        let action = |title: &str, due: NaiveDate| {
            ActionItem::new(
                NewAction {
                    goal_id: None,
                    domain_id: LifeDomain::Fun,
                    title: title.to_string(),
                    description: None,
                    due_date: due,
                    priority: Priority::Low,
                },
                now,
            )
            .unwrap()
        };
        let mut done = action("done", today);
        done.set_status(ActionStatus::Completed, now);
        let actions = vec![action("open", today), done, action("later", today.succ_opt().unwrap())];

        let check_in = |mood| {
            DailyCheckIn::new(NewCheckIn {
                date: today,
                domain_id: LifeDomain::Fun,
                mood,
                reflection: None,
                actions_completed: 0,
                actions_total: 0,
            })
        };
        let check_ins = vec![check_in(Mood::Good), check_in(Mood::Bad)];

        let view = today_view(LifeDomain::Fun, &[], &actions, &check_ins, today);
        assert_eq!(view.due_today.len(), 2);
        assert_eq!(view.pending.len(), 1);
        assert_eq!(view.completed_count, 1);
        assert_eq!(view.check_in.map(|c| c.mood), Some(Mood::Good));
        assert_eq!(view.recent_check_ins.len(), 2);
    }
}
