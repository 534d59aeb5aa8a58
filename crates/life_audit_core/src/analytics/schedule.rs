//! Seven-day auto schedule of quick wins and goal reviews.
//!
//! # Invariants
//! - Nothing is scheduled before the audit has started.
//! - Quick wins get one day each, starting today, at most seven.
//! - The n-th goal (in goal order) reviews at `today + 7 + 7n` when its
//!   `time_bound` is a non-empty string (whitespace counts).

use crate::model::goal::{GoalId, SmartGoal};
use crate::model::quick_win::{QuickWin, QuickWinId};
use chrono::{Days, NaiveDate};

pub const SCHEDULED_QUICK_WINS: usize = 7;
pub const REVIEW_INTERVAL_DAYS: u64 = 7;
const REVIEW_TITLE_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleSource {
    QuickWin(QuickWinId),
    GoalReview(GoalId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub date: NaiveDate,
    pub title: String,
    pub source: ScheduleSource,
}

pub fn seven_day_schedule(
    quick_wins: &[QuickWin],
    goals: &[SmartGoal],
    audit_start_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<ScheduledEvent> {
    if audit_start_date.is_none() {
        return Vec::new();
    }

    let wins = quick_wins
        .iter()
        .filter(|win| !win.completed)
        .take(SCHEDULED_QUICK_WINS)
        .enumerate()
        .filter_map(|(index, win)| {
            Some(ScheduledEvent {
                date: today.checked_add_days(Days::new(index as u64))?,
                title: win.headline().to_string(),
                source: ScheduleSource::QuickWin(win.id.clone()),
            })
        });

    let reviews = goals
        .iter()
        .enumerate()
        .filter(|(_, goal)| !goal.time_bound.is_empty())
        .filter_map(|(index, goal)| {
            let offset = REVIEW_INTERVAL_DAYS + REVIEW_INTERVAL_DAYS * index as u64;
            Some(ScheduledEvent {
                date: today.checked_add_days(Days::new(offset))?,
                title: review_title(&goal.specific),
                source: ScheduleSource::GoalReview(goal.id.clone()),
            })
        });

    wins.chain(reviews).collect()
}

fn review_title(specific: &str) -> String {
    let head: String = specific.chars().take(REVIEW_TITLE_CHARS).collect();
    format!("Review: {head}...")
}
