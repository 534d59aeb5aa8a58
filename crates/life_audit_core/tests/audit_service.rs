use chrono::{Duration, NaiveDate, TimeZone, Utc};
use life_audit_core::analytics::scores::{average_score, focus_suggestions, NEEDS_ATTENTION_THRESHOLD};
use life_audit_core::analytics::series::{daily_series, domain_trends, progress_summary, TrendDirection};
use life_audit_core::analytics::tasks::task_stats;
use life_audit_core::analytics::today::today_view;
use life_audit_core::model::action::{ActionStatus, NewAction, Priority};
use life_audit_core::model::check_in::{Mood, NewCheckIn};
use life_audit_core::model::goal::{GoalId, GoalStatus, NewGoal, NextAction, NextActionKind};
use life_audit_core::model::journal::{Energy, Engagement};
use life_audit_core::model::planning::{DylArea, OdysseyField, OdysseyPlanId};
use life_audit_core::model::task::{NewTask, TaskPatch, TaskStatus};
use life_audit_core::service::audit_service::NewJournalEntry;
use life_audit_core::{
    AuditService, AuditServiceError, Clock, FixedClock, LifeDomain, MemoryStateStorage,
    ModelValidationError,
};
use std::collections::BTreeMap;

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2026, 6, 1, 8, 30, 0).unwrap())
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn goal(specific: &str) -> NewGoal {
    NewGoal {
        specific: specific.to_string(),
        measurable: "Weekly log".to_string(),
        achievable: String::new(),
        relevant: String::new(),
        time_bound: "End of quarter".to_string(),
        target_date: Some(day(2026, 9, 30)),
    }
}

fn action(domain: LifeDomain, goal_id: Option<GoalId>, title: &str, due: NaiveDate) -> NewAction {
    NewAction {
        goal_id,
        domain_id: domain,
        title: title.to_string(),
        description: None,
        due_date: due,
        priority: Priority::Medium,
    }
}

#[test]
fn removing_a_goal_removes_its_actions() {
    let mut service = AuditService::open(MemoryStateStorage::new(), clock());
    let kept = service.add_goal(LifeDomain::Health, goal("Sleep 8 hours")).unwrap();
    let removed = service.add_goal(LifeDomain::Health, goal("Lift twice a week")).unwrap();
    let today = day(2026, 6, 1);

    service
        .add_action(action(LifeDomain::Health, Some(kept.clone()), "Set alarm", today))
        .unwrap();
    service
        .add_action(action(LifeDomain::Health, Some(removed.clone()), "Buy shoes", today))
        .unwrap();
    service
        .add_action(action(LifeDomain::Health, None, "Stretch", today))
        .unwrap();

    service.remove_goal(&removed).unwrap();

    let titles: Vec<_> = service
        .state()
        .action_items
        .iter()
        .map(|action| action.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Set alarm", "Stretch"]);
    assert!(matches!(
        service.remove_goal(&removed),
        Err(AuditServiceError::NotFound { entity: "goal", .. })
    ));
}

#[test]
fn action_for_missing_goal_is_rejected() {
    let mut service = AuditService::open(MemoryStateStorage::new(), clock());
    let err = service
        .add_action(action(LifeDomain::Career, Some(GoalId::generate()), "Orphan", day(2026, 6, 1)))
        .unwrap_err();
    assert!(matches!(err, AuditServiceError::NotFound { entity: "goal", .. }));
    assert!(service.state().action_items.is_empty());

    let err = service
        .add_action(action(LifeDomain::Career, None, "   ", day(2026, 6, 1)))
        .unwrap_err();
    assert!(matches!(
        err,
        AuditServiceError::Validation(ModelValidationError::BlankField("title"))
    ));
}

#[test]
fn completion_timestamp_is_set_once() {
    let clock = clock();
    let mut service = AuditService::open(MemoryStateStorage::new(), &clock);
    let id = service
        .add_action(action(LifeDomain::Fun, None, "Call Sam", day(2026, 6, 1)))
        .unwrap();

    service.toggle_action(&id).unwrap();
    let first = clock.now();
    clock.advance(Duration::hours(2));
    service.toggle_action(&id).unwrap();
    clock.advance(Duration::hours(2));
    service.set_action_status(&id, ActionStatus::Completed).unwrap();

    let stored = &service.state().action_items[0];
    assert_eq!(stored.status, ActionStatus::Completed);
    assert_eq!(stored.completed_at, Some(first));

    service.set_action_status(&id, ActionStatus::Skipped).unwrap();
    assert_eq!(service.state().action_items[0].completed_at, Some(first));
}

#[test]
fn goal_status_and_next_action_updates() {
    let mut service = AuditService::open(MemoryStateStorage::new(), clock());
    let id = service.add_goal(LifeDomain::Relationships, goal("Weekly dinner")).unwrap();

    let next = NextAction::new(NextActionKind::Mailto, "friend@example.com", "").unwrap();
    service.set_goal_next_action(&id, Some(next)).unwrap();
    service.update_goal_status(&id, GoalStatus::Paused).unwrap();

    let stored = &service.state().smart_goals[0];
    assert_eq!(stored.area, LifeDomain::Relationships.display_name());
    assert_eq!(stored.status, GoalStatus::Paused);
    assert_eq!(
        stored.next_action.as_ref().unwrap().url,
        "mailto:friend@example.com"
    );
}

#[test]
fn task_lifecycle_cycles_and_patches() {
    let clock = clock();
    let mut service = AuditService::open(MemoryStateStorage::new(), &clock);
    let id = service
        .add_task(NewTask {
            title: "File taxes".to_string(),
            description: Some("  ".to_string()),
            priority: Priority::High,
            due_date: Some(day(2026, 6, 15)),
            category: Some(" ".to_string()),
        })
        .unwrap();

    let task = &service.state().tasks[0];
    assert_eq!(task.category, "General");
    assert_eq!(task.description, None);

    service.cycle_task_status(&id).unwrap();
    service.cycle_task_status(&id).unwrap();
    assert_eq!(service.state().tasks[0].status, TaskStatus::Done);
    assert_eq!(service.state().tasks[0].completed_at, Some(clock.now()));

    service.cycle_task_status(&id).unwrap();
    assert_eq!(service.state().tasks[0].status, TaskStatus::Todo);
    assert_eq!(service.state().tasks[0].completed_at, None);

    let blank = TaskPatch {
        title: Some(" ".to_string()),
        ..TaskPatch::default()
    };
    assert!(service.update_task(&id, blank).is_err());
    assert_eq!(service.state().tasks[0].title, "File taxes");

    let patch = TaskPatch {
        category: Some("Admin".to_string()),
        status: Some(TaskStatus::InProgress),
        ..TaskPatch::default()
    };
    service.update_task(&id, patch).unwrap();
    let stats = task_stats(&service.state().tasks);
    assert_eq!((stats.todo, stats.in_progress, stats.done), (0, 1, 0));
    assert_eq!(service.state().tasks[0].category, "Admin");

    service.remove_task(&id).unwrap();
    assert!(service.state().tasks.is_empty());
}

#[test]
fn quick_wins_reflections_and_journal() {
    let mut service = AuditService::open(MemoryStateStorage::new(), clock());
    let seeded = service.state().quick_wins[0].id.clone();

    service.toggle_quick_win(&seeded).unwrap();
    assert!(service.state().quick_wins[0].completed);
    let custom = service
        .add_quick_win("Focus", "Phone in another room", "Fewer interruptions")
        .unwrap();
    assert!(service.state().quick_wins.last().unwrap().is_custom());
    service.remove_quick_win(&custom).unwrap();
    assert!(service.toggle_quick_win("missing").is_err());

    service
        .update_odyssey_plan(OdysseyPlanId::B, OdysseyField::Theme, "Move abroad")
        .unwrap();
    service
        .update_dyl_reflection(DylArea::Play, "More board games")
        .unwrap();
    assert_eq!(service.state().odyssey_plans[1].theme, "Move abroad");
    assert_eq!(service.state().dyl_components[2].reflection, "More board games");

    let entry = service
        .add_journal_entry(NewJournalEntry {
            date: day(2026, 5, 30),
            activity: "Pottery class".to_string(),
            engagement: Engagement::High,
            energy: Energy::Energized,
            notes: None,
        })
        .unwrap();
    assert_eq!(service.state().good_time_journal.len(), 1);
    service.remove_journal_entry(&entry).unwrap();
    assert!(service.state().good_time_journal.is_empty());
}

#[test]
fn satisfaction_and_target_scores_are_validated() {
    let mut service = AuditService::open(MemoryStateStorage::new(), clock());

    assert!(service.set_life_satisfaction(4).is_err());
    assert!(service.set_life_satisfaction(36).is_err());
    service.set_life_satisfaction(27).unwrap();
    assert_eq!(service.state().life_satisfaction_score, Some(27));
    assert_eq!(service.state().life_satisfaction_date, Some(day(2026, 6, 1)));

    assert!(service.set_target_score(LifeDomain::Growth, Some(0)).is_err());
    service.set_target_score(LifeDomain::Growth, Some(9)).unwrap();
    assert_eq!(
        service.state().domain(LifeDomain::Growth).unwrap().target_score,
        Some(9)
    );
}

#[test]
fn reassessments_feed_the_progress_series() {
    let clock = clock();
    let mut service = AuditService::open(MemoryStateStorage::new(), &clock);

    let baseline: BTreeMap<_, _> = LifeDomain::ALL.into_iter().map(|domain| (domain, 4)).collect();
    service.record_reassessment(&baseline).unwrap();

    clock.advance(Duration::days(10));
    let mut improved = baseline.clone();
    improved.insert(LifeDomain::Health, 9);
    service.record_reassessment(&improved).unwrap();
    service.add_check_in(NewCheckIn {
        date: clock.today(),
        domain_id: LifeDomain::Health,
        mood: Mood::Good,
        reflection: None,
        actions_completed: 1,
        actions_total: 2,
    });

    let state = service.state();
    assert_eq!(state.score_history.len(), 16);
    assert!((average_score(&state.wheel_domains) - 4.625).abs() < 1e-9);
    let focus: Vec<_> = focus_suggestions(&state.wheel_domains, NEEDS_ATTENTION_THRESHOLD)
        .iter()
        .map(|domain| domain.id)
        .collect();
    assert_eq!(focus.len(), 7);
    assert!(!focus.contains(&LifeDomain::Health));

    let series = daily_series(
        &state.wheel_domains,
        &state.score_history,
        Some(day(2026, 6, 1)),
        clock.today(),
    );
    assert_eq!(series.len(), 11);
    assert_eq!(series[0].scores[&LifeDomain::Health], 4);
    assert_eq!(series[10].scores[&LifeDomain::Health], 9);

    let trends = domain_trends(&state.wheel_domains, &series);
    assert_eq!(trends[&LifeDomain::Health].direction, TrendDirection::Up);
    assert_eq!(trends[&LifeDomain::Fun].direction, TrendDirection::Stable);

    let summary = progress_summary(&state.wheel_domains, &series, &state.daily_check_ins);
    assert_eq!(summary.initial_average, 4.0);
    assert_eq!(summary.current_average, 4.6);
    assert_eq!(summary.total_check_ins, 1);

    let view = today_view(
        LifeDomain::Health,
        &state.smart_goals,
        &state.action_items,
        &state.daily_check_ins,
        clock.today(),
    );
    assert_eq!(view.check_in.unwrap().mood, Mood::Good);
}

#[test]
fn reset_restores_seed_data_and_clears_storage() {
    let storage = MemoryStateStorage::new();
    let mut service = AuditService::open(&storage, clock());
    service.add_goal(LifeDomain::Finance, goal("Emergency fund")).unwrap();
    assert!(storage.snapshot().is_some());

    service.reset();

    assert!(service.state().smart_goals.is_empty());
    assert!(storage.snapshot().is_none());
    assert!(service.last_saved().is_none());
}
