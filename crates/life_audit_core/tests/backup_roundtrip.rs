use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{TimeZone, Utc};
use life_audit_core::model::goal::NewGoal;
use life_audit_core::repo::backup::{checksum, BACKUP_MIME_TYPE, INVALID_BACKUP_MESSAGE};
use life_audit_core::{
    AuditService, AuditServiceError, BackupError, FixedClock, ImportStatus, LifeDomain,
    MemoryStateStorage,
};
use serde_json::json;

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2026, 6, 1, 8, 30, 0).unwrap())
}

fn goal(specific: &str) -> NewGoal {
    NewGoal {
        specific: specific.to_string(),
        measurable: "3 sessions per week".to_string(),
        achievable: String::new(),
        relevant: String::new(),
        time_bound: "By September".to_string(),
        target_date: None,
    }
}

fn reencode(contents: &str, edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let bytes = STANDARD.decode(contents).unwrap();
    let mut envelope: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    edit(&mut envelope);
    STANDARD.encode(serde_json::to_string(&envelope).unwrap())
}

#[test]
fn export_then_import_restores_the_same_state() {
    let source_storage = MemoryStateStorage::new();
    let mut source = AuditService::open(&source_storage, clock());
    source.update_domain_score(LifeDomain::Growth, 8).unwrap();
    source.add_goal(LifeDomain::Health, goal("Run a 10k")).unwrap();

    let file = source.export_backup().unwrap();
    assert_eq!(file.file_name, "life-audit-backup-2026-06-01.lab");
    assert_eq!(file.mime_type, BACKUP_MIME_TYPE);

    let envelope: serde_json::Value =
        serde_json::from_slice(&STANDARD.decode(&file.contents).unwrap()).unwrap();
    assert_eq!(envelope["version"], "1.0");
    assert_eq!(envelope["exportedAt"], "2026-06-01T08:30:00.000Z");

    let target_storage = MemoryStateStorage::new();
    let mut target = AuditService::open(&target_storage, clock());
    let outcome = target.import_backup(&file.contents).unwrap();

    assert!(outcome.checksum_verified);
    assert_eq!(outcome.version, "1.0");
    assert_eq!(target.state(), source.state());
    assert_eq!(target_storage.snapshot(), source_storage.snapshot());
    assert_eq!(target.import_status(), &ImportStatus::Success);

    target.reset_import_status();
    assert_eq!(target.import_status(), &ImportStatus::Idle);
}

#[test]
fn checksum_mismatch_still_imports() {
    let mut source = AuditService::open(MemoryStateStorage::new(), clock());
    source.update_domain_score(LifeDomain::Finance, 2).unwrap();
    let file = source.export_backup().unwrap();

    let tampered = reencode(&file.contents, |envelope| {
        envelope["checksum"] = json!("zzz");
    });

    let mut target = AuditService::open(MemoryStateStorage::new(), clock());
    let outcome = target.import_backup(&tampered).unwrap();
    assert!(!outcome.checksum_verified);
    assert_eq!(target.state().domain(LifeDomain::Finance).unwrap().score, 2);
}

#[test]
fn invalid_file_leaves_state_and_storage_untouched() {
    let storage = MemoryStateStorage::new();
    let mut service = AuditService::open(&storage, clock());
    service.update_domain_score(LifeDomain::Romance, 7).unwrap();
    let stored = storage.snapshot();
    let state = service.state().clone();

    let err = service.import_backup("definitely not base64 !!").unwrap_err();
    assert!(matches!(
        err,
        AuditServiceError::Backup(BackupError::InvalidFile { stage: "base64" })
    ));
    assert_eq!(
        service.import_status(),
        &ImportStatus::Error(INVALID_BACKUP_MESSAGE.to_string())
    );
    assert_eq!(service.state(), &state);
    assert_eq!(storage.snapshot(), stored);
}

#[test]
fn envelope_with_foreign_data_is_rejected() {
    let contents = STANDARD.encode(
        json!({
            "version": "1.0",
            "exportedAt": "2026-01-01T00:00:00.000Z",
            "data": { "wheelDomains": "not a list" },
            "checksum": "0"
        })
        .to_string(),
    );

    let mut service = AuditService::open(MemoryStateStorage::new(), clock());
    let err = service.import_backup(&contents).unwrap_err();
    assert!(matches!(
        err,
        AuditServiceError::Backup(BackupError::InvalidFile { stage: "data" })
    ));

    let missing_data = STANDARD.encode(json!({ "version": "1.0" }).to_string());
    let err = service.import_backup(&missing_data).unwrap_err();
    assert!(matches!(
        err,
        AuditServiceError::Backup(BackupError::InvalidFile { stage: "envelope" })
    ));
}

#[test]
fn browser_era_backup_with_timestamp_ids_imports_intact() {
    let data = json!({
        "wheelDomains": [
            { "id": "health", "name": "Health & Fitness", "description": "Body", "score": 4, "color": "hsl(120, 50%, 45%)", "isPriority": true }
        ],
        "smartGoals": [{
            "id": "1712345678901",
            "domainId": "health",
            "area": "Health & Fitness",
            "specific": "Walk 10k steps",
            "measurable": "Step counter",
            "achievable": "",
            "relevant": "",
            "timeBound": "",
            "targetDate": "",
            "status": "active",
            "createdAt": "2024-04-05T19:21:18.901Z"
        }],
        "actionItems": [
            {
                "id": "1712345678950",
                "goalId": "",
                "domainId": "health",
                "title": "Sleep Hygiene Reset",
                "dueDate": "2024-04-05",
                "status": "pending",
                "priority": "low",
                "createdAt": "2024-04-05T19:21:18.950Z"
            },
            {
                "id": "1712345679000",
                "goalId": "1712345678901",
                "domainId": "health",
                "title": "Buy a step counter",
                "dueDate": "2024-04-08",
                "status": "completed",
                "priority": "medium",
                "createdAt": "2024-04-05T19:21:19.000Z",
                "completedAt": "2024-04-06T07:00:00.000Z"
            }
        ],
        "dailyCheckIns": [],
        "domainProgress": [],
        "scoreHistory": [{ "domainId": "health", "score": 4, "date": "2024-04-05" }],
        "tasks": [{
            "id": "1712345680000",
            "title": "Book physio",
            "priority": "high",
            "status": "in_progress",
            "category": "General",
            "createdAt": "2024-04-05T19:21:20.000Z"
        }],
        "goodTimeJournal": [],
        "currentSection": "dashboard",
        "auditStartDate": "2024-04-05",
        "priorityDomains": ["health", "fun"]
    });
    let compact = data.to_string();
    let contents = STANDARD.encode(
        json!({
            "version": "1.0",
            "exportedAt": "2024-04-06T08:00:00.000Z",
            "data": data,
            "checksum": checksum(&compact)
        })
        .to_string(),
    );

    let storage = MemoryStateStorage::new();
    let mut service = AuditService::open(&storage, clock());
    let outcome = service.import_backup(&contents).unwrap();
    assert!(outcome.checksum_verified);

    let state = service.state();
    let goal = &state.smart_goals[0];
    assert_eq!(goal.id.as_str(), "1712345678901");
    assert_eq!(goal.target_date, None);
    assert_eq!(state.action_items[0].goal_id, None);
    assert_eq!(state.action_items[1].goal_id.as_ref(), Some(&goal.id));
    assert_eq!(state.tasks[0].id.as_str(), "1712345680000");
    assert_eq!(state.current_section, "dashboard");
    assert_eq!(state.domain(LifeDomain::Health).unwrap().score, 4);
    assert_eq!(storage.snapshot(), Some(compact));

    let goal_id = goal.id.clone();
    service.remove_goal(&goal_id).unwrap();
    let titles: Vec<_> = service
        .state()
        .action_items
        .iter()
        .map(|action| action.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Sleep Hygiene Reset"]);
}

#[test]
fn export_before_first_save_reports_no_data() {
    let service = AuditService::open(MemoryStateStorage::new(), clock());
    let err = service.export_backup().unwrap_err();
    assert!(matches!(err, AuditServiceError::Backup(BackupError::NoData)));
}
