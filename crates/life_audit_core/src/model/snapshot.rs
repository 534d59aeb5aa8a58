//! Score history snapshots and per-domain progress records.
//!
//! # Invariants
//! - At most one snapshot per `(domain_id, date)`; recording again on the
//!   same day replaces the earlier one.
//! - `DomainProgress` records are carried through load/save unchanged; no
//!   operation derives or rewrites them.

use crate::model::check_in::DailyCheckIn;
use crate::model::domain::LifeDomain;
use crate::model::id::empty_as_none;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable point-in-time score of one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub domain_id: LifeDomain,
    pub score: u8,
    pub date: NaiveDate,
}

/// Progress of one domain since the audit started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainProgress {
    pub domain_id: LifeDomain,
    pub initial_score: u8,
    pub current_score: u8,
    pub target_score: u8,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub check_ins: Vec<DailyCheckIn>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_assessment_date: Option<NaiveDate>,
}

/// Appends `snapshot`, replacing any same-day snapshot for the same domain.
pub fn record_snapshot(history: &mut Vec<ScoreSnapshot>, snapshot: ScoreSnapshot) {
    history.retain(|existing| {
        !(existing.domain_id == snapshot.domain_id && existing.date == snapshot.date)
    });
    history.push(snapshot);
}

/// Most recent snapshot score for `domain` on or before `day`.
pub fn score_as_of(history: &[ScoreSnapshot], domain: LifeDomain, day: NaiveDate) -> Option<u8> {
    history
        .iter()
        .filter(|snapshot| snapshot.domain_id == domain && snapshot.date <= day)
        .max_by_key(|snapshot| snapshot.date)
        .map(|snapshot| snapshot.score)
}

#[cfg(test)]
mod tests {
    use super::{record_snapshot, score_as_of, ScoreSnapshot};
    use crate::model::domain::LifeDomain;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[test]
    fn same_day_snapshot_is_replaced() {
        let mut history = Vec::new();
        record_snapshot(&mut history, ScoreSnapshot { domain_id: LifeDomain::Fun, score: 3, date: day(1) });
        record_snapshot(&mut history, ScoreSnapshot { domain_id: LifeDomain::Fun, score: 6, date: day(1) });
        record_snapshot(&mut history, ScoreSnapshot { domain_id: LifeDomain::Career, score: 4, date: day(1) });

        assert_eq!(history.len(), 2);
        assert_eq!(score_as_of(&history, LifeDomain::Fun, day(1)), Some(6));
    }

    #[test]
    fn score_as_of_picks_latest_not_after_day() {
        let history = vec![
            ScoreSnapshot { domain_id: LifeDomain::Fun, score: 7, date: day(10) },
            ScoreSnapshot { domain_id: LifeDomain::Fun, score: 4, date: day(2) },
        ];
        assert_eq!(score_as_of(&history, LifeDomain::Fun, day(1)), None);
        assert_eq!(score_as_of(&history, LifeDomain::Fun, day(5)), Some(4));
        assert_eq!(score_as_of(&history, LifeDomain::Fun, day(12)), Some(7));
    }
}
