//! Weekly mood and action completion series.

use crate::model::check_in::DailyCheckIn;
use chrono::{Days, NaiveDate};

pub const MOOD_WINDOW_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct MoodPoint {
    pub date: NaiveDate,
    /// Mean mood value (1..=5) of the day's check-ins.
    pub mood: Option<f64>,
    /// Completed actions over total actions, in whole percent.
    pub completion_rate: Option<u32>,
}

/// Seven points ending at `today`, oldest first.
pub fn mood_series(check_ins: &[DailyCheckIn], today: NaiveDate) -> Vec<MoodPoint> {
    (0..MOOD_WINDOW_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| mood_point(check_ins, date))
        .collect()
}

fn mood_point(check_ins: &[DailyCheckIn], date: NaiveDate) -> MoodPoint {
    let day: Vec<&DailyCheckIn> = check_ins
        .iter()
        .filter(|check_in| check_in.date == date)
        .collect();

    let mood = if day.is_empty() {
        None
    } else {
        let sum: u32 = day.iter().map(|check_in| u32::from(check_in.mood.value())).sum();
        Some(f64::from(sum) / day.len() as f64)
    };

    let completed: u32 = day.iter().map(|check_in| check_in.actions_completed).sum();
    let total: u32 = day.iter().map(|check_in| check_in.actions_total).sum();
    let completion_rate = if total > 0 {
        Some((f64::from(completed) / f64::from(total) * 100.0).round() as u32)
    } else {
        None
    };

    MoodPoint {
        date,
        mood,
        completion_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::mood_series;
    use crate::model::check_in::{DailyCheckIn, Mood, NewCheckIn};
    use crate::model::domain::LifeDomain;
    use chrono::NaiveDate;

    fn check_in(d: u32, mood: Mood, completed: u32, total: u32) -> DailyCheckIn {
        DailyCheckIn::new(NewCheckIn {
            date: NaiveDate::from_ymd_opt(2026, 7, d).unwrap(),
            domain_id: LifeDomain::Health,
            mood,
            reflection: None,
            actions_completed: completed,
            actions_total: total,
        })
    }

    #[test]
    fn days_are_averaged_and_gaps_stay_empty() {
        let today = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();
        let check_ins = vec![
            check_in(10, Mood::Great, 1, 3),
            check_in(10, Mood::Bad, 1, 0),
            check_in(8, Mood::Okay, 0, 0),
            check_in(1, Mood::Great, 2, 2),
        ];

        let series = mood_series(&check_ins, today);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2026, 7, 4).unwrap());

        let last = &series[6];
        assert_eq!(last.mood, Some(3.5));
        assert_eq!(last.completion_rate, Some(67));

        assert_eq!(series[4].mood, Some(3.0));
        assert_eq!(series[4].completion_rate, None);
        assert_eq!(series[5].mood, None);
    }
}
