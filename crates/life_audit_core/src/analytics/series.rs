//! Daily score series, per-domain trends and progress summary.
//!
//! # Invariants
//! - The series covers at most `MAX_SERIES_DAYS + 1` days ending today.
//! - A day's domain score is the latest snapshot on or before that day,
//!   falling back to the live score.

use crate::analytics::scores::average_score;
use crate::model::check_in::DailyCheckIn;
use crate::model::domain::{LifeDomain, WheelDomain};
use crate::model::snapshot::{score_as_of, ScoreSnapshot};
use chrono::{Days, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

/// Look-back window of the daily series.
pub const MAX_SERIES_DAYS: i64 = 90;
/// Number of trailing series points a trend compares.
pub const TREND_WINDOW: usize = 7;
/// Minimum absolute change that counts as movement.
pub const TREND_TOLERANCE: f64 = 0.5;

/// One day of the score series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub scores: BTreeMap<LifeDomain, u8>,
    /// Mean of `scores`, rounded to one decimal.
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainTrend {
    pub direction: TrendDirection,
    /// Absolute change across the trend window.
    pub change: f64,
}

/// Headline numbers of the progress view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub current_average: f64,
    pub initial_average: f64,
    pub improvement: f64,
    pub total_check_ins: usize,
    pub days_tracked: usize,
}

/// Builds the daily series ending at `today`.
///
/// Starts at `audit_start_date` when it lies within the look-back window,
/// else at `today - 90`. Empty when the start date is after `today`.
pub fn daily_series(
    domains: &[WheelDomain],
    history: &[ScoreSnapshot],
    audit_start_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<SeriesPoint> {
    let day_count = match audit_start_date {
        Some(start) => (today - start).num_days().min(MAX_SERIES_DAYS),
        None => MAX_SERIES_DAYS,
    };
    if day_count < 0 {
        return Vec::new();
    }

    (0..=day_count)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset as u64)))
        .map(|date| point_for_day(domains, history, date))
        .collect()
}

fn point_for_day(domains: &[WheelDomain], history: &[ScoreSnapshot], date: NaiveDate) -> SeriesPoint {
    let scores: BTreeMap<LifeDomain, u8> = domains
        .iter()
        .map(|domain| {
            let score = score_as_of(history, domain.id, date).unwrap_or(domain.score);
            (domain.id, score)
        })
        .collect();
    let average = if scores.is_empty() {
        0.0
    } else {
        let sum: u32 = scores.values().map(|score| u32::from(*score)).sum();
        round_one_decimal(f64::from(sum) / scores.len() as f64)
    };
    SeriesPoint {
        date,
        scores,
        average,
    }
}

/// Trend per domain over the trailing `TREND_WINDOW` points.
///
/// Empty when the series is shorter than the window.
pub fn domain_trends(
    domains: &[WheelDomain],
    series: &[SeriesPoint],
) -> BTreeMap<LifeDomain, DomainTrend> {
    if series.len() < TREND_WINDOW {
        return BTreeMap::new();
    }
    let window = &series[series.len() - TREND_WINDOW..];
    let (first, last) = (&window[0], &window[TREND_WINDOW - 1]);

    domains
        .iter()
        .map(|domain| {
            let start = first.scores.get(&domain.id).copied().unwrap_or(domain.score);
            let end = last.scores.get(&domain.id).copied().unwrap_or(domain.score);
            let change = f64::from(end) - f64::from(start);
            let direction = if change > TREND_TOLERANCE {
                TrendDirection::Up
            } else if change < -TREND_TOLERANCE {
                TrendDirection::Down
            } else {
                TrendDirection::Stable
            };
            (
                domain.id,
                DomainTrend {
                    direction,
                    change: change.abs(),
                },
            )
        })
        .collect()
}

pub fn progress_summary(
    domains: &[WheelDomain],
    series: &[SeriesPoint],
    check_ins: &[DailyCheckIn],
) -> ProgressSummary {
    let current_average = series
        .last()
        .map_or_else(|| average_score(domains), |point| point.average);
    let initial_average = series.first().map_or(current_average, |point| point.average);
    let days_tracked = check_ins
        .iter()
        .map(|check_in| check_in.date)
        .collect::<BTreeSet<_>>()
        .len();

    ProgressSummary {
        current_average,
        initial_average,
        improvement: current_average - initial_average,
        total_check_ins: check_ins.len(),
        days_tracked,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
