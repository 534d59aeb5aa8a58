//! Wheel score aggregates.

use crate::model::domain::WheelDomain;

/// Score at or below which a domain needs attention.
pub const NEEDS_ATTENTION_THRESHOLD: u8 = 4;
/// Score at or below which a domain is suggested for a new goal.
pub const GOAL_SUGGESTION_THRESHOLD: u8 = 5;

/// Arithmetic mean of domain scores; `0.0` for no domains.
pub fn average_score(domains: &[WheelDomain]) -> f64 {
    if domains.is_empty() {
        return 0.0;
    }
    let sum: u32 = domains.iter().map(|domain| u32::from(domain.score)).sum();
    f64::from(sum) / domains.len() as f64
}

/// Domains scoring `<= threshold`, lowest first; ties keep wheel order.
pub fn focus_suggestions(domains: &[WheelDomain], threshold: u8) -> Vec<&WheelDomain> {
    let mut low: Vec<&WheelDomain> = domains
        .iter()
        .filter(|domain| domain.score <= threshold)
        .collect();
    low.sort_by_key(|domain| domain.score);
    low
}

/// Domains flagged as priority, in wheel order.
pub fn priority_domains(domains: &[WheelDomain]) -> Vec<&WheelDomain> {
    domains.iter().filter(|domain| domain.is_priority()).collect()
}

#[cfg(test)]
mod tests {
    use super::{average_score, focus_suggestions, NEEDS_ATTENTION_THRESHOLD};
    use crate::model::domain::{LifeDomain, WheelDomain};

    fn wheel(scores: [u8; 8]) -> Vec<WheelDomain> {
        LifeDomain::ALL
            .into_iter()
            .zip(scores)
            .map(|(id, score)| {
                let mut domain = WheelDomain::seeded(id);
                domain.score = score;
                domain
            })
            .collect()
    }

    #[test]
    fn average_is_sum_over_eight() {
        let domains = wheel([1, 2, 3, 4, 5, 6, 7, 8]);
        assert!((average_score(&domains) - 4.5).abs() < f64::EPSILON);
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn focus_suggestions_sort_ascending_and_keep_ties_stable() {
        let domains = wheel([4, 9, 2, 4, 7, 1, 8, 6]);
        let ids: Vec<_> = focus_suggestions(&domains, NEEDS_ATTENTION_THRESHOLD)
            .iter()
            .map(|domain| domain.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                LifeDomain::Growth,
                LifeDomain::Health,
                LifeDomain::Career,
                LifeDomain::Relationships
            ]
        );
    }
}
