//! Priority domain selection buffer.
//!
//! # Invariants
//! - Holds at most `MAX_PRIORITY_DOMAINS` distinct domains.
//! - Selecting one more evicts the oldest selection (FIFO).
//! - Selecting an already-selected domain deselects it.

use crate::model::domain::LifeDomain;

pub const MAX_PRIORITY_DOMAINS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrioritySelection {
    selected: Vec<LifeDomain>,
}

impl PrioritySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `domain`, evicting the oldest selection when full.
    pub fn toggle(&mut self, domain: LifeDomain) {
        if let Some(index) = self.selected.iter().position(|item| *item == domain) {
            self.selected.remove(index);
            return;
        }
        if self.selected.len() >= MAX_PRIORITY_DOMAINS {
            self.selected.remove(0);
        }
        self.selected.push(domain);
    }

    /// Selected domains, oldest first.
    pub fn selected(&self) -> &[LifeDomain] {
        &self.selected
    }

    pub fn is_selected(&self, domain: LifeDomain) -> bool {
        self.selected.contains(&domain)
    }

    /// Diagnosis may only start once the buffer is full.
    pub fn is_complete(&self) -> bool {
        self.selected.len() == MAX_PRIORITY_DOMAINS
    }
}

#[cfg(test)]
mod tests {
    use super::PrioritySelection;
    use crate::model::domain::LifeDomain;

    #[test]
    fn third_selection_evicts_oldest() {
        let mut selection = PrioritySelection::new();
        selection.toggle(LifeDomain::Career);
        selection.toggle(LifeDomain::Health);
        selection.toggle(LifeDomain::Fun);

        assert_eq!(selection.selected(), &[LifeDomain::Health, LifeDomain::Fun]);
        assert!(selection.is_complete());
    }

    #[test]
    fn toggling_selected_domain_removes_it() {
        let mut selection = PrioritySelection::new();
        selection.toggle(LifeDomain::Career);
        selection.toggle(LifeDomain::Health);
        selection.toggle(LifeDomain::Career);

        assert_eq!(selection.selected(), &[LifeDomain::Health]);
        assert!(!selection.is_complete());
    }
}
