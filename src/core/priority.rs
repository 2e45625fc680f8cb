use crate::models::{Item, ItemStatus, ItemType, Priority};
use chrono::NaiveDate;
use serde::Serialize;
use std::ops::AddAssign;

/// Counters shown in the priority rail.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrioritySummary {
    pub critical: usize,
    pub high: usize,
    pub overdue: usize,
    pub ordered: usize,
}

impl PrioritySummary {
    /// Roll up the open items of `items`; closed items are ignored.
    /// An item is overdue when its due date is strictly before `today`.
    pub fn from_items(items: &[Item], today: NaiveDate) -> Self {
        let mut summary = Self::default();

        for item in items.iter().filter(|it| !it.is_closed()) {
            match item.priority {
                Priority::Critical => summary.critical += 1,
                Priority::High => summary.high += 1,
                Priority::Normal | Priority::Low => {}
            }

            if item.item_type == ItemType::Material && item.status == ItemStatus::Ordered {
                summary.ordered += 1;
            }

            if item.due_date.is_some_and(|due| due < today) {
                summary.overdue += 1;
            }
        }

        summary
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl AddAssign for PrioritySummary {
    fn add_assign(&mut self, rhs: Self) {
        self.critical += rhs.critical;
        self.high += rhs.high;
        self.overdue += rhs.overdue;
        self.ordered += rhs.ordered;
    }
}
