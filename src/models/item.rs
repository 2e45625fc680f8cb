use super::{item_type::ItemType, priority::Priority, status::ItemStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A unit of trackable work living under one day entry of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub job_id: String,       // ⇔ items.job_id (lookup key only)
    pub day_entry_id: String, // ⇔ items.day_entry_id (lookup key only)
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    pub details: Option<String>,
    pub priority: Priority,
    pub status: ItemStatus,

    pub due_date: Option<NaiveDate>,
    pub order_by_date: Option<NaiveDate>,         // materials
    pub required_on_site_date: Option<NaiveDate>, // materials
    pub follow_up_email_due_by: Option<NaiveDate>, // emails
    pub assigned_to: Option<String>,

    /// Item this one was carried forward from (one hop only).
    pub rolled_from_item_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Build a new item in the default status of its type, normal priority.
    pub fn new(
        id: impl Into<String>,
        job_id: impl Into<String>,
        day_entry_id: impl Into<String>,
        item_type: ItemType,
        title: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let status = item_type.default_status();
        Self {
            id: id.into(),
            job_id: job_id.into(),
            day_entry_id: day_entry_id.into(),
            item_type,
            title: title.into(),
            details: None,
            priority: Priority::Normal,
            status,
            due_date: None,
            order_by_date: None,
            required_on_site_date: None,
            follow_up_email_due_by: None,
            assigned_to: None,
            rolled_from_item_id: None,
            created_at: now,
            updated_at: now,
            closed_at: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// True when the item sits in the terminal status of its type.
    pub fn is_closed(&self) -> bool {
        self.item_type.terminal_status() == Some(self.status)
    }

    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}
