use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    // generic
    Open,
    InProgress,
    Done,
    Closed,
    // materials
    NotOrdered,
    Ordered,
    Dispatched,
    Delivered,
    // issues
    Monitoring,
    Resolved,
    // emails
    Draft,
    Sent,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 12] = [
        ItemStatus::Open,
        ItemStatus::InProgress,
        ItemStatus::Done,
        ItemStatus::Closed,
        ItemStatus::NotOrdered,
        ItemStatus::Ordered,
        ItemStatus::Dispatched,
        ItemStatus::Delivered,
        ItemStatus::Monitoring,
        ItemStatus::Resolved,
        ItemStatus::Draft,
        ItemStatus::Sent,
    ];

    /// Convert enum → DB string
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Open => "open",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Done => "done",
            ItemStatus::Closed => "closed",
            ItemStatus::NotOrdered => "not_ordered",
            ItemStatus::Ordered => "ordered",
            ItemStatus::Dispatched => "dispatched",
            ItemStatus::Delivered => "delivered",
            ItemStatus::Monitoring => "monitoring",
            ItemStatus::Resolved => "resolved",
            ItemStatus::Draft => "draft",
            ItemStatus::Sent => "sent",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        ItemStatus::ALL.into_iter().find(|st| st.as_str() == s)
    }

    /// Helper: accept user input such as "In-Progress" or "not ordered"
    pub fn from_cli(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', ' '], "_");
        ItemStatus::from_db_str(&norm)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
