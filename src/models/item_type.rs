use super::status::ItemStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of trackable work attached to a day entry.
///
/// Values read from the database that are not one of the known kinds are kept
/// as `Other` with the raw string, so rows written by a newer version survive a
/// read/write cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Task,
    Material,
    Issue,
    Delay,
    Email,
    Other(String),
}

impl ItemType {
    pub const KNOWN: [ItemType; 5] = [
        ItemType::Task,
        ItemType::Material,
        ItemType::Issue,
        ItemType::Delay,
        ItemType::Email,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Task => "task",
            ItemType::Material => "material",
            ItemType::Issue => "issue",
            ItemType::Delay => "delay",
            ItemType::Email => "email",
            ItemType::Other(raw) => raw,
        }
    }

    /// Convert DB string → enum (total: unknown kinds become `Other`)
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "task" => ItemType::Task,
            "material" => ItemType::Material,
            "issue" => ItemType::Issue,
            "delay" => ItemType::Delay,
            "email" => ItemType::Email,
            other => ItemType::Other(other.to_string()),
        }
    }

    /// Parse user input. Only the known kinds are accepted.
    pub fn from_cli(s: &str) -> Option<Self> {
        match ItemType::from_db_str(&s.trim().to_lowercase()) {
            ItemType::Other(_) => None,
            known => Some(known),
        }
    }

    /// Statuses an item of this kind may hold, in lifecycle order.
    pub fn allowed_statuses(&self) -> &'static [ItemStatus] {
        use ItemStatus::*;
        match self {
            ItemType::Task => &[Open, InProgress, Done],
            ItemType::Material => &[NotOrdered, Ordered, Dispatched, Delivered],
            ItemType::Issue => &[Open, Monitoring, Resolved],
            ItemType::Delay => &[Open, Closed],
            ItemType::Email => &[Draft, Sent],
            ItemType::Other(_) => &ItemStatus::ALL,
        }
    }

    /// Status a freshly created item starts in.
    pub fn default_status(&self) -> ItemStatus {
        match self {
            ItemType::Material => ItemStatus::NotOrdered,
            ItemType::Email => ItemStatus::Draft,
            _ => ItemStatus::Open,
        }
    }

    /// The status that closes an item of this kind, if the kind is known.
    pub fn terminal_status(&self) -> Option<ItemStatus> {
        match self {
            ItemType::Task => Some(ItemStatus::Done),
            ItemType::Material => Some(ItemStatus::Delivered),
            ItemType::Issue => Some(ItemStatus::Resolved),
            ItemType::Delay => Some(ItemStatus::Closed),
            ItemType::Email => Some(ItemStatus::Sent),
            ItemType::Other(_) => None,
        }
    }

    pub fn allows(&self, status: ItemStatus) -> bool {
        self.allowed_statuses().contains(&status)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        ItemType::from_db_str(&s)
    }
}

impl From<ItemType> for String {
    fn from(t: ItemType) -> Self {
        t.as_str().to_string()
    }
}
