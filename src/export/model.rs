use crate::models::Item;
use crate::utils::date::to_iso;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat row used by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct ItemExport {
    pub job_number: String,
    pub entry_date: String,
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
    pub assigned_to: String,
    pub rolled_from_item_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: String,
}

fn opt_date(d: &Option<NaiveDate>) -> String {
    d.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

impl ItemExport {
    pub fn from_item(job_number: &str, entry_date: &NaiveDate, it: &Item) -> Self {
        Self {
            job_number: job_number.to_string(),
            entry_date: entry_date.format("%Y-%m-%d").to_string(),
            id: it.id.clone(),
            item_type: it.item_type.to_string(),
            title: it.title.clone(),
            priority: it.priority.to_string(),
            status: it.status.to_string(),
            due_date: opt_date(&it.due_date),
            assigned_to: it.assigned_to.clone().unwrap_or_default(),
            rolled_from_item_id: it.rolled_from_item_id.clone().unwrap_or_default(),
            created_at: to_iso(&it.created_at),
            updated_at: to_iso(&it.updated_at),
            closed_at: it.closed_at.as_ref().map(to_iso).unwrap_or_default(),
        }
    }
}
