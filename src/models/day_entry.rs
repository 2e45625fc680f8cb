use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One calendar day's log for a job. At most one per (job, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub id: String,
    pub job_id: String,
    pub date: NaiveDate, // local calendar day
    pub weather: Option<String>,
    pub labour_summary: String,
    pub materials_summary: String,
    pub issues_summary: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DayEntry {
    pub fn new(
        id: impl Into<String>,
        job_id: impl Into<String>,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            job_id: job_id.into(),
            date,
            weather: None,
            labour_summary: String::new(),
            materials_summary: String::new(),
            issues_summary: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Partial update of the free-text fields of a day entry.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub weather: Option<String>,
    pub labour_summary: Option<String>,
    pub materials_summary: Option<String>,
    pub issues_summary: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.weather.is_none()
            && self.labour_summary.is_none()
            && self.materials_summary.is_none()
            && self.issues_summary.is_none()
    }

    /// Apply the patch; returns true when any field changed.
    pub fn apply(&self, entry: &mut DayEntry) -> bool {
        let mut changed = false;

        if let Some(w) = &self.weather
            && entry.weather.as_deref() != Some(w.as_str())
        {
            entry.weather = Some(w.clone());
            changed = true;
        }

        for (value, field) in [
            (&self.labour_summary, &mut entry.labour_summary),
            (&self.materials_summary, &mut entry.materials_summary),
            (&self.issues_summary, &mut entry.issues_summary),
        ] {
            if let Some(v) = value
                && field != v
            {
                *field = v.clone();
                changed = true;
            }
        }

        changed
    }
}
