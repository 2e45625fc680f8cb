//! In-memory store backed by plain vectors.

use crate::db::store::{DayEntryStore, ItemStore, JobStore};
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, Item, Job};
use chrono::NaiveDate;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub jobs: Vec<Job>,
    pub entries: Vec<DayEntry>,
    pub items: Vec<Item>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_new_item_ids(&self, items: &[Item]) -> AppResult<()> {
        for (i, it) in items.iter().enumerate() {
            let clash = self.items.iter().any(|existing| existing.id == it.id)
                || items[..i].iter().any(|earlier| earlier.id == it.id);
            if clash {
                return Err(AppError::Other(format!("duplicate item id {}", it.id)));
            }
        }
        Ok(())
    }
}

impl ItemStore for MemoryStore {
    fn list_items_for_day_entry(&mut self, day_entry_id: &str) -> AppResult<Vec<Item>> {
        Ok(self
            .items
            .iter()
            .filter(|it| it.day_entry_id == day_entry_id)
            .cloned()
            .collect())
    }

    fn create_items(&mut self, items: &[Item]) -> AppResult<()> {
        self.ensure_new_item_ids(items)?;
        self.items.extend_from_slice(items);
        Ok(())
    }

    fn get_item(&mut self, id: &str) -> AppResult<Option<Item>> {
        Ok(self.items.iter().find(|it| it.id == id).cloned())
    }

    fn update_item(&mut self, item: &Item) -> AppResult<bool> {
        match self.items.iter_mut().find(|it| it.id == item.id) {
            Some(slot) => {
                *slot = item.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_item(&mut self, id: &str) -> AppResult<bool> {
        let before = self.items.len();
        self.items.retain(|it| it.id != id);
        Ok(self.items.len() != before)
    }

    fn find_items_by_prefix(&mut self, prefix: &str) -> AppResult<Vec<Item>> {
        Ok(self
            .items
            .iter()
            .filter(|it| it.id.starts_with(prefix))
            .cloned()
            .collect())
    }
}

impl DayEntryStore for MemoryStore {
    fn find_entry(&mut self, job_id: &str, date: NaiveDate) -> AppResult<Option<DayEntry>> {
        Ok(self
            .entries
            .iter()
            .find(|e| e.job_id == job_id && e.date == date)
            .cloned())
    }

    fn get_entry(&mut self, id: &str) -> AppResult<Option<DayEntry>> {
        Ok(self.entries.iter().find(|e| e.id == id).cloned())
    }

    fn list_entries_for_job(&mut self, job_id: &str) -> AppResult<Vec<DayEntry>> {
        let mut out: Vec<DayEntry> = self
            .entries
            .iter()
            .filter(|e| e.job_id == job_id)
            .cloned()
            .collect();
        out.sort_by_key(|e| e.date);
        Ok(out)
    }

    fn create_entry(&mut self, entry: &DayEntry, carried: &[Item]) -> AppResult<()> {
        if self
            .entries
            .iter()
            .any(|e| e.id == entry.id || (e.job_id == entry.job_id && e.date == entry.date))
        {
            return Err(AppError::Other(format!(
                "day entry already exists for {} on {}",
                entry.job_id, entry.date
            )));
        }
        self.ensure_new_item_ids(carried)?;

        self.entries.push(entry.clone());
        self.items.extend_from_slice(carried);
        Ok(())
    }

    fn update_entry(&mut self, entry: &DayEntry) -> AppResult<bool> {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => {
                *slot = entry.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl JobStore for MemoryStore {
    fn insert_job(&mut self, job: &Job) -> AppResult<()> {
        self.jobs.push(job.clone());
        Ok(())
    }

    fn list_jobs(&mut self) -> AppResult<Vec<Job>> {
        let mut out = self.jobs.clone();
        out.sort_by(|a, b| a.job_number.cmp(&b.job_number));
        Ok(out)
    }

    fn get_job(&mut self, id: &str) -> AppResult<Option<Job>> {
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }

    fn find_job_by_number(&mut self, job_number: &str) -> AppResult<Option<Job>> {
        Ok(self
            .jobs
            .iter()
            .find(|j| j.job_number.eq_ignore_ascii_case(job_number))
            .cloned())
    }
}
