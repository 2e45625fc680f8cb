//! Store abstractions the domain logic depends on.
//!
//! `DbPool` implements them over SQLite; `MemoryStore` keeps everything in
//! plain vectors.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{DayEntry, Item, Job};
use chrono::NaiveDate;

pub trait ItemStore {
    fn list_items_for_day_entry(&mut self, day_entry_id: &str) -> AppResult<Vec<Item>>;

    /// Persist a batch of new items; all or nothing.
    fn create_items(&mut self, items: &[Item]) -> AppResult<()>;

    fn get_item(&mut self, id: &str) -> AppResult<Option<Item>>;

    /// Returns false when no item has that id.
    fn update_item(&mut self, item: &Item) -> AppResult<bool>;

    /// Returns false when no item has that id.
    fn delete_item(&mut self, id: &str) -> AppResult<bool>;

    fn find_items_by_prefix(&mut self, prefix: &str) -> AppResult<Vec<Item>>;
}

pub trait DayEntryStore {
    fn find_entry(&mut self, job_id: &str, date: NaiveDate) -> AppResult<Option<DayEntry>>;

    fn get_entry(&mut self, id: &str) -> AppResult<Option<DayEntry>>;

    /// Entries of a job, oldest first.
    fn list_entries_for_job(&mut self, job_id: &str) -> AppResult<Vec<DayEntry>>;

    /// Persist a new entry together with the items carried into it; all or nothing.
    fn create_entry(&mut self, entry: &DayEntry, carried: &[Item]) -> AppResult<()>;

    /// Returns false when no entry has that id.
    fn update_entry(&mut self, entry: &DayEntry) -> AppResult<bool>;
}

pub trait JobStore {
    fn insert_job(&mut self, job: &Job) -> AppResult<()>;

    /// All jobs ordered by job number.
    fn list_jobs(&mut self) -> AppResult<Vec<Job>>;

    fn get_job(&mut self, id: &str) -> AppResult<Option<Job>>;

    /// Case-insensitive lookup by job number.
    fn find_job_by_number(&mut self, job_number: &str) -> AppResult<Option<Job>>;
}

impl ItemStore for DbPool {
    fn list_items_for_day_entry(&mut self, day_entry_id: &str) -> AppResult<Vec<Item>> {
        queries::load_items_for_entry(&self.conn, day_entry_id)
    }

    fn create_items(&mut self, items: &[Item]) -> AppResult<()> {
        if items.is_empty() {
            return Ok(());
        }

        let tx = self.conn.transaction()?;
        for it in items {
            queries::insert_item(&tx, it)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn get_item(&mut self, id: &str) -> AppResult<Option<Item>> {
        queries::load_item(&self.conn, id)
    }

    fn update_item(&mut self, item: &Item) -> AppResult<bool> {
        Ok(queries::update_item(&self.conn, item)? > 0)
    }

    fn delete_item(&mut self, id: &str) -> AppResult<bool> {
        Ok(queries::delete_item(&self.conn, id)? > 0)
    }

    fn find_items_by_prefix(&mut self, prefix: &str) -> AppResult<Vec<Item>> {
        queries::load_items_by_prefix(&self.conn, prefix)
    }
}

impl DayEntryStore for DbPool {
    fn find_entry(&mut self, job_id: &str, date: NaiveDate) -> AppResult<Option<DayEntry>> {
        queries::load_entry_by_date(&self.conn, job_id, &date)
    }

    fn get_entry(&mut self, id: &str) -> AppResult<Option<DayEntry>> {
        queries::load_entry(&self.conn, id)
    }

    fn list_entries_for_job(&mut self, job_id: &str) -> AppResult<Vec<DayEntry>> {
        queries::load_entries_for_job(&self.conn, job_id)
    }

    fn create_entry(&mut self, entry: &DayEntry, carried: &[Item]) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        queries::insert_entry(&tx, entry)?;
        for it in carried {
            queries::insert_item(&tx, it)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn update_entry(&mut self, entry: &DayEntry) -> AppResult<bool> {
        Ok(queries::update_entry(&self.conn, entry)? > 0)
    }
}

impl JobStore for DbPool {
    fn insert_job(&mut self, job: &Job) -> AppResult<()> {
        queries::insert_job(&self.conn, job)
    }

    fn list_jobs(&mut self) -> AppResult<Vec<Job>> {
        queries::load_jobs(&self.conn)
    }

    fn get_job(&mut self, id: &str) -> AppResult<Option<Job>> {
        queries::load_job(&self.conn, id)
    }

    fn find_job_by_number(&mut self, job_number: &str) -> AppResult<Option<Job>> {
        queries::load_job_by_number(&self.conn, job_number)
    }
}
