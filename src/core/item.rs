use crate::core::day_entry::{DayEntryLogic, OpenedEntry};
use crate::core::ids::IdGenerator;
use crate::db::store::{DayEntryStore, ItemStore};
use crate::errors::{AppError, AppResult};
use crate::models::{Item, ItemStatus, ItemType, Priority};
use chrono::{DateTime, NaiveDate, Utc};

/// Shortest id prefix accepted when referring to an item.
pub const MIN_ID_PREFIX: usize = 4;

/// Fields supplied when adding an item.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub item_type: ItemType,
    pub title: String,
    pub details: Option<String>,
    pub priority: Priority,
    pub status: Option<ItemStatus>,
    pub due_date: Option<NaiveDate>,
    pub order_by_date: Option<NaiveDate>,
    pub required_on_site_date: Option<NaiveDate>,
    pub follow_up_email_due_by: Option<NaiveDate>,
    pub assigned_to: Option<String>,
}

impl NewItem {
    pub fn new(item_type: ItemType, title: impl Into<String>) -> Self {
        Self {
            item_type,
            title: title.into(),
            details: None,
            priority: Priority::Normal,
            status: None,
            due_date: None,
            order_by_date: None,
            required_on_site_date: None,
            follow_up_email_due_by: None,
            assigned_to: None,
        }
    }
}

fn check_status(item_type: &ItemType, status: ItemStatus) -> AppResult<()> {
    if item_type.allows(status) {
        Ok(())
    } else {
        Err(AppError::StatusNotAllowed {
            item_type: item_type.to_string(),
            status: status.to_string(),
        })
    }
}

pub struct ItemLogic;

impl ItemLogic {
    /// Add an item to the job's entry for `date`, opening the entry first
    /// (which may carry items over from the previous day).
    pub fn add<S, G>(
        store: &mut S,
        job_id: &str,
        date: NaiveDate,
        new: NewItem,
        now: DateTime<Utc>,
        ids: &mut G,
        rollover: bool,
    ) -> AppResult<(OpenedEntry, Item)>
    where
        S: DayEntryStore + ItemStore + ?Sized,
        G: IdGenerator + ?Sized,
    {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(AppError::Other("item title must not be empty".into()));
        }

        let status = new
            .status
            .unwrap_or_else(|| new.item_type.default_status());
        check_status(&new.item_type, status)?;

        let opened = DayEntryLogic::get_or_create_entry(store, job_id, date, now, ids, rollover)?;

        let mut item = Item::new(
            ids.next_id(),
            job_id,
            opened.entry.id.as_str(),
            new.item_type,
            title,
            now,
        )
        .with_priority(new.priority)
        .with_status(status);

        item.details = new.details;
        item.due_date = new.due_date;
        item.order_by_date = new.order_by_date;
        item.required_on_site_date = new.required_on_site_date;
        item.follow_up_email_due_by = new.follow_up_email_due_by;
        item.assigned_to = new.assigned_to;
        if item.is_closed() {
            item.closed_at = Some(now);
        }

        store.create_items(std::slice::from_ref(&item))?;
        Ok((opened, item))
    }

    /// Move an item to `status`, maintaining `closed_at` and `updated_at`.
    pub fn set_status<S>(
        store: &mut S,
        item_id: &str,
        status: ItemStatus,
        now: DateTime<Utc>,
    ) -> AppResult<Item>
    where
        S: ItemStore + ?Sized,
    {
        let mut item = Self::resolve(store, item_id)?;
        check_status(&item.item_type, status)?;

        item.status = status;
        item.updated_at = now;
        item.closed_at = if item.is_closed() { Some(now) } else { None };

        if !store.update_item(&item)? {
            return Err(AppError::ItemNotFound(item_id.to_string()));
        }
        Ok(item)
    }

    /// Delete an item; returns what was removed.
    pub fn delete<S>(store: &mut S, item_id: &str) -> AppResult<Item>
    where
        S: ItemStore + ?Sized,
    {
        let item = Self::resolve(store, item_id)?;
        if !store.delete_item(&item.id)? {
            return Err(AppError::ItemNotFound(item_id.to_string()));
        }
        Ok(item)
    }

    /// Find an item by full id, or by a unique prefix of at least
    /// [`MIN_ID_PREFIX`] characters.
    pub fn resolve<S>(store: &mut S, key: &str) -> AppResult<Item>
    where
        S: ItemStore + ?Sized,
    {
        let key = key.trim();
        if let Some(item) = store.get_item(key)? {
            return Ok(item);
        }
        if key.chars().count() < MIN_ID_PREFIX {
            return Err(AppError::ItemNotFound(key.to_string()));
        }

        let mut matches = store.find_items_by_prefix(key)?;
        match matches.len() {
            0 => Err(AppError::ItemNotFound(key.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(AppError::AmbiguousItemId(key.to_string())),
        }
    }
}
