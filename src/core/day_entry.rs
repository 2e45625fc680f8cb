//! Day-entry lifecycle: opening a day for a job and carrying open items into it.

use crate::core::ids::IdGenerator;
use crate::core::lineage;
use crate::core::rollover::rollover_items;
use crate::db::store::{DayEntryStore, ItemStore};
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, EntryPatch, Item};
use crate::utils::date::Clock;
use chrono::{DateTime, NaiveDate, Utc};

/// Result of opening a day entry.
#[derive(Debug, Clone)]
pub struct OpenedEntry {
    pub entry: DayEntry,
    /// True when the entry did not exist before this call.
    pub created: bool,
    /// Entry the items were carried from, if a rollover happened.
    pub rolled_from: Option<DayEntry>,
    pub rolled: Vec<Item>,
}

/// Outcome of an explicit rollover between two dates.
#[derive(Debug, Clone)]
pub struct RolloverReport {
    pub source: DayEntry,
    pub target: DayEntry,
    pub target_created: bool,
    pub rolled: Vec<Item>,
    pub dry_run: bool,
}

pub struct DayEntryLogic;

impl DayEntryLogic {
    /// Return the entry of `job_id` for `date`, creating it when missing.
    ///
    /// A newly created entry that is the newest of its job receives the open
    /// items of the most recent earlier entry (when `rollover` is on). Entry
    /// and carried items are persisted together. Existing entries are returned
    /// as they are, so rollover fires at most once per job and day.
    pub fn get_or_create_entry<S, G>(
        store: &mut S,
        job_id: &str,
        date: NaiveDate,
        now: DateTime<Utc>,
        ids: &mut G,
        rollover: bool,
    ) -> AppResult<OpenedEntry>
    where
        S: DayEntryStore + ItemStore + ?Sized,
        G: IdGenerator + ?Sized,
    {
        if let Some(entry) = store.find_entry(job_id, date)? {
            return Ok(OpenedEntry {
                entry,
                created: false,
                rolled_from: None,
                rolled: Vec::new(),
            });
        }

        let entry = DayEntry::new(ids.next_id(), job_id, date, now);

        // Only roll into a day that becomes the newest of the job; backfilling
        // an older day must not duplicate items already carried forward.
        let previous = match store.list_entries_for_job(job_id)?.pop() {
            Some(prev) if rollover && prev.date < date => Some(prev),
            _ => None,
        };

        let rolled = match &previous {
            Some(prev) => {
                let items = store.list_items_for_day_entry(&prev.id)?;
                rollover_items(&items, &entry.id, now, ids)
            }
            None => Vec::new(),
        };

        store.create_entry(&entry, &rolled)?;

        Ok(OpenedEntry {
            entry,
            created: true,
            rolled_from: previous,
            rolled,
        })
    }

    /// `get_or_create_entry` for the clock's local calendar day.
    pub fn open_today<S, G>(
        store: &mut S,
        job_id: &str,
        clock: &dyn Clock,
        ids: &mut G,
        rollover: bool,
    ) -> AppResult<OpenedEntry>
    where
        S: DayEntryStore + ItemStore + ?Sized,
        G: IdGenerator + ?Sized,
    {
        Self::get_or_create_entry(store, job_id, clock.today(), clock.now(), ids, rollover)
    }

    /// Apply a partial update to the summaries/weather of an entry.
    pub fn update_summaries<S>(
        store: &mut S,
        entry_id: &str,
        patch: &EntryPatch,
        now: DateTime<Utc>,
    ) -> AppResult<DayEntry>
    where
        S: DayEntryStore + ?Sized,
    {
        let mut entry = store
            .get_entry(entry_id)?
            .ok_or_else(|| AppError::DayEntryNotFound(entry_id.to_string()))?;

        if patch.apply(&mut entry) {
            entry.updated_at = now;
            if !store.update_entry(&entry)? {
                return Err(AppError::DayEntryNotFound(entry_id.to_string()));
            }
        }

        Ok(entry)
    }

    /// Carry the open items of the `from` entry into the `to` entry.
    ///
    /// The target entry is created when missing. Refuses when the target
    /// already holds an item whose lineage reaches the source entry, directly
    /// or through intermediate days.
    pub fn rollover_between<S, G>(
        store: &mut S,
        job_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        now: DateTime<Utc>,
        ids: &mut G,
        dry_run: bool,
    ) -> AppResult<RolloverReport>
    where
        S: DayEntryStore + ItemStore + ?Sized,
        G: IdGenerator + ?Sized,
    {
        if to <= from {
            return Err(AppError::InvalidRolloverTarget { from, to });
        }

        let source = store
            .find_entry(job_id, from)?
            .ok_or_else(|| AppError::DayEntryNotFound(format!("{} on {}", job_id, from)))?;
        let source_items = store.list_items_for_day_entry(&source.id)?;

        match store.find_entry(job_id, to)? {
            Some(target) => {
                if carries_from(&mut *store, &target.id, &source.id)? {
                    return Err(AppError::RolloverAlreadyApplied { from, to });
                }

                let rolled = rollover_items(&source_items, &target.id, now, ids);
                if !dry_run {
                    store.create_items(&rolled)?;
                }

                Ok(RolloverReport {
                    source,
                    target,
                    target_created: false,
                    rolled,
                    dry_run,
                })
            }
            None => {
                let target = DayEntry::new(ids.next_id(), job_id, to, now);
                let rolled = rollover_items(&source_items, &target.id, now, ids);
                if !dry_run {
                    store.create_entry(&target, &rolled)?;
                }

                Ok(RolloverReport {
                    source,
                    target,
                    target_created: true,
                    rolled,
                    dry_run,
                })
            }
        }
    }

    /// Dates having an entry for the job, ascending.
    pub fn list_entry_dates<S>(store: &mut S, job_id: &str) -> AppResult<Vec<NaiveDate>>
    where
        S: DayEntryStore + ?Sized,
    {
        Ok(store
            .list_entries_for_job(job_id)?
            .into_iter()
            .map(|e| e.date)
            .collect())
    }

    /// Most recent entry of a job, if any.
    pub fn latest_entry<S>(store: &mut S, job_id: &str) -> AppResult<Option<DayEntry>>
    where
        S: DayEntryStore + ?Sized,
    {
        Ok(store.list_entries_for_job(job_id)?.pop())
    }
}

/// True when some item of `target_id` descends from an item of `source_id`.
fn carries_from<S>(store: &mut S, target_id: &str, source_id: &str) -> AppResult<bool>
where
    S: ItemStore + ?Sized,
{
    let carried: Vec<Item> = store
        .list_items_for_day_entry(target_id)?
        .into_iter()
        .filter(|it| it.rolled_from_item_id.is_some())
        .collect();

    for it in &carried {
        let chain = lineage::walk(&mut *store, &it.id)?;
        if chain.iter().skip(1).any(|prev| prev.day_entry_id == source_id) {
            return Ok(true);
        }
    }
    Ok(false)
}
