//! SQL for jobs, day entries and items.

use crate::db::db_utils::{
    date_to_sql, get_date, get_enum, get_opt_date, get_opt_timestamp, get_timestamp,
    opt_date_to_sql, opt_ts_to_sql, ts_to_sql,
};
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, Item, ItemStatus, ItemType, Job, JobStage, Priority};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Jobs
// ---------------------------

pub fn map_job_row(row: &Row) -> Result<Job> {
    Ok(Job {
        id: row.get("id")?,
        job_number: row.get("job_number")?,
        name: row.get("name")?,
        main_contractor: row.get("main_contractor")?,
        site_address: row.get("site_address")?,
        stage: get_enum(row, "stage", JobStage::from_db_str, AppError::InvalidStage)?,
        active: row.get::<_, i32>("active")? == 1,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

pub fn insert_job(conn: &Connection, job: &Job) -> AppResult<()> {
    conn.execute(
        "INSERT INTO jobs (id, job_number, name, main_contractor, site_address, stage, active, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            job.id,
            job.job_number,
            job.name,
            job.main_contractor,
            job.site_address,
            job.stage.as_str(),
            if job.active { 1 } else { 0 },
            ts_to_sql(&job.created_at),
            ts_to_sql(&job.updated_at),
        ],
    )?;
    Ok(())
}

pub fn load_jobs(conn: &Connection) -> AppResult<Vec<Job>> {
    let mut stmt = conn.prepare("SELECT * FROM jobs ORDER BY job_number ASC")?;
    let rows = stmt.query_map([], map_job_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_job(conn: &Connection, id: &str) -> AppResult<Option<Job>> {
    Ok(conn
        .query_row("SELECT * FROM jobs WHERE id = ?1", [id], map_job_row)
        .optional()?)
}

pub fn load_job_by_number(conn: &Connection, job_number: &str) -> AppResult<Option<Job>> {
    Ok(conn
        .query_row(
            "SELECT * FROM jobs WHERE job_number = ?1 COLLATE NOCASE",
            [job_number],
            map_job_row,
        )
        .optional()?)
}

// ---------------------------
// Day entries
// ---------------------------

pub fn map_entry_row(row: &Row) -> Result<DayEntry> {
    Ok(DayEntry {
        id: row.get("id")?,
        job_id: row.get("job_id")?,
        date: get_date(row, "date")?,
        weather: row.get("weather")?,
        labour_summary: row.get("labour_summary")?,
        materials_summary: row.get("materials_summary")?,
        issues_summary: row.get("issues_summary")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

pub fn insert_entry(conn: &Connection, e: &DayEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO day_entries (id, job_id, date, weather, labour_summary, materials_summary, issues_summary, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            e.id,
            e.job_id,
            date_to_sql(&e.date),
            e.weather,
            e.labour_summary,
            e.materials_summary,
            e.issues_summary,
            ts_to_sql(&e.created_at),
            ts_to_sql(&e.updated_at),
        ],
    )?;
    Ok(())
}

pub fn update_entry(conn: &Connection, e: &DayEntry) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE day_entries
            SET weather = ?2, labour_summary = ?3, materials_summary = ?4, issues_summary = ?5, updated_at = ?6
          WHERE id = ?1",
        params![
            e.id,
            e.weather,
            e.labour_summary,
            e.materials_summary,
            e.issues_summary,
            ts_to_sql(&e.updated_at),
        ],
    )?;
    Ok(n)
}

pub fn load_entry(conn: &Connection, id: &str) -> AppResult<Option<DayEntry>> {
    Ok(conn
        .query_row("SELECT * FROM day_entries WHERE id = ?1", [id], map_entry_row)
        .optional()?)
}

pub fn load_entry_by_date(
    conn: &Connection,
    job_id: &str,
    date: &NaiveDate,
) -> AppResult<Option<DayEntry>> {
    Ok(conn
        .query_row(
            "SELECT * FROM day_entries WHERE job_id = ?1 AND date = ?2",
            params![job_id, date_to_sql(date)],
            map_entry_row,
        )
        .optional()?)
}

/// All entries of a job, oldest first.
pub fn load_entries_for_job(conn: &Connection, job_id: &str) -> AppResult<Vec<DayEntry>> {
    let mut stmt =
        conn.prepare("SELECT * FROM day_entries WHERE job_id = ?1 ORDER BY date ASC")?;
    let rows = stmt.query_map([job_id], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Items
// ---------------------------

pub fn map_item_row(row: &Row) -> Result<Item> {
    let kind: String = row.get("type")?;

    Ok(Item {
        id: row.get("id")?,
        job_id: row.get("job_id")?,
        day_entry_id: row.get("day_entry_id")?,
        item_type: ItemType::from_db_str(&kind),
        title: row.get("title")?,
        details: row.get("details")?,
        priority: get_enum(row, "priority", Priority::from_db_str, AppError::InvalidPriority)?,
        status: get_enum(row, "status", ItemStatus::from_db_str, AppError::InvalidStatus)?,
        due_date: get_opt_date(row, "due_date")?,
        order_by_date: get_opt_date(row, "order_by_date")?,
        required_on_site_date: get_opt_date(row, "required_on_site_date")?,
        follow_up_email_due_by: get_opt_date(row, "follow_up_email_due_by")?,
        assigned_to: row.get("assigned_to")?,
        rolled_from_item_id: row.get("rolled_from_item_id")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
        closed_at: get_opt_timestamp(row, "closed_at")?,
    })
}

pub fn insert_item(conn: &Connection, it: &Item) -> AppResult<()> {
    conn.execute(
        "INSERT INTO items (id, job_id, day_entry_id, type, title, details, priority, status,
                            due_date, order_by_date, required_on_site_date, follow_up_email_due_by,
                            assigned_to, rolled_from_item_id, created_at, updated_at, closed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        params![
            it.id,
            it.job_id,
            it.day_entry_id,
            it.item_type.as_str(),
            it.title,
            it.details,
            it.priority.as_str(),
            it.status.as_str(),
            opt_date_to_sql(&it.due_date),
            opt_date_to_sql(&it.order_by_date),
            opt_date_to_sql(&it.required_on_site_date),
            opt_date_to_sql(&it.follow_up_email_due_by),
            it.assigned_to,
            it.rolled_from_item_id,
            ts_to_sql(&it.created_at),
            ts_to_sql(&it.updated_at),
            opt_ts_to_sql(&it.closed_at),
        ],
    )?;
    Ok(())
}

/// Update every mutable column. `type`, `job_id` and lineage never change.
pub fn update_item(conn: &Connection, it: &Item) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE items
            SET day_entry_id = ?2, title = ?3, details = ?4, priority = ?5, status = ?6,
                due_date = ?7, order_by_date = ?8, required_on_site_date = ?9,
                follow_up_email_due_by = ?10, assigned_to = ?11, updated_at = ?12, closed_at = ?13
          WHERE id = ?1",
        params![
            it.id,
            it.day_entry_id,
            it.title,
            it.details,
            it.priority.as_str(),
            it.status.as_str(),
            opt_date_to_sql(&it.due_date),
            opt_date_to_sql(&it.order_by_date),
            opt_date_to_sql(&it.required_on_site_date),
            opt_date_to_sql(&it.follow_up_email_due_by),
            it.assigned_to,
            ts_to_sql(&it.updated_at),
            opt_ts_to_sql(&it.closed_at),
        ],
    )?;
    Ok(n)
}

pub fn delete_item(conn: &Connection, id: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM items WHERE id = ?1", [id])?)
}

pub fn load_item(conn: &Connection, id: &str) -> AppResult<Option<Item>> {
    Ok(conn
        .query_row("SELECT * FROM items WHERE id = ?1", [id], map_item_row)
        .optional()?)
}

fn collect_items(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<Item>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_item_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Items of one day entry in insertion order.
pub fn load_items_for_entry(conn: &Connection, day_entry_id: &str) -> AppResult<Vec<Item>> {
    collect_items(
        conn,
        "SELECT * FROM items WHERE day_entry_id = ?1 ORDER BY rowid ASC",
        &[&day_entry_id],
    )
}

/// Items whose id starts with `prefix`, compared literally and case-sensitively.
pub fn load_items_by_prefix(conn: &Connection, prefix: &str) -> AppResult<Vec<Item>> {
    collect_items(
        conn,
        "SELECT * FROM items WHERE substr(id, 1, length(?1)) = ?1 ORDER BY rowid ASC",
        &[&prefix],
    )
}

/// Items of a job joined with the date of their day entry, optionally bounded.
pub fn load_items_with_dates(
    conn: &Connection,
    job_id: Option<&str>,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<(NaiveDate, Item)>> {
    let (from, to) = match bounds {
        Some((a, b)) => (Some(date_to_sql(&a)), Some(date_to_sql(&b))),
        None => (None, None),
    };

    let mut stmt = conn.prepare(
        "SELECT d.date AS entry_date, i.*
           FROM items i
           JOIN day_entries d ON d.id = i.day_entry_id
          WHERE (?1 IS NULL OR i.job_id = ?1)
            AND (?2 IS NULL OR d.date >= ?2)
            AND (?3 IS NULL OR d.date <= ?3)
          ORDER BY d.date ASC, i.rowid ASC",
    )?;

    let rows = stmt.query_map(params![job_id, from, to], |row| {
        Ok((get_date(row, "entry_date")?, map_item_row(row)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
