//! Versioned schema migrations.
//!
//! Every migration runs once, inside its own transaction, and is recorded in
//! `schema_migrations`. Applied migrations are also written to the audit log.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "0001_core_schema",
        sql: r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id              TEXT PRIMARY KEY,
            job_number      TEXT NOT NULL UNIQUE,
            name            TEXT NOT NULL,
            main_contractor TEXT NOT NULL DEFAULT '',
            site_address    TEXT NOT NULL DEFAULT '',
            stage           TEXT NOT NULL DEFAULT 'prestart'
                            CHECK(stage IN ('prestart','in_progress','snagging','complete')),
            active          INTEGER NOT NULL DEFAULT 1,
            created_at      TEXT NOT NULL,
            updated_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS day_entries (
            id                TEXT PRIMARY KEY,
            job_id            TEXT NOT NULL REFERENCES jobs(id),
            date              TEXT NOT NULL,
            weather           TEXT,
            labour_summary    TEXT NOT NULL DEFAULT '',
            materials_summary TEXT NOT NULL DEFAULT '',
            issues_summary    TEXT NOT NULL DEFAULT '',
            created_at        TEXT NOT NULL,
            updated_at        TEXT NOT NULL,
            UNIQUE(job_id, date)
        );

        CREATE TABLE IF NOT EXISTS items (
            id                     TEXT PRIMARY KEY,
            job_id                 TEXT NOT NULL,
            day_entry_id           TEXT NOT NULL,
            type                   TEXT NOT NULL,
            title                  TEXT NOT NULL,
            details                TEXT,
            priority               TEXT NOT NULL DEFAULT 'normal'
                                   CHECK(priority IN ('critical','high','normal','low')),
            status                 TEXT NOT NULL,
            due_date               TEXT,
            order_by_date          TEXT,
            required_on_site_date  TEXT,
            follow_up_email_due_by TEXT,
            assigned_to            TEXT,
            rolled_from_item_id    TEXT,
            created_at             TEXT NOT NULL,
            updated_at             TEXT NOT NULL,
            closed_at              TEXT
        );
        "#,
    },
    Migration {
        name: "0002_lookup_indexes",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_day_entries_job_date ON day_entries(job_id, date);
        CREATE INDEX IF NOT EXISTS idx_items_day_entry ON items(day_entry_id);
        CREATE INDEX IF NOT EXISTS idx_items_job ON items(job_id);
        CREATE INDEX IF NOT EXISTS idx_items_rolled_from ON items(rolled_from_item_id);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_migrations_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            name       TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, name: &str) -> AppResult<bool> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM schema_migrations WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Names of the migrations not yet applied, in order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_migrations_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.name)? {
            out.push(m.name);
        }
    }
    Ok(out)
}

/// Apply every pending migration. Silent when the schema is current.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    ensure_migrations_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.name)? {
            continue;
        }

        let batch = format!(
            "BEGIN;\n{}\nINSERT INTO schema_migrations (name, applied_at) VALUES ('{}', datetime('now'));\nCOMMIT;",
            m.sql, m.name
        );

        if let Err(e) = conn.execute_batch(&batch) {
            let _ = conn.execute_batch("ROLLBACK;");
            return Err(AppError::Migration(format!("{}: {}", m.name, e)));
        }

        success(format!("Applied migration {}", m.name));

        ttlog(conn, "migration_applied", m.name, "Schema migration applied")?;
    }

    Ok(())
}

/// Number of applied migrations (used by `db --info`).
pub fn applied_count(conn: &Connection) -> AppResult<i64> {
    ensure_migrations_table(conn)?;
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
        row.get(0)
    })?;
    Ok(n)
}
