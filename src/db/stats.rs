use crate::db::migrate::applied_count;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> AppResult<i64> {
    Ok(pool.conn.query_row(sql, [], |row| row.get(0))?)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Migrations applied:{} {}",
        CYAN,
        RESET,
        applied_count(&pool.conn)?
    );

    //
    // 2) TOTALS
    //
    let jobs = count(pool, "SELECT COUNT(*) FROM jobs")?;
    let entries = count(pool, "SELECT COUNT(*) FROM day_entries")?;
    let items = count(pool, "SELECT COUNT(*) FROM items")?;
    let rolled = count(
        pool,
        "SELECT COUNT(*) FROM items WHERE rolled_from_item_id IS NOT NULL",
    )?;

    println!("{}• Jobs:{} {}{}{}", CYAN, RESET, GREEN, jobs, RESET);
    println!("{}• Day entries:{} {}{}{}", CYAN, RESET, GREEN, entries, RESET);
    println!(
        "{}• Items:{} {}{}{} ({} carried over)",
        CYAN, RESET, GREEN, items, RESET, rolled
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM day_entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM day_entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Diary range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
