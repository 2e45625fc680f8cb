use crate::cli::commands::list::{print_entry, render_items};
use crate::cli::commands::parse_opt_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day_entry::{DayEntryLogic, OpenedEntry};
use crate::core::ids::UuidGenerator;
use crate::core::job::JobLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::store::ItemStore;
use crate::errors::AppResult;
use crate::models::{EntryPatch, Job};
use crate::ui::messages::{info, success};
use crate::utils::date::{Clock, SystemClock};
use rusqlite::Connection;

/// Report a freshly opened entry and audit any carried items.
pub(crate) fn report_opened(conn: &Connection, job: &Job, opened: &OpenedEntry) {
    if !opened.created {
        return;
    }

    success(format!(
        "Opened day entry {} for job {}",
        opened.entry.date_str(),
        job.job_number
    ));

    if let Some(prev) = &opened.rolled_from
        && !opened.rolled.is_empty()
    {
        info(format!(
            "Carried {} open item(s) over from {}",
            opened.rolled.len(),
            prev.date_str()
        ));
        ttlog_soft(
            conn,
            "rollover",
            &job.job_number,
            &format!(
                "{} item(s) {} → {}",
                opened.rolled.len(),
                prev.date_str(),
                opened.entry.date_str()
            ),
        );
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry {
        job,
        date,
        weather,
        labour,
        materials,
        issues,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let job = JobLogic::resolve(&mut pool, job)?;
        let clock = SystemClock;
        let mut ids = UuidGenerator;
        let rollover = cfg.rollover_on_new_day;

        let opened = match parse_opt_date(date)? {
            Some(d) => DayEntryLogic::get_or_create_entry(
                &mut pool,
                &job.id,
                d,
                clock.now(),
                &mut ids,
                rollover,
            )?,
            None => DayEntryLogic::open_today(&mut pool, &job.id, &clock, &mut ids, rollover)?,
        };
        report_opened(&pool.conn, &job, &opened);

        let patch = EntryPatch {
            weather: weather.clone(),
            labour_summary: labour.clone(),
            materials_summary: materials.clone(),
            issues_summary: issues.clone(),
        };

        let entry = if patch.is_empty() {
            opened.entry
        } else {
            let updated =
                DayEntryLogic::update_summaries(&mut pool, &opened.entry.id, &patch, clock.now())?;
            ttlog_soft(
                &pool.conn,
                "entry_update",
                &job.job_number,
                &format!("Updated day entry {}", updated.date_str()),
            );
            updated
        };

        let items = pool.list_items_for_day_entry(&entry.id)?;
        print_entry(&entry, &job.job_number, cfg);
        if items.is_empty() {
            info("No items.");
        } else {
            print!("{}", render_items(&items, cfg));
        }
    }

    Ok(())
}
