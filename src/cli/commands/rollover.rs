use crate::cli::commands::list::render_items;
use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day_entry::DayEntryLogic;
use crate::core::ids::UuidGenerator;
use crate::core::job::JobLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rollover {
        job,
        from,
        to,
        dry_run,
    } = cmd
    {
        let from = parse_date_arg(from)?;
        let to = parse_date_arg(to)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let job = JobLogic::resolve(&mut pool, job)?;

        let report = DayEntryLogic::rollover_between(
            &mut pool,
            &job.id,
            from,
            to,
            Utc::now(),
            &mut UuidGenerator,
            *dry_run,
        )?;

        if report.rolled.is_empty() {
            info(format!("No open items on {} to carry over.", from));
        } else {
            print!("{}", render_items(&report.rolled, cfg));
        }

        if report.dry_run {
            info(format!(
                "Dry run: {} item(s) would be carried {} → {}",
                report.rolled.len(),
                report.source.date_str(),
                report.target.date_str()
            ));
            return Ok(());
        }

        ttlog_soft(
            &pool.conn,
            "rollover",
            &job.job_number,
            &format!(
                "{} item(s) {} → {}",
                report.rolled.len(),
                report.source.date_str(),
                report.target.date_str()
            ),
        );
        success(format!(
            "Carried {} item(s) {} → {}{}",
            report.rolled.len(),
            report.source.date_str(),
            report.target.date_str(),
            if report.target_created {
                " (new entry)"
            } else {
                ""
            }
        ));
    }

    Ok(())
}
