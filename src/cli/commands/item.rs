use crate::cli::commands::entry::report_opened;
use crate::cli::commands::{date_or_today, parse_opt_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ids::UuidGenerator;
use crate::core::item::{ItemLogic, NewItem};
use crate::core::job::JobLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{ItemStatus, ItemType, Priority};
use crate::ui::messages::success;
use crate::utils::colors::{RESET, color_for_priority};
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::ItemAdd {
        job,
        title,
        item_type,
        priority,
        status,
        date,
        due,
        order_by,
        on_site,
        follow_up,
        details,
        assigned,
    } = cmd
    {
        let kind =
            ItemType::from_cli(item_type).ok_or_else(|| AppError::InvalidItemType(item_type.clone()))?;
        let priority = match priority {
            Some(p) => Priority::from_cli(p).ok_or_else(|| AppError::InvalidPriority(p.clone()))?,
            None => cfg.default_priority()?,
        };
        let status = match status {
            Some(s) => Some(ItemStatus::from_cli(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?),
            None => None,
        };
        let date = date_or_today(date)?;

        let mut new = NewItem::new(kind, title.clone());
        new.priority = priority;
        new.status = status;
        new.due_date = parse_opt_date(due)?;
        new.order_by_date = parse_opt_date(order_by)?;
        new.required_on_site_date = parse_opt_date(on_site)?;
        new.follow_up_email_due_by = parse_opt_date(follow_up)?;
        new.details = details.clone();
        new.assigned_to = assigned.clone();

        let mut pool = DbPool::new(&cfg.database)?;
        let job = JobLogic::resolve(&mut pool, job)?;

        let (opened, item) = ItemLogic::add(
            &mut pool,
            &job.id,
            date,
            new,
            Utc::now(),
            &mut UuidGenerator,
            cfg.rollover_on_new_day,
        )?;
        report_opened(&pool.conn, &job, &opened);

        ttlog_soft(
            &pool.conn,
            "item_add",
            &item.id,
            &format!(
                "{} {} '{}' on {}",
                job.job_number,
                item.item_type,
                item.title,
                opened.entry.date_str()
            ),
        );
        success(format!(
            "Added {} [{}] {} ({}, {}{}{})",
            item.item_type,
            item.short_id(),
            item.title,
            item.status,
            color_for_priority(item.priority),
            item.priority,
            RESET
        ));
    }

    Ok(())
}
