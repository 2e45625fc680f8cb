use crate::cli::commands::parse_opt_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day_entry::DayEntryLogic;
use crate::core::job::JobLogic;
use crate::db::pool::DbPool;
use crate::db::store::{DayEntryStore, ItemStore};
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, Item};
use crate::ui::messages::{header, info};
use crate::utils::date::format_display;
use crate::utils::formatting::{describe_priority, describe_type};
use crate::utils::table::{Column, Table};

fn opt_date_cell(d: &Option<chrono::NaiveDate>, fmt: &str) -> String {
    d.as_ref().map(|d| format_display(d, fmt)).unwrap_or_default()
}

/// Items of one entry as a table.
pub(crate) fn render_items(items: &[Item], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("Type", 10),
        Column::new("Priority", 8),
        Column::new("Status", 12),
        Column::new("Title", 36),
        Column::new("Due", 10),
        Column::new("Rolled", 6),
    ])
    .with_separator(&cfg.separator_char);

    for it in items {
        let (kind, _) = describe_type(&it.item_type);
        table.add_row(vec![
            it.short_id().to_string(),
            kind,
            describe_priority(it.priority).to_string(),
            it.status.to_string(),
            it.title.clone(),
            opt_date_cell(&it.due_date, &cfg.date_display_format),
            if it.rolled_from_item_id.is_some() { "yes" } else { "" }.to_string(),
        ]);
    }

    table.render()
}

/// Entry header followed by its summaries.
pub(crate) fn print_entry(entry: &DayEntry, job_number: &str, cfg: &Config) {
    header(format!(
        "{} · {}",
        job_number,
        format_display(&entry.date, &cfg.date_display_format)
    ));
    if let Some(w) = &entry.weather {
        println!("Weather   : {}", w);
    }
    for (label, text) in [
        ("Labour   ", &entry.labour_summary),
        ("Materials", &entry.materials_summary),
        ("Issues   ", &entry.issues_summary),
    ] {
        if !text.is_empty() {
            println!("{} : {}", label, text);
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { job, date, open } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let job = JobLogic::resolve(&mut pool, job)?;

        // Without --date the latest entry is shown
        let entry = match parse_opt_date(date)? {
            Some(d) => pool.find_entry(&job.id, d)?.ok_or_else(|| {
                AppError::DayEntryNotFound(format!("{} on {}", job.job_number, d))
            })?,
            None => match DayEntryLogic::latest_entry(&mut pool, &job.id)? {
                Some(e) => e,
                None => {
                    info(format!("Job {} has no day entries yet.", job.job_number));
                    return Ok(());
                }
            },
        };

        let mut items = pool.list_items_for_day_entry(&entry.id)?;
        if *open {
            items.retain(|it| !it.is_closed());
        }
        // open work first, most urgent on top
        items.sort_by_key(|it| (it.is_closed(), it.priority.rank()));

        print_entry(&entry, &job.job_number, cfg);
        if items.is_empty() {
            info("No items.");
        } else {
            print!("{}", render_items(&items, cfg));
        }
    }

    Ok(())
}
