use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day_entry::DayEntryLogic;
use crate::core::job::JobLogic;
use crate::core::priority::PrioritySummary;
use crate::db::pool::DbPool;
use crate::db::store::ItemStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{BLUE, MAGENTA, RED, YELLOW, colorize_count};
use crate::utils::date::today;
use crate::utils::formatting::{bold, pad_right, separator};

fn print_row(label: &str, s: &PrioritySummary) {
    println!(
        "{} {} {} {} {}",
        pad_right(label, 12),
        colorize_count(s.critical, 8, RED),
        colorize_count(s.high, 8, YELLOW),
        colorize_count(s.overdue, 8, MAGENTA),
        colorize_count(s.ordered, 8, BLUE),
    );
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Priority { job } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let jobs = match job {
            Some(key) => vec![JobLogic::resolve(&mut pool, key)?],
            None => JobLogic::list(&mut pool, false)?,
        };

        if jobs.is_empty() {
            info("No jobs found.");
            return Ok(());
        }

        let today = today();
        let mut total = PrioritySummary::default();

        println!(
            "{} {:>8} {:>8} {:>8} {:>8}",
            bold(&pad_right("Job", 12)),
            "Critical",
            "High",
            "Overdue",
            "Ordered"
        );
        println!("{}", separator(&cfg.separator_char, 48));

        for job in &jobs {
            // Only the latest entry: rolled copies of older days are not counted twice
            let summary = match DayEntryLogic::latest_entry(&mut pool, &job.id)? {
                Some(entry) => {
                    let items = pool.list_items_for_day_entry(&entry.id)?;
                    PrioritySummary::from_items(&items, today)
                }
                None => PrioritySummary::default(),
            };
            print_row(&job.job_number, &summary);
            total += summary;
        }

        if jobs.len() > 1 {
            println!("{}", separator(&cfg.separator_char, 48));
            print_row("Total", &total);
        }
    }

    Ok(())
}
