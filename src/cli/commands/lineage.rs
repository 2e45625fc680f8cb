use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::item::ItemLogic;
use crate::core::lineage;
use crate::db::pool::DbPool;
use crate::db::store::DayEntryStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, color_for_item};
use crate::utils::date::format_display;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lineage { item } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let start = ItemLogic::resolve(&mut pool, item)?;
        let chain = lineage::walk(&mut pool, &start.id)?;

        println!("🔗 Lineage of '{}':\n", start.title);

        for (depth, it) in chain.iter().enumerate() {
            let day = match pool.get_entry(&it.day_entry_id)? {
                Some(e) => format_display(&e.date, &cfg.date_display_format),
                None => "?".to_string(),
            };
            let arrow = if depth == 0 { "  " } else { "↑ " };
            println!(
                "{}{}{} {}{}  {}{}{}",
                "  ".repeat(depth),
                arrow,
                day,
                color_for_item(it),
                it.short_id(),
                it.status,
                RESET,
                if it.title != start.title {
                    format!(" {GREY}({}){RESET}", it.title)
                } else {
                    String::new()
                }
            );
        }

        if chain.len() == 1 {
            info("This item was not carried over from an earlier day.");
        }
    }

    Ok(())
}
