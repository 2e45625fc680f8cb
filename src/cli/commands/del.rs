use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::item::ItemLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

fn confirm(prompt: &str) -> AppResult<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { item, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let target = ItemLogic::resolve(&mut pool, item)?;

        if !*yes {
            warning(format!(
                "About to delete [{}] {}",
                target.short_id(),
                target.title
            ));
            if !confirm("Delete this item?")? {
                info("Deletion cancelled.");
                return Ok(());
            }
        }

        let removed = ItemLogic::delete(&mut pool, &target.id)?;
        ttlog_soft(
            &pool.conn,
            "item_del",
            &removed.id,
            &format!("Deleted '{}'", removed.title),
        );
        success(format!("Deleted [{}] {}", removed.short_id(), removed.title));
    }

    Ok(())
}
