use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::item::ItemLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::ItemStatus;
use crate::ui::messages::success;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { item, status } = cmd {
        let status =
            ItemStatus::from_cli(status).ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let updated = ItemLogic::set_status(&mut pool, item, status, Utc::now())?;

        ttlog_soft(
            &pool.conn,
            "status",
            &updated.id,
            &format!("'{}' → {}", updated.title, updated.status),
        );
        success(format!(
            "[{}] {} is now {}",
            updated.short_id(),
            updated.title,
            updated.status
        ));
    }

    Ok(())
}
