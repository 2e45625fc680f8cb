pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod entry;
pub mod export;
pub mod init;
pub mod item;
pub mod job;
pub mod lineage;
pub mod list;
pub mod log;
pub mod priority;
pub mod rollover;
pub mod status;

use crate::errors::{AppError, AppResult};
use crate::utils::date::{self, parse_date};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` argument.
pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub(crate) fn parse_opt_date(s: &Option<String>) -> AppResult<Option<NaiveDate>> {
    s.as_deref().map(parse_date_arg).transpose()
}

/// `--date` when given, otherwise the local calendar day.
pub(crate) fn date_or_today(s: &Option<String>) -> AppResult<NaiveDate> {
    Ok(parse_opt_date(s)?.unwrap_or_else(date::today))
}
