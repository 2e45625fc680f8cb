use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{load_items_with_dates, load_jobs};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::ItemExport;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::parse_range;
use crate::models::Job;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;

/// High-level export of diary items.
pub struct ExportLogic;

impl ExportLogic {
    /// Export items to `file`.
    ///
    /// - `job`: restrict to one job
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `A:B`
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        job: Option<&Job>,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let numbers: HashMap<String, String> = load_jobs(&pool.conn)?
            .into_iter()
            .map(|j| (j.id, j.job_number))
            .collect();

        let rows: Vec<ItemExport> =
            load_items_with_dates(&pool.conn, job.map(|j| j.id.as_str()), bounds)?
                .iter()
                .map(|(date, item)| {
                    let number = numbers
                        .get(&item.job_id)
                        .map(String::as_str)
                        .unwrap_or("?");
                    ItemExport::from_item(number, date, item)
                })
                .collect();

        if rows.is_empty() {
            warning("No items found for the selected job/range.");
            return Ok(0);
        }

        if path.is_dir() {
            return Err(AppError::Export(format!(
                "output path is a directory: {}",
                path.display()
            )));
        }
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_soft(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} items as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
