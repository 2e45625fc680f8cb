use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

fn bad(msg: &str) -> AppError {
    AppError::InvalidRange(msg.to_string())
}

/// First and last day of one period token (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`).
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| bad("invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| bad("invalid month"))?;
            Ok((d1, month_last_day(d1)))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(bad("unsupported range format")),
    }
}

fn month_last_day(first: NaiveDate) -> NaiveDate {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// Parse `--range`.
///
/// Accepts:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any two of the above joined by `:` (same format on both sides)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return period_bounds(r);
    };

    let start = start_raw.trim();
    let end = end_raw.trim();

    if start.len() != end.len() {
        return Err(bad("start and end must have same format"));
    }

    let (d1, _) = period_bounds(start)?;
    let (_, d2) = period_bounds(end)?;

    if d2 < d1 {
        return Err(bad("end is before start"));
    }
    Ok((d1, d2))
}
