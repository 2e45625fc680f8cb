//! Column conversion helpers shared by the row mappers.

use crate::errors::AppError;
use crate::utils::date::{parse_iso, to_iso};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use rusqlite::types::Type;

fn conversion_err(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn column_index(row: &Row, col: &str) -> usize {
    row.as_ref().column_index(col).unwrap_or(0)
}

pub fn get_timestamp(row: &Row, col: &str) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(col)?;
    parse_iso(&raw)
        .ok_or_else(|| conversion_err(column_index(row, col), AppError::InvalidTimestamp(raw)))
}

pub fn get_opt_timestamp(row: &Row, col: &str) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_iso(&s)
            .map(Some)
            .ok_or_else(|| conversion_err(column_index(row, col), AppError::InvalidTimestamp(s))),
    }
}

pub fn get_date(row: &Row, col: &str) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(col)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| conversion_err(column_index(row, col), AppError::InvalidDate(raw)))
}

pub fn get_opt_date(row: &Row, col: &str) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| conversion_err(column_index(row, col), AppError::InvalidDate(s))),
    }
}

/// Parse a text column with `parse`, reporting `err` on failure.
pub fn get_enum<T>(
    row: &Row,
    col: &str,
    parse: impl Fn(&str) -> Option<T>,
    err: impl Fn(String) -> AppError,
) -> rusqlite::Result<T> {
    let raw: String = row.get(col)?;
    parse(&raw).ok_or_else(|| conversion_err(column_index(row, col), err(raw)))
}

pub fn ts_to_sql(ts: &DateTime<Utc>) -> String {
    to_iso(ts)
}

pub fn opt_ts_to_sql(ts: &Option<DateTime<Utc>>) -> Option<String> {
    ts.as_ref().map(to_iso)
}

pub fn date_to_sql(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn opt_date_to_sql(d: &Option<NaiveDate>) -> Option<String> {
    d.as_ref().map(date_to_sql)
}
