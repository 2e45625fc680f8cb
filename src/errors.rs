//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid item type: {0}")]
    InvalidItemType(String),

    #[error("Invalid item status: {0}")]
    InvalidStatus(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid job stage: {0}")]
    InvalidStage(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Day entry not found: {0}")]
    DayEntryNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item id prefix '{0}' matches more than one item")]
    AmbiguousItemId(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("A job with number {0} already exists")]
    DuplicateJobNumber(String),

    #[error("Status '{status}' is not allowed for {item_type} items")]
    StatusNotAllowed { item_type: String, status: String },

    #[error("Items from {from} were already rolled over into {to}")]
    RolloverAlreadyApplied { from: NaiveDate, to: NaiveDate },

    #[error("Rollover target {to} must be after source {from}")]
    InvalidRolloverTarget { from: NaiveDate, to: NaiveDate },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
