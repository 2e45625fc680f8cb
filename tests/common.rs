#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use forgesitediary::models::{Item, ItemStatus, ItemType};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fsd() -> Command {
    cargo_bin_cmd!("forgesitediary")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_forgesitediary.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB and register job `J-100`
pub fn init_db_with_job(db_path: &str) {
    fsd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    fsd()
        .args(["--db", db_path, "job-add", "J-100", "Harbour View Fit-out"])
        .assert()
        .success();
}

/// Add an item through the CLI
pub fn add_item(db_path: &str, date: &str, title: &str, extra: &[&str]) {
    let mut args = vec!["--db", db_path, "item-add", "J-100", title, "--date", date];
    args.extend_from_slice(extra);
    fsd().args(&args).assert().success();
}

/// Short id of the item titled `title` in the `list` output of `date`
pub fn item_id(db_path: &str, date: &str, title: &str) -> String {
    let out = fsd()
        .args(["--db", db_path, "list", "J-100", "--date", date])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout);
    stdout
        .lines()
        .find(|l| l.contains(title))
        .and_then(|l| l.split_whitespace().next())
        .map(str::to_string)
        .unwrap_or_else(|| panic!("item '{}' not listed:\n{}", title, stdout))
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Item under `day_entry_id` with the given kind and status
pub fn item(id: &str, day_entry_id: &str, kind: ItemType, status: ItemStatus, title: &str) -> Item {
    Item::new(id, "job-1", day_entry_id, kind, title, ts(2024, 1, 1)).with_status(status)
}
