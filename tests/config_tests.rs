use forgesitediary::config::Config;
use forgesitediary::config::migrate::{migrate_missing_keys, missing_keys};
use forgesitediary::export::range::parse_range;
use forgesitediary::models::Priority;
use forgesitediary::utils::table::{Column, Table};
use std::fs;

mod common;
use common::{temp_out, ymd};

#[test]
fn test_partial_config_uses_defaults() {
    let path = temp_out("cfg_partial", "conf");
    fs::write(&path, "database: /tmp/site.sqlite\nrollover_on_new_day: false\n").unwrap();

    let cfg = Config::load_from(path.as_ref()).unwrap();
    assert_eq!(cfg.database, "/tmp/site.sqlite");
    assert!(!cfg.rollover_on_new_day);
    assert_eq!(cfg.default_priority().unwrap(), Priority::Normal);
    assert_eq!(cfg.date_display_format, "%Y-%m-%d");
}

#[test]
fn test_check_and_migrate_missing_keys() {
    let path = temp_out("cfg_migrate", "conf");
    fs::write(&path, "database: /tmp/site.sqlite\n").unwrap();

    assert_eq!(
        missing_keys(path.as_ref()).unwrap(),
        vec![
            "default_priority",
            "rollover_on_new_day",
            "date_display_format",
            "separator_char"
        ]
    );

    let added = migrate_missing_keys(path.as_ref()).unwrap();
    assert_eq!(added.len(), 4);
    assert!(missing_keys(path.as_ref()).unwrap().is_empty());

    // existing values survive
    let cfg = Config::load_from(path.as_ref()).unwrap();
    assert_eq!(cfg.database, "/tmp/site.sqlite");
    assert!(cfg.rollover_on_new_day);

    assert!(migrate_missing_keys(path.as_ref()).unwrap().is_empty());
}

#[test]
fn test_broken_config_is_an_error() {
    let path = temp_out("cfg_broken", "conf");
    fs::write(&path, "rollover_on_new_day: [not, a, bool]\n").unwrap();
    assert!(Config::load_from(path.as_ref()).is_err());
}

#[test]
fn test_parse_range_forms() {
    assert_eq!(parse_range("2024").unwrap(), (ymd(2024, 1, 1), ymd(2024, 12, 31)));
    assert_eq!(parse_range("2024-02").unwrap(), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
    assert_eq!(parse_range("2024-12").unwrap(), (ymd(2024, 12, 1), ymd(2024, 12, 31)));
    assert_eq!(parse_range("2024-03-05").unwrap(), (ymd(2024, 3, 5), ymd(2024, 3, 5)));
    assert_eq!(
        parse_range("2024-01:2024-03").unwrap(),
        (ymd(2024, 1, 1), ymd(2024, 3, 31))
    );

    assert!(parse_range("2024-03:2024").is_err());
    assert!(parse_range("2024-05:2024-01").is_err());
    assert!(parse_range("March").is_err());
}

#[test]
fn test_table_wraps_long_cells() {
    let mut table = Table::new(vec![Column::new("ID", 4), Column::new("Title", 10)]);
    table.add_row(vec!["ab12".into(), "Install ceiling grid level 3".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0].trim_end(), "ID   Title");
    assert!(lines[1].chars().all(|c| c == '-'));
    assert_eq!(lines[2], "ab12 Install");
    assert!(lines.len() > 3);
    assert!(lines[3].starts_with("     "));
}
