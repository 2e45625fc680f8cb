use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_item, fsd, init_db_with_job, item_id, setup_test_db, temp_out};

#[test]
fn test_init_and_jobs() {
    let db_path = setup_test_db("cli_init_jobs");
    init_db_with_job(&db_path);

    fsd()
        .args(["--db", &db_path, "jobs"])
        .assert()
        .success()
        .stdout(contains("J-100").and(contains("Harbour View Fit-out")));

    fsd()
        .args(["--db", &db_path, "job-add", "j-100", "Duplicate"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_next_day_entry_carries_open_items() {
    let db_path = setup_test_db("cli_carry_over");
    init_db_with_job(&db_path);

    add_item(&db_path, "2025-03-03", "Install ceiling grid", &["--priority", "high"]);
    add_item(
        &db_path,
        "2025-03-03",
        "Order plasterboard",
        &["--type", "material", "--status", "ordered"],
    );
    add_item(&db_path, "2025-03-03", "Strip out", &["--status", "done"]);

    fsd()
        .args([
            "--db",
            &db_path,
            "entry",
            "J-100",
            "--date",
            "2025-03-04",
            "--weather",
            "Rain",
        ])
        .assert()
        .success()
        .stdout(
            contains("Carried 2 open item(s) over from 2025-03-03")
                .and(contains("Install ceiling grid"))
                .and(contains("Order plasterboard"))
                .and(contains("Strip out").not())
                .and(contains("Rain")),
        );

    // opening the same day again does not duplicate
    fsd()
        .args(["--db", &db_path, "entry", "J-100", "--date", "2025-03-04"])
        .assert()
        .success()
        .stdout(contains("Carried").not());

    fsd()
        .args(["--db", &db_path, "list", "J-100"])
        .assert()
        .success()
        .stdout(contains("2025-03-04").and(contains("yes")));

    fsd()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("rollover").and(contains("item_add")));
}

#[test]
fn test_status_and_lineage() {
    let db_path = setup_test_db("cli_status_lineage");
    init_db_with_job(&db_path);

    add_item(&db_path, "2025-03-03", "Install ceiling grid", &[]);
    fsd()
        .args(["--db", &db_path, "entry", "J-100", "--date", "2025-03-04"])
        .assert()
        .success();

    let carried = item_id(&db_path, "2025-03-04", "Install ceiling grid");

    fsd()
        .args(["--db", &db_path, "lineage", &carried])
        .assert()
        .success()
        .stdout(contains("2025-03-03").and(contains("2025-03-04")));

    fsd()
        .args(["--db", &db_path, "status", &carried, "delivered"])
        .assert()
        .failure()
        .stderr(contains("not allowed"));

    fsd()
        .args(["--db", &db_path, "status", &carried, "done"])
        .assert()
        .success()
        .stdout(contains("is now done"));

    fsd()
        .args(["--db", &db_path, "list", "J-100", "--date", "2025-03-04", "--open"])
        .assert()
        .success()
        .stdout(contains("No items."));
}

#[test]
fn test_explicit_rollover_only_once() {
    let db_path = setup_test_db("cli_explicit_rollover");
    init_db_with_job(&db_path);

    add_item(&db_path, "2025-03-03", "Chase door quote", &["--type", "email"]);

    fsd()
        .args([
            "--db", &db_path, "rollover", "J-100", "--from", "2025-03-03", "--to", "2025-03-05",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("Dry run: 1 item(s)"));

    fsd()
        .args([
            "--db", &db_path, "rollover", "J-100", "--from", "2025-03-03", "--to", "2025-03-05",
        ])
        .assert()
        .success()
        .stdout(contains("Carried 1 item(s)"));

    fsd()
        .args([
            "--db", &db_path, "rollover", "J-100", "--from", "2025-03-03", "--to", "2025-03-05",
        ])
        .assert()
        .failure()
        .stderr(contains("already rolled over"));
}

#[test]
fn test_delete_item() {
    let db_path = setup_test_db("cli_delete");
    init_db_with_job(&db_path);
    add_item(&db_path, "2025-03-03", "Crane wind hold", &["--type", "delay"]);

    let id = item_id(&db_path, "2025-03-03", "Crane wind hold");
    fsd()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted"));

    fsd()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Item not found"));
}

#[test]
fn test_priority_rollup() {
    let db_path = setup_test_db("cli_priority");
    init_db_with_job(&db_path);
    add_item(&db_path, "2025-03-03", "Fix handrail", &["--priority", "critical"]);
    add_item(&db_path, "2025-03-03", "Check levels", &["--priority", "high"]);

    fsd()
        .args(["--db", &db_path, "priority", "--job", "J-100"])
        .assert()
        .success()
        .stdout(contains("Critical").and(contains("J-100")));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db_with_job(&db_path);
    add_item(&db_path, "2025-03-03", "Install ceiling grid", &[]);
    add_item(&db_path, "2025-04-01", "Snag list walk", &[]);

    let csv_out = temp_out("cli_export_csv", "csv");
    fsd()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--range", "2025-03",
        ])
        .assert()
        .success();
    let csv = fs::read_to_string(&csv_out).unwrap();
    assert!(csv.starts_with("job_number,entry_date,id,type,title"));
    assert!(csv.contains("Install ceiling grid"));
    assert!(!csv.contains("Snag list walk"));

    let json_out = temp_out("cli_export_json", "json");
    fsd()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--job", "J-100",
        ])
        .assert()
        .success();
    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(3));

    fsd()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--range", "2025-13",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_job(&db_path);

    let out = temp_out("cli_backup", "sqlite");
    fs::remove_file(std::path::Path::new(&out).with_extension("zip")).ok();

    fsd()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress", "--yes"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_invalid_inputs() {
    let db_path = setup_test_db("cli_invalid");
    init_db_with_job(&db_path);

    fsd()
        .args(["--db", &db_path, "item-add", "J-100", "x", "--type", "widget"])
        .assert()
        .failure()
        .stderr(contains("Invalid item type"));

    fsd()
        .args(["--db", &db_path, "item-add", "J-404", "x"])
        .assert()
        .failure()
        .stderr(contains("Job not found"));

    fsd()
        .args(["--db", &db_path, "entry", "J-100", "--date", "03/03/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_job(&db_path);

    fsd()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_db_migrate_applies_then_reports_current() {
    let db_path = setup_test_db("cli_db_migrate");

    fsd()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Applied migration").and(contains("Schema is up to date")));

    fsd()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("No pending migrations.").and(contains("Applied migration").not()));
}
