use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run petromanage with colors off and no inherited project dir.
fn petromanage() -> Command {
    let mut cmd = cargo_bin_cmd!("petromanage");
    cmd.env("NO_COLOR", "1").env_remove("PETROMANAGE_DIR");
    cmd
}

fn init(dir: &assert_fs::TempDir) {
    petromanage()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
}

fn create(dir: &assert_fs::TempDir, asset: &str, score: &str) {
    petromanage()
        .current_dir(dir.path())
        .args([
            "report",
            "create",
            "--asset",
            asset,
            "--type",
            "environmental",
            "--score",
            score,
            "--status",
            "compliant",
            "--inspector",
            "EPA Region 6",
            "--next-audit",
            "2026-04-15",
        ])
        .assert()
        .success();
}

/// Seed the audit log with legacy-formatted entries.
fn seed_audit(dir: &assert_fs::TempDir) {
    dir.child(".petromanage/audit.json")
        .write_str(
            r#"[
  {"ReportID":"CR-3","Action":"Deleted Report","OldValue":"Score: 40% | Status: Non-Compliant","NewValue":"DELETED","User":"System Administrator","Timestamp":"20/01/2026, 12:00:00"},
  {"ReportID":"CR-2","Action":"Updated Report","OldValue":"Score: 80% | Status: Compliant","NewValue":"Score: 90% | Status: Compliant","User":"System Administrator","Timestamp":"02 January 2026 at 18:38:57"},
  {"ReportID":"CR-1","Action":"New Report Created","OldValue":"NONE","NewValue":"Score: 92% | Status: Compliant","User":"System Administrator","Timestamp":"15/01/2026, 10:00:00"}
]"#,
        )
        .unwrap();
}

fn exported_files(dir: &assert_fs::TempDir) -> Vec<PathBuf> {
    let exports = dir.path().join(".petromanage/exports");
    if !exports.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(exports)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    files.sort();
    files
}

// ─── Audit trail ─────────────────────────────────────────────────

#[test]
fn audit_list_shows_newest_first() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);
    seed_audit(&dir);

    let out = petromanage()
        .current_dir(dir.path())
        .args(["audit", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();

    let deleted = out.find("CR-3").unwrap();
    let created = out.find("CR-1").unwrap();
    assert!(deleted < created);
    assert!(out.contains("02/01/2026, 18:38:57"));
}

#[test]
fn audit_list_filters_by_day_range() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);
    seed_audit(&dir);

    petromanage()
        .current_dir(dir.path())
        .args(["audit", "list", "--from", "2026-01-10", "--to", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CR-1"))
        .stdout(predicate::str::contains("CR-2").not())
        .stdout(predicate::str::contains("CR-3").not());
}

#[test]
fn audit_list_search_matches_any_column() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);
    seed_audit(&dir);

    petromanage()
        .current_dir(dir.path())
        .args(["audit", "list", "--search", "non-compliant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CR-3"))
        .stdout(predicate::str::contains("1 of 3"));
}

#[test]
fn audit_clear_wipes_after_confirmation() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);
    seed_audit(&dir);

    petromanage()
        .current_dir(dir.path())
        .args(["audit", "clear"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    petromanage()
        .current_dir(dir.path())
        .args(["audit", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 3 audit entries"));

    dir.child(".petromanage/audit.json")
        .assert(predicate::str::contains("CR-").not());
}

#[test]
fn audit_clear_on_empty_log_warns() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);

    petromanage()
        .current_dir(dir.path())
        .args(["audit", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already empty"));
}

// ─── Export ──────────────────────────────────────────────────────

#[test]
fn export_audit_csv_keeps_column_order() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);
    seed_audit(&dir);

    petromanage()
        .current_dir(dir.path())
        .args(["export", "audit", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported CSV"));

    let files = exported_files(&dir);
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("Audit_Trail_"));
    assert!(name.ends_with(".csv"));

    let content = std::fs::read_to_string(&files[0]).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "ReportID,Action,OldValue,NewValue,User,Timestamp"
    );
    assert!(lines.next().unwrap().starts_with("\"CR-3\",\"Deleted Report\""));
}

#[test]
fn export_reports_json_round_trips() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);
    create(&dir, "RIG-002", "77");
    create(&dir, "STG-012", "84");

    petromanage()
        .current_dir(dir.path())
        .args(["export", "reports"])
        .assert()
        .success();

    let files = exported_files(&dir);
    assert_eq!(files.len(), 1);
    let exported: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&files[0]).unwrap()).unwrap();
    assert_eq!(exported.len(), 2);
    assert_eq!(exported[1]["AssetName"], "Storage Facility B (STG-012)");
}

#[test]
fn export_every_format_writes_a_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);
    create(&dir, "RIG-001", "92");

    for format in ["json", "csv", "excel", "pdf"] {
        petromanage()
            .current_dir(dir.path())
            .args(["export", "reports", "--format", format])
            .assert()
            .success();
    }

    let extensions: Vec<String> = exported_files(&dir)
        .iter()
        .map(|p| p.extension().unwrap().to_string_lossy().to_string())
        .collect();
    for ext in ["json", "csv", "xlsx", "pdf"] {
        assert!(extensions.iter().any(|e| e == ext), "missing .{ext} export");
    }
}

#[test]
fn export_single_report_by_id() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);
    create(&dir, "PL-045", "61");

    let reports: Vec<serde_json::Value> = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(".petromanage/reports.json")).unwrap(),
    )
    .unwrap();
    let id = reports[0]["ReportID"].as_str().unwrap().to_string();

    petromanage()
        .current_dir(dir.path())
        .args(["export", "reports", "--id", &id, "--format", "csv"])
        .assert()
        .success();

    let files = exported_files(&dir);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with(&format!("Asset_Detail_{id}_")));
}

#[test]
fn export_with_no_matches_writes_nothing() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);
    create(&dir, "RIG-001", "92");

    petromanage()
        .current_dir(dir.path())
        .args(["export", "reports", "--search", "no such asset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to export"));

    assert!(exported_files(&dir).is_empty());
}

#[test]
fn export_unknown_report_id_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);

    petromanage()
        .current_dir(dir.path())
        .args(["export", "reports", "--id", "CR-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
