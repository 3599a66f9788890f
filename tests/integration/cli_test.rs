//! End-to-end tests for the tzx binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use crate::helpers::{tzdb_dir, write_config, write_tzdb};

/// A tzx command isolated from the user's config, colors and log filter.
fn tzx(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tzx").expect("tzx binary should build");
    cmd.env("TZX_CONFIG", config)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn dump_json(args: &[&str]) -> Value {
    let (_guard, config) = write_config("");
    let output = tzx(&config)
        .arg("dump")
        .arg(tzdb_dir())
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("dump should print JSON")
}

// ============================================================================
// summary
// ============================================================================

#[test]
fn summary_reports_fixture_counts() {
    let (_guard, config) = write_config("");
    tzx(&config)
        .arg("summary")
        .arg(tzdb_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Extractor Summary"))
        .stdout(predicate::str::contains("Line count (Rule, Zone, Link): (14, 25, 4)"))
        .stdout(predicate::str::contains("Name count (Rule, Zone, Link): (7, 9, 4)"))
        .stdout(predicate::str::contains("Rule entry count: 14"))
        .stdout(predicate::str::contains("Zone entry count: 25"))
        .stdout(predicate::str::contains("Invalid lines (Rule, Zone, Link): (0, 0, 0)"))
        .stdout(predicate::str::contains("All lines decoded."));
}

#[test]
fn summary_succeeds_with_invalid_lines() {
    let dir = write_tzdb(&[("asia", "Rule Bad 20x0 only - Jan 1 0:00 0 -\n")]);
    let (_guard, config) = write_config("");
    tzx(&config)
        .arg("summary")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid lines (Rule, Zone, Link): (1, 0, 0)"))
        .stdout(predicate::str::contains("Some lines failed to decode"));
}

#[test]
fn summary_uses_configured_input_dir() {
    let (_guard, config) = write_config(&format!(
        "[database]\ninput_dir = {:?}\n",
        tzdb_dir().display().to_string()
    ));
    tzx(&config)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zone entry count: 25"));
}

#[test]
fn summary_without_directory_fails() {
    let (_guard, config) = write_config("");
    tzx(&config)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tz database directory given"));
}

#[test]
fn summary_missing_zone_file_fails() {
    let dir = write_tzdb(&[]);
    std::fs::remove_file(dir.path().join("africa")).unwrap();
    let (_guard, config) = write_config("");
    tzx(&config)
        .arg("summary")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("africa"));
}

#[test]
fn explicit_config_flag_wins_over_env() {
    let (_env_guard, env_config) = write_config("[database]\nzone_files = []\n");
    let (_guard, config) = write_config("");
    tzx(&env_config)
        .arg("--config")
        .arg(&config)
        .arg("summary")
        .arg(tzdb_dir())
        .assert()
        .success();
}

#[test]
fn invalid_config_is_rejected() {
    let (_guard, config) = write_config("[estimator]\nstart_year = 2050\nuntil_year = 2000\n");
    tzx(&config)
        .arg("summary")
        .arg(tzdb_dir())
        .assert()
        .failure();
}

// ============================================================================
// dump
// ============================================================================

#[test]
fn dump_links() {
    let links = dump_json(&["--kind", "links"]);
    assert_eq!(links["US/Central"], "America/Chicago");
    assert_eq!(links.as_object().unwrap().len(), 4);
}

#[test]
fn dump_single_zone() {
    let value = dump_json(&["--name", "Asia/Atyrau"]);
    let eras = value["Asia/Atyrau"]["zone"].as_array().unwrap();
    assert_eq!(eras.len(), 6);
    assert!(value["Asia/Atyrau"].get("policy").is_none());
}

#[test]
fn dump_all_has_every_map() {
    let value = dump_json(&[]);
    assert!(value["zones"].is_object());
    assert!(value["policies"].is_object());
    assert!(value["links"].is_object());
    assert!(value.get("stats").is_none());
}

#[test]
fn dump_unknown_name_fails() {
    let (_guard, config) = write_config("");
    tzx(&config)
        .args(["dump", "--name", "Nope/Nowhere"])
        .arg(tzdb_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry named 'Nope/Nowhere'"));
}

// ============================================================================
// config / completions
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let (_guard, config) = write_config("");
    tzx(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[estimator]"))
        .stdout(predicate::str::contains("start_year = 2000"))
        .stdout(predicate::str::contains("until_year = 2050"));
}

#[test]
fn config_path_mentions_override() {
    let (_guard, config) = write_config("");
    tzx(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overridden by TZX_CONFIG="));
}

#[test]
fn completions_for_bash() {
    let (_guard, config) = write_config("");
    tzx(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tzx"));
}
