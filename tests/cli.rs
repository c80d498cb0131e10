use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn materials_path() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("configs")
        .join("materials.yaml")
        .to_string_lossy()
        .into_owned()
}

#[test]
fn tunguska_summary_reports_airburst() {
    Command::cargo_bin("impact")
        .expect("impact bin")
        .args(["--vinf", "15", "--diameter", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Impact Assessment ==="))
        .stdout(predicate::str::contains("Outcome: Airburst"))
        .stdout(predicate::str::contains("severity catastrophic"));
}

#[test]
fn iron_from_catalog_reports_ground_impact_and_quakes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let quakes = dir.path().join("quakes.csv");
    fs::write(
        &quakes,
        "place,time,magnitude,url\nTestville,2022-02-02T02:02:02Z,4.0,\nFaraway,2010-01-01T00:00:00Z,8.8,\n",
    )
    .expect("write quakes");

    Command::cargo_bin("impact")
        .expect("impact bin")
        .args([
            "--vinf",
            "20",
            "--diameter",
            "200",
            "--material",
            "IRON",
            "--materials",
            &materials_path(),
            "--quakes",
            quakes.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outcome: Ground impact"))
        .stdout(predicate::str::contains("Seismic: magnitude"))
        .stdout(predicate::str::contains("Testville"))
        .stdout(predicate::str::contains("Faraway").not());
}

#[test]
fn exports_csv_and_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("out").join("trajectory.csv");
    let json_path = dir.path().join("out").join("report.json");

    Command::cargo_bin("impact")
        .expect("impact bin")
        .args([
            "--vinf",
            "18",
            "--diameter",
            "20",
            "--angle",
            "18",
            "--record-every",
            "2",
            "--trajectory-csv",
            csv_path.to_str().expect("utf8 path"),
            "--json",
            json_path.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let csv = fs::read_to_string(&csv_path).expect("csv output");
    assert!(csv.starts_with("time_s,altitude_m,"));
    assert!(csv.lines().count() > 10);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json output"))
            .expect("parse json");
    assert_eq!(json["outcome"]["kind"], "airburst");
    assert_eq!(json["entry"]["angle_deg"], 18.0);
}

#[test]
fn settings_override_is_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("kernel.toml");
    fs::write(&settings, "[integrator.thresholds]\nmax_flight_time_s = 60.0\n")
        .expect("write settings");

    Command::cargo_bin("impact")
        .expect("impact bin")
        .args([
            "--vinf",
            "0",
            "--diameter",
            "1",
            "--settings",
            settings.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outcome: Decelerated"));
}

#[test]
fn invalid_diameter_fails() {
    Command::cargo_bin("impact")
        .expect("impact bin")
        .args(["--vinf", "15", "--diameter", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("diameter must be positive"));
}

#[test]
fn unknown_material_fails() {
    Command::cargo_bin("impact")
        .expect("impact bin")
        .args(["--vinf", "15", "--diameter", "50", "--material", "adamantium"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn missing_catalog_fails_with_context() {
    Command::cargo_bin("impact")
        .expect("impact bin")
        .args([
            "--vinf",
            "15",
            "--diameter",
            "50",
            "--materials",
            "/nonexistent/materials.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading materials"));
}

#[test]
fn unreadable_quake_catalog_still_writes_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("report.json");
    let quakes = dir.path().join("missing").join("quakes.csv");

    Command::cargo_bin("impact")
        .expect("impact bin")
        .args([
            "--vinf",
            "20",
            "--diameter",
            "200",
            "--material",
            "iron",
            "--quakes",
            quakes.to_str().expect("utf8 path"),
            "--json",
            json_path.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seismic: magnitude"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json output"))
            .expect("parse json");
    assert_eq!(json["outcome"]["kind"], "ground_impact");
}
