//! CLI 端到端测试

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn ur_cli() -> Command {
    Command::cargo_bin("ur-cli").unwrap()
}

fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const SCENARIO_A: &str = r#"{
  "timestamps": [0.0, 1.0],
  "positions": [[0, 0, 0, 0, 0, 0], [1, 1, 1, 1, 1, 1]],
  "velocities": [[0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0]]
}"#;

#[test]
fn render_prints_program() {
    let trajectory = write_temp(SCENARIO_A, ".json");

    ur_cli()
        .arg("render")
        .arg(trajectory.path())
        .args(["--max-time-step", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("def traj():\n"))
        .stdout(predicate::str::contains(
            "\tservoj([0.50000, 0.50000, 0.50000, 0.50000, 0.50000, 0.50000], t=0.50000)\n",
        ))
        .stdout(predicate::str::ends_with("end\n"));
}

#[test]
fn render_with_stop_appends_stopj() {
    let trajectory = write_temp(SCENARIO_A, ".json");

    ur_cli()
        .arg("render")
        .arg(trajectory.path())
        .arg("--stop")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("end\nstopj(10)\n"));
}

#[test]
fn render_uses_config_file() {
    let trajectory = write_temp(SCENARIO_A, ".json");
    let config = write_temp("max_time_step = 0.25\ncycle_period = 0.5\n", ".toml");

    let output = ur_cli()
        .arg("render")
        .arg(trajectory.path())
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("servoj(").count(), 4);
    assert!(stdout.contains("t=0.25000"));
}

#[test]
fn render_rejects_non_increasing_timestamps() {
    let trajectory = write_temp(
        r#"{
  "timestamps": [0.0, 1.0, 0.5],
  "positions": [[0, 0, 0, 0, 0, 0], [1, 1, 1, 1, 1, 1], [2, 2, 2, 2, 2, 2]],
  "velocities": [[0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0]]
}"#,
        ".json",
    );

    ur_cli()
        .arg("render")
        .arg(trajectory.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not strictly increasing"));
}

#[test]
fn render_rejects_invalid_time_step() {
    let trajectory = write_temp(SCENARIO_A, ".json");

    ur_cli()
        .arg("render")
        .arg(trajectory.path())
        .args(["--max-time-step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid max time step"));
}

#[test]
fn render_missing_file_fails() {
    ur_cli()
        .args(["render", "/nonexistent/trajectory.json"])
        .assert()
        .failure();
}

#[test]
fn config_check_prints_effective_config() {
    let config = write_temp("max_time_step = 0.05\nmax_payload = 3.0\n", ".toml");

    ur_cli()
        .args(["config", "check"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("max_time_step = 0.05"))
        .stdout(predicate::str::contains("max_payload = 3.0"))
        .stdout(predicate::str::contains("cycle_period = 0.008"));
}

#[test]
fn config_check_rejects_invalid_bounds() {
    let config = write_temp("min_payload = 2.0\nmax_payload = 1.0\n", ".toml");

    ur_cli()
        .args(["config", "check"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_payload"));
}

#[test]
fn config_default_is_loadable() {
    let output = ur_cli().args(["config", "default"]).output().unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let config = write_temp(&text, ".toml");

    ur_cli()
        .args(["config", "check"])
        .arg(config.path())
        .assert()
        .success();
}
