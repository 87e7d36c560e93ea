//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Build a command for the ampsize binary, pointed at a settings file that
/// does not exist so the user's own settings never leak into a test.
fn ampsize() -> Command {
    let mut cmd = cargo_bin_cmd!("ampsize");
    cmd.env_remove("AMPSIZE_SETTINGS");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--settings").arg(missing_settings());
    cmd
}

fn missing_settings() -> PathBuf {
    std::env::temp_dir().join("ampsize-cli-tests-no-such-settings.json")
}

#[test]
fn test_cli_help() {
    let mut cmd = ampsize();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("busbar"));
}

#[test]
fn test_cli_version() {
    let mut cmd = ampsize();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_forward_three_wire() {
    let mut cmd = ampsize();

    cmd.args(["calc", "--system", "3W_220", "--power", "50000"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("164.02 AMPS"))
        .stdout(predicate::str::contains("Wire size:  60"))
        .stdout(predicate::str::contains("Busbar:     20×3×1"));
}

#[test]
fn test_cli_backward_four_wire_json() {
    let mut cmd = ampsize();

    cmd.args(["calc", "--system", "4W_380", "--current", "100", "--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["result"]["primary_unit"], "kW");
    assert_eq!(value["display"]["value"], "52.6543");
    assert_eq!(value["result"]["wire_size"], "30");
    assert_eq!(value["config"]["wire_factor"], 4);
}

#[test]
fn test_cli_custom_zero_voltage_fails() {
    let mut cmd = ampsize();

    cmd.args(["calc", "--system", "custom", "--voltage", "0", "--current", "10"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid input for 'voltage'"));
}

#[test]
fn test_cli_missing_selection() {
    let mut cmd = ampsize();

    cmd.args(["calc", "--power", "1000", "--format", "json"]);
    let output = cmd.assert().failure().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["error"]["kind"], "MISSING_SELECTION");
}

#[test]
fn test_cli_unknown_system() {
    let mut cmd = ampsize();

    cmd.args(["calc", "--system", "5W_440", "--power", "1000"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown voltage system"));
}

#[test]
fn test_cli_negative_power() {
    let mut cmd = ampsize();

    cmd.args(["calc", "--system", "3W_220", "--power", "-5"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for 'power'"));
}

#[test]
fn test_cli_power_and_current_conflict() {
    let mut cmd = ampsize();

    cmd.args(["calc", "--system", "3W_220", "--power", "1000", "--current", "5"]);
    cmd.assert().failure().code(2);
}

#[test]
fn test_cli_beyond_tables_is_success() {
    let mut cmd = ampsize();

    cmd.args(["calc", "--system", "3W_220", "--current", "6000"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wire size:  -- (no matching specification)"))
        .stdout(predicate::str::contains("Busbar:     -- (no matching specification)"))
        .stdout(predicate::str::contains("Consider a larger or parallel configuration."));
}

#[test]
fn test_cli_tables() {
    let mut cmd = ampsize();

    cmd.args(["tables", "--kind", "wire"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("150*4"))
        .stdout(predicate::str::contains("120×10×4").not());
}

#[test]
fn test_cli_tables_json() {
    let mut cmd = ampsize();

    cmd.args(["tables", "--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["wire"].as_array().unwrap().len(), 23);
    assert_eq!(value["busbar"].as_array().unwrap().len(), 34);
}

#[test]
fn test_cli_interactive() {
    let mut cmd = ampsize();

    cmd.arg("interactive").write_stdin("1P3W_220\nforward\n11000\nq\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("62.5 AMPS"));
}

#[test]
fn test_cli_settings_default_system() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ampsize.json");
    std::fs::write(&path, r#"{"default_voltage_system":"4W_380","output":"json"}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("ampsize");
    cmd.env_remove("AMPSIZE_SETTINGS");
    cmd.arg("--settings").arg(&path).args(["calc", "--current", "100"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["config"]["voltage"], 380.0);
}

#[test]
fn test_cli_settings_init() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ampsize.json");

    let mut cmd = cargo_bin_cmd!("ampsize");
    cmd.arg("--settings").arg(&path).args(["settings", "init"]);
    cmd.assert().success();
    assert!(path.exists());

    let mut again = cargo_bin_cmd!("ampsize");
    again.arg("--settings").arg(&path).args(["settings", "init"]);
    again
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
