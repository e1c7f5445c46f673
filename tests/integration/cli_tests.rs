/*!
 * Tests that drive the vardnica binary
 */

use std::path::Path;
use std::process::{Command, Output};

use crate::common;

fn vardnica(config_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vardnica"))
        .arg("--config-path")
        .arg(config_path)
        .args(args)
        .output()
        .expect("failed to run vardnica binary")
}

#[test]
fn test_cli_pos_withKnownCode_shouldPrintAndCreateDefaultConfig() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("conf.json");

    let output = vardnica(&config_path, &["pos", "eng", "s"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("adj satellite (s): "));
    assert!(config_path.exists());
}

#[test]
fn test_cli_pos_withMiss_shouldExitWithError() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("conf.json");

    let output = vardnica(&config_path, &["pos", "lv", "z"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No POS 'z' for language 'lv'"));
}

#[test]
fn test_cli_list_withIsoAlias_shouldListLatvianTable() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("conf.json");

    let output = vardnica(&config_path, &["list", "lav"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.lines().any(|line| line.starts_with("u\tNULL/unknown\t")));
}

#[test]
fn test_cli_warning_withCodes_shouldPrintDecision() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("conf.json");

    let suppressed = vardnica(&config_path, &["warning", "a11y-missing-attribute"]);
    let forwarded = vardnica(&config_path, &["warning", "unused-export-let"]);

    assert_eq!(String::from_utf8(suppressed.stdout).unwrap(), "suppress\n");
    assert_eq!(String::from_utf8(forwarded.stdout).unwrap(), "forward\n");
}

#[test]
fn test_cli_buildConfig_withDefault_shouldPrintJson() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("conf.json");

    let output = vardnica(&config_path, &["build-config"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["adapter"]["kind"], "static");
}

#[test]
fn test_cli_completions_withAnyShell_shouldNotTouchConfigFile() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("conf.json");

    let output = vardnica(&config_path, &["completions", "bash"]);

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("vardnica"));
    assert!(!config_path.exists());
}

#[test]
fn test_cli_withServerAdapterConfig_shouldFailValidation() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "build": { "adapter": { "kind": "node" } } }"#,
    )
    .unwrap();

    let output = vardnica(&config_path, &["pos", "lv", "n"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration validation failed"));
}
