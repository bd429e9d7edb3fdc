//! Tests for the `oledcfg emit` command.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::oledcfg_cmd;

#[test]
fn emit_writes_fragment_json() {
  let temp = TempDir::new().unwrap();

  oledcfg_cmd()
    .args(["emit", "stm32cube", "--out"])
    .arg(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("oled-buildcfg.json"));

  let content = std::fs::read_to_string(temp.path().join("oled-buildcfg.json")).unwrap();
  let json: serde_json::Value = serde_json::from_str(&content).unwrap();

  assert_eq!(json["framework"], "stm32cube");
  assert_eq!(json["defines"][0]["name"], "OLED_PLATFORM_STM32HAL");
  assert_eq!(json["defines"][1]["name"], "OLED_USE_STM32HAL");
  assert_eq!(json["excluded_sources"][0], "transport/WireI2cAdapter.cpp");
}

#[test]
fn emit_fallback_fragment_is_empty() {
  let temp = TempDir::new().unwrap();

  oledcfg_cmd()
    .args(["emit", "--out"])
    .arg(temp.path())
    .assert()
    .success();

  let content = std::fs::read_to_string(temp.path().join("oled-buildcfg.json")).unwrap();
  let json: serde_json::Value = serde_json::from_str(&content).unwrap();

  assert!(json["framework"].is_null());
  assert_eq!(json["defines"].as_array().unwrap().len(), 0);
  assert_eq!(json["excluded_sources"].as_array().unwrap().len(), 0);
}

#[test]
fn emit_creates_missing_output_directory() {
  let temp = TempDir::new().unwrap();
  let nested = temp.path().join("build").join("cfg");

  oledcfg_cmd()
    .args(["emit", "arduino", "--out"])
    .arg(&nested)
    .assert()
    .success();

  assert!(nested.join("oled-buildcfg.json").exists());
}
