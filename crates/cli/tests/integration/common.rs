//! Shared test helpers for CLI integration tests.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;

/// Get a Command for the oledcfg binary with PIOFRAMEWORK cleared.
pub fn oledcfg_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("oledcfg");
  cmd.env_remove("PIOFRAMEWORK");
  cmd
}
