//! Implementation of the `oledcfg emit` command.
//!
//! Writes the selection record to `oled-buildcfg.json` in the output
//! directory so non-Python build integrations can consume it.

use std::path::Path;

use anyhow::{Context, Result};

use oledcfg_core::{select_framework, write_fragment};

use crate::output::print_success;

pub fn cmd_emit(tokens: Vec<String>, out: &Path) -> Result<()> {
  let tokens = crate::cmd::declared_frameworks(tokens);
  let selection = select_framework(&tokens);

  let path = write_fragment(out, &selection)
    .with_context(|| format!("Failed to write fragment to {}", out.display()))?;

  print_success(&format!("{} ({})", selection.message, path.display()));
  Ok(())
}
