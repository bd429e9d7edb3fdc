//! Implementation of the `oledcfg filter` command.
//!
//! Prints the replacement `src_filter` line for the selected framework.
//! Selections that exclude no sources print nothing, so callers can keep
//! their default filter when the output is empty.

use anyhow::Result;

use oledcfg_core::{SrcFilter, select_framework};

pub fn cmd_filter(tokens: Vec<String>) -> Result<()> {
  let tokens = crate::cmd::declared_frameworks(tokens);
  let selection = select_framework(&tokens);

  if let Some(filter) = SrcFilter::from_selection(&selection) {
    println!("{}", filter);
  }

  Ok(())
}
