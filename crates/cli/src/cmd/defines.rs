//! Implementation of the `oledcfg defines` command.
//!
//! Prints one compiler flag per line, suitable for splicing into a
//! `build_flags` list or a compiler invocation.

use anyhow::Result;

use oledcfg_core::{enable_define, select_framework};

pub fn cmd_defines(tokens: Vec<String>, enable: bool) -> Result<()> {
  let tokens = crate::cmd::declared_frameworks(tokens);
  let selection = select_framework(&tokens);

  if enable {
    println!("{}", enable_define().as_flag());
  }
  for define in &selection.defines {
    println!("{}", define.as_flag());
  }

  Ok(())
}
