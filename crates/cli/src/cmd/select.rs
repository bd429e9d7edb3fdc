//! Implementation of the `oledcfg select` command.
//!
//! Runs the framework selector over the declared tokens and prints the
//! resulting defines and source filter, either human-readable or as JSON.

use anyhow::Result;

use oledcfg_core::{Framework, SrcFilter, select_framework};

use crate::output::{print_info, print_json, print_stat, print_success, print_warning};

pub fn cmd_select(tokens: Vec<String>, json: bool) -> Result<()> {
  let tokens = crate::cmd::declared_frameworks(tokens);
  let selection = select_framework(&tokens);

  if json {
    return print_json(&selection);
  }

  if selection.is_fallback() {
    print_info(&selection.message);
  } else {
    print_success(&selection.message);
  }

  let recognized = Framework::recognized(&tokens);
  if recognized.len() > 1 {
    let ignored: Vec<&str> = recognized[1..].iter().map(Framework::as_str).collect();
    print_warning(&format!(
      "multiple framework tokens declared; ignoring: {}",
      ignored.join(", ")
    ));
  }

  for define in &selection.defines {
    print_stat("define", &define.to_string());
  }
  if let Some(filter) = SrcFilter::from_selection(&selection) {
    print_stat("src_filter", &filter.to_string());
  }

  Ok(())
}
