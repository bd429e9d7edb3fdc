//! Persisting a selection for non-Python build integrations.
//!
//! Writes the selection record as pretty-printed JSON so CMake scripts,
//! Makefiles, or CI steps can consume the define/exclusion mapping without
//! re-running the selector.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::selection::Selection;

/// File name of the emitted fragment
pub const FRAGMENT_FILE_NAME: &str = "oled-buildcfg.json";

/// Write the selection to `<dir>/oled-buildcfg.json`, creating `dir` if needed
///
/// Returns the path of the written file.
pub fn write_fragment(dir: &Path, selection: &Selection) -> Result<PathBuf, CoreError> {
  fs::create_dir_all(dir)?;
  let path = dir.join(FRAGMENT_FILE_NAME);
  let json = serde_json::to_string_pretty(selection)?;
  fs::write(&path, json)?;
  Ok(path)
}
