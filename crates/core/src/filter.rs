//! PlatformIO source-filter rendering.
//!
//! When a selection excludes sources, the build's `src_filter` is replaced
//! with an include-all-except pattern list (`+<*>` followed by one `-<path>`
//! per exclusion). Selections with no exclusions leave the filter untouched,
//! so [`SrcFilter::from_selection`] returns `None` for them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selection::Selection;

/// An explicit include-all-except source filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrcFilter {
  excluded: Vec<String>,
}

impl SrcFilter {
  /// Build the replacement filter for a selection.
  ///
  /// Returns `None` when the selection excludes nothing; the build keeps its
  /// default filter in that case.
  pub fn from_selection(selection: &Selection) -> Option<Self> {
    if selection.excluded_sources.is_empty() {
      return None;
    }
    Some(Self {
      excluded: selection.excluded_sources.iter().cloned().collect(),
    })
  }

  /// Filter patterns in PlatformIO syntax: `+<*>` then one `-<path>` each
  pub fn patterns(&self) -> Vec<String> {
    let mut patterns = Vec::with_capacity(self.excluded.len() + 1);
    patterns.push("+<*>".to_string());
    for path in &self.excluded {
      patterns.push(format!("-<{}>", path));
    }
    patterns
  }
}

impl fmt::Display for SrcFilter {
  /// Renders the single-line `src_filter` form used in platformio.ini
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.patterns().join(" "))
  }
}
