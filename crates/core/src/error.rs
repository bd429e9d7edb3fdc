//! Error types for oledcfg-core

use thiserror::Error;

/// Errors that can occur when persisting a selection.
///
/// Framework selection itself has no failure path; every token list,
/// including an empty one, produces a valid record.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Failed to serialize selection: {0}")]
  Serialize(#[from] serde_json::Error),
}
