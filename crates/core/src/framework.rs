use std::fmt;

use serde::{Deserialize, Serialize};

/// Hardware abstraction frameworks the SSD1315 driver ships adapters for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
  Arduino,
  Stm32Cube,
  EspIdf,
}

impl Framework {
  /// Check order used when a build declares several framework tokens.
  ///
  /// The first framework whose token appears in the declared list wins;
  /// the rest are ignored.
  pub const PRIORITY: [Framework; 3] = [Framework::Arduino, Framework::Stm32Cube, Framework::EspIdf];

  /// Parse a single framework token as supplied by the build tool
  pub fn from_token(token: &str) -> Option<Self> {
    match token {
      "arduino" => Some(Self::Arduino),
      "stm32cube" => Some(Self::Stm32Cube),
      "espidf" => Some(Self::EspIdf),
      _ => None,
    }
  }

  /// Returns the lowercase token identifier for this framework
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Arduino => "arduino",
      Self::Stm32Cube => "stm32cube",
      Self::EspIdf => "espidf",
    }
  }

  /// Pick the active framework from the declared token list
  ///
  /// Returns `None` when the list is empty or contains no recognized token;
  /// the driver headers fall back to compile-time auto-detection in that case.
  pub fn detect<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
    Self::PRIORITY
      .into_iter()
      .find(|fw| tokens.iter().any(|t| t.as_ref() == fw.as_str()))
  }

  /// All recognized frameworks in the declared token list, in check order
  ///
  /// Duplicated tokens collapse to a single entry. A result with more than
  /// one element means the build declared an ambiguous framework set.
  pub fn recognized<S: AsRef<str>>(tokens: &[S]) -> Vec<Self> {
    Self::PRIORITY
      .into_iter()
      .filter(|fw| tokens.iter().any(|t| t.as_ref() == fw.as_str()))
      .collect()
  }
}

impl fmt::Display for Framework {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
